//! TaskList - in-memory ordered task list
//!
//! A [`Task`] is a title plus a done flag. A [`TaskList`] keeps tasks in
//! insertion order and offers positional access, title lookup, bulk marking
//! and a fixed text rendering for terminal display.
//!
//! Nothing is persisted; a list lives as long as its owner.
//!
//! # Example
//!
//! ```
//! use tasklist::{Task, TaskList};
//!
//! let mut list = TaskList::new("Today's Todos");
//! list.add(Task::new("Buy milk"));
//! list.add(Task::new("Clean room"));
//! list.mark_done_at(1)?;
//!
//! assert_eq!(list.render(), "---- Today's Todos ----\n[ ] Buy milk\n[X] Clean room");
//! # Ok::<(), tasklist::TaskListError>(())
//! ```

pub mod cli;
pub mod config;
pub mod repl;
mod error;
mod list;
mod task;

pub use error::TaskListError;
pub use list::{HEADER, TaskList, TaskRef};
pub use task::{DONE_MARKER, Task, UNDONE_MARKER};

/// Title used when the configuration does not name one
pub const DEFAULT_TITLE: &str = "Today's Todos";
