//! A single to-do entry

use std::cell::Cell;
use std::fmt;

use tracing::debug;

/// Marker rendered between the brackets of a finished task
pub const DONE_MARKER: char = 'X';

/// Marker rendered between the brackets of an unfinished task
pub const UNDONE_MARKER: char = ' ';

/// A titled task with a done/undone flag.
///
/// The title is fixed at construction. The flag lives in a `Cell` so a task
/// held by several lists (see [`TaskList::filter`](crate::TaskList::filter))
/// can be marked through any shared handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    title: String,
    done: Cell<bool>,
}

impl Task {
    /// Create a new, unfinished task
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: Cell::new(false),
        }
    }

    pub fn mark_done(&self) {
        debug!(title = %self.title, "Task::mark_done");
        self.done.set(true);
    }

    pub fn mark_undone(&self) {
        debug!(title = %self.title, "Task::mark_undone");
        self.done.set(false);
    }

    pub fn is_done(&self) -> bool {
        self.done.get()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Render as `[X] title` or `[ ] title`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_done() { DONE_MARKER } else { UNDONE_MARKER };
        write!(f, "[{}] {}", marker, self.title)
    }
}
