//! Interactive REPL for tl
//!
//! Reads one command per line and applies it to an in-memory list. The list
//! is dropped when the session ends.

mod command;
mod session;

pub use command::{HELP, Outcome, ParseError, ReplCommand, execute, help_text};
pub use session::ReplSession;

use eyre::Result;

use crate::config::Config;

/// Run the interactive REPL
///
/// This is the main entry point for `tl repl`.
pub fn run_interactive(config: &Config) -> Result<()> {
    let mut session = ReplSession::new(config.build_list());
    session.run()
}
