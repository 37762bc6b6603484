//! REPL session management

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, info};

use super::command::{self, Outcome, ReplCommand};
use crate::TaskList;

/// Interactive REPL session over a single list
pub struct ReplSession {
    list: TaskList,
}

impl ReplSession {
    /// Create a new REPL session
    pub fn new(list: TaskList) -> Self {
        Self { list }
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    /// Handle one input line, returning false when the session should end
    pub fn handle_line(&mut self, line: &str) -> bool {
        let command = match line.parse::<ReplCommand>() {
            Ok(command) => command,
            Err(e) => {
                println!("{} {}", "?".yellow(), e);
                println!("Type {} for available commands", "help".yellow());
                return true;
            }
        };

        match command::execute(&mut self.list, command) {
            Ok(Outcome::Print(text)) => {
                println!("{}", text);
                true
            }
            Ok(Outcome::Quit) => false,
            Err(e) => {
                println!("{} {}", "✗".red(), e);
                true
            }
        }
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> Result<()> {
        self.print_welcome();

        // Create readline editor for proper line editing
        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            let readline = rl.readline(&format!("{} ", ">".bright_green()));

            match readline {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(input);

                    if !self.handle_line(input) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C - just show new prompt
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        info!(remaining = self.list.size(), "REPL session ended");
        println!("Goodbye!");
        Ok(())
    }

    fn print_welcome(&self) {
        debug!(title = %self.list.title(), size = self.list.size(), "print_welcome: called");
        println!();
        println!("{}", self.list.title().bright_cyan().bold());
        println!("{} task(s) loaded", self.list.size());
        println!("Type {} for help, {} to quit", "help".yellow(), "quit".yellow());
        println!();
    }
}
