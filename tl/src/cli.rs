//! CLI argument parsing for tl

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tl")]
#[command(author, version, about = "In-memory task list", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Subcommand to execute (defaults to the interactive REPL)
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the list
    Show {
        /// Titles to append after the configured tasks
        titles: Vec<String>,

        /// Mark the task at this position done (repeatable)
        #[arg(short, long = "done", value_name = "INDEX")]
        done: Vec<usize>,

        /// Mark every task done
        #[arg(short, long)]
        all_done: bool,
    },

    /// Print the tasks that are not done
    Pending {
        /// Titles to append after the configured tasks
        titles: Vec<String>,

        /// Mark the task at this position done (repeatable)
        #[arg(short, long = "done", value_name = "INDEX")]
        done: Vec<usize>,
    },

    /// Print the tasks that are done
    Completed {
        /// Titles to append after the configured tasks
        titles: Vec<String>,

        /// Mark the task at this position done (repeatable)
        #[arg(short, long = "done", value_name = "INDEX")]
        done: Vec<usize>,
    },

    /// Start an interactive session
    Repl,
}
