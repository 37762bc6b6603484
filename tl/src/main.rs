use std::fs;
use std::path::Path;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use tasklist::cli::{Cli, Command};
use tasklist::config::Config;
use tasklist::{Task, TaskList, repl};

fn setup_logging(log_dir: &Path, cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    fs::create_dir_all(log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level).map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("tasklist.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

/// Build the configured list, append `titles` and mark `done` positions
fn prepare_list(config: &Config, titles: Vec<String>, done: &[usize]) -> Result<TaskList> {
    let mut list = config.build_list();
    for title in titles {
        list.add(Task::new(title));
    }
    for &index in done {
        list.mark_done_at(index)
            .context(format!("Cannot mark task {} done", index))?;
    }
    debug!(size = list.size(), "prepare_list: ready");
    Ok(list)
}

fn print_tasks(list: &TaskList, done: bool) {
    let tasks = if done { list.all_done() } else { list.all_not_done() };
    if tasks.is_empty() {
        println!("{}", "No tasks".dimmed());
        return;
    }
    for task in tasks {
        println!("{}", task);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(&config.log_dir, cli.log_level.as_deref(), config.log_level.as_deref())
        .context("Failed to setup logging")?;

    info!(title = %config.title, seeds = config.tasks.len(), "tasklist starting");

    match cli.command.unwrap_or(Command::Repl) {
        Command::Show {
            titles,
            done,
            all_done,
        } => {
            let list = prepare_list(&config, titles, &done)?;
            if all_done {
                list.mark_all_done();
            }
            println!("{}", list);
        }
        Command::Pending { titles, done } => {
            let list = prepare_list(&config, titles, &done)?;
            print_tasks(&list, false);
        }
        Command::Completed { titles, done } => {
            let list = prepare_list(&config, titles, &done)?;
            print_tasks(&list, true);
        }
        Command::Repl => repl::run_interactive(&config)?,
    }

    Ok(())
}
