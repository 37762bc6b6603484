//! REPL command parsing and execution

use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::{Task, TaskList, TaskListError, TaskRef};

/// Commands understood by the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Add(String),
    Done(usize),
    Undone(usize),
    Check(String),
    Remove(usize),
    Pop,
    Shift,
    First,
    Last,
    Find(String),
    Pending,
    Completed,
    DoneAll,
    UndoneAll,
    Size,
    Show,
    Help,
    Quit,
}

/// Errors from parsing a REPL line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty input")]
    Empty,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Invalid index '{0}': expected a non-negative integer")]
    InvalidIndex(String),
}

/// Result of running one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Quit,
}

/// Help text listing every command
pub const HELP: &[(&str, &str)] = &[
    ("add <title>", "Append a task"),
    ("done <index>", "Mark the task at index done"),
    ("undone <index>", "Mark the task at index not done"),
    ("check <title>", "Mark the first task with this title done"),
    ("rm <index>", "Remove the task at index"),
    ("pop", "Remove the last task"),
    ("shift", "Remove the first task"),
    ("first", "Show the first task"),
    ("last", "Show the last task"),
    ("find <title>", "Show the first task with this title"),
    ("pending", "List tasks not done"),
    ("completed", "List tasks done"),
    ("done-all", "Mark every task done"),
    ("undone-all", "Mark every task not done"),
    ("size", "Count tasks"),
    ("show", "Render the list"),
    ("help", "Show this help"),
    ("quit", "Exit"),
];

fn title_arg(command: &'static str, rest: &str) -> Result<String, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingArgument {
            command,
            expected: "a title",
        });
    }
    Ok(rest.to_string())
}

fn index_arg(command: &'static str, rest: &str) -> Result<usize, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingArgument {
            command,
            expected: "an index",
        });
    }
    rest.parse::<usize>()
        .map_err(|_| ParseError::InvalidIndex(rest.to_string()))
}

impl FromStr for ReplCommand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd.to_lowercase().as_str() {
            "add" => Ok(Self::Add(title_arg("add", rest)?)),
            "done" => Ok(Self::Done(index_arg("done", rest)?)),
            "undone" => Ok(Self::Undone(index_arg("undone", rest)?)),
            "check" => Ok(Self::Check(title_arg("check", rest)?)),
            "rm" | "remove" => Ok(Self::Remove(index_arg("rm", rest)?)),
            "pop" => Ok(Self::Pop),
            "shift" => Ok(Self::Shift),
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            "find" => Ok(Self::Find(title_arg("find", rest)?)),
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "done-all" => Ok(Self::DoneAll),
            "undone-all" => Ok(Self::UndoneAll),
            "size" => Ok(Self::Size),
            "show" | "ls" => Ok(Self::Show),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            _ => Err(ParseError::UnknownCommand(cmd.to_string())),
        }
    }
}

fn render_or_empty(task: Option<&TaskRef>) -> String {
    task.map(|t| t.render()).unwrap_or_else(|| "List is empty".to_string())
}

fn render_lines(tasks: &[TaskRef]) -> String {
    if tasks.is_empty() {
        return "(none)".to_string();
    }
    tasks.iter().map(|t| t.render()).collect::<Vec<_>>().join("\n")
}

/// Plain-text help, one command per line
pub fn help_text() -> String {
    HELP.iter()
        .map(|(usage, about)| format!("  {:16} {}", usage, about))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run a command against `list`.
///
/// Index errors are returned to the caller; every other miss produces a
/// message and leaves the list unchanged.
pub fn execute(list: &mut TaskList, command: ReplCommand) -> Result<Outcome, TaskListError> {
    debug!(?command, "execute: dispatching");
    let text = match command {
        ReplCommand::Add(title) => {
            let task = Task::new(title);
            let text = format!("Added: {}", task);
            list.add(task);
            text
        }
        ReplCommand::Done(index) => {
            list.mark_done_at(index)?;
            list.item_at(index)?.render()
        }
        ReplCommand::Undone(index) => {
            list.mark_undone_at(index)?;
            list.item_at(index)?.render()
        }
        ReplCommand::Check(title) => {
            list.mark_done(&title);
            match list.find_by_title(&title) {
                Some(task) => task.render(),
                None => format!("No task titled '{}'", title),
            }
        }
        ReplCommand::Remove(index) => format!("Removed: {}", list.remove_at(index)?),
        ReplCommand::Pop => match list.pop() {
            Some(task) => format!("Removed: {}", task),
            None => "List is empty".to_string(),
        },
        ReplCommand::Shift => match list.shift() {
            Some(task) => format!("Removed: {}", task),
            None => "List is empty".to_string(),
        },
        ReplCommand::First => render_or_empty(list.first()),
        ReplCommand::Last => render_or_empty(list.last()),
        ReplCommand::Find(title) => match list.find_by_title(&title) {
            Some(task) => task.render(),
            None => format!("No task titled '{}'", title),
        },
        ReplCommand::Pending => render_lines(&list.all_not_done()),
        ReplCommand::Completed => render_lines(&list.all_done()),
        ReplCommand::DoneAll => {
            list.mark_all_done();
            format!("Marked {} task(s) done", list.size())
        }
        ReplCommand::UndoneAll => {
            list.mark_all_undone();
            format!("Marked {} task(s) not done", list.size())
        }
        ReplCommand::Size => format!("{} task(s)", list.size()),
        ReplCommand::Show => list.render(),
        ReplCommand::Help => help_text(),
        ReplCommand::Quit => return Ok(Outcome::Quit),
    };
    Ok(Outcome::Print(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        let mut list = TaskList::new("today's Todos");
        for title in ["Buy milk", "Clean room", "Go to the gym"] {
            list.add(Task::new(title));
        }
        list
    }

    fn run(list: &mut TaskList, line: &str) -> String {
        match execute(list, line.parse().unwrap()).unwrap() {
            Outcome::Print(text) => text,
            Outcome::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("add Buy milk".parse::<ReplCommand>(), Ok(ReplCommand::Add("Buy milk".to_string())));
        assert_eq!("  done   2 ".parse::<ReplCommand>(), Ok(ReplCommand::Done(2)));
        assert_eq!("RM 0".parse::<ReplCommand>(), Ok(ReplCommand::Remove(0)));
        assert_eq!("check Clean room".parse::<ReplCommand>(), Ok(ReplCommand::Check("Clean room".to_string())));
        assert_eq!("ls".parse::<ReplCommand>(), Ok(ReplCommand::Show));
        assert_eq!("q".parse::<ReplCommand>(), Ok(ReplCommand::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<ReplCommand>(), Err(ParseError::Empty));
        assert_eq!(
            "frobnicate".parse::<ReplCommand>(),
            Err(ParseError::UnknownCommand("frobnicate".to_string()))
        );
        assert_eq!(
            "done -1".parse::<ReplCommand>(),
            Err(ParseError::InvalidIndex("-1".to_string()))
        );
        assert!(matches!(
            "add".parse::<ReplCommand>(),
            Err(ParseError::MissingArgument { command: "add", .. })
        ));
    }

    #[test]
    fn test_done_and_show() {
        let mut list = sample();
        assert_eq!(run(&mut list, "done 1"), "[X] Clean room");
        assert_eq!(
            run(&mut list, "show"),
            "---- Today's Todos ----\n[ ] Buy milk\n[X] Clean room\n[ ] Go to the gym"
        );
        assert_eq!(run(&mut list, "undone 1"), "[ ] Clean room");
    }

    #[test]
    fn test_invalid_index_is_error() {
        let mut list = sample();
        let err = execute(&mut list, ReplCommand::Remove(6)).unwrap_err();
        assert_eq!(err.to_string(), "invalid index: 6");
        assert_eq!(list.size(), 3);
    }

    #[test]
    fn test_removals() {
        let mut list = sample();
        assert_eq!(run(&mut list, "rm 1"), "Removed: [ ] Clean room");
        assert_eq!(run(&mut list, "pop"), "Removed: [ ] Go to the gym");
        assert_eq!(run(&mut list, "shift"), "Removed: [ ] Buy milk");
        assert_eq!(run(&mut list, "pop"), "List is empty");
        assert_eq!(run(&mut list, "first"), "List is empty");
    }

    #[test]
    fn test_check_and_lists() {
        let mut list = sample();
        assert_eq!(run(&mut list, "check Buy milk"), "[X] Buy milk");
        assert_eq!(run(&mut list, "check Walk dog"), "No task titled 'Walk dog'");
        assert_eq!(run(&mut list, "completed"), "[X] Buy milk");
        assert_eq!(run(&mut list, "pending"), "[ ] Clean room\n[ ] Go to the gym");
        assert_eq!(run(&mut list, "done-all"), "Marked 3 task(s) done");
        assert_eq!(run(&mut list, "pending"), "(none)");
    }

    #[test]
    fn test_add_and_size() {
        let mut list = TaskList::new("new");
        assert_eq!(run(&mut list, "add Walk dog"), "Added: [ ] Walk dog");
        assert_eq!(run(&mut list, "size"), "1 task(s)");
        assert_eq!(run(&mut list, "last"), "[ ] Walk dog");
    }

    #[test]
    fn test_quit() {
        let mut list = sample();
        assert_eq!(execute(&mut list, ReplCommand::Quit), Ok(Outcome::Quit));
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = help_text();
        assert_eq!(help.lines().count(), HELP.len());
        assert!(help.contains("done-all"));
    }
}
