//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum, the closed set of commands the terminal understands
//! - `CommandResult` for command execution results
//! - `execute_command` for running a parsed command
//!
//! # Architecture
//!
//! Input is tokenized by [`crate::parser`], mapped onto a `Command` variant
//! by `Command::parse` (anything unrecognized becomes `Command::Unknown`),
//! then executed against an [`ExecContext`]. Execution is pure: state
//! changes come back inside the `CommandResult` for the session to apply.

mod execute;
pub mod fun;
mod result;

pub use execute::{ExecContext, execute_command};
pub use result::CommandResult;

use std::fmt;

use crate::parser::ParsedCommand;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `cat bar.txt`).
///
/// Stored as typed; validation happens during execution against the
/// virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// List directory contents (current directory when `None`)
    Ls(Option<PathArg>),
    Cd(Option<PathArg>),
    Cat(Option<PathArg>),
    Pwd,
    Clear,
    Help,
    Whoami,
    Date,
    About,
    Projects,
    Events,
    Join,
    Contact,
    Matrix,
    Hack,
    Code,
    Fortune,
    /// Lowercased name that matched nothing
    Unknown(String),
}

impl Command {
    /// All command names, sorted, for completion.
    pub fn names() -> &'static [&'static str] {
        &[
            "about", "cat", "cd", "clear", "code", "contact", "date", "events", "fortune", "hack",
            "help", "join", "ls", "matrix", "projects", "pwd", "whoami",
        ]
    }

    /// Map a name and its arguments onto a command.
    ///
    /// The name is matched case-insensitively; extra arguments are ignored.
    pub fn parse(name: &str, args: &[String]) -> Self {
        let first = || args.first().map(PathArg::new);
        match name.to_lowercase().as_str() {
            "ls" => Self::Ls(first()),
            "cd" => Self::Cd(first()),
            "cat" => Self::Cat(first()),
            "pwd" => Self::Pwd,
            "clear" => Self::Clear,
            "help" => Self::Help,
            "whoami" => Self::Whoami,
            "date" => Self::Date,
            "about" => Self::About,
            "projects" => Self::Projects,
            "events" => Self::Events,
            "join" => Self::Join,
            "contact" => Self::Contact,
            "matrix" => Self::Matrix,
            "hack" => Self::Hack,
            "code" => Self::Code,
            "fortune" => Self::Fortune,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<&ParsedCommand> for Command {
    fn from(parsed: &ParsedCommand) -> Self {
        Self::parse(&parsed.name, &parsed.args)
    }
}

// =============================================================================
// Tests
// =============================================================================
