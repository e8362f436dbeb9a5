//! Command interpreter behind the C-Square Club terminal.
//!
//! This crate provides:
//! - [`Session`] - per-window state: cwd, input line, history, transcript
//! - [`Command`] parsing and [`execute_command`] execution
//! - [`VirtualFs`] - the static, read-only directory tree
//! - [`autocomplete`] - tab completion of command names
//!
//! It has no I/O of its own; front ends feed it lines and key events and
//! render the transcript it keeps.

mod autocomplete;
pub mod clock;
mod commands;
pub mod config;
pub mod error;
mod filesystem;
mod history;
pub mod models;
mod parser;
mod session;
pub mod utils;

pub use autocomplete::{AutocompleteResult, autocomplete};
pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::{Command, CommandResult, ExecContext, PathArg, execute_command, fun};
pub use config::TerminalConfig;
pub use error::{Result, TerminalError};
pub use filesystem::{DirEntry, VirtualFs};
pub use history::{CommandHistory, Recall};
pub use models::{LineKind, OutputLine, OutputLineData, TextStyle, VirtualPath};
pub use parser::{ParsedCommand, parse_input};
pub use session::Session;
