//! Data models for the terminal.
//!
//! - [`FsEntry`], [`FileContent`] - Static directory tree representation
//! - [`VirtualPath`] - Normalized absolute paths
//! - [`OutputLine`] - Transcript lines

mod filesystem;
mod path;
mod terminal;

pub use filesystem::{FileContent, FsEntry};
pub use path::VirtualPath;
pub use terminal::{LineKind, OutputLine, OutputLineData, TextStyle};
