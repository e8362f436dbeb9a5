//! Command execution result type.

use crate::models::{OutputLine, VirtualPath};

/// Result of executing a command.
///
/// Commands never touch the session directly; they describe output and the
/// state changes the session should apply.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// New working directory (e.g., for `cd`)
    pub navigate_to: Option<VirtualPath>,
    /// Wipe the transcript (for `clear`)
    pub clear_transcript: bool,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            navigate_to: None,
            clear_transcript: false,
        }
    }

    /// Create a result that changes directory, with a confirmation line.
    pub fn navigate(path: VirtualPath, lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            navigate_to: Some(path),
            clear_transcript: false,
        }
    }

    /// Create a result that clears the transcript.
    pub fn clear() -> Self {
        Self {
            output: vec![],
            navigate_to: None,
            clear_transcript: true,
        }
    }

    /// The output as plain strings.
    pub fn lines(&self) -> Vec<String> {
        self.output.iter().map(OutputLine::plain).collect()
    }
}
