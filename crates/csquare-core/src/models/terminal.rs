//! Transcript line types.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::PROMPT_SEPARATOR;

/// Marker style for `ls` entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    /// Directory entries (cyan, trailing slash)
    Directory,
    /// Regular file entries
    File,
}

/// Whether a transcript line echoes user input or shows command output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Input,
    Output,
}

/// A single transcript line with a unique ID
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID for keyed rendering
    pub id: usize,
    /// The actual output data
    pub data: OutputLineData,
}

/// The actual content of an output line
#[derive(Clone, Debug, PartialEq)]
pub enum OutputLineData {
    /// Prompt plus the line the user submitted
    Command { prompt: String, input: String },
    /// Plain text output
    Text(String),
    /// Error message (red)
    Error(String),
    /// Success message (green)
    Success(String),
    /// Info message (yellow)
    Info(String),
    /// Banner or matrix art
    Ascii(String),
    /// Empty line
    Empty,
    /// Directory listing entry (ls)
    ListEntry { name: String, style: TextStyle },
}

static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl OutputLine {
    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Success(s.into()))
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Info(s.into()))
    }

    pub fn ascii(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Ascii(s.into()))
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    pub fn dir_entry(name: impl Into<String>) -> Self {
        Self::new(OutputLineData::ListEntry {
            name: name.into(),
            style: TextStyle::Directory,
        })
    }

    pub fn file_entry(name: impl Into<String>) -> Self {
        Self::new(OutputLineData::ListEntry {
            name: name.into(),
            style: TextStyle::File,
        })
    }

    pub fn empty() -> Self {
        Self::new(OutputLineData::Empty)
    }

    /// Lines of a text asset; empty lines become [`OutputLineData::Empty`].
    ///
    /// Whitespace-only lines are kept as text.
    pub fn from_text_block(block: &str) -> Vec<Self> {
        block
            .lines()
            .map(|line| {
                if line.is_empty() {
                    Self::empty()
                } else {
                    Self::text(line)
                }
            })
            .collect()
    }

    pub fn kind(&self) -> LineKind {
        match self.data {
            OutputLineData::Command { .. } => LineKind::Input,
            _ => LineKind::Output,
        }
    }

    /// The line as plain text, with list markers and the prompt applied.
    pub fn plain(&self) -> String {
        match &self.data {
            OutputLineData::Command { prompt, input } => {
                format!("{prompt}{PROMPT_SEPARATOR}{input}")
            }
            OutputLineData::Text(s)
            | OutputLineData::Error(s)
            | OutputLineData::Success(s)
            | OutputLineData::Info(s)
            | OutputLineData::Ascii(s) => s.clone(),
            OutputLineData::Empty => String::new(),
            OutputLineData::ListEntry { name, style } => match style {
                TextStyle::Directory => format!("📁 {name}/"),
                TextStyle::File => format!("📄 {name}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_line_constructors() {
        assert_eq!(
            OutputLine::text("hello").data,
            OutputLineData::Text("hello".to_string())
        );
        assert_eq!(
            OutputLine::error("error").data,
            OutputLineData::Error("error".to_string())
        );
        assert_eq!(
            OutputLine::success("ok").data,
            OutputLineData::Success("ok".to_string())
        );
        assert_eq!(
            OutputLine::ascii("0101").data,
            OutputLineData::Ascii("0101".to_string())
        );
    }

    #[test]
    fn test_command_line_is_input_kind() {
        let cmd = OutputLine::command("guest@c-square-club:/", "ls");
        assert_eq!(cmd.kind(), LineKind::Input);
        assert_eq!(cmd.plain(), "guest@c-square-club:/$ ls");
        assert_eq!(OutputLine::info("x").kind(), LineKind::Output);
    }

    #[test]
    fn test_list_entry_markers() {
        assert_eq!(OutputLine::dir_entry("projects").plain(), "📁 projects/");
        assert_eq!(OutputLine::file_entry("about.txt").plain(), "📄 about.txt");
    }

    #[test]
    fn test_text_block_keeps_blank_lines() {
        let lines = OutputLine::from_text_block("a\n\n  \n  b\n");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].data, OutputLineData::Empty);
        assert_eq!(lines[2].data, OutputLineData::Text("  ".into()));
        assert_eq!(lines[3].plain(), "  b");
    }

    #[test]
    fn test_unique_ids() {
        let line1 = OutputLine::text("first");
        let line2 = OutputLine::text("second");
        let line3 = OutputLine::text("first");

        assert_ne!(line1.id, line2.id);
        assert_ne!(line1.id, line3.id);
        assert_eq!(line1, line3);
    }
}
