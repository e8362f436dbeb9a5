//! Input tokenization.
//!
//! The terminal has no quoting, variables or pipes: a line is split on
//! whitespace, the first word names the command and the rest are arguments.

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Command name, lowercased.
    pub name: String,
    /// Positional arguments, verbatim.
    pub args: Vec<String>,
}

/// Split a line into a command and its arguments.
///
/// Returns `None` for blank input.
pub fn parse_input(input: &str) -> Option<ParsedCommand> {
    let mut words = input.split_whitespace();
    let name = words.next()?.to_lowercase();
    let args = words.map(str::to_string).collect();
    Some(ParsedCommand { name, args })
}
