//! Tab completion for command names.
//!
//! Only a unique match completes. Ambiguous or empty match sets leave the
//! input alone; the terminal neither errors nor lists candidates.

use crate::commands::Command;

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutocompleteResult {
    /// Single match - replace the input with this value.
    Single(String),
    /// Several commands share the prefix.
    Multiple(Vec<String>),
    /// No matches found.
    None,
}

/// Complete `input` as a command-name prefix, case-insensitively.
pub fn autocomplete(input: &str) -> AutocompleteResult {
    let partial = input.to_lowercase();
    let mut matches: Vec<String> = Command::names()
        .iter()
        .filter(|cmd| cmd.starts_with(&partial))
        .map(|s| s.to_string())
        .collect();

    match matches.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(matches.remove(0)),
        _ => AutocompleteResult::Multiple(matches),
    }
}
