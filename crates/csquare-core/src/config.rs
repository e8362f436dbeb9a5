//! Terminal configuration.
//!
//! Centralizes the constants used by the interpreter and its front ends.
//! Text assets are loaded at compile time using `include_str!`.
//! [`TerminalConfig`] carries the values a front end may override at runtime.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TerminalError};

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Help text for `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Club overview for `about` command.
pub const ABOUT_TEXT: &str = include_str!("../assets/text/about.txt");

/// Project showcase for `projects` command.
pub const PROJECTS_TEXT: &str = include_str!("../assets/text/projects.txt");

/// Upcoming events for `events` command.
pub const EVENTS_TEXT: &str = include_str!("../assets/text/events.txt");

/// Membership instructions for `join` command.
pub const JOIN_TEXT: &str = include_str!("../assets/text/join.txt");

/// Contact details for `contact` command.
pub const CONTACT_TEXT: &str = include_str!("../assets/text/contact.txt");

/// Fake intrusion sequence for `hack` command.
pub const HACK_TEXT: &str = include_str!("../assets/text/hack.txt");

/// Snippet shown by `code` command.
pub const CODE_TEXT: &str = include_str!("../assets/text/code.txt");

/// Fortune pool, one per line.
pub const FORTUNES_TEXT: &str = include_str!("../assets/text/fortunes.txt");

/// Static directory tree mounted at `/`.
pub const FILESYSTEM_JSON: &str = include_str!("../assets/filesystem.json");

// =============================================================================
// Identity
// =============================================================================

/// User name shown in the prompt and by `whoami`.
pub const PROMPT_USER: &str = "guest";

/// Host name shown in the prompt and by `whoami`.
pub const PROMPT_HOST: &str = "c-square-club";

/// Separator between the prompt and the typed input.
pub const PROMPT_SEPARATOR: &str = "$ ";

// =============================================================================
// Welcome Banner
// =============================================================================

/// Lines printed when a session starts (a horizontal rule follows them).
pub const WELCOME_LINES: &[&str] = &[
    "Welcome to C-Square Club Terminal",
    "Type \"help\" to see available commands",
];

/// Width of the rule printed under the welcome lines.
pub const WELCOME_RULE_WIDTH: usize = 50;

/// Shown in place of the input line until the terminal is clicked.
pub const IDLE_PROMPT: &str = "Click anywhere on the terminal to start typing commands...";

/// Hints under [`IDLE_PROMPT`].
pub const IDLE_HINTS: &[&str] = &[
    "🎯 Try: help, ls, about, projects, events, matrix, hack",
    "🚀 Features: Arrow keys for history, Tab for completion",
];

// =============================================================================
// Limits
// =============================================================================

/// Maximum number of transcript lines kept before the oldest are evicted.
pub const MAX_TERMINAL_HISTORY: usize = 1000;

/// Maximum number of submitted commands kept for recall.
pub const MAX_COMMAND_HISTORY: usize = 100;

/// `matrix` output shape.
pub mod matrix {
    /// Rows of random digits.
    pub const ROWS: usize = 8;
    /// Characters per row.
    pub const COLUMNS: usize = 60;
    /// Alphabet the digits are drawn from.
    pub const ALPHABET: &[char] = &['0', '1'];
}

/// Front-end timer periods (milliseconds).
pub mod timers {
    /// Delay before the welcome banner appears.
    pub const WELCOME_DELAY_MS: u32 = 1000;
    /// Cursor blink half-period.
    pub const CURSOR_BLINK_MS: u32 = 500;
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Per-session settings a front end can override.
///
/// Every field falls back to the compile-time constant above, so a config
/// file only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Prompt user name.
    pub user: String,
    /// Prompt host name.
    pub host: String,
    /// Transcript capacity in lines.
    pub max_transcript: usize,
    /// Command history capacity in entries.
    pub max_history: usize,
    /// Welcome banner lines (empty disables the banner).
    pub welcome: Vec<String>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        let mut welcome: Vec<String> = WELCOME_LINES.iter().map(|s| s.to_string()).collect();
        welcome.push("─".repeat(WELCOME_RULE_WIDTH));

        Self {
            user: PROMPT_USER.to_string(),
            host: PROMPT_HOST.to_string(),
            max_transcript: MAX_TERMINAL_HISTORY,
            max_history: MAX_COMMAND_HISTORY,
            welcome,
        }
    }
}

impl TerminalConfig {
    /// Parse a TOML document, filling missing keys with defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the session cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.max_transcript == 0 {
            return Err(TerminalError::InvalidConfig(
                "max_transcript must be greater than 0".to_string(),
            ));
        }
        if self.max_history == 0 {
            return Err(TerminalError::InvalidConfig(
                "max_history must be greater than 0".to_string(),
            ));
        }
        if self.user.trim().is_empty() || self.host.trim().is_empty() {
            return Err(TerminalError::InvalidConfig(
                "user and host must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// `user@host`, as printed by `whoami`.
    pub fn identity(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }
}
