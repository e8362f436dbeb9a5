//! Error types for loading terminal data.
//!
//! Command failures never surface here: they are rendered as output lines.
//! These errors cover the structural inputs a session is built from:
//!
//! - [`TerminalError::Manifest`] - filesystem JSON that does not parse
//! - [`TerminalError::RootNotDirectory`] - a tree whose root is a file
//! - [`TerminalError::Config`] / [`TerminalError::InvalidConfig`] - bad settings

/// Errors produced while building a session's filesystem or configuration.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("filesystem manifest is not valid: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("filesystem root must be a directory")]
    RootNotDirectory,

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TerminalError>;
