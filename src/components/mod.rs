//! UI components built with Leptos.
//!
//! - [`terminal`] - the terminal window: transcript, prompt and input line

pub mod terminal;

pub use terminal::Terminal;
