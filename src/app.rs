//! Root application module.
//!
//! Holds the [`AppContext`] with the terminal's reactive state and the
//! [`App`] component that provides it.

use std::sync::Arc;

use csquare_core::{Session, TerminalConfig, VirtualFs};
use leptos::prelude::*;

use crate::components::Terminal;

// ============================================================================
// TerminalState
// ============================================================================

/// Reactive wrapper around one [`Session`].
///
/// `Copy` because every field is a signal.
#[derive(Clone, Copy)]
pub struct TerminalState {
    /// Cwd, input line, history and transcript.
    pub session: RwSignal<Session>,
    /// Whether the user has clicked into the window yet.
    pub active: RwSignal<bool>,
    /// Blink phase of the block cursor.
    pub cursor_visible: RwSignal<bool>,
}

impl TerminalState {
    pub fn new(fs: Arc<VirtualFs>, config: &TerminalConfig) -> Self {
        Self {
            session: RwSignal::new(Session::new(fs, config)),
            active: RwSignal::new(false),
            cursor_visible: RwSignal::new(true),
        }
    }

    /// Prompt string, `user@host:cwd`.
    pub fn prompt(&self) -> String {
        self.session.with(Session::prompt)
    }

    pub fn input(&self) -> String {
        self.session.with(|s| s.input().to_string())
    }

    pub fn set_input(&self, text: String) {
        self.session.update(|s| s.set_input(text));
    }

    /// Submit the pending input line.
    pub fn submit(&self) {
        self.session.update(|s| {
            if let Some(output) = s.submit_input() {
                log::debug!("{} line(s) of output", output.len());
            }
        });
    }

    /// Step through command history; negative is older.
    pub fn navigate_history(&self, direction: i32) {
        self.session.update(|s| {
            if direction < 0 {
                s.recall_previous();
            } else {
                s.recall_next();
            }
        });
    }

    pub fn complete(&self) {
        self.session.update(|s| {
            let result = s.complete();
            log::trace!("tab completion: {:?}", result);
        });
    }

    pub fn push_welcome(&self) {
        self.session.update(Session::push_welcome);
    }

    pub fn toggle_cursor(&self) {
        self.cursor_visible.update(|v| *v = !*v);
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context, provided at the root.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub terminal: TerminalState,
}

impl AppContext {
    /// Context over the built-in filesystem with default settings.
    pub fn new() -> Self {
        let config = TerminalConfig::default();
        log::info!("terminal ready for {}", config.identity());
        Self {
            terminal: TerminalState::new(Arc::new(VirtualFs::builtin()), &config),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #000;
                    color: #4ade80;
                    font-family: 'Courier New', monospace;
                ">
                    <h1 style="color: #f87171; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #f87171; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #166534;
                            color: #dcfce7;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 4px;
                            cursor: pointer;
                            font-family: 'Courier New', monospace;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Terminal />
        </ErrorBoundary>
    }
}
