//! Terminal window component.
//!
//! Window chrome, the scrolling transcript and the prompt line. Owns the
//! two timers: the delayed welcome banner and the cursor blink.

use std::time::Duration;

use csquare_core::config::timers::{CURSOR_BLINK_MS, WELCOME_DELAY_MS};
use csquare_core::config::{IDLE_HINTS, IDLE_PROMPT, PROMPT_HOST};
use leptos::prelude::*;

use crate::app::{AppContext, TerminalState};
use crate::components::terminal::{Input, Output};

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// Auto-scroll output to bottom when the transcript changes.
fn setup_autoscroll_effect(terminal: TerminalState, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        terminal.session.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

/// Show the welcome banner after a short delay; cancelled on unmount.
fn setup_welcome_timer(terminal: TerminalState) {
    match set_timeout_with_handle(
        move || terminal.push_welcome(),
        Duration::from_millis(u64::from(WELCOME_DELAY_MS)),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::warn!("welcome timer not scheduled: {:?}", e),
    }
}

/// Blink the cursor; stopped on unmount.
fn setup_cursor_blink(terminal: TerminalState) {
    match set_interval_with_handle(
        move || terminal.toggle_cursor(),
        Duration::from_millis(u64::from(CURSOR_BLINK_MS)),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::warn!("cursor blink not scheduled: {:?}", e),
    }
}

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let terminal = ctx.terminal;
    let output_ref = NodeRef::<leptos::html::Div>::new();

    setup_autoscroll_effect(terminal, output_ref);
    setup_welcome_timer(terminal);
    setup_cursor_blink(terminal);

    let prompt = Signal::derive(move || terminal.prompt());
    let value = Signal::derive(move || terminal.input());
    let cursor_visible = Signal::derive(move || terminal.cursor_visible.get());

    let on_change = Callback::new(move |text: String| terminal.set_input(text));
    let on_submit = Callback::new(move |()| terminal.submit());
    let on_history_nav = Callback::new(move |direction: i32| terminal.navigate_history(direction));
    let on_complete = Callback::new(move |()| terminal.complete());

    let handle_click = move |_| terminal.active.set(true);
    let active = terminal.active;

    view! {
        <div class=css::container on:click=handle_click>
            <div class=css::header>
                <span class=format!("{} {}", css::dot, css::dotRed)></span>
                <span class=format!("{} {}", css::dot, css::dotYellow)></span>
                <span class=format!("{} {}", css::dot, css::dotGreen)></span>
                <span class=css::title>{format!("terminal@{PROMPT_HOST}")}</span>
                <Show when=move || !active.get()>
                    <span class=css::hint>"Click to interact →"</span>
                </Show>
            </div>

            <div node_ref=output_ref class=css::output>
                <For
                    each=move || terminal.session.with(|s| s.transcript().to_vec())
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />

                <Show
                    when=move || active.get()
                    fallback=|| view! {
                        <div class=css::idle>
                            <div class=css::idlePrompt>{IDLE_PROMPT}</div>
                            <div class=css::idleHints>
                                {IDLE_HINTS.iter().map(|hint| view! { <div>{*hint}</div> }).collect_view()}
                            </div>
                        </div>
                    }
                >
                    <Input
                        prompt=prompt
                        value=value
                        cursor_visible=cursor_visible
                        on_change=on_change
                        on_submit=on_submit
                        on_history_nav=on_history_nav
                        on_complete=on_complete
                    />
                </Show>
            </div>
        </div>
    }
}
