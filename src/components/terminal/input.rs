//! Prompt line with history navigation and tab completion.

use csquare_core::config::PROMPT_SEPARATOR;
use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Terminal input field.
///
/// Holds no state of its own: `value` mirrors the session's input line and
/// every edit or key goes back out through a callback.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] cursor_visible: Signal<bool>,
    on_change: Callback<String>,
    on_submit: Callback<()>,
    on_history_nav: Callback<i32>,
    on_complete: Callback<()>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            on_submit.run(());
        }
        "ArrowUp" => {
            ev.prevent_default();
            on_history_nav.run(-1);
        }
        "ArrowDown" => {
            ev.prevent_default();
            on_history_nav.run(1);
        }
        "Tab" => {
            ev.prevent_default();
            on_complete.run(());
        }
        _ => {}
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        on_change.run(input.value());
    };

    view! {
        <div class=css::line>
            <span class=css::prompt>{prompt}</span>
            <span class=css::separator>{PROMPT_SEPARATOR}</span>
            <div class=css::field>
                <input
                    node_ref=input_ref
                    type="text"
                    class=css::input
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=value
                    on:input=handle_input
                    on:keydown=handle_keydown
                />
                <span
                    class=css::cursor
                    style:visibility=move || if cursor_visible.get() { "visible" } else { "hidden" }
                >
                    "█"
                </span>
            </div>
        </div>
    }
}
