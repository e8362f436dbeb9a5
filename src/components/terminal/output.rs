use csquare_core::config::PROMPT_SEPARATOR;
use csquare_core::{OutputLine, OutputLineData, TextStyle};
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// Marker, suffix and class for a listing entry.
fn entry_parts(style: TextStyle) -> (&'static str, &'static str, &'static str) {
    match style {
        TextStyle::Directory => ("📁", "/", css::textCyan),
        TextStyle::File => ("📄", "", css::textFg),
    }
}

#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    match line.data {
        OutputLineData::Command { prompt, input } => view! {
            <div class=css::command>
                <span class=format!("{} glow", css::textGreen)>{prompt}</span>
                <span class=css::textDim>{PROMPT_SEPARATOR}</span>
                <span class=css::textFg>{input}</span>
            </div>
        }
        .into_any(),
        OutputLineData::Text(text) => view! {
            <div class=format!("{} {}", css::line, css::textFg)>{text}</div>
        }
        .into_any(),
        OutputLineData::ListEntry { name, style } => {
            let (marker, suffix, class) = entry_parts(style);
            view! {
                <div class=css::listEntry>
                    <span>{marker}</span>
                    <span class=class>{format!("{name}{suffix}")}</span>
                </div>
            }
            .into_any()
        }
        OutputLineData::Error(text) => view! {
            <div class=format!("{} {}", css::line, css::textRed)>{text}</div>
        }
        .into_any(),
        OutputLineData::Success(text) => view! {
            <div class=format!("{} {}", css::line, css::textGreen)>{text}</div>
        }
        .into_any(),
        OutputLineData::Info(text) => view! {
            <div class=format!("{} {}", css::line, css::textYellow)>{text}</div>
        }
        .into_any(),
        OutputLineData::Ascii(text) => view! {
            <pre class=format!("{} glow", css::ascii)>{text}</pre>
        }
        .into_any(),
        OutputLineData::Empty => view! { <div class=css::lineEmpty></div> }.into_any(),
    }
}
