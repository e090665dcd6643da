use leptos::prelude::*;

use crate::content::{ANCHOR_TOOLS, Glyph, TOOLS};
use crate::motion::Hover;

#[component]
pub fn ToolStack() -> impl IntoView {
    view! {
        <section id=ANCHOR_TOOLS class="tools">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"TECHNOLOGY STACK"</h2>
                    <p class="section-description">
                        "Powered by a modern stack of specialized tools."
                    </p>
                </div>
                <div class="tools-grid">
                    {TOOLS
                        .iter()
                        .map(|tool| view! { <ToolBadge name=tool.name glyph=tool.glyph /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// One badge per tool, each with its own hover machine for the color/border
/// transition.
#[component]
fn ToolBadge(name: &'static str, glyph: Glyph) -> impl IntoView {
    let (hover, set_hover) = signal(Hover::Idle);

    view! {
        <div
            class=move || hover.get().class("tool-badge")
            on:mouseenter=move |_| set_hover.update(|h| *h = h.enter())
            on:mouseleave=move |_| set_hover.update(|h| *h = h.leave())
        >
            <span class="tool-glyph">{glyph.glyph()}</span>
            <span class="tool-name">{name}</span>
        </div>
    }
}
