use leptos::prelude::*;

use crate::content::{ANCHOR_METHODOLOGY, PROTOCOLS};
use crate::motion::{Entrance, EntranceSpec, Hover};

#[component]
pub fn Methodology() -> impl IntoView {
    view! {
        <section id=ANCHOR_METHODOLOGY class="methodology">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"CORE PROTOCOLS"</h2>
                    <p class="section-description">
                        "Structured workflows that replace ad-hoc prompting with engineering rigor."
                    </p>
                </div>
                <div class="methodology-grid">
                    {PROTOCOLS
                        .iter()
                        .map(|p| {
                            view! {
                                <ProtocolCard
                                    title=p.title
                                    subtitle=p.subtitle
                                    description=p.description
                                    icon=p.icon
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// One protocol card: concurrent fade/rise entrance plus its own hover
/// machine. The glow reveal derives from the same hover class.
#[component]
fn ProtocolCard(
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    icon: &'static str,
) -> impl IntoView {
    let (hover, set_hover) = signal(Hover::Idle);

    view! {
        <Entrance spec=EntranceSpec::card_rise()>
            <article
                class=move || hover.get().class("protocol-card")
                on:mouseenter=move |_| set_hover.update(|h| *h = h.enter())
                on:mouseleave=move |_| set_hover.update(|h| *h = h.leave())
            >
                <div class="protocol-icon-wrap">
                    <div class="protocol-glow"></div>
                    <img src=icon alt=title class="protocol-icon" />
                </div>
                <h3 class="protocol-title">{title}</h3>
                <p class="protocol-subtitle">{subtitle}</p>
                <p class="protocol-description">{description}</p>
            </article>
        </Entrance>
    }
}
