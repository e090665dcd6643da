use leptos::prelude::*;

use crate::content::{ANCHOR_IMPACT, IMPACT_CHART_IMAGE, IMPACT_STATS};

#[component]
pub fn Impact() -> impl IntoView {
    view! {
        <section id=ANCHOR_IMPACT class="impact">
            <div class="container">
                <div class="impact-grid">
                    <div>
                        <h2 class="impact-title">
                            "MEASURABLE " <span class="section-title-accent">"IMPACT"</span>
                        </h2>
                        <div class="impact-stats">
                            {IMPACT_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="impact-stat">
                                            <div class="impact-value">{stat.value}</div>
                                            <div class="impact-label">{stat.label}</div>
                                            <p class="impact-description">{stat.description}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <img src=IMPACT_CHART_IMAGE alt="Impact Chart" class="impact-chart" />
                    </div>
                </div>
            </div>
        </section>
    }
}
