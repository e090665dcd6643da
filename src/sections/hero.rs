use leptos::prelude::*;

use crate::content::HERO_IMAGE;
use crate::motion::{Entrance, EntranceSpec};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    // Text column slides in from the left at time zero.
                    <Entrance spec=EntranceSpec::hero_text() class="hero-content">
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            "ENTERPRISE GRADE"
                        </div>
                        <h1 class="hero-title">
                            "ORCHESTRATED"
                            <br />
                            <span class="hero-title-accent">"INTELLIGENCE"</span>
                        </h1>
                        <p class="hero-description">
                            "Framework for Orchestrated, Repeatable, Governed Engineering. "
                            "Turn raw AI capability into reliable, production-grade engineering output."
                        </p>
                        <div class="hero-actions">
                            <button class="btn btn-primary">"GET STARTED"</button>
                            <button class="btn btn-secondary">"VIEW DOCUMENTATION"</button>
                        </div>
                    </Entrance>
                    // Image column scales up after a fixed delay.
                    <Entrance spec=EntranceSpec::hero_visual() class="hero-visual">
                        <img src=HERO_IMAGE alt="The Forge" class="hero-image" />
                        <StatusPanel />
                    </Entrance>
                </div>
            </div>
        </section>
    }
}

/// Decorative status readout floating over the hero image. Values are
/// constant display strings, nothing is polled.
#[component]
fn StatusPanel() -> impl IntoView {
    view! {
        <div class="status-panel">
            <div class="status-panel-title">
                <span>">_"</span>
                <span>"SYSTEM_METRICS"</span>
            </div>
            <div class="status-row">
                <span>"CORE"</span>
                <span class="status-value">"ONLINE"</span>
            </div>
            <div class="status-row">
                <span>"GOVERNANCE"</span>
                <span class="status-value">"ACTIVE"</span>
            </div>
            <div class="status-row">
                <span>"MEMORY"</span>
                <span class="status-value">"SYNCED"</span>
            </div>
        </div>
    }
}
