use leptos::prelude::*;

use crate::content::{GITHUB_URL, LOGO_IMAGE, NAV_LINKS};

/// Fixed translucent header: brand mark, anchor links, GitHub CTA.
/// Stateless; positioning and the blur overlay are pure CSS.
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <img src=LOGO_IMAGE alt="FORGE" class="nav-logo" />
                    <span class="nav-title">"FORGE"</span>
                </a>
                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.target class="nav-link">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href=GITHUB_URL target="_blank" class="nav-cta">
                        "GITHUB"
                    </a>
                </div>
            </div>
        </nav>
    }
}
