use leptos::prelude::*;

use crate::content::LOGO_IMAGE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-inner">
                    <div class="footer-brand">
                        <img src=LOGO_IMAGE alt="FORGE" class="footer-logo" />
                        <span class="footer-title">"FORGE FRAMEWORK"</span>
                    </div>
                    <p class="footer-copyright">"© 2026 Chase Logan. Empowering AI Engineering."</p>
                </div>
            </div>
        </footer>
    }
}
