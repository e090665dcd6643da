// FORGE landing page — Leptos 0.8, client-side rendered.

mod content;
mod motion;
mod sections;
mod styles;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <style>{styles::stylesheet()}</style>
        <Nav />
        <main>
            <Hero />
            <Methodology />
            <Impact />
            <ToolStack />
        </main>
        <Footer />
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    // Single test so the page is mounted exactly once; wasm tests share one
    // browser document.
    #[wasm_bindgen_test]
    fn mounted_page_renders_and_hovers() {
        leptos::mount::mount_to_body(|| view! { <App/> });
        let doc = document();

        let sections = doc.query_selector_all("nav, main > section, footer").unwrap();
        assert_eq!(sections.length(), 6);

        let leaves = doc
            .query_selector_all(".protocol-card, .impact-stat, .tool-badge")
            .unwrap();
        assert_eq!(leaves.length(), 14);

        let badges = doc.query_selector_all(".tool-badge").unwrap();
        assert_eq!(badges.length(), 8);

        let first: web_sys::Element = badges.item(0).unwrap().dyn_into().unwrap();
        let second: web_sys::Element = badges.item(1).unwrap().dyn_into().unwrap();

        let enter = web_sys::MouseEvent::new("mouseenter").unwrap();
        first.dispatch_event(&enter).unwrap();
        assert!(first.get_attribute("class").unwrap().contains("is-hovered"));
        assert!(!second.get_attribute("class").unwrap().contains("is-hovered"));

        let leave = web_sys::MouseEvent::new("mouseleave").unwrap();
        first.dispatch_event(&leave).unwrap();
        assert!(!first.get_attribute("class").unwrap().contains("is-hovered"));
    }
}
