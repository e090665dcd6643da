//! CSS for the landing page — dark forge theme.
//!
//! The whole stylesheet lives here as a constant, with the responsive block
//! derived from [`NAV_BREAKPOINT_PX`] so layout behavior has a single source
//! of truth.

/// Viewport width at which the nav link group becomes visible and the grids
/// expand to their wide layout. Below it the nav links are hidden.
pub const NAV_BREAKPOINT_PX: u32 = 768;

const BASE_CSS: &str = r#"
:root {
    --bg-deep: #0a0e1a;
    --bg-panel: #0f1422;
    --bg-footer: #05070d;
    --text-bright: #ffffff;
    --text-body: #94a3b8;
    --text-dim: #475569;
    --accent: #f97316;
    --accent-soft: rgba(249, 115, 22, 0.3);
    --accent-faint: rgba(249, 115, 22, 0.1);
    --border-subtle: rgba(255, 255, 255, 0.05);
    --font-display: 'Rajdhani', 'Segoe UI', sans-serif;
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
    --container-max: 1200px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-display);
    background: var(--bg-deep);
    color: var(--text-body);
    line-height: 1.6;
    margin: 0;
    min-height: 100vh;
    overflow-x: hidden;
}

img {
    max-width: 100%;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

/* Nav */
.nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    border-bottom: 1px solid var(--border-subtle);
    background: rgba(10, 14, 26, 0.8);
    backdrop-filter: blur(12px);
}

.nav-inner {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
    height: 80px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-brand {
    display: flex;
    align-items: center;
    gap: 12px;
    text-decoration: none;
}

.nav-logo {
    width: 32px;
    height: 32px;
}

.nav-title {
    font-weight: 700;
    font-size: 20px;
    letter-spacing: 0.2em;
    color: var(--text-bright);
}

.nav-links {
    display: flex;
    align-items: center;
    gap: 32px;
    font-family: var(--font-mono);
    font-size: 14px;
}

.nav-link {
    color: var(--text-body);
    text-decoration: none;
    transition: color 0.2s;
}

.nav-link:hover {
    color: var(--accent);
}

.nav-cta {
    padding: 8px 20px;
    border: 1px solid var(--accent-soft);
    color: var(--accent);
    font-family: var(--font-mono);
    text-decoration: none;
    transition: background 0.2s;
}

.nav-cta:hover {
    background: var(--accent-faint);
}

/* Hero */
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding-top: 80px;
}

.hero-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 48px;
    align-items: center;
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 4px 12px;
    border: 1px solid var(--accent-soft);
    background: rgba(249, 115, 22, 0.05);
    color: var(--accent);
    font-family: var(--font-mono);
    font-size: 12px;
    letter-spacing: 0.1em;
}

.hero-badge-dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: var(--accent);
}

.hero-title {
    font-size: 64px;
    font-weight: 700;
    line-height: 1.1;
    color: var(--text-bright);
    margin: 32px 0;
}

.hero-title-accent {
    color: transparent;
    background: linear-gradient(to right, #fb923c, #dc2626);
    -webkit-background-clip: text;
    background-clip: text;
}

.hero-description {
    font-size: 20px;
    max-width: 560px;
    margin-bottom: 32px;
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
}

.btn {
    height: 48px;
    padding: 0 32px;
    display: inline-flex;
    align-items: center;
    font-size: 16px;
    letter-spacing: 0.05em;
    cursor: pointer;
    transition: background 0.2s, border-color 0.2s, color 0.2s;
}

.btn-primary {
    background: #ea580c;
    border: none;
    color: var(--text-bright);
    font-weight: 700;
}

.btn-primary:hover {
    background: var(--accent);
}

.btn-secondary {
    background: transparent;
    border: 1px solid #334155;
    color: var(--text-body);
    font-family: var(--font-mono);
}

.btn-secondary:hover {
    border-color: var(--accent-soft);
    color: var(--accent);
}

.hero-visual {
    position: relative;
}

.hero-image {
    width: 100%;
    object-fit: contain;
    filter: drop-shadow(0 0 50px rgba(255, 100, 0, 0.2));
}

.status-panel {
    position: absolute;
    top: -40px;
    right: -40px;
    padding: 16px;
    background: rgba(10, 14, 26, 0.9);
    border: 1px solid var(--accent-soft);
    backdrop-filter: blur(12px);
    font-family: var(--font-mono);
    font-size: 12px;
}

.status-panel-title {
    display: flex;
    align-items: center;
    gap: 12px;
    color: var(--accent);
    margin-bottom: 8px;
}

.status-row {
    display: flex;
    justify-content: space-between;
    gap: 32px;
    color: var(--text-body);
}

.status-value {
    color: #fb923c;
}

/* Sections */
section {
    padding: 128px 0;
}

.section-header {
    text-align: center;
    margin-bottom: 80px;
}

.section-title {
    font-size: 36px;
    font-weight: 700;
    color: var(--text-bright);
    margin: 0 0 16px;
}

.section-title-accent {
    color: var(--accent);
}

.section-description {
    max-width: 640px;
    margin: 0 auto;
}

/* Methodology */
.methodology-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 32px;
}

.protocol-card {
    padding: 32px;
    border: 1px solid var(--border-subtle);
    background: rgba(255, 255, 255, 0.05);
    transition: transform 0.2s, border-color 0.2s;
}

.protocol-card.is-hovered {
    transform: translateY(-10px);
    border-color: var(--accent-soft);
}

.protocol-icon-wrap {
    position: relative;
    margin-bottom: 24px;
}

.protocol-glow {
    position: absolute;
    inset: 0;
    background: rgba(249, 115, 22, 0.2);
    filter: blur(24px);
    border-radius: 50%;
    opacity: 0;
    transition: opacity 0.2s;
}

.protocol-card.is-hovered .protocol-glow {
    opacity: 1;
}

.protocol-icon {
    position: relative;
    z-index: 10;
    width: 64px;
    height: 64px;
}

.protocol-title {
    font-size: 24px;
    font-weight: 700;
    color: var(--text-bright);
    margin: 0 0 8px;
    transition: color 0.2s;
}

.protocol-card.is-hovered .protocol-title {
    color: var(--accent);
}

.protocol-subtitle {
    font-family: var(--font-mono);
    font-size: 12px;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    color: var(--accent);
    margin: 0 0 16px;
}

.protocol-description {
    margin: 0;
}

/* Impact */
.impact {
    background: rgba(15, 20, 34, 0.5);
    border-top: 1px solid var(--border-subtle);
    border-bottom: 1px solid var(--border-subtle);
}

.impact-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 64px;
    align-items: center;
}

.impact-title {
    font-size: 36px;
    font-weight: 700;
    color: var(--text-bright);
    margin: 0 0 32px;
}

.impact-stats {
    display: flex;
    flex-direction: column;
    gap: 32px;
}

.impact-stat {
    border-left: 2px solid var(--accent-soft);
    padding: 8px 0 8px 24px;
}

.impact-value {
    font-size: 48px;
    font-weight: 700;
    color: var(--text-bright);
}

.impact-label {
    font-family: var(--font-mono);
    font-size: 14px;
    color: var(--accent);
    margin-bottom: 8px;
}

.impact-description {
    font-size: 14px;
    margin: 0;
}

.impact-chart {
    width: 100%;
    border: 1px solid rgba(249, 115, 22, 0.2);
    background: rgba(10, 14, 26, 0.8);
}

/* Tools */
.tools-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 16px;
}

.tool-badge {
    padding: 24px;
    border: 1px solid var(--border-subtle);
    background: rgba(255, 255, 255, 0.05);
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 12px;
    transition: background 0.2s, border-color 0.2s;
}

.tool-badge.is-hovered {
    background: var(--accent-faint);
    border-color: var(--accent-soft);
}

.tool-glyph {
    font-family: var(--font-mono);
    font-size: 20px;
    color: var(--text-body);
    transition: color 0.2s;
}

.tool-badge.is-hovered .tool-glyph {
    color: var(--accent);
}

.tool-name {
    font-family: var(--font-mono);
    font-size: 14px;
    color: #cbd5e1;
}

/* Footer */
.footer {
    padding: 48px 0;
    border-top: 1px solid var(--border-subtle);
    background: var(--bg-footer);
}

.footer-inner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 24px;
    flex-wrap: wrap;
}

.footer-brand {
    display: flex;
    align-items: center;
    gap: 12px;
}

.footer-logo {
    width: 24px;
    height: 24px;
    filter: grayscale(1);
    opacity: 0.5;
}

.footer-title {
    font-weight: 700;
    color: var(--text-dim);
}

.footer-copyright {
    font-family: var(--font-mono);
    font-size: 14px;
    color: #334155;
    margin: 0;
}
"#;

/// Full stylesheet, responsive block included. Below the breakpoint the nav
/// link group is hidden, the hero collapses to one column, and the grids
/// narrow.
pub fn stylesheet() -> String {
    let max = NAV_BREAKPOINT_PX - 1;
    format!(
        "{BASE_CSS}\n\
         @media (max-width: {max}px) {{\n\
             .nav-links {{ display: none; }}\n\
             .hero-grid {{ grid-template-columns: 1fr; }}\n\
             .hero-visual {{ display: none; }}\n\
             .hero-title {{ font-size: 44px; }}\n\
             .methodology-grid {{ grid-template-columns: 1fr; }}\n\
             .impact-grid {{ grid-template-columns: 1fr; }}\n\
             .tools-grid {{ grid-template-columns: repeat(2, 1fr); }}\n\
         }}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn responsive_block_derives_from_breakpoint() {
        let css = stylesheet();
        let query = format!("@media (max-width: {}px)", NAV_BREAKPOINT_PX - 1);
        let start = css.find(&query).expect("media query present");
        let block = &css[start..];
        assert!(block.contains(".nav-links { display: none; }"));
    }

    #[test]
    fn nav_links_are_visible_in_the_base_layout() {
        let css = stylesheet();
        let media_start = css.find("@media").unwrap();
        let base = &css[..media_start];
        assert!(base.contains(".nav-links {\n    display: flex;"));
    }
}
