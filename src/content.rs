//! Static page content.
//!
//! Everything the page displays is defined here as constant tables: nav
//! links, protocol cards, impact stats, and the tool stack. Sections render
//! these in declared order; nothing is added, removed, or mutated at runtime.

/// In-page anchor ids. Each must exist exactly once as a section id.
pub const ANCHOR_METHODOLOGY: &str = "methodology";
pub const ANCHOR_IMPACT: &str = "impact";
pub const ANCHOR_TOOLS: &str = "tools";

/// External source/documentation link (nav CTA and hero secondary action).
pub const GITHUB_URL: &str = "https://github.com/forge-framework/forge";

pub const LOGO_IMAGE: &str = "assets/forge-logo-lava.webp";
pub const HERO_IMAGE: &str = "assets/hero-bg-lava.webp";
pub const IMPACT_CHART_IMAGE: &str = "assets/impact-chart.webp";

pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "METHODOLOGY", target: "#methodology" },
    NavLink { label: "IMPACT", target: "#impact" },
    NavLink { label: "TOOLS", target: "#tools" },
];

pub struct Protocol {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const PROTOCOLS: [Protocol; 3] = [
    Protocol {
        title: "R-I-S-E",
        subtitle: "Creation & Design",
        description: "Research → Implement → Synthesize → Execute. The standard \
                      protocol for generating new capabilities.",
        icon: "assets/rise-icon.webp",
    },
    Protocol {
        title: "C-A-R-E",
        subtitle: "Debugging & Optimization",
        description: "Collect → Analyze → Refine → Execute. A systematic loop for \
                      resolving defects and optimizing performance.",
        icon: "assets/care-icon.webp",
    },
    Protocol {
        title: "HARVEST",
        subtitle: "Knowledge Extraction",
        description: "7-phase pipeline for converting raw code into structured, \
                      semantic documentation.",
        icon: "assets/harvest-icon.webp",
    },
];

pub struct ImpactStat {
    pub label: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

// Values are pre-formatted display strings, not computed.
pub const IMPACT_STATS: [ImpactStat; 3] = [
    ImpactStat {
        label: "Cost Efficiency",
        value: "21x",
        description: "Reduced cost per unit from $7.64 to $0.35",
    },
    ImpactStat {
        label: "Development Velocity",
        value: "10x",
        description: "Increase in output while reducing error rates",
    },
    ImpactStat {
        label: "Knowledge Growth",
        value: "+396%",
        description: "Expansion of structured documentation base",
    },
];

/// Symbolic icon registry for the tool stack.
///
/// Tools reference icons by name; the presentation layer resolves them to a
/// text glyph here, so the data model stays decoupled from any icon-rendering
/// mechanism.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Glyph {
    Terminal,
    Cpu,
    Layers,
    Zap,
    Database,
    Branch,
    Shield,
}

impl Glyph {
    pub fn glyph(self) -> &'static str {
        match self {
            Glyph::Terminal => ">_",
            Glyph::Cpu => "[::]",
            Glyph::Layers => "≡",
            Glyph::Zap => "↯",
            Glyph::Database => "⛁",
            Glyph::Branch => "⑂",
            Glyph::Shield => "⛨",
        }
    }
}

pub struct ToolEntry {
    pub name: &'static str,
    pub glyph: Glyph,
}

pub const TOOLS: [ToolEntry; 8] = [
    ToolEntry { name: "Python", glyph: Glyph::Terminal },
    ToolEntry { name: "TypeScript", glyph: Glyph::Cpu },
    ToolEntry { name: "Docker", glyph: Glyph::Layers },
    ToolEntry { name: "FastAPI", glyph: Glyph::Zap },
    ToolEntry { name: "PostgreSQL", glyph: Glyph::Database },
    ToolEntry { name: "Git", glyph: Glyph::Branch },
    ToolEntry { name: "OpenAI", glyph: Glyph::Cpu },
    ToolEntry { name: "Anthropic", glyph: Glyph::Shield },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nav_links_target_each_anchor_once() {
        let anchors = [ANCHOR_METHODOLOGY, ANCHOR_IMPACT, ANCHOR_TOOLS];
        assert_eq!(NAV_LINKS.len(), anchors.len());
        for (link, anchor) in NAV_LINKS.iter().zip(anchors) {
            assert_eq!(link.target, format!("#{anchor}"));
        }
    }

    #[test]
    fn protocols_are_declared_in_display_order() {
        let titles: Vec<_> = PROTOCOLS.iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["R-I-S-E", "C-A-R-E", "HARVEST"]);
        for protocol in &PROTOCOLS {
            assert!(!protocol.subtitle.is_empty());
            assert!(!protocol.description.is_empty());
            assert!(protocol.icon.starts_with("assets/"));
        }
    }

    #[test]
    fn impact_stats_carry_preformatted_values() {
        let values: Vec<_> = IMPACT_STATS.iter().map(|s| s.value).collect();
        assert_eq!(values, vec!["21x", "10x", "+396%"]);
    }

    #[test]
    fn tool_stack_has_eight_named_entries() {
        assert_eq!(TOOLS.len(), 8);
        for tool in &TOOLS {
            assert!(!tool.name.is_empty());
            assert!(!tool.glyph.glyph().is_empty());
        }
    }
}
