//! KPI category icons and accent colours.
//!
//! Categories not listed here fall back to a generic document icon and the brand
//! indigo.

pub const DEFAULT_ICON: &str = "📄";
pub const DEFAULT_COLOR: &str = "#4F46E5";

/// Visual identity of a known KPI category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryStyle {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

static CATEGORY_STYLES: &[CategoryStyle] = &[
    CategoryStyle { name: "Overview", icon: "📌", color: "#0ea5e9" },
    CategoryStyle { name: "Relationship Building", icon: "🤝", color: "#22c55e" },
    CategoryStyle { name: "Problem Solving", icon: "🧩", color: "#6366f1" },
    CategoryStyle { name: "Communication", icon: "🗣️", color: "#f59e0b" },
    CategoryStyle { name: "Commercial Craft", icon: "💼", color: "#ec4899" },
    CategoryStyle { name: "Data & AI SME Expertise", icon: "🧠", color: "#14b8a6" },
];

/// Pills shown under the hero summary.
pub static HERO_PILLS: &[&str] = &[
    "Delivery Leadership",
    "Stakeholder Trust",
    "Commercial Impact",
    "Data & AI",
];

pub fn category_icon(name: &str) -> &'static str {
    lookup(name).map_or(DEFAULT_ICON, |s| s.icon)
}

pub fn category_color(name: &str) -> &'static str {
    lookup(name).map_or(DEFAULT_COLOR, |s| s.color)
}

fn lookup(name: &str) -> Option<&'static CategoryStyle> {
    CATEGORY_STYLES.iter().find(|s| s.name == name)
}
