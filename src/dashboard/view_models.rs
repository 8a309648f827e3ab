//! View Models for the dashboard page.
//!
//! Render-ready section structs. The HTML section generators consume these, and the
//! API serves them as JSON, so both outputs always agree.

use serde::Serialize;

use crate::content::Highlight;
use crate::pipeline::{BulletList, Timeline};

/// Severity of an informational placeholder shown instead of section content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice notice-info",
            NoticeLevel::Warning => "notice notice-warning",
            NoticeLevel::Error => "notice notice-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// An image reference after checking the asset directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImageView {
    Found { path: String, src: String, caption: String },
    Missing { path: String },
}

impl ImageView {
    pub fn is_found(&self) -> bool {
        matches!(self, ImageView::Found { .. })
    }
}

/// A quote with its "name, org" attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteView {
    pub quote: String,
    pub attribution: Option<String>,
}

/// Supporting evidence; explicit points win over free-form markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Evidence {
    Points(Vec<String>),
    Markdown(String),
}

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HeroSection {
    pub title: String,
    pub name: String,
    pub summary: String,
    pub pills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntroSection {
    pub heading: Option<String>,
    pub text: String,
    pub image: Option<ImageView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineSection {
    pub title: String,
    pub timeline: Option<Timeline>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HighlightsSection {
    pub cards: Vec<Highlight>,
    /// True when the cards were synthesized from metrics and KPI bullets.
    pub derived: bool,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KpiCard {
    pub name: String,
    pub icon: String,
    pub color: String,
    pub preview: Vec<String>,
    pub bullets: BulletList,
}

#[derive(Debug, Clone, Serialize)]
pub struct KpiSection {
    pub categories: Vec<KpiCard>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementChip {
    pub icon: String,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub note: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementsSection {
    pub chips: Vec<AchievementChip>,
    pub testimonial: Option<QuoteView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StrengthView {
    pub title: String,
    pub context: String,
    pub tag: Option<String>,
    pub evidence: Option<Evidence>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImprovementView {
    pub title: String,
    pub was: Option<String>,
    pub now: Option<String>,
    pub evidence: Option<Evidence>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackTab {
    pub strengths: Vec<StrengthView>,
    pub improvements: Vec<ImprovementView>,
    pub quotes: Vec<QuoteView>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GrowthTab {
    pub items: Vec<String>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppendixSection {
    pub images: Vec<ImageView>,
    pub notice: Option<Notice>,
}

/// The whole page, in section order.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardPageData {
    pub generated_at: String,
    pub hero: HeroSection,
    pub intro: Option<IntroSection>,
    pub timeline: TimelineSection,
    pub highlights: HighlightsSection,
    pub kpis: KpiSection,
    /// `None` when the document lists no achievements; the section is then omitted.
    pub achievements: Option<AchievementsSection>,
    pub feedback: FeedbackTab,
    pub growth: GrowthTab,
    pub appendix: AppendixSection,
}
