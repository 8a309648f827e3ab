//! Builds section view models from the content document.
//!
//! Each builder tolerates empty or partial input on its own: a missing field never
//! stops the other sections, it turns into a `Notice` placeholder instead.

use chrono::Utc;

use crate::content::{Achievement, ContentDocument, ImprovementCard, Quote, StrengthCard};
use crate::dashboard::context::RenderContext;
use crate::dashboard::utils::lookup_tables::{category_color, category_icon, HERO_PILLS};
use crate::dashboard::view_models::*;
use crate::pipeline::highlights::is_derived;
use crate::pipeline::{bullet_preview, derive_highlights, group_bullets, normalize_timeline, TimelineError};

pub const DEFAULT_NAME: &str = "Your Name";
pub const TIMELINE_TITLE: &str = "Journey at Mantel";
pub const PREVIEW_BULLETS: usize = 2;

/// Build every section of the page.
pub fn build_page_data(doc: &ContentDocument, ctx: &RenderContext) -> DashboardPageData {
    DashboardPageData {
        generated_at: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        hero: build_hero(doc),
        intro: build_intro(doc, ctx),
        timeline: build_timeline(doc, ctx),
        highlights: build_highlights(doc),
        kpis: build_kpis(doc),
        achievements: build_achievements(doc),
        feedback: build_feedback(doc),
        growth: build_growth(doc),
        appendix: build_appendix(doc, ctx),
    }
}

pub fn build_hero(doc: &ContentDocument) -> HeroSection {
    let name = doc
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_NAME)
        .to_string();

    HeroSection {
        title: format!("🌟 Promotion Dashboard — {}", name),
        name,
        summary: doc.summary.clone(),
        pills: HERO_PILLS.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn build_intro(doc: &ContentDocument, ctx: &RenderContext) -> Option<IntroSection> {
    let intro = doc.intro.as_ref()?;
    if intro.heading.is_none() && intro.text.is_empty() && intro.image.is_none() {
        return None;
    }

    Some(IntroSection {
        heading: intro.heading.clone(),
        text: intro.text.clone(),
        image: intro
            .image
            .as_deref()
            .map(|path| ctx.resolve_image(path, &intro.image_caption)),
    })
}

pub fn build_timeline(doc: &ContentDocument, ctx: &RenderContext) -> TimelineSection {
    let (timeline, notice) = match normalize_timeline(&doc.timeline_ranges, ctx.today) {
        Ok(timeline) => (Some(timeline), None),
        Err(err) => {
            tracing::warn!("Skipping timeline chart: {}", err);
            let notice = match &err {
                TimelineError::Empty => Notice::warning(err.to_string()),
                TimelineError::MissingField(_) => Notice::error(err.to_string()),
            };
            (None, Some(notice))
        }
    };

    TimelineSection {
        title: TIMELINE_TITLE.to_string(),
        timeline,
        notice,
    }
}

pub fn build_highlights(doc: &ContentDocument) -> HighlightsSection {
    let cards = derive_highlights(doc);
    let notice = cards
        .is_empty()
        .then(|| Notice::info("No highlights available."));

    HighlightsSection {
        derived: is_derived(doc) && !cards.is_empty(),
        cards,
        notice,
    }
}

pub fn build_kpis(doc: &ContentDocument) -> KpiSection {
    let categories: Vec<KpiCard> = doc
        .matrix
        .iter()
        .filter_map(|category| {
            let bullets = group_bullets(&category.bullets);
            if bullets.is_empty() {
                tracing::warn!("Skipping empty KPI category '{}'", category.name);
                return None;
            }
            Some(KpiCard {
                name: category.name.clone(),
                icon: category_icon(&category.name).to_string(),
                color: category_color(&category.name).to_string(),
                preview: bullet_preview(&category.bullets, PREVIEW_BULLETS),
                bullets,
            })
        })
        .collect();

    let notice = categories
        .is_empty()
        .then(|| Notice::info("No KPI details available."));

    KpiSection { categories, notice }
}

/// `None` when there are no achievements; the whole section is then left out.
pub fn build_achievements(doc: &ContentDocument) -> Option<AchievementsSection> {
    if doc.achievements.is_empty() {
        return None;
    }

    let chips = doc.achievements.iter().map(achievement_chip).collect();
    let testimonial = doc
        .feedback_section
        .testimonials
        .first()
        .and_then(|t| quote_view(&t.as_quote()));

    Some(AchievementsSection { chips, testimonial })
}

pub fn build_feedback(doc: &ContentDocument) -> FeedbackTab {
    let section = &doc.feedback_section;
    let strengths: Vec<StrengthView> = section.good.iter().map(strength_view).collect();
    let improvements: Vec<ImprovementView> = section.improve.iter().map(improvement_view).collect();
    let quotes: Vec<QuoteView> = section.quotes.iter().filter_map(quote_view).collect();

    let notice = (strengths.is_empty() && improvements.is_empty() && quotes.is_empty())
        .then(|| Notice::info("No feedback recorded yet."));

    FeedbackTab { strengths, improvements, quotes, notice }
}

pub fn build_growth(doc: &ContentDocument) -> GrowthTab {
    let items: Vec<String> = doc
        .growth
        .iter()
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
        .collect();
    let notice = items
        .is_empty()
        .then(|| Notice::info("No growth plan items yet."));

    GrowthTab { items, notice }
}

pub fn build_appendix(doc: &ContentDocument, ctx: &RenderContext) -> AppendixSection {
    let images: Vec<ImageView> = doc
        .feedback_section
        .testimonials
        .iter()
        .filter_map(|t| {
            t.image
                .as_deref()
                .map(|path| ctx.resolve_image(path, &t.image_caption))
        })
        .collect();

    let notice = (!images.iter().any(ImageView::is_found))
        .then(|| Notice::info("(No appendix image available)"));

    AppendixSection { images, notice }
}

fn achievement_chip(a: &Achievement) -> AchievementChip {
    AchievementChip {
        icon: a.icon.clone(),
        title: a.title.clone(),
        issuer: a.issuer.clone(),
        date: a.date.clone(),
        note: a.note.clone(),
        link: a.link.clone(),
    }
}

/// Quote plus "name, org" attribution; `None` without quote text.
fn quote_view(q: &Quote) -> Option<QuoteView> {
    let quote = q.quote.clone()?;
    let attribution = match (q.name.as_deref(), q.org.as_deref()) {
        (Some(name), Some(org)) => Some(format!("{}, {}", name, org)),
        (Some(name), None) => Some(name.to_string()),
        (None, Some(org)) => Some(org.to_string()),
        (None, None) => None,
    };
    Some(QuoteView { quote, attribution })
}

fn evidence(points: &[String], text: &str) -> Option<Evidence> {
    let points: Vec<String> = points
        .iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();
    if !points.is_empty() {
        return Some(Evidence::Points(points));
    }
    (!text.trim().is_empty()).then(|| Evidence::Markdown(text.to_string()))
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

fn strength_view(card: &StrengthCard) -> StrengthView {
    StrengthView {
        title: card.title.clone(),
        context: card.context.clone(),
        tag: non_empty(&card.tag),
        evidence: evidence(&card.evidence_points, &card.evidence),
    }
}

fn improvement_view(card: &ImprovementCard) -> ImprovementView {
    ImprovementView {
        title: card.title.clone(),
        was: non_empty(&card.was),
        now: non_empty(&card.now),
        evidence: evidence(&card.evidence_points, &card.evidence),
    }
}
