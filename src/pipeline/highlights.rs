//! Highlight Deriver
//!
//! Explicit `highlights` are used verbatim. Without them, up to three cards are
//! synthesized from fixed templates; a template whose source data is missing is
//! skipped rather than filled with placeholder text.

use crate::content::{ContentDocument, Highlight};
use crate::pipeline::bullets::bullet_preview;

pub const MAX_DERIVED: usize = 3;

/// Explicit highlights, or derived ones when none are given.
pub fn derive_highlights(doc: &ContentDocument) -> Vec<Highlight> {
    if !doc.highlights.is_empty() {
        return doc.highlights.clone();
    }

    let mut cards = Vec::with_capacity(MAX_DERIVED);

    if let [first, second, ..] = doc.metrics.as_slice() {
        cards.push(Highlight {
            title: "Breadth of Delivery".to_string(),
            metric: format!("{} projects • {} stakeholders", first.value, second.value),
            context: "Led multi-client delivery with consistent stakeholder outcomes.".to_string(),
        });
    }

    if let Some(lead) = first_detail(doc, "Problem Solving") {
        cards.push(Highlight {
            title: "Diagnosis under pressure".to_string(),
            metric: "SVOF ELT grain fix".to_string(),
            context: lead,
        });
    }

    if let Some(lead) = first_detail(doc, "Commercial Craft") {
        cards.push(Highlight {
            title: "Pre-sales momentum".to_string(),
            metric: "AEMO / EPA / TNSW".to_string(),
            context: lead,
        });
    }

    cards.truncate(MAX_DERIVED);
    tracing::debug!("Derived {} highlight cards", cards.len());
    cards
}

/// True when `derive_highlights` would synthesize rather than pass through.
pub fn is_derived(doc: &ContentDocument) -> bool {
    doc.highlights.is_empty()
}

fn first_detail(doc: &ContentDocument, category: &str) -> Option<String> {
    let category = doc.category(category)?;
    bullet_preview(&category.bullets, 1).into_iter().next()
}
