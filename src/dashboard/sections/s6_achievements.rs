//! S6: Certifications & Achievements
//!
//! Chips laid out up to three per row, each `{icon} title — issuer · date`, linked
//! when the entry has a link. The first testimonial follows as a short quote.
//! The section is omitted when the document lists no achievements.

use crate::dashboard::utils::html::{escape, section_title};
use crate::dashboard::view_models::{AchievementChip, AchievementsSection, QuoteView};

const MAX_COLUMNS: usize = 3;

pub fn generate(section: Option<&AchievementsSection>) -> String {
    let Some(section) = section else {
        return String::new();
    };

    let mut html = String::from("<section class=\"achievements\">\n");
    html.push_str(&section_title("Certifications & Achievements"));

    let columns = section.chips.len().clamp(1, MAX_COLUMNS);
    html.push_str(&format!(
        "<div class=\"grid\" style=\"grid-template-columns:repeat({}, 1fr)\">\n",
        columns
    ));
    for chip in &section.chips {
        html.push_str(&achievement_chip(chip));
    }
    html.push_str("</div>\n");

    if let Some(quote) = &section.testimonial {
        html.push_str("<div class=\"testimonial-inline\">\n<p><em>What clients say</em></p>\n");
        html.push_str(&blockquote(quote));
        html.push_str("</div>\n");
    }

    html.push_str("</section>\n");
    html
}

fn achievement_chip(chip: &AchievementChip) -> String {
    let mut label = format!(
        "{} <b>{}</b> — {}",
        escape(&chip.icon),
        escape(&chip.title),
        escape(&chip.issuer)
    );
    if !chip.date.is_empty() {
        label.push_str(&format!(" · {}", escape(&chip.date)));
    }

    let mut html = String::from("<div class=\"achip\">");
    match &chip.link {
        Some(link) => html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
            escape(link),
            label
        )),
        None => html.push_str(&label),
    }
    if !chip.note.is_empty() {
        html.push_str(&format!("<div class=\"note\">{}</div>", escape(&chip.note)));
    }
    html.push_str("</div>\n");
    html
}

/// `> “quote” — name, org`
pub fn blockquote(quote: &QuoteView) -> String {
    let mut html = format!("<blockquote>“{}”", escape(&quote.quote));
    if let Some(by) = &quote.attribution {
        html.push_str(&format!(" — <strong>{}</strong>", escape(by)));
    }
    html.push_str("</blockquote>\n");
    html
}
