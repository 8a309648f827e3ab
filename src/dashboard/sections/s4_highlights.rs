//! S4: Highlight cards, up to three per row.

use crate::dashboard::sections::notice;
use crate::dashboard::utils::html::{escape, section_title};
use crate::dashboard::view_models::HighlightsSection;

const MAX_COLUMNS: usize = 3;

pub fn generate(section: &HighlightsSection) -> String {
    let mut html = String::from("<section class=\"highlights\">\n");
    html.push_str(&section_title("Highlights"));

    if !section.cards.is_empty() {
        let columns = section.cards.len().min(MAX_COLUMNS);
        html.push_str(&format!(
            "<div class=\"grid\" style=\"grid-template-columns:repeat({}, 1fr)\">\n",
            columns
        ));
        for card in &section.cards {
            html.push_str("<div class=\"card highlight\">\n");
            html.push_str(&format!("<strong>{}</strong>\n", escape(&card.title)));
            if !card.metric.is_empty() {
                html.push_str(&format!("<div><span class=\"tag\">{}</span></div>\n", escape(&card.metric)));
            }
            if !card.context.is_empty() {
                html.push_str(&format!("<div class=\"context\">{}</div>\n", escape(&card.context)));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</div>\n");
    }
    if let Some(n) = &section.notice {
        html.push_str(&notice(n));
    }

    html.push_str("</section>\n");
    html
}
