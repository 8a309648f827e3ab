//! S7: Feedback and Growth Plan tabs.
//!
//! CSS-only tabs (radio inputs + labels), so the static page needs no script.
//! Feedback holds "Strengths Recognised" and "Working on Feedback" cards plus any
//! standalone quotes; Growth Plan is a bullet list.

use crate::dashboard::sections::notice;
use crate::dashboard::sections::s6_achievements::blockquote;
use crate::dashboard::utils::html::{bullet_list, escape, markdown};
use crate::dashboard::view_models::{Evidence, FeedbackTab, GrowthTab, ImprovementView, StrengthView};

pub fn generate(feedback: &FeedbackTab, growth: &GrowthTab) -> String {
    let mut html = String::from("<section class=\"tabs\">\n");
    html.push_str("<input type=\"radio\" name=\"dashboard-tabs\" id=\"tab-feedback\" checked>");
    html.push_str("<label for=\"tab-feedback\">Feedback</label>");
    html.push_str("<input type=\"radio\" name=\"dashboard-tabs\" id=\"tab-growth\">");
    html.push_str("<label for=\"tab-growth\">Growth Plan</label>\n");

    html.push_str("<div class=\"tab-panel\" id=\"panel-feedback\">\n");
    html.push_str(&feedback_panel(feedback));
    html.push_str("</div>\n");

    html.push_str("<div class=\"tab-panel\" id=\"panel-growth\">\n");
    html.push_str(&growth_panel(growth));
    html.push_str("</div>\n");

    html.push_str("</section>\n");
    html
}

fn feedback_panel(tab: &FeedbackTab) -> String {
    let mut html = String::from("<h3>Feedback</h3>\n<div class=\"divider-dark\"></div>\n");

    if !tab.strengths.is_empty() {
        html.push_str("<h4>Strengths Recognised</h4>\n<div class=\"divider-dark faint\"></div>\n");
        for card in &tab.strengths {
            html.push_str(&strength_card(card));
        }
    }

    if !tab.improvements.is_empty() {
        html.push_str("<h4>Working on Feedback</h4>\n<div class=\"divider-dark faint\"></div>\n");
        for card in &tab.improvements {
            html.push_str(&improvement_card(card));
        }
    }

    if !tab.quotes.is_empty() {
        html.push_str("<h4>In Their Words</h4>\n");
        for quote in &tab.quotes {
            html.push_str(&blockquote(quote));
        }
    }

    if let Some(n) = &tab.notice {
        html.push_str(&notice(n));
    }
    html
}

fn strength_card(card: &StrengthView) -> String {
    let mut html = format!("<div class=\"feedback-card\">\n<strong>{}</strong>\n", escape(&card.title));
    if !card.context.is_empty() {
        html.push_str(&format!("<p>{}</p>\n", escape(&card.context)));
    }
    if let Some(tag) = &card.tag {
        html.push_str(&format!("<span class=\"tag\">{}</span>\n", escape(tag)));
    }
    if let Some(evidence) = &card.evidence {
        html.push_str(&evidence_block(evidence));
    }
    html.push_str("</div>\n");
    html
}

fn improvement_card(card: &ImprovementView) -> String {
    let mut html = format!("<div class=\"feedback-card\">\n<strong>{}</strong>\n", escape(&card.title));
    if let Some(was) = &card.was {
        html.push_str(&format!(
            "<div><span class=\"badge badge-was\">Was</span> {}</div>\n",
            escape(was)
        ));
    }
    if let Some(now) = &card.now {
        html.push_str(&format!(
            "<div><span class=\"badge badge-now\">Now</span> {}</div>\n",
            escape(now)
        ));
    }
    if let Some(evidence) = &card.evidence {
        html.push_str(&evidence_block(evidence));
    }
    html.push_str("</div>\n");
    html
}

fn evidence_block(evidence: &Evidence) -> String {
    let body = match evidence {
        Evidence::Points(points) => bullet_list(points),
        Evidence::Markdown(text) => markdown(text),
    };
    format!("<details>\n<summary>Evidence</summary>\n{}</details>\n", body)
}

fn growth_panel(tab: &GrowthTab) -> String {
    let mut html = String::from("<h3>Growth Plan</h3>\n");
    html.push_str(&bullet_list(&tab.items));
    if let Some(n) = &tab.notice {
        html.push_str(&notice(n));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::view_models::{Notice, QuoteView};

    fn empty_growth() -> GrowthTab {
        GrowthTab { items: vec![], notice: Some(Notice::info("No growth plan items yet.")) }
    }

    #[test]
    fn test_strength_with_markdown_evidence() {
        let feedback = FeedbackTab {
            strengths: vec![StrengthView {
                title: "Client trust".to_string(),
                context: "Renewed twice".to_string(),
                tag: Some("Relationships".to_string()),
                evidence: Some(Evidence::Markdown("Extended by **6 months**".to_string())),
            }],
            improvements: vec![],
            quotes: vec![],
            notice: None,
        };

        let html = generate(&feedback, &empty_growth());
        assert!(html.contains("<h4>Strengths Recognised</h4>"));
        assert!(!html.contains("Working on Feedback"));
        assert!(html.contains("<span class=\"tag\">Relationships</span>"));
        assert!(html.contains("<summary>Evidence</summary>"));
        assert!(html.contains("<strong>6 months</strong>"));
        assert!(html.contains("No growth plan items yet."));
    }

    #[test]
    fn test_improvement_badges_and_points() {
        let feedback = FeedbackTab {
            strengths: vec![],
            improvements: vec![ImprovementView {
                title: "Delegation".to_string(),
                was: Some("Did it all".to_string()),
                now: None,
                evidence: Some(Evidence::Points(vec!["Handed over reporting".to_string()])),
            }],
            quotes: vec![QuoteView { quote: "Grew a lot".to_string(), attribution: None }],
            notice: None,
        };
        let growth = GrowthTab { items: vec!["Lead a bid".to_string()], notice: None };

        let html = generate(&feedback, &growth);
        assert!(html.contains("<span class=\"badge badge-was\">Was</span> Did it all"));
        assert!(!html.contains("badge-now"));
        assert!(html.contains("<li>Handed over reporting</li>"));
        assert!(html.contains("<blockquote>“Grew a lot”</blockquote>"));
        assert!(html.contains("<li>Lead a bid</li>"));
    }
}
