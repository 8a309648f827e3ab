//! Dashboard Generator
//!
//! Main entry point for rendering the promotion dashboard as one standalone HTML
//! page with embedded CSS. Builds the section view models, then renders the
//! sections in fixed order:
//! Hero → Intro → Journey Timeline → Highlights → KPI Deep-Dives →
//! Certifications & Achievements → Feedback/Growth tabs → Appendix.
//!
//! Public API (consumed by the render binary and api_server.rs):
//! - DashboardGenerator::new() -> Self
//! - DashboardGenerator::generate(document, context) -> String
//! - DashboardGenerator::render(page_data) -> String

use crate::content::ContentDocument;
use crate::dashboard::context::RenderContext;
use crate::dashboard::sections::{
    s1_hero, s2_intro, s3_timeline, s4_highlights, s5_kpi, s6_achievements, s7_feedback,
    s8_appendix,
};
use crate::dashboard::utils::html::escape;
use crate::dashboard::view_builder::build_page_data;
use crate::dashboard::view_models::DashboardPageData;

const STYLES: &str = r#"
html, body { background-color: rgba(252, 251, 247, 0.5); margin: 0; font-family: system-ui, sans-serif; color: #0f172a; line-height: 1.5; }
.page { max-width: 1200px; margin: 0 auto; padding: 24px 32px; background-color: #FCFBF7; }
.card { background: #fff; border: 1px solid #e5e7eb; border-radius: 16px; padding: 16px; box-shadow: 0 1px 3px rgba(0,0,0,.04); }
.card:hover { box-shadow: 0 10px 28px rgba(0,0,0,.06); transition: box-shadow .12s ease; }
.hero { padding: 22px 26px; border-radius: 18px; background: linear-gradient(135deg,#4F46E520,#06B6D420); border: 1px solid #e5e7eb; margin-bottom: 20px; }
.hero h1 { margin: 0 0 6px 0; }
.hero .summary { color: #475569; font-size: 14px; }
.pills { margin-top: 10px; }
.pill { display: inline-flex; align-items: center; gap: 6px; padding: 6px 12px; border-radius: 999px; background: #4F46E515; color: #4F46E5; font-weight: 600; font-size: 12px; margin-right: 6px; }
section { margin: 24px 0; }
.section-title { font-size: 20px; font-weight: 700; margin: 0 0 8px 0; }
.divider-dark { height: 2px; background: #444; margin: 10px 0 16px 0; border-radius: 999px; }
.divider-dark.faint { opacity: .3; }
.grid { display: grid; gap: 16px; }
.tag { display: inline-block; font-size: 12px; padding: 3px 8px; border-radius: 999px; border: 1px solid #e5e7eb; margin-right: 6px; color: #475569; }
.highlight .context { margin: .25rem 0 1rem 0; color: #475569; }
.kpi-heading { display: flex; align-items: center; gap: 8px; margin: 2px 0 6px 0; }
.kpi-icon { font-size: 20px; }
.subhead { font-weight: 700; margin: .35rem 0 .15rem 0; }
.accent { height: 3px; border-radius: 999px; margin: 8px 0 12px 0; opacity: .65; }
details { margin: 6px 0; }
summary { cursor: pointer; color: #334155; }
.achip { display: inline-flex; flex-direction: column; padding: 8px 12px; border: 1px solid #e5e7eb; border-radius: 16px; background: #ffffff; margin: 6px 8px 0 0; }
.achip a { color: inherit; text-decoration: none; }
.achip .note { color: #475569; font-size: 13px; }
.testimonial-inline { margin-top: 16px; }
blockquote { margin: 8px 0; font-size: 14px; color: #334155; border-left: 3px solid #e5e7eb; padding-left: 12px; }
.badge { display: inline-block; font-size: 11px; padding: 2px 8px; border-radius: 999px; }
.badge-was { background: #fee2e2; color: #b91c1c; border: 1px solid #fecaca; }
.badge-now { background: #dcfce7; color: #166534; border: 1px solid #bbf7d0; }
.feedback-card { margin: 12px 0; }
.tabs > input { display: none; }
.tabs > label { display: inline-block; padding: 8px 16px; cursor: pointer; border-bottom: 2px solid transparent; font-weight: 600; }
.tabs > input:checked + label { border-bottom-color: #4F46E5; color: #4F46E5; }
.tab-panel { display: none; padding-top: 8px; }
#tab-feedback:checked ~ #panel-feedback, #tab-growth:checked ~ #panel-growth { display: block; }
.notice { padding: 12px 16px; border-radius: 8px; margin: 8px 0; font-size: 14px; }
.notice-info { background: #e0f2fe; color: #075985; }
.notice-warning { background: #fef9c3; color: #854d0e; }
.notice-error { background: #fee2e2; color: #991b1b; }
.caption { color: #64748B; font-size: 13px; }
figure.image { margin: 8px 0; }
figure.image img { max-width: 100%; height: auto; }
.timeline-chart .lane-label { font-size: 12px; fill: #334155; }
.timeline-chart .tick-label { font-size: 11px; fill: #64748B; }
.timeline-chart .tick { stroke: #e5e7eb; }
.timeline-chart .row-guide { stroke: #f1f5f9; }
.timeline-chart .undated { font-size: 11px; font-style: italic; fill: #94A3B8; }
.legend { display: flex; gap: 16px; justify-content: center; font-size: 12px; color: #475569; }
.legend-title { font-weight: 600; }
.legend-item { display: inline-flex; align-items: center; gap: 6px; }
.swatch { width: 12px; height: 12px; border-radius: 3px; display: inline-block; }
footer { color: #94A3B8; font-size: 12px; margin-top: 24px; }
@media (max-width: 900px) { .page { padding-left: 14px; padding-right: 14px; } .grid { grid-template-columns: 1fr !important; } }
"#;

/// Dashboard generator - stateless HTML generator.
pub struct DashboardGenerator;

impl DashboardGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Render the full page for a document.
    pub fn generate(&self, document: &ContentDocument, context: &RenderContext) -> String {
        let page = build_page_data(document, context);
        self.render(&page)
    }

    /// Render already-built page data.
    pub fn render(&self, page: &DashboardPageData) -> String {
        let sections = [
            s1_hero::generate(&page.hero),
            s2_intro::generate(page.intro.as_ref()),
            s3_timeline::generate(&page.timeline),
            s4_highlights::generate(&page.highlights),
            s5_kpi::generate(&page.kpis),
            s6_achievements::generate(page.achievements.as_ref()),
            s7_feedback::generate(&page.feedback, &page.growth),
            s8_appendix::generate(&page.appendix),
        ];

        let body_len: usize = sections.iter().map(String::len).sum();
        let mut html = String::with_capacity(body_len + STYLES.len() + 1024);

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str(&format!(
            "<title>Promotion Dashboard — {}</title>\n",
            escape(&page.hero.name)
        ));
        html.push_str("<style>");
        html.push_str(STYLES);
        html.push_str("</style>\n</head>\n<body>\n<main class=\"page\">\n");

        for section in sections.iter().filter(|s| !s.is_empty()) {
            html.push_str(section);
        }

        html.push_str(&format!(
            "<footer>Generated {}</footer>\n",
            escape(&page.generated_at)
        ));
        html.push_str("</main>\n</body>\n</html>\n");
        html
    }
}

impl Default for DashboardGenerator {
    fn default() -> Self {
        Self::new()
    }
}
