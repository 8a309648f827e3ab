//! S3: Journey timeline (gantt chart).

use crate::dashboard::sections::notice;
use crate::dashboard::utils::chart;
use crate::dashboard::utils::html::section_title;
use crate::dashboard::view_models::TimelineSection;

pub fn generate(section: &TimelineSection) -> String {
    let mut html = String::from("<section class=\"timeline\">\n");
    html.push_str(&section_title(&section.title));

    if let Some(timeline) = &section.timeline {
        html.push_str(&chart::gantt(timeline));
    }
    if let Some(n) = &section.notice {
        html.push_str(&notice(n));
    }

    html.push_str("</section>\n");
    html
}
