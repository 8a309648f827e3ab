//! Page section generators, one module per section in page order.
//!
//! Each `generate` takes its view model and returns an HTML fragment. Sections never
//! fail: empty input renders the section's notice instead.

pub mod s1_hero;
pub mod s2_intro;
pub mod s3_timeline;
pub mod s4_highlights;
pub mod s5_kpi;
pub mod s6_achievements;
pub mod s7_feedback;
pub mod s8_appendix;

use crate::dashboard::utils::html::escape;
use crate::dashboard::view_models::{ImageView, Notice};

/// Placeholder box for a section without content.
pub(crate) fn notice(n: &Notice) -> String {
    format!("<div class=\"{}\">{}</div>\n", n.level.css_class(), escape(&n.message))
}

/// `<figure>` for a found image, a "not found" caption otherwise.
pub(crate) fn image(view: &ImageView, width: u32) -> String {
    match view {
        ImageView::Found { src, caption, .. } => {
            let mut out = format!(
                "<figure class=\"image\"><img src=\"{}\" width=\"{}\" alt=\"{}\" />",
                escape(src),
                width,
                escape(caption)
            );
            if !caption.is_empty() {
                out.push_str(&format!("<figcaption>{}</figcaption>", escape(caption)));
            }
            out.push_str("</figure>\n");
            out
        }
        ImageView::Missing { path } => format!(
            "<p class=\"caption\">(Image not found: {})</p>\n",
            escape(path)
        ),
    }
}
