//! S8: Appendix (testimonial images only).

use crate::dashboard::sections::{image, notice};
use crate::dashboard::utils::html::section_title;
use crate::dashboard::view_models::AppendixSection;

const IMAGE_WIDTH: u32 = 500;

pub fn generate(section: &AppendixSection) -> String {
    let mut html = String::from("<section class=\"appendix\">\n");
    html.push_str(&section_title("Appendix"));

    for view in &section.images {
        html.push_str(&image(view, IMAGE_WIDTH));
    }
    if let Some(n) = &section.notice {
        html.push_str(&notice(n));
    }

    html.push_str("<div class=\"divider-dark\"></div>\n</section>\n");
    html
}
