//! S2: Optional introduction block.

use crate::dashboard::sections::image;
use crate::dashboard::utils::html::escape;
use crate::dashboard::view_models::IntroSection;

const IMAGE_WIDTH: u32 = 420;

/// Empty string when the document has no intro.
pub fn generate(intro: Option<&IntroSection>) -> String {
    let Some(intro) = intro else {
        return String::new();
    };

    let mut html = String::from("<section class=\"intro card\">\n");
    if let Some(heading) = &intro.heading {
        html.push_str(&format!("<h2>{}</h2>\n", escape(heading)));
    }
    for paragraph in intro.text.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
        html.push_str(&format!("<p>{}</p>\n", escape(paragraph)));
    }
    if let Some(view) = &intro.image {
        html.push_str(&image(view, IMAGE_WIDTH));
    }
    html.push_str("</section>\n");
    html
}
