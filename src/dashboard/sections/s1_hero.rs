//! S1: Hero banner with name, summary and focus pills.

use crate::dashboard::utils::html::escape;
use crate::dashboard::view_models::HeroSection;

pub fn generate(hero: &HeroSection) -> String {
    let mut html = String::with_capacity(512);
    html.push_str("<div class=\"hero\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(&hero.title)));
    html.push_str(&format!("<div class=\"summary\">{}</div>\n", escape(&hero.summary)));
    html.push_str("<div class=\"pills\">");
    for pill in &hero.pills {
        html.push_str(&format!("<span class=\"pill\">{}</span>", escape(pill)));
    }
    html.push_str("</div>\n</div>\n");
    html
}
