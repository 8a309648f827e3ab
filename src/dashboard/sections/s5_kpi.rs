//! S5: KPI Deep-Dives
//!
//! One block per matrix category: icon and title, two preview bullets, the full
//! bullet list folded into a `<details>` element, then an accent rule in the
//! category colour. Grouped lists show each header as a subhead; flat lists are a
//! plain bullet list.

use crate::dashboard::sections::notice;
use crate::dashboard::utils::html::{bullet_list, escape, section_title};
use crate::dashboard::view_models::{KpiCard, KpiSection};
use crate::pipeline::BulletList;

pub fn generate(section: &KpiSection) -> String {
    let mut html = String::from("<section class=\"kpis\">\n");
    html.push_str(&section_title("KPI Deep-Dives"));

    for card in &section.categories {
        html.push_str(&kpi_card(card));
    }
    if let Some(n) = &section.notice {
        html.push_str(&notice(n));
    }

    html.push_str("</section>\n");
    html
}

fn kpi_card(card: &KpiCard) -> String {
    let mut html = String::from("<div class=\"kpi-category\">\n");
    html.push_str(&format!(
        "<div class=\"kpi-heading\"><span class=\"kpi-icon\">{}</span><strong>{}</strong></div>\n",
        escape(&card.icon),
        escape(&card.name)
    ));

    for line in &card.preview {
        html.push_str(&format!("<div class=\"preview\">• {}</div>\n", escape(line)));
    }

    html.push_str("<details>\n<summary>Details</summary>\n");
    html.push_str(&bullets(&card.bullets));
    html.push_str("</details>\n");

    html.push_str(&format!(
        "<div class=\"accent\" style=\"background:{}\"></div>\n",
        escape(&card.color)
    ));
    html.push_str("</div>\n");
    html
}

/// Grouped or flat bullet markup.
pub fn bullets(list: &BulletList) -> String {
    match list {
        BulletList::Flat(items) => bullet_list(items),
        BulletList::Grouped(groups) => {
            let mut html = String::new();
            for group in groups {
                html.push_str(&format!("<div class=\"subhead\">{}</div>\n", escape(&group.header)));
                html.push_str(&bullet_list(&group.details));
            }
            html
        }
    }
}
