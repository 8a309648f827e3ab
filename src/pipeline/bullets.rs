//! Bullet Grouper
//!
//! Turns a flat list of KPI bullets into header/detail groups. A bullet whose
//! trimmed text ends with `:` is a header; everything else is a detail belonging to
//! the most recent header. Details that appear before the first header go into a
//! synthesized `"Details:"` group.
//!
//! Lists without any header are returned as `BulletList::Flat` so callers render a
//! plain bullet list without a synthesized heading.

use serde::Serialize;

/// Header used for details that precede the first real header.
pub const IMPLICIT_HEADER: &str = "Details:";

/// One header and the details under it. `details` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulletGroup {
    pub header: String,
    pub details: Vec<String>,
}

/// Result of grouping a bullet list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum BulletList {
    Grouped(Vec<BulletGroup>),
    Flat(Vec<String>),
}

impl BulletList {
    /// Total number of detail bullets (flat items count as details).
    pub fn detail_count(&self) -> usize {
        match self {
            BulletList::Grouped(groups) => groups.iter().map(|g| g.details.len()).sum(),
            BulletList::Flat(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            BulletList::Grouped(groups) => groups.is_empty(),
            BulletList::Flat(items) => items.is_empty(),
        }
    }

    /// Headers followed by their details, in order. Grouping the result again
    /// yields the same structure.
    pub fn flatten(&self) -> Vec<String> {
        match self {
            BulletList::Grouped(groups) => groups
                .iter()
                .flat_map(|g| std::iter::once(g.header.clone()).chain(g.details.iter().cloned()))
                .collect(),
            BulletList::Flat(items) => items.clone(),
        }
    }
}

/// True when the trimmed bullet ends with a colon.
pub fn is_header(item: &str) -> bool {
    item.trim().ends_with(':')
}

/// Group bullets under their headers.
pub fn group_bullets<S: AsRef<str>>(items: &[S]) -> BulletList {
    let mut groups: Vec<BulletGroup> = Vec::new();
    let mut current: Option<BulletGroup> = None;
    let mut flat: Vec<String> = Vec::new();
    let mut found_header = false;

    for raw in items {
        let item = raw.as_ref().trim();
        if item.is_empty() {
            continue;
        }

        if is_header(item) {
            found_header = true;
            if let Some(done) = current.take() {
                groups.push(done);
            }
            current = Some(BulletGroup {
                header: item.to_string(),
                details: Vec::new(),
            });
        } else {
            flat.push(item.to_string());
            current
                .get_or_insert_with(|| BulletGroup {
                    header: IMPLICIT_HEADER.to_string(),
                    details: Vec::new(),
                })
                .details
                .push(item.to_string());
        }
    }

    if !found_header {
        return BulletList::Flat(flat);
    }

    if let Some(done) = current {
        groups.push(done);
    }
    BulletList::Grouped(groups)
}

/// First `n` trimmed, non-empty, non-header bullets.
pub fn bullet_preview<S: AsRef<str>>(items: &[S], n: usize) -> Vec<String> {
    items
        .iter()
        .map(|raw| raw.as_ref().trim())
        .filter(|item| !item.is_empty() && !is_header(item))
        .take(n)
        .map(str::to_string)
        .collect()
}
