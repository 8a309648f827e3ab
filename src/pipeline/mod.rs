//! Content-rendering pipeline.
//!
//! Pure functions that turn document fragments into render-ready structures:
//! - `bullets`: header/detail grouping of KPI bullets
//! - `timeline`: date resolution and lane ordering for the journey chart
//! - `highlights`: explicit or template-derived highlight cards

pub mod bullets;
pub mod highlights;
pub mod timeline;

pub use bullets::{bullet_preview, group_bullets, BulletGroup, BulletList};
pub use highlights::derive_highlights;
pub use timeline::{normalize_timeline, LaneCategory, Timeline, TimelineEntry, TimelineError};
