//! Content Store
//!
//! Loads the single JSON content file behind the dashboard and exposes it as an
//! immutable, fully defaulted `ContentDocument`.

pub mod lenient;
pub mod loader;
pub mod types;

pub use loader::{load_content, parse_content, ContentError, DEFAULT_CONTENT_PATH};
pub use types::*;
