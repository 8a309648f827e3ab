//! Promotion Dashboard
//!
//! Renders a single-person promotion dashboard from one JSON content file.
//!
//! Layout:
//! - `content/`: content file loading with lenient, fully defaulted types
//! - `pipeline/`: bullet grouping, timeline normalization, highlight derivation
//! - `dashboard/`: section view models and the HTML page generator
//! - `config`: environment configuration for the binaries
//! - `api_server`: Axum server for the page and its JSON view model (feature `api`)

pub mod config;
pub mod content;
pub mod dashboard;
pub mod pipeline;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use config::DashboardConfig;
pub use content::{load_content, ContentDocument, ContentError};
pub use dashboard::{DashboardGenerator, DashboardPageData, RenderContext};
pub use pipeline::{derive_highlights, group_bullets, normalize_timeline, BulletList, Timeline};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
