//! Per-render inputs that are not part of the content document.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::dashboard::view_models::ImageView;

/// Everything a render needs besides the document itself.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Resolves open-ended timeline ranges.
    pub today: NaiveDate,
    /// Directory that relative image paths are resolved against.
    pub asset_root: PathBuf,
    /// Prefix for image `src` attributes (empty for a static file next to the assets).
    pub asset_url_prefix: String,
}

impl RenderContext {
    pub fn new(asset_root: impl Into<PathBuf>) -> Self {
        Self {
            today: Local::now().date_naive(),
            asset_root: asset_root.into(),
            asset_url_prefix: String::new(),
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_asset_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.asset_url_prefix = prefix.into();
        self
    }

    /// Check an image path against the asset directory.
    pub fn resolve_image(&self, path: &str, caption: &str) -> ImageView {
        let candidate = Path::new(path);
        let on_disk = if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.asset_root.join(candidate)
        };

        if on_disk.is_file() {
            ImageView::Found {
                path: path.to_string(),
                src: self.image_src(path),
                caption: caption.to_string(),
            }
        } else {
            tracing::debug!("Image not found: {}", on_disk.display());
            ImageView::Missing { path: path.to_string() }
        }
    }

    fn image_src(&self, path: &str) -> String {
        if self.asset_url_prefix.is_empty() {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.asset_url_prefix.trim_end_matches('/'),
            path.trim_start_matches("./").trim_start_matches('/')
        )
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(".")
    }
}
