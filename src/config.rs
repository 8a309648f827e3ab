//! Runtime configuration for the binaries.
//!
//! Read from environment variables; the rendering pipeline itself never looks at
//! the environment.
//!
//! | Variable       | Default             |
//! |----------------|---------------------|
//! | `CONTENT_PATH` | `data/content.json` |
//! | `ASSET_DIR`    | `assets`            |
//! | `OUTPUT_PATH`  | `dashboard.html`    |
//! | `PORT`         | `3000`              |

use std::path::PathBuf;

use crate::content::DEFAULT_CONTENT_PATH;

/// Image directory; kept apart from the content file and the project root
/// because the server publishes it under `/assets`.
pub const DEFAULT_ASSET_DIR: &str = "assets";
pub const DEFAULT_OUTPUT_PATH: &str = "dashboard.html";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub content_path: PathBuf,
    pub asset_dir: PathBuf,
    /// `-` writes the page to stdout.
    pub output_path: String,
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            content_path: PathBuf::from(DEFAULT_CONTENT_PATH),
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        Self {
            content_path: get("CONTENT_PATH").map(PathBuf::from).unwrap_or(defaults.content_path),
            asset_dir: get("ASSET_DIR").map(PathBuf::from).unwrap_or(defaults.asset_dir),
            output_path: get("OUTPUT_PATH").unwrap_or(defaults.output_path),
            port,
        }
    }

    pub fn writes_to_stdout(&self) -> bool {
        self.output_path == "-"
    }
}
