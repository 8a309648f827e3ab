// Static renderer: writes the dashboard page to a single HTML file.
//
// Usage: cargo run --bin render_dashboard
// Configuration: CONTENT_PATH, ASSET_DIR, OUTPUT_PATH ("-" for stdout)

use std::io::Write;

use anyhow::Context;
use promo_dashboard::{load_content, DashboardConfig, DashboardGenerator, RenderContext};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout can carry the page
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promo_dashboard=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = DashboardConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  CONTENT_PATH: {}", config.content_path.display());
    tracing::info!("  ASSET_DIR: {}", config.asset_dir.display());
    tracing::info!("  OUTPUT_PATH: {}", config.output_path);

    // Fatal before anything is written
    let document = load_content(&config.content_path)?;

    // Image src attributes are relative to the working directory, like the output file
    let context = RenderContext::new(config.asset_dir.clone())
        .with_asset_url_prefix(config.asset_dir.to_string_lossy());
    let html = DashboardGenerator::new().generate(&document, &context);

    if config.writes_to_stdout() {
        std::io::stdout()
            .lock()
            .write_all(html.as_bytes())
            .context("Failed to write page to stdout")?;
    } else {
        std::fs::write(&config.output_path, &html)
            .with_context(|| format!("Failed to write {}", config.output_path))?;
        tracing::info!("Wrote {} ({} bytes)", config.output_path, html.len());
    }

    Ok(())
}
