// Dashboard server binary entry point
//
// Purpose: serve the dashboard page and its JSON view model over HTTP
// Usage: cargo run --features api --bin dashboard_server

use promo_dashboard::{create_router, AppState, DashboardConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "promo_dashboard=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting dashboard server...");

    let config = DashboardConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  CONTENT_PATH: {}", config.content_path.display());
    tracing::info!("  ASSET_DIR: {}", config.asset_dir.display());
    tracing::info!("  PORT: {}", config.port);

    // Loads the content file; a missing file stops the server here
    let state = AppState::new(&config).await?;
    tracing::info!("Application state initialized successfully");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
