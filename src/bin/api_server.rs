// API Server Binary Entry Point
//
// Purpose: Serve rendered review pages from a JSON product catalog
// Usage: cargo run --features api --bin api_server

use review_page_renderer::{create_router, AppState, ServerConfig, SiteConfig};
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
                    "review_page_renderer=info,tower_http=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting review page server...");

    // Configuration from environment variables
    let config = ServerConfig::from_env();
    let site = SiteConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  CATALOG_PATH: {}", config.catalog_path.display());
    tracing::info!("  SITE_URL: {}", site.base_url);
    tracing::info!("  PORT: {}", config.port);

    let state = AppState::new(&config, site)?;
    tracing::info!("Serving {} review pages", state.catalog.len());

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
