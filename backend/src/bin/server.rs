//! Apiary conversion server binary.
//!
//! Loads configuration, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin apiary-server
//!
//! # Imperial defaults on another port
//! PORT=9000 APIARY_UNIT_PREFERENCE=imperial cargo run --bin apiary-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `APIARY_UNIT_PREFERENCE`: Preference used when a request has none (default: metric)
//! - `APIARY_DISPLAY_PRECISION`: Decimals used when a request has none (default: 2)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use apiary_backend::http::{create_router, AppState};
use apiary_backend::ServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting apiary conversion server");

    let config = ServiceConfig::load()?;
    let addr = config.socket_addr()?;
    info!(
        "Display defaults: preference={}, precision={}",
        config.display.default_preference, config.display.precision
    );

    let app = create_router(AppState::new(config));

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
