use std::sync::Arc;

use counter_service::{AppState, Config, CounterRegistry, Result, create_router};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::from_env();
    config.validate().inspect_err(|e| {
        tracing::error!("{}", e);
    })?;

    // Registry lives for the whole process and starts empty
    let counters = CounterRegistry::new();

    let state = Arc::new(AppState {
        config: config.clone(),
        counters: counters.clone(),
    });

    // Graceful shutdown channel
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    let app = create_router(state);

    let addr = config.socket_addr().inspect_err(|e| {
        tracing::error!("Invalid server address: {}", e);
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("Counter service starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - POST   /counters/{{name}} - Create counter");
    tracing::info!("  - PUT    /counters/{{name}} - Increment counter");
    tracing::info!("  - GET    /counters/{{name}} - Read counter");
    tracing::info!("  - DELETE /counters/{{name}} - Delete counter");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    tracing::info!("Discarding {} counter(s)", counters.len().await);

    Ok(())
}

fn setup_tracing() {
    // RUST_LOG wins; fall back to "info"
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
