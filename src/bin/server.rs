use std::sync::Arc;

use anyhow::Context;

use visual_math::env_config;
use visual_math::server::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_config::init_tracing();
    let addr = env_config::bind_address();
    tracing::info!("Starting visual math server...");

    let state = Arc::new(AppState::default());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Open this URL in your browser: http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Stopping server...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install CTRL+C signal handler");
        std::future::pending::<()>().await;
    }
}
