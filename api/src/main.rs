mod auth_middleware;
mod config;
mod error;
mod handlers;
mod models;
mod request_logger;
mod respond;
mod routes;
mod state;
mod user_handlers;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use dotenv::dotenv;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    init_tracing();

    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        lang = config.lang.as_str(),
        "configuration loaded"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(config);
    let app = routes::build(state);

    tracing::info!("API server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "api=debug,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
