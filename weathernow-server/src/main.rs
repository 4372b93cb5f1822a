//! Binary crate for the standalone WeatherNow HTTP server.
//!
//! This crate focuses on:
//! - Process startup and configuration
//! - Binding the listen socket
//! - Serving the gateway router

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use weathernow_core::{Config, OpenWeatherProvider, WeatherGateway};

mod app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let provider = OpenWeatherProvider::new()?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let gateway = WeatherGateway::new(config, Arc::new(provider));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app::router(gateway)).await.context("Server terminated")?;

    Ok(())
}
