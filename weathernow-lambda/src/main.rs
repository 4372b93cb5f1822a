//! Serverless HTTP-trigger entrypoint for the WeatherNow gateway.
//!
//! A thin adapter around the shared gateway: it maps the host's
//! request/response calling convention onto the core and nothing more. The
//! method dispatch, CORS headers and error bodies mirror the standalone
//! server exactly.

use std::sync::Arc;

use lambda_http::{
    Body, Error, Request, RequestExt, Response,
    http::{Method, StatusCode, header},
    run, service_fn,
};
use tracing_subscriber::EnvFilter;
use weathernow_core::{Config, GatewayError, OpenWeatherProvider, WeatherGateway};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let provider = OpenWeatherProvider::new()?;
    let gateway = WeatherGateway::new(config, Arc::new(provider));

    run(service_fn(move |event: Request| {
        let gateway = gateway.clone();
        async move { handle(&gateway, event).await }
    }))
    .await
}

async fn handle(gateway: &WeatherGateway, event: Request) -> Result<Response<Body>, Error> {
    if *event.method() == Method::OPTIONS {
        return respond(StatusCode::NO_CONTENT, Body::Empty);
    }

    if *event.method() != Method::GET {
        return respond(StatusCode::METHOD_NOT_ALLOWED, Body::Empty);
    }

    let params = event.query_string_parameters();
    match gateway.current_weather(params.first("city")).await {
        Ok(report) => respond(StatusCode::OK, Body::Text(serde_json::to_string(&report)?)),
        Err(err) => error_response(&err),
    }
}

/// Exhaustive error-to-response mapping; diagnostics stay on the server side.
fn error_response(err: &GatewayError) -> Result<Response<Body>, Error> {
    match err {
        GatewayError::Internal(source) => tracing::error!("unexpected failure: {source:#}"),
        GatewayError::Network(reason) => tracing::warn!("provider unreachable: {reason}"),
        _ => {}
    }

    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::BAD_GATEWAY);
    respond(status, Body::Text(serde_json::to_string(&err.client_body())?))
}

/// Build a response carrying the unconditional CORS headers.
fn respond(status: StatusCode, body: Body) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder()
        .status(status)
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS")
        .header(header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type");

    if !matches!(body, Body::Empty) {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }

    Ok(builder.body(body)?)
}
