use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::set_header::SetResponseHeaderLayer;
use weathernow_core::{GatewayError, WeatherGateway};

/// Build the application router.
///
/// The three CORS headers are applied to every response, including errors
/// and the pre-flight acknowledgment; the cross-origin policy of this
/// service is unconditional.
pub fn router(gateway: WeatherGateway) -> Router {
    Router::new()
        .route("/weather", get(get_weather).options(preflight))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(gateway)
}

/// Browser pre-flight check: acknowledged with no body and no validation.
async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn get_weather(
    State(gateway): State<WeatherGateway>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    match gateway.current_weather(params.get("city").map(String::as_str)).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => error_response(&err),
    }
}

/// Exhaustive error-to-response mapping; diagnostics stay on the server side.
fn error_response(err: &GatewayError) -> Response {
    match err {
        GatewayError::Internal(source) => tracing::error!("unexpected failure: {source:#}"),
        GatewayError::Network(reason) => tracing::warn!("provider unreachable: {reason}"),
        _ => {}
    }

    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, Json(err.client_body())).into_response()
}
