use serde::Serialize;
use thiserror::Error;

/// Everything that can go wrong while serving one weather request.
///
/// Matched exhaustively at the transport boundary: every variant maps to a
/// fixed status code and client-facing message, so internal detail never
/// leaks into a response body.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// `OPENWEATHER_API_KEY` is missing or blank (server misconfiguration).
    #[error("OPENWEATHER_API_KEY is missing or blank")]
    MissingApiKey,

    /// The `city` query parameter is missing or blank (client mistake).
    #[error("'city' query parameter is missing or blank")]
    MissingCity,

    /// The provider answered 404 for the requested city.
    #[error("provider does not know the requested city")]
    CityNotFound,

    /// The provider answered with a non-success HTTP status other than 404.
    #[error("provider request failed with status {0}")]
    Upstream(u16),

    /// No usable response from the provider (connect, DNS, timeout, body read).
    #[error("network failure reaching provider: {0}")]
    Network(String),

    /// Anything unexpected; details go to the server-side log only.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl GatewayError {
    /// HTTP status code of the client response.
    ///
    /// Upstream failures forward the provider's own status; transports fall
    /// back to 502 if the code cannot be represented on their HTTP layer.
    pub fn status(&self) -> u16 {
        match self {
            GatewayError::MissingApiKey => 500,
            GatewayError::MissingCity => 400,
            GatewayError::CityNotFound => 404,
            GatewayError::Upstream(status) => *status,
            GatewayError::Network(_) => 502,
            GatewayError::Internal(_) => 500,
        }
    }

    /// Fixed client-facing message for the `{"error": ...}` body.
    pub fn client_message(&self) -> &'static str {
        match self {
            GatewayError::MissingApiKey => "Missing OPENWEATHER_API_KEY",
            GatewayError::MissingCity => "Missing 'city' parameter",
            GatewayError::CityNotFound => "city not found",
            GatewayError::Upstream(_) => "upstream error",
            GatewayError::Network(_) => "network error",
            GatewayError::Internal(_) => "internal error",
        }
    }

    /// Serializable error body for the client response.
    pub fn client_body(&self) -> ErrorBody {
        ErrorBody { error: self.client_message() }
    }
}

/// Fixed-shape error body returned to callers.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}
