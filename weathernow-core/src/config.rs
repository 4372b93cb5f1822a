use anyhow::{Context, Result};
use std::env;

/// Environment variable holding the OpenWeatherMap API key.
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Environment variable overriding the standalone server's listen port.
pub const PORT_VAR: &str = "PORT";

/// Listen port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8000;

/// Process-wide configuration, read once at startup and immutable afterwards.
///
/// A missing or blank API key is deliberately not an error here: the gateway
/// must still boot and answer every request with the configuration-error
/// status instead of refusing to start.
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw API key as found in the environment; validated per request.
    pub api_key: String,

    /// Listen port for the standalone server; unused by the serverless
    /// entrypoint.
    pub port: u16,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::var(API_KEY_VAR).ok(), env::var(PORT_VAR).ok())
    }

    /// Build configuration from already-extracted variable values.
    ///
    /// Split out of [`Config::from_env`] so tests never have to mutate the
    /// process environment.
    pub fn from_vars(api_key: Option<String>, port: Option<String>) -> Result<Self> {
        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid {PORT_VAR} value: {raw}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { api_key: api_key.unwrap_or_default(), port })
    }
}
