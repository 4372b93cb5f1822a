use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::GatewayError,
    model::{WeatherQuery, WeatherReport},
};

use super::WeatherProvider;

/// Production current-weather endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Icon code used when the provider sends none.
const DEFAULT_ICON_CODE: &str = "01d";

/// Upper bound on one provider round-trip; the call never hangs past this.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    http: Client,
    base_url: String,
}

impl OpenWeatherProvider {
    pub fn new() -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client for OpenWeather")?;

        Ok(Self { http, base_url: DEFAULT_BASE_URL.to_owned() })
    }

    /// Point the provider at a different endpoint (tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn fetch_current(&self, query: &WeatherQuery) -> Result<WeatherReport, GatewayError> {
        debug!("fetching current weather for {}", query.city);

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", query.city.as_str()),
                ("appid", query.api_key.as_str()),
                ("units", "metric"),
                ("lang", "en"),
            ])
            .send()
            .await
            .map_err(|err| GatewayError::Network(err.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(classify_status(status));
        }

        let body = res.text().await.map_err(|err| GatewayError::Network(err.to_string()))?;

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather current JSON")?;

        Ok(build_report(query, parsed))
    }
}

/// Non-success provider statuses: 404 means the city is unknown, everything
/// else is forwarded as an upstream failure.
fn classify_status(status: StatusCode) -> GatewayError {
    if status == StatusCode::NOT_FOUND {
        GatewayError::CityNotFound
    } else {
        GatewayError::Upstream(status.as_u16())
    }
}

/// Map the provider payload into a report, treating every field as optional.
///
/// An empty provider `name` falls back to the requested city, and an empty
/// icon code falls back to the default, matching the provider's occasional
/// habit of sending blank strings instead of omitting a field.
fn build_report(query: &WeatherQuery, parsed: OwCurrentResponse) -> WeatherReport {
    let first = parsed.weather.first();

    let city = parsed
        .name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| query.city.clone());

    let icon_code = first
        .and_then(|w| w.icon.as_deref())
        .filter(|code| !code.is_empty())
        .unwrap_or(DEFAULT_ICON_CODE);

    WeatherReport {
        city,
        temperature: parsed.main.as_ref().and_then(|m| m.temp),
        feels_like: parsed.main.as_ref().and_then(|m| m.feels_like),
        humidity: parsed.main.as_ref().and_then(|m| m.humidity),
        wind_speed: parsed.wind.as_ref().and_then(|w| w.speed),
        description: first.and_then(|w| w.description.clone()).unwrap_or_default(),
        icon: icon_url(icon_code),
    }
}

/// Provider-hosted image for a condition icon code.
fn icon_url(code: &str) -> String {
    format!("https://openweathermap.org/img/wn/{code}.png")
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: Option<f64>,
    feels_like: Option<f64>,
    humidity: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: Option<String>,
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: Option<String>,
    main: Option<OwMain>,
    #[serde(default)]
    weather: Vec<OwWeather>,
    wind: Option<OwWind>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReport, GatewayError> {
        self.fetch_current(query).await
    }
}
