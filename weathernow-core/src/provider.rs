use crate::{
    error::GatewayError,
    model::{WeatherQuery, WeatherReport},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current-weather data.
///
/// The gateway only ever talks to this trait, which keeps both transports
/// testable with in-memory fakes.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReport, GatewayError>;
}
