use std::sync::Arc;

use crate::{
    Config,
    error::GatewayError,
    model::{WeatherQuery, WeatherReport},
    provider::WeatherProvider,
};

/// Composition root for one weather lookup: validation, then the provider call.
///
/// Owns the immutable configuration and the provider, so the transports stay
/// free of environment access and can inject fakes in tests.
#[derive(Debug, Clone)]
pub struct WeatherGateway {
    config: Config,
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherGateway {
    pub fn new(config: Config, provider: Arc<dyn WeatherProvider>) -> Self {
        Self { config, provider }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate the raw `city` parameter and fetch the current weather.
    ///
    /// Validation failures return before any network activity.
    pub async fn current_weather(&self, city: Option<&str>) -> Result<WeatherReport, GatewayError> {
        let query = WeatherQuery::new(city, &self.config.api_key)?;
        self.provider.current_weather(&query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Fails the test if the gateway reaches the network despite invalid input.
    #[derive(Debug)]
    struct PanickingProvider;

    #[async_trait]
    impl WeatherProvider for PanickingProvider {
        async fn current_weather(
            &self,
            _query: &WeatherQuery,
        ) -> Result<WeatherReport, GatewayError> {
            panic!("provider must not be called for invalid input");
        }
    }

    /// Echoes back the validated query it was called with.
    #[derive(Debug)]
    struct EchoProvider;

    #[async_trait]
    impl WeatherProvider for EchoProvider {
        async fn current_weather(
            &self,
            query: &WeatherQuery,
        ) -> Result<WeatherReport, GatewayError> {
            Ok(WeatherReport {
                city: query.city.clone(),
                temperature: Some(12.0),
                feels_like: Some(11.0),
                humidity: Some(50),
                wind_speed: Some(4.2),
                description: "overcast clouds".into(),
                icon: "https://openweathermap.org/img/wn/04d.png".into(),
            })
        }
    }

    fn config(api_key: &str) -> Config {
        Config::from_vars(Some(api_key.to_owned()), None).expect("config must build")
    }

    #[tokio::test]
    async fn blank_api_key_fails_without_a_provider_call() {
        let gateway = WeatherGateway::new(config("  "), Arc::new(PanickingProvider));

        let err = gateway.current_weather(Some("Kyiv")).await.unwrap_err();

        assert!(matches!(err, GatewayError::MissingApiKey));
    }

    #[tokio::test]
    async fn missing_city_fails_without_a_provider_call() {
        let gateway = WeatherGateway::new(config("KEY"), Arc::new(PanickingProvider));

        let err = gateway.current_weather(None).await.unwrap_err();

        assert!(matches!(err, GatewayError::MissingCity));
    }

    #[tokio::test]
    async fn valid_input_reaches_the_provider_trimmed() {
        let gateway = WeatherGateway::new(config("KEY"), Arc::new(EchoProvider));

        let report = gateway.current_weather(Some("  Kyiv ")).await.expect("lookup must succeed");

        assert_eq!(report.city, "Kyiv");
        assert_eq!(report.temperature, Some(12.0));
    }
}
