use serde::Serialize;

use crate::error::GatewayError;

/// Validated input for one weather lookup.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub city: String,
    pub api_key: String,
}

impl WeatherQuery {
    /// Validate raw request inputs; first failure wins.
    ///
    /// The API key is checked before the city, so a misconfigured server
    /// reports the configuration error even when the request itself is bad.
    pub fn new(city: Option<&str>, api_key: &str) -> Result<Self, GatewayError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(GatewayError::MissingApiKey);
        }

        let city = city.unwrap_or_default().trim();
        if city.is_empty() {
            return Err(GatewayError::MissingCity);
        }

        Ok(Self { city: city.to_owned(), api_key: api_key.to_owned() })
    }
}

/// Normalized weather document returned to callers.
///
/// Numeric fields are optional because the provider may omit them; an absent
/// value serializes as JSON `null`, never as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub city: String,
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<u8>,
    pub wind_speed: Option<f64>,
    pub description: String,

    /// Provider-hosted icon image URL; always populated.
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key_wins_over_missing_city() {
        let err = WeatherQuery::new(None, "   ").unwrap_err();
        assert!(matches!(err, GatewayError::MissingApiKey));
    }

    #[test]
    fn missing_city_is_rejected() {
        let err = WeatherQuery::new(None, "KEY").unwrap_err();
        assert!(matches!(err, GatewayError::MissingCity));
    }

    #[test]
    fn whitespace_city_is_rejected() {
        let err = WeatherQuery::new(Some("   "), "KEY").unwrap_err();
        assert!(matches!(err, GatewayError::MissingCity));
    }

    #[test]
    fn inputs_are_trimmed() {
        let query = WeatherQuery::new(Some("  Kyiv  "), " KEY ").expect("query must validate");

        assert_eq!(query.city, "Kyiv");
        assert_eq!(query.api_key, "KEY");
    }

    #[test]
    fn report_serializes_absent_numerics_as_null() {
        let report = WeatherReport {
            city: "Kyiv".into(),
            temperature: None,
            feels_like: None,
            humidity: None,
            wind_speed: None,
            description: String::new(),
            icon: "https://openweathermap.org/img/wn/01d.png".into(),
        };

        let value = serde_json::to_value(&report).expect("report must serialize");

        assert!(value["temperature"].is_null());
        assert!(value["humidity"].is_null());
        assert_eq!(value["description"], "");

        let obj = value.as_object().expect("report is an object");
        assert_eq!(obj.len(), 7);
        for key in ["city", "temperature", "feels_like", "humidity", "wind_speed", "description", "icon"] {
            assert!(obj.contains_key(key), "missing field {key}");
        }
    }
}
