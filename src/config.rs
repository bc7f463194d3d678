//! Endpoint constants and client configuration

use std::time::Duration;

/// OpenWeatherMap API root (current weather lives at `{base}/weather`)
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// City looked up on startup when none is given
pub const DEFAULT_CITY: &str = "nairobi";

/// Unit system sent with every request
pub const UNITS: &str = "metric";

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Everything the API client needs to build a request
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Current-weather URL for `city`: `{base}/weather?q=..&appid=..&units=metric`
    pub fn weather_url(&self, city: &str) -> String {
        format!(
            "{}/weather?q={}&appid={}&units={}",
            self.base_url,
            urlencoding::encode(city),
            urlencoding::encode(&self.api_key),
            UNITS
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, "")
    }
}

/// Image URL for an OpenWeather icon id (e.g. `04d`)
pub fn icon_url(icon: &str) -> String {
    format!("{ICON_BASE_URL}/{icon}@2x.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_url_shape() {
        let config = ClientConfig::new(DEFAULT_BASE_URL, "secret");
        assert_eq!(
            config.weather_url("Nairobi"),
            "https://api.openweathermap.org/data/2.5/weather?q=Nairobi&appid=secret&units=metric"
        );
    }

    #[test]
    fn test_weather_url_encodes_city() {
        let config = ClientConfig::new("http://localhost:9000/", "k");
        assert_eq!(
            config.weather_url("New York"),
            "http://localhost:9000/weather?q=New%20York&appid=k&units=metric"
        );
    }

    #[test]
    fn test_icon_url() {
        assert_eq!(
            icon_url("10d"),
            "https://openweathermap.org/img/wn/10d@2x.png"
        );
    }

    #[test]
    fn test_missing_api_key() {
        assert!(!ClientConfig::default().has_api_key());
        assert!(ClientConfig::new(DEFAULT_BASE_URL, "abc").has_api_key());
    }
}
