//! OpenWeatherMap current-weather client

use std::error::Error as _;

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::state::WeatherResult;

/// Thin wrapper around a shared reqwest client and the endpoint config.
#[derive(Clone, Debug)]
pub struct WeatherClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl WeatherClient {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(request_error)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch current weather for `city` in metric units.
    ///
    /// Any non-2xx status is an error; 401 and 404 get dedicated variants.
    pub async fn fetch_current(&self, city: &str) -> Result<WeatherResult, FetchError> {
        let url = self.config.weather_url(city);
        debug!(city, base_url = %self.config.base_url, "requesting current weather");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(city, status = status.as_u16(), "weather lookup rejected");
            return Err(FetchError::from_status(status.as_u16(), city));
        }

        let result: WeatherResult = response.json().await.map_err(request_error)?;

        debug!(city, name = %result.name, temp = result.main.temp, "weather loaded");
        Ok(result)
    }
}

/// The request URL carries `appid`, so it is stripped before the error is
/// shown or logged.
fn request_error(e: reqwest::Error) -> FetchError {
    let e = e.without_url();
    if e.is_decode() {
        let detail = e.source().map(|source| source.to_string());
        return FetchError::Parse(detail.unwrap_or_else(|| e.to_string()));
    }
    FetchError::Request(e.to_string())
}
