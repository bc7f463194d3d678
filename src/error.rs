//! Fetch error taxonomy

/// Fallback shown when a failure carries no message of its own
pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch weather data";

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Invalid API key. Please check your OpenWeather API key.")]
    InvalidApiKey,
    #[error("City {0}, not found. Please check your spelling")]
    CityNotFound(String),
    #[error("Weather service responded with HTTP {0}")]
    Status(u16),
    #[error("{0}")]
    Request(String),
    #[error("{0}")]
    Parse(String),
}

impl FetchError {
    /// Classify a non-success HTTP status for a lookup of `city`.
    pub fn from_status(status: u16, city: &str) -> Self {
        match status {
            401 => FetchError::InvalidApiKey,
            404 => FetchError::CityNotFound(city.to_string()),
            other => FetchError::Status(other),
        }
    }

    /// Text for the error panel.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FETCH_ERROR.to_string()
        } else {
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_message() {
        assert_eq!(
            FetchError::from_status(401, "Paris").user_message(),
            "Invalid API key. Please check your OpenWeather API key."
        );
    }

    #[test]
    fn test_not_found_includes_city() {
        assert_eq!(
            FetchError::from_status(404, "Atlantis").user_message(),
            "City Atlantis, not found. Please check your spelling"
        );
    }

    #[test]
    fn test_other_status_is_an_error() {
        let err = FetchError::from_status(503, "Oslo");
        assert_eq!(err, FetchError::Status(503));
        assert_eq!(
            err.user_message(),
            "Weather service responded with HTTP 503"
        );
    }

    #[test]
    fn test_empty_message_falls_back() {
        assert_eq!(
            FetchError::Request(String::new()).user_message(),
            GENERIC_FETCH_ERROR
        );
        assert_eq!(
            FetchError::Parse("missing field `main`".into()).user_message(),
            "missing field `main`"
        );
    }
}
