//! Effects - side effects declared by the reducer

use tracing::warn;

use crate::action::Action;
use crate::api::WeatherClient;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current weather for `city`, tagged with the request generation
    FetchWeather { request_id: u64, city: String },
}

/// Run a fetch and turn the outcome into the action that completes it.
///
/// The result keeps the `request_id` it was issued with so the reducer can
/// drop it if a newer lookup has started since.
pub async fn resolve_fetch(client: &WeatherClient, request_id: u64, city: &str) -> Action {
    match client.fetch_current(city).await {
        Ok(result) => Action::WeatherDidLoad { request_id, result },
        Err(e) => {
            warn!(city, request_id, error = %e, "weather lookup failed");
            Action::WeatherDidError {
                request_id,
                message: e.user_message(),
            }
        }
    }
}
