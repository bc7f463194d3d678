//! Actions - intents from the UI and results from async fetches

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherResult;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Query category =====
    /// Search bar text changed
    QueryChange(String),

    /// Search submitted (trimmed in the reducer; blank is a no-op)
    QuerySubmit(String),

    // ===== Weather category =====
    /// Intent: look up the last submitted city again
    WeatherFetch,

    /// Result: lookup for `request_id` succeeded
    WeatherDidLoad {
        request_id: u64,
        result: WeatherResult,
    },

    /// Result: lookup for `request_id` failed
    WeatherDidError { request_id: u64, message: String },

    // ===== UI category =====
    /// Move keyboard focus into the search bar
    UiFocusSearch,

    /// Leave the search bar without submitting
    UiBlurSearch,

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Periodic tick for loading animation
    Tick,

    /// Exit the application
    Quit,
}

impl Action {
    /// First action the app dispatches: look up the startup city.
    pub fn startup(city: impl Into<String>) -> Self {
        Action::QuerySubmit(city.into())
    }
}
