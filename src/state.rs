//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::config::{self, DEFAULT_CITY};

/// Current conditions as returned by OpenWeatherMap's `/weather` endpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherResult {
    pub name: String,
    #[serde(default)]
    pub sys: Sys,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub main: Readings,
    pub wind: Wind,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Sys {
    #[serde(default)]
    pub country: String,
}

/// Weather condition (`weather[n]` in the response)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Condition {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Readings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Wind {
    pub speed: f64,
}

impl WeatherResult {
    /// The first listed condition, which the provider treats as primary
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }

    /// "Nairobi, KE" (or just the name when the country is unknown)
    pub fn display_location(&self) -> String {
        if self.sys.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.sys.country)
        }
    }

    pub fn icon_url(&self) -> Option<String> {
        self.primary_condition()
            .filter(|c| !c.icon.is_empty())
            .map(|c| config::icon_url(&c.icon))
    }
}

/// Round half up to the nearest whole number, for display only.
pub fn round_display(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

pub fn format_temperature(celsius: f64) -> String {
    format!("{}°C", round_display(celsius))
}

pub fn format_wind(speed: f64) -> String {
    format!("{} m/s", round_display(speed))
}

/// Title-case every word ("broken clouds" -> "Broken Clouds")
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Animation timing for the header gradient seam and spinner.
pub const LOADING_ANIM_TICK_MS: u64 = 15;
pub const LOADING_ANIM_CYCLE_TICKS: u32 = 60;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Text currently in the search bar
    #[debug(section = "Search", label = "Query")]
    pub query: String,

    /// Last submitted (trimmed) city
    #[debug(section = "Search", label = "City", debug_fmt)]
    pub city: Option<String>,

    /// Whether the search bar has keyboard focus
    #[debug(section = "Search", label = "Focused")]
    pub search_focused: bool,

    /// Lookup lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Weather", label = "Data", debug_fmt)]
    pub weather: DataResource<WeatherResult>,

    /// Generation of the latest submitted request; older completions are dropped
    #[debug(section = "Weather", label = "Request")]
    pub request_id: u64,

    #[debug(skip)]
    pub tick_count: u32,

    /// Remaining ticks to finish the current animation cycle after loading
    #[debug(skip)]
    pub loading_anim_ticks_remaining: u32,
}

impl AppState {
    /// Create state with the search bar pre-filled with `query`
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            city: None,
            search_focused: false,
            weather: DataResource::Empty,
            request_id: 0,
            tick_count: 0,
            loading_anim_ticks_remaining: 0,
        }
    }

    /// City a refresh should look up: the last submission, else the query
    pub fn refresh_target(&self) -> Option<String> {
        self.city
            .clone()
            .or_else(|| Some(self.query.trim().to_string()))
            .filter(|city| !city.is_empty())
    }

    /// Name to show in the location header
    pub fn header_title(&self) -> &str {
        match &self.weather {
            DataResource::Loaded(result) => &result.name,
            _ => self.city.as_deref().unwrap_or(self.query.as_str()),
        }
    }

    pub fn loading_anim_active(&self) -> bool {
        self.weather.is_loading() || self.loading_anim_ticks_remaining > 0
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_CITY)
    }
}
