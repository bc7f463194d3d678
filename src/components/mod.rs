pub mod location_header;
pub mod search_bar;
pub mod weather_display;
pub mod weather_panel;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use location_header::{LocationHeader, LocationHeaderProps};
pub use search_bar::{SearchBar, SearchBarProps, SEARCH_BAR_HEIGHT};
pub use weather_display::{WeatherDisplay, WeatherDisplayProps, ERROR_ICON};
pub use weather_panel::{WeatherPanel, WeatherPanelProps};
