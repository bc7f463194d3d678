//! Render snapshot tests using RenderHarness
//!
//! FRAMEWORK PATTERN: RenderHarness
//! - Create harness with terminal dimensions
//! - Render component to test buffer
//! - Convert to string for assertions

use owm_lookup::{
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    state::{AppState, Condition, Readings, Sys, WeatherResult, Wind},
};
use tui_dispatch::{testing::*, DataResource};

fn render(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = WeatherDisplay;
    render.render_to_string_plain(|frame| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

fn loaded(result: WeatherResult) -> AppState {
    AppState {
        city: Some(result.name.clone()),
        weather: DataResource::Loaded(result),
        ..Default::default()
    }
}

fn reykjavik() -> WeatherResult {
    WeatherResult {
        name: "Reykjavik".into(),
        sys: Sys {
            country: "IS".into(),
        },
        weather: vec![Condition {
            main: "Rain".into(),
            description: "light rain".into(),
            icon: "10n".into(),
        }],
        main: Readings {
            temp: -2.5,
            feels_like: -7.6,
            humidity: 93.0,
            pressure: 998.0,
        },
        wind: Wind { speed: 9.5 },
    }
}

#[test]
fn test_render_loaded_panel() {
    let output = render(&loaded(reykjavik()), 80, 30);

    assert!(output.contains("Reykjavik, IS"), "location line:\n{output}");
    assert!(output.contains("Light Rain"), "capitalized description:\n{output}");
    assert!(output.contains("-2°C"), "half rounds up:\n{output}");
    assert!(output.contains("Feels like -8°C"), "feels like:\n{output}");
    assert!(output.contains("93%"), "humidity:\n{output}");
    assert!(output.contains("998 hPa"), "pressure:\n{output}");
    assert!(output.contains("10 m/s"), "wind rounded:\n{output}");
    assert!(output.contains("Condition"), "condition card:\n{output}");
    assert!(
        output.contains("openweathermap.org/img/wn/10n@2x.png"),
        "icon url:\n{output}"
    );
}

#[test]
fn test_render_loading_state() {
    let state = AppState {
        city: Some("Lima".into()),
        weather: DataResource::Loading,
        ..Default::default()
    };

    let output = render(&state, 60, 24);

    assert!(output.contains("Fetching weather data"));
    assert!(!output.contains("°C"), "no results while loading");
}

#[test]
fn test_render_error_state() {
    let state = AppState {
        weather: DataResource::Failed("Weather service responded with HTTP 500".into()),
        ..Default::default()
    };

    let output = render(&state, 60, 20);

    assert!(output.contains("Error:"), "Should show error label");
    assert!(output.contains("HTTP 500"), "Should show error message");
    assert!(output.contains("retry"), "Should show retry hint");
}

#[test]
fn test_render_initial_state() {
    let output = render(&AppState::default(), 60, 20);

    assert!(
        output.contains("to search for a city"),
        "Should show search prompt:\n{output}"
    );
}

#[test]
fn test_render_help_bar() {
    let output = render(&AppState::default(), 80, 24);

    assert!(output.contains("search"), "Should show search hint");
    assert!(output.contains("refresh"), "Should show refresh hint");
    assert!(output.contains("quit"), "Should show quit hint");
}

#[test]
fn test_render_help_bar_while_typing() {
    let state = AppState {
        search_focused: true,
        ..Default::default()
    };

    let output = render(&state, 80, 24);

    assert!(output.contains("cancel"), "Should show cancel hint");
    assert!(!output.contains("quit"), "Quit is unavailable while typing");
}

#[test]
fn test_render_without_conditions() {
    let mut result = reykjavik();
    result.weather.clear();
    result.sys.country.clear();

    let output = render(&loaded(result), 80, 30);

    assert!(output.contains("Reykjavik"));
    assert!(output.contains("-2°C"));
}
