use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_dispatch::DataResource;

use super::location_header::HEADER_OVERHEAD;
use super::{Component, LocationHeader, LocationHeaderProps, ERROR_ICON};
use crate::action::Action;
use crate::icons;
use crate::state::{
    capitalize_words, format_temperature, format_wind, AppState, WeatherResult,
};

/// Everything below the search bar: an exhaustive match on the lookup state.
pub struct WeatherPanel;

pub struct WeatherPanelProps<'a> {
    pub state: &'a AppState,
}

const HEADER_CAP: u16 = 6 + HEADER_OVERHEAD;
const CARD_HEIGHT: u16 = 4;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_TICKS_PER_FRAME: u32 = 6;

impl Component<Action> for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        match &state.weather {
            DataResource::Loaded(result) => render_loaded(frame, area, state, result),
            DataResource::Loading => render_loading(frame, area, state),
            DataResource::Failed(error) => render_error(frame, area, error),
            DataResource::Empty => render_idle(frame, area, state),
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, subtitle: Option<&str>) {
    let mut header = LocationHeader;
    header.render(
        frame,
        area,
        LocationHeaderProps {
            title: state.header_title(),
            subtitle,
            temperature: state.weather.data().map(|w| w.main.temp),
            is_animating: state.loading_anim_active(),
            tick_count: state.tick_count,
        },
    );
}

fn render_loaded(frame: &mut Frame, area: Rect, state: &AppState, result: &WeatherResult) {
    let chunks = Layout::vertical([
        Constraint::Max(HEADER_CAP),
        Constraint::Length(1), // blank
        Constraint::Length(1), // icon + description
        Constraint::Length(1), // temperature
        Constraint::Length(1), // feels like
        Constraint::Length(1), // blank
        Constraint::Length(CARD_HEIGHT),
        Constraint::Length(1), // icon url
    ])
    .flex(Flex::Center)
    .split(area);

    let location = result.display_location();
    render_header(frame, chunks[0], state, Some(&location));

    let condition = result.primary_condition();
    let description = condition
        .map(|c| capitalize_words(&c.description))
        .unwrap_or_default();
    let emoji = icons::icon_emoji(condition.map(|c| c.icon.as_str()).unwrap_or(""));
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::raw(format!("{emoji} ")),
                Span::styled(description, Style::default().fg(Color::Gray)),
            ])
            .centered(),
        ),
        chunks[2],
    );

    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                format_temperature(result.main.temp),
                Style::default().fg(temperature_color(result.main.temp)).bold(),
            ))
            .centered(),
        ),
        chunks[3],
    );

    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                format!("Feels like {}", format_temperature(result.main.feels_like)),
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        ),
        chunks[4],
    );

    let condition_main = condition.map(|c| c.main.clone()).unwrap_or_default();
    let cards = [
        ("Humidity", format!("{}%", result.main.humidity), Color::Blue),
        (
            "Pressure",
            format!("{} hPa", result.main.pressure),
            Color::Magenta,
        ),
        ("Wind Speed", format_wind(result.wind.speed), Color::Green),
        ("Condition", condition_main, Color::Yellow),
    ];
    let card_areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(chunks[6]);
    for ((label, value, color), card_area) in cards.into_iter().zip(card_areas.iter()) {
        render_card(frame, *card_area, label, value, color);
    }

    if let Some(url) = result.icon_url() {
        frame.render_widget(
            Paragraph::new(
                Line::from(Span::styled(url, Style::default().fg(Color::DarkGray))).centered(),
            ),
            chunks[7],
        );
    }
}

fn render_card(frame: &mut Frame, area: Rect, label: &str, value: String, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(value, Style::default().fg(color).bold())).centered(),
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(Color::Gray),
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = placeholder_layout(area);
    render_header(frame, chunks[0], state, None);

    let spinner = spinner_frame(state.tick_count);
    let line = Line::from(vec![
        Span::styled(format!("{spinner} "), Style::default().fg(Color::Cyan)),
        Span::styled("Fetching weather data", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(line), chunks[2]);
}

fn render_idle(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = placeholder_layout(area);
    render_header(frame, chunks[0], state, None);

    let hint = Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("/", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" to search for a city", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), chunks[2]);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // blank
        Constraint::Length(1), // icon
        Constraint::Length(1), // "Error:"
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(ERROR_ICON).centered()),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled("Error:", Style::default().fg(Color::Red).bold())).centered(),
        ),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            ))
            .centered(),
        ),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("/", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to search again or ", Style::default().fg(Color::DarkGray)),
                Span::styled("r", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[5],
    );
}

fn placeholder_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::vertical([
        Constraint::Max(HEADER_CAP),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .split(area)
}

fn spinner_frame(tick_count: u32) -> &'static str {
    let index = (tick_count / SPINNER_TICKS_PER_FRAME) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[index]
}

fn temperature_color(celsius: f64) -> Color {
    match celsius {
        t if t < 0.0 => Color::Rgb(150, 200, 255),
        t if t < 15.0 => Color::Rgb(100, 180, 255),
        t if t < 25.0 => Color::Rgb(100, 200, 150),
        t if t < 35.0 => Color::Rgb(255, 180, 80),
        _ => Color::Rgb(255, 80, 70),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_advances_every_few_ticks() {
        assert_eq!(spinner_frame(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(SPINNER_TICKS_PER_FRAME - 1), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(SPINNER_TICKS_PER_FRAME), SPINNER_FRAMES[1]);
        assert_eq!(
            spinner_frame(SPINNER_TICKS_PER_FRAME * SPINNER_FRAMES.len() as u32),
            SPINNER_FRAMES[0]
        );
    }

    #[test]
    fn test_temperature_color_bands() {
        assert_eq!(temperature_color(-5.0), Color::Rgb(150, 200, 255));
        assert_eq!(temperature_color(21.6), Color::Rgb(100, 200, 150));
        assert_eq!(temperature_color(40.0), Color::Rgb(255, 80, 70));
    }
}
