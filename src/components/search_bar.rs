use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;

/// Rows the search bar occupies (border + input + border)
pub const SEARCH_BAR_HEIGHT: u16 = 3;

const PLACEHOLDER: &str = "Enter city name...";
const BUTTON_WIDTH: u16 = 10;

/// Always-visible city search form: text input plus a "Search" button label.
pub struct SearchBar {
    input: TextInput,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    pub is_focused: bool,
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Borderless input styling shared by event handling and rendering.
fn input_props<'a>(props: &SearchBarProps<'a>) -> TextInputProps<'a, Action> {
    TextInputProps {
        value: props.query,
        placeholder: PLACEHOLDER,
        is_focused: props.is_focused,
        style: TextInputStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::xy(1, 0),
                bg: None,
                fg: None,
            },
            placeholder_style: None,
            cursor_style: None,
        },
        on_change: props.on_change,
        on_submit: props.on_submit,
        on_cursor_move: Some(|_| Action::Render),
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        if key.code == KeyCode::Esc {
            return vec![Action::UiBlurSearch];
        }

        self.input
            .handle_event(event, input_props(&props))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border_color = if props.is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(Line::from(vec![
                Span::styled(" Weather App ", Style::default().fg(Color::White).bold()),
                Span::styled(
                    "Get current weather for any city ",
                    Style::default().fg(Color::Gray),
                ),
            ]));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::horizontal([
            Constraint::Min(1),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(inner);

        self.input.render(frame, chunks[0], input_props(&props));

        let button_style = if props.is_focused {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Cyan).bold()
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(" Search ", button_style)).centered()),
            chunks[1],
        );
    }
}
