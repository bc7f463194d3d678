use artbox::{
    integrations::ratatui::ArtBox, Alignment as ArtAlignment, Color as ArtColor, Fill,
    LinearGradient, Renderer, fonts,
};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::cmp::Ordering;

use super::Component;
use crate::action::Action;
use crate::state::LOADING_ANIM_CYCLE_TICKS;

/// FIGlet location name with a temperature-tinted gradient.
/// The gradient seam sweeps across the name while a lookup is in flight.
pub struct LocationHeader;

pub struct LocationHeaderProps<'a> {
    pub title: &'a str,
    /// Plain line under the FIGlet name ("Nairobi, KE")
    pub subtitle: Option<&'a str>,
    pub temperature: Option<f64>,
    pub is_animating: bool,
    pub tick_count: u32,
}

/// Overhead inside the header area: 1 spacer + 1 subtitle line.
pub const HEADER_OVERHEAD: u16 = 2;

fn gradient_colors(temp: Option<f64>) -> (ArtColor, ArtColor) {
    match temp {
        Some(t) if t < 0.0 => (
            ArtColor::rgb(150, 200, 255), // Ice blue
            ArtColor::rgb(200, 230, 255),
        ),
        Some(t) if t < 15.0 => (
            ArtColor::rgb(100, 180, 255), // Cool blue
            ArtColor::rgb(150, 220, 200),
        ),
        Some(t) if t < 25.0 => (
            ArtColor::rgb(100, 200, 150), // Green
            ArtColor::rgb(255, 220, 100),
        ),
        Some(t) if t < 35.0 => (
            ArtColor::rgb(255, 180, 80), // Orange
            ArtColor::rgb(255, 120, 80),
        ),
        Some(_) => (
            ArtColor::rgb(255, 100, 80), // Hot
            ArtColor::rgb(255, 60, 60),
        ),
        None => (
            ArtColor::rgb(180, 180, 180), // No data yet
            ArtColor::rgb(220, 220, 220),
        ),
    }
}

fn make_gradient(colors: (ArtColor, ArtColor), angle: f32, phase: f32) -> Fill {
    let phase = phase.rem_euclid(1.0);
    let mid = colors.0.interpolate(colors.1, 0.5);
    let edge = colors.0.interpolate(colors.1, 0.08);
    let base_stops = [
        (0.0, edge),
        (0.35, colors.0),
        (0.5, mid),
        (0.65, colors.1),
        (1.0, edge),
    ];

    let edge_color = sample_color(&base_stops, (1.0 - phase).rem_euclid(1.0));
    let mut shifted = Vec::with_capacity(base_stops.len() + 2);
    shifted.push((0.0, edge_color));
    shifted.push((1.0, edge_color));
    for (pos, color) in base_stops {
        shifted.push(((pos + phase) % 1.0, color));
    }
    shifted.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    let stops = shifted
        .into_iter()
        .map(|(pos, color)| artbox::ColorStop::new(pos, color))
        .collect();

    Fill::Linear(LinearGradient::new(angle, stops))
}

pub(crate) fn animated_phase(tick_count: u32) -> f32 {
    let steps = LOADING_ANIM_CYCLE_TICKS.max(1);
    (tick_count % steps) as f32 / steps as f32
}

fn sample_color(stops: &[(f32, ArtColor)], position: f32) -> ArtColor {
    let pos = position.clamp(0.0, 1.0);
    let mut prev = stops[0];
    for stop in stops.iter() {
        if stop.0 >= pos {
            if (stop.0 - prev.0).abs() < f32::EPSILON {
                return stop.1;
            }
            let t = (pos - prev.0) / (stop.0 - prev.0);
            return prev.1.interpolate(stop.1, t);
        }
        prev = *stop;
    }
    prev.1
}

impl Component<Action> for LocationHeader {
    type Props<'a> = LocationHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // FIGlet name
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Subtitle
        ])
        .split(area);

        let phase = if props.is_animating {
            animated_phase(props.tick_count)
        } else {
            0.0
        };
        let fill = make_gradient(gradient_colors(props.temperature), 5.0, phase);

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(fill);
        frame.render_widget(ArtBox::new(&renderer, props.title), chunks[0]);

        if let Some(subtitle) = props.subtitle {
            let line = Line::from(vec![Span::styled(
                subtitle.to_string(),
                Style::default().fg(Color::Gray),
            )])
            .centered();
            frame.render_widget(Paragraph::new(line), chunks[2]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animated_phase_wraps() {
        assert_eq!(animated_phase(0), 0.0);
        assert_eq!(animated_phase(LOADING_ANIM_CYCLE_TICKS), 0.0);
        assert!(animated_phase(LOADING_ANIM_CYCLE_TICKS / 2) > 0.49);
    }
}
