//! TUI module for ambient
//!
//! Sound control on top, live waveform and spectrum of the output below.

mod control;
pub mod spectrum;
mod waveform;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use ambient_drone::control::Indicator;

use control::render_control;
use spectrum::render_spectrum;
use waveform::render_waveform;

/// Everything one frame needs to draw.
pub struct View<'a> {
    pub indicator: Indicator,
    /// Enable-hint glow in [0, 1]
    pub glow: Option<f32>,
    pub master_target: Option<f32>,
    pub sample_rate: Option<f32>,
    pub awaiting_gesture: bool,
    pub error: Option<&'a str>,
    pub audio: &'a [f32],
    pub spectrum: Option<&'a [(f64, f64)]>,
}

/// Draw the UI and return the area of the sound control.
pub fn render(frame: &mut Frame, view: &View) -> Rect {
    let area = frame.area();

    // Main layout: control, scopes, help
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Sound control
            Constraint::Min(8),    // Waveform + spectrum
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    let scopes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_control(frame, chunks[0], view);
    render_waveform(frame, scopes[0], view.audio);
    render_spectrum(frame, scopes[1], view.spectrum.unwrap_or(&[]));

    let help = Paragraph::new(" [M] / click control: Sound on/off  [Q] Quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);

    chunks[0]
}
