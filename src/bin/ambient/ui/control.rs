//! Sound control widget - icon, state, master level and audio stats

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::View;

/// Audio statistics for display
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    /// Compute audio stats from a buffer
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

/// Border colour for the enable hint, from dim grey up to amber.
fn glow_color(glow: f32) -> Color {
    let g = glow.clamp(0.0, 1.0);
    let lerp = |from: f32, to: f32| (from + (to - from) * g) as u8;
    Color::Rgb(lerp(90.0, 255.0), lerp(90.0, 191.0), lerp(90.0, 0.0))
}

/// Render the sound control
pub fn render_control(frame: &mut Frame, area: Rect, view: &View) {
    let border = match view.glow {
        Some(glow) => Style::default()
            .fg(glow_color(glow))
            .add_modifier(Modifier::BOLD),
        None => Style::default(),
    };
    let block = Block::default()
        .title(" ambient ")
        .borders(Borders::ALL)
        .border_style(border);

    let indicator = view.indicator;
    let state_color = if indicator.playing {
        Color::Green
    } else {
        Color::Yellow
    };

    let mut status = vec![
        Span::styled(
            format!(" {}  {}  ", indicator.icon.glyph(), indicator.label()),
            Style::default().fg(state_color),
        ),
        Span::styled(
            match view.master_target {
                Some(level) => format!("Master: {level:.3}  "),
                None => "Master: -  ".to_string(),
            },
            Style::default().fg(Color::Cyan),
        ),
    ];
    if let Some(sample_rate) = view.sample_rate {
        status.push(Span::styled(
            format!("{:.1}kHz  ", sample_rate / 1000.0),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let stats = AudioStats::from_buffer(view.audio);
    status.push(Span::styled(
        format!("Peak: {:.3}  RMS: {:.3}", stats.peak, stats.rms),
        Style::default().fg(Color::Magenta),
    ));

    let detail = match (view.error, view.awaiting_gesture) {
        (Some(err), _) => Line::from(Span::styled(
            format!(" {err} - try again"),
            Style::default().fg(Color::Red),
        )),
        (None, true) => Line::from(Span::styled(
            " Press any key, click or scroll to begin",
            Style::default().fg(Color::DarkGray),
        )),
        (None, false) => Line::default(),
    };

    let paragraph = Paragraph::new(vec![Line::from(status), detail]).block(block);
    frame.render_widget(paragraph, area);
}
