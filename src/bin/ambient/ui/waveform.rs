//! Waveform oscilloscope widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Smallest vertical half-range, so silence does not zoom into noise
const MIN_RANGE: f64 = 0.01;

/// Vertical half-range that fits `audio_buffer` with some headroom.
fn amplitude_range(audio_buffer: &[f32]) -> f64 {
    let peak = audio_buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs())) as f64;
    (peak * 1.2).max(MIN_RANGE)
}

/// Render the waveform oscilloscope
///
/// The ambience sits far below full scale, so the chart scales to the
/// buffer's peak instead of ±1.
pub fn render_waveform(frame: &mut Frame, area: Rect, audio_buffer: &[f32]) {
    let range = amplitude_range(audio_buffer);
    let block = Block::default()
        .title(format!(" Waveform ±{range:.3} "))
        .borders(Borders::ALL);

    // Downsample to roughly two points per column
    let target = (area.width.max(1) as usize) * 2;
    let step = audio_buffer.len().div_ceil(target).max(1);
    let data: Vec<(f64, f64)> = audio_buffer
        .iter()
        .enumerate()
        .step_by(step)
        .map(|(i, &sample)| {
            let x = i as f64 / audio_buffer.len() as f64;
            (x, sample as f64)
        })
        .collect();

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-range, range])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
