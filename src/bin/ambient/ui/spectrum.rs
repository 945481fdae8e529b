//! Spectrum analyzer widget
//!
//! FFT-based frequency spectrum with log-spaced bins, plotted on a log
//! frequency axis so the low drone tones get most of the width.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// Number of frequency bins to display
const SPECTRUM_BINS: usize = 64;
/// Lowest displayed frequency (Hz)
const MIN_FREQ: f32 = 20.0;
/// Highest displayed frequency (Hz)
const MAX_FREQ: f32 = 2_000.0;
/// Floor of the magnitude axis (dB)
const FLOOR_DB: f64 = -120.0;

/// Spectrum analyzer with FFT processing
pub struct SpectrumAnalyzer {
    /// Hann window coefficients
    window: Vec<f32>,
    /// log10 of the frequency for each bin
    log_freqs: Vec<f64>,
    /// FFT bin indices corresponding to each frequency
    bin_indices: Vec<usize>,
    fft: Arc<dyn Fft<f32>>,
    /// Scratch buffer for FFT computation
    scratch: Vec<Complex<f32>>,
    /// Current spectrum data: (log10 frequency, magnitude_db)
    spectrum: Vec<(f64, f64)>,
}

impl SpectrumAnalyzer {
    /// `buffer_len` is the FFT size and must match the buffers passed to
    /// [`update`](Self::update).
    pub fn new(buffer_len: usize, sample_rate: f32) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(buffer_len);

        // Hann window - reduces spectral leakage
        let window: Vec<f32> = (0..buffer_len)
            .map(|i| {
                if buffer_len > 1 {
                    let denom = (buffer_len - 1) as f32;
                    0.5 * (1.0 - (2.0 * std::f32::consts::PI * i as f32 / denom).cos())
                } else {
                    1.0
                }
            })
            .collect();

        // Log-spaced frequency bins
        let max_freq = (sample_rate / 2.0).min(MAX_FREQ).max(1.0);
        let min_freq = MIN_FREQ.min(max_freq);
        let ratio = (max_freq / min_freq) as f64;
        let half = buffer_len.saturating_div(2).max(1);

        let mut log_freqs = Vec::with_capacity(SPECTRUM_BINS);
        let mut bin_indices = Vec::with_capacity(SPECTRUM_BINS);
        for i in 0..SPECTRUM_BINS {
            let t = i as f64 / (SPECTRUM_BINS - 1) as f64;
            let freq = min_freq as f64 * ratio.powf(t);
            let index = ((freq * buffer_len as f64 / sample_rate as f64).round() as usize)
                .min(half - 1);
            log_freqs.push(freq.log10());
            bin_indices.push(index);
        }

        let scratch = vec![Complex::new(0.0, 0.0); buffer_len];
        let spectrum = log_freqs.iter().map(|&f| (f, FLOOR_DB)).collect();

        Self {
            window,
            log_freqs,
            bin_indices,
            fft,
            scratch,
            spectrum,
        }
    }

    /// Update the spectrum from new audio samples. Ignores buffers of the
    /// wrong length.
    pub fn update(&mut self, buffer: &[f32]) {
        if buffer.len() != self.window.len() {
            return;
        }

        // Apply window and prepare for FFT
        for (i, sample) in buffer.iter().enumerate() {
            self.scratch[i].re = *sample * self.window[i];
            self.scratch[i].im = 0.0;
        }

        self.fft.process(&mut self.scratch);

        // Extract magnitudes at log-spaced frequencies
        for ((point, &index), &log_freq) in self
            .spectrum
            .iter_mut()
            .zip(&self.bin_indices)
            .zip(&self.log_freqs)
        {
            let bin = self.scratch[index];
            let power = (bin.re * bin.re + bin.im * bin.im).max(1e-12);
            *point = (log_freq, (10.0 * (power as f64).log10()).max(FLOOR_DB));
        }
    }

    /// Get the current spectrum data
    pub fn data(&self) -> &[(f64, f64)] {
        &self.spectrum
    }
}

/// Render the spectrum analyzer widget
pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &[(f64, f64)]) {
    let block = Block::default()
        .title(" Spectrum ")
        .borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(spectrum);

    let max_db = spectrum
        .iter()
        .map(|(_, db)| *db)
        .fold(-100.0, f64::max);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([(MIN_FREQ as f64).log10(), (MAX_FREQ as f64).log10()])
                .labels(vec!["20", "200", "2k"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([FLOOR_DB, max_db.max(0.0) + 10.0])
                .labels(vec!["-120", "-60", "0"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 48_000.0;
    const LEN: usize = 4096;

    #[test]
    fn sine_peaks_near_its_frequency() {
        let mut analyzer = SpectrumAnalyzer::new(LEN, SAMPLE_RATE);
        let buffer: Vec<f32> = (0..LEN)
            .map(|i| (std::f32::consts::TAU * 220.0 * i as f32 / SAMPLE_RATE).sin())
            .collect();

        analyzer.update(&buffer);

        let (peak_log_freq, _) = analyzer
            .data()
            .iter()
            .copied()
            .fold((0.0, f64::MIN), |best, p| if p.1 > best.1 { p } else { best });
        let peak_freq = 10f64.powf(peak_log_freq);
        assert!((180.0..270.0).contains(&peak_freq), "peak at {peak_freq} Hz");
    }

    #[test]
    fn wrong_length_is_ignored() {
        let mut analyzer = SpectrumAnalyzer::new(LEN, SAMPLE_RATE);
        analyzer.update(&[1.0; 16]);
        assert!(analyzer.data().iter().all(|&(_, db)| db == FLOOR_DB));
    }
}
