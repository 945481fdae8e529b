use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Phase-Accumulating Oscillator
=============================

Every periodic source in the ambience (the drone, its harmonic, the ethereal
tone and the drift LFO) is the same piece of math: a phase that walks from 0.0
to 1.0 once per cycle, mapped through a waveform function.

    increment = frequency / sample_rate      (cycles per sample)
    phase     = (phase + increment) mod 1.0
    sample    = waveform(phase)

The phase is kept in f64. A 0.1 Hz LFO at 48 kHz advances by ~2e-6 per sample,
which is close enough to f32 epsilon around 0.5 that the drift rate would be
audibly wrong after a few minutes.

Waveforms
---------

  Sine      sin(2π·phase)             pure tone, no overtones
  Triangle  4·|phase - 0.5| - 1       odd harmonics falling off as 1/n²

Both are bipolar: output stays inside [-1.0, +1.0].
*/

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    #[default]
    Sine,
    Triangle,
}

pub struct OscillatorBlock {
    waveform: Waveform,
    phase: f64,
}

impl OscillatorBlock {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            waveform,
            phase: 0.0,
        }
    }

    pub fn sine() -> Self {
        Self::new(Waveform::Sine)
    }

    pub fn triangle() -> Self {
        Self::new(Waveform::Triangle)
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    #[inline]
    fn sample(&self) -> f32 {
        match self.waveform {
            Waveform::Sine => (TAU * self.phase).sin() as f32,
            Waveform::Triangle => (4.0 * (self.phase - 0.5).abs() - 1.0) as f32,
        }
    }

    /// Fill `out` with `frequency` Hz, continuing from the current phase.
    pub fn render(&mut self, out: &mut [f32], frequency: f32, sample_rate: f32) {
        let increment = frequency as f64 / sample_rate as f64;

        for sample in out.iter_mut() {
            *sample = self.sample();
            self.phase += increment;
            if self.phase >= 1.0 {
                self.phase -= self.phase.floor();
            }
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}
