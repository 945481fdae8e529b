//! Pre-rendered noise tables.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/*
Looped Noise Buffer
===================

The texture layer of the ambience is white noise, but it is not generated on
the audio thread. A fixed-length table of independent uniform samples is
rendered once when the graph is built and then played back in a loop.

    samples[i] = uniform(-1.0, +1.0) × amplitude

A two second table at 48 kHz is long enough that the repetition is not
perceptible once the low-pass filter has smeared it into a soft hiss.

The RNG is a seeded PCG32, so the same seed always yields the same table.
*/

pub struct NoiseBuffer {
    samples: Vec<f32>,
}

impl NoiseBuffer {
    /// `len` uniform samples in `[-amplitude, amplitude]`. Never empty.
    pub fn uniform(len: usize, amplitude: f32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let samples = (0..len.max(1))
            .map(|_| rng.gen_range(-1.0f32..=1.0) * amplitude)
            .collect();

        Self { samples }
    }

    pub fn from_duration(duration_secs: f32, sample_rate: f32, amplitude: f32, seed: u64) -> Self {
        let len = (duration_secs * sample_rate).round() as usize;
        Self::uniform(len, amplitude, seed)
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
    }
}
