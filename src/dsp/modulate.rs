//! Parameter modulation primitives.

/*
Parameter Modulation
====================

Modulation is using one signal to continuously vary a parameter of another.
The ambience uses exactly one route: a slow LFO pushing the deep drone's
frequency up and down so the tone never sits perfectly still.

    modulated_value = base_value + (modulator × depth)

With base = 60 Hz, depth = 5 Hz and a sine LFO swinging -1.0 … +1.0:

    LFO = -1.0  →  55 Hz
    LFO =  0.0  →  60 Hz
    LFO = +1.0  →  65 Hz


Control-Rate Modulation
-----------------------

Recomputing the target parameter every sample is wasteful, and recomputing it
once per audio block (up to 2048 samples) lets the LFO move in audible steps
when the block is large. We split every block into short control intervals
and hand the target one averaged modulator value per interval.

For a 0.1 Hz LFO with 32-sample intervals at 48 kHz there are 15,000 updates
per LFO cycle; the largest step on a ±5 Hz sweep is about 0.002 Hz.

Averaging keeps the modulator inside its own range: the mean of values in
[-1, +1] is in [-1, +1], so the modulated parameter never leaves
base ± depth.
*/

/// Modulated value: base + (modulator × depth)
#[inline]
pub fn apply_modulation(base_value: f32, modulator: f32, depth: f32) -> f32 {
    base_value + (modulator * depth)
}

/// One value standing in for a run of modulator samples.
#[inline]
pub fn block_average(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f32>() / samples.len() as f32
}
