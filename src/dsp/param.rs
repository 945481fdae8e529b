//! Smoothed parameters for click-free gain changes.

use crate::MIN_TIME;

/*
Exponential Approach ("set target at time")
===========================================

Changing a gain instantly produces a step in the waveform, which is heard as a
click. Instead the value chases its target with a one-pole smoother:

    value += (target - value) × coeff
    coeff  = 1 - e^(-1 / (τ · sample_rate))

After τ seconds the value has covered ~63% of the distance, after 5τ it is
within 1%. The curve never overshoots, so a fade to 0.0 lands on silence
without ringing.

    Level
    0.08 ┐─╮
         │  ╲
         │   ╲__
         │      ‾‾──___
    0.0  └──────────────‾‾‾‾──→ time
           τ   2τ   3τ

A time constant at or below one sample jumps straight to the target.
*/

/// Residual distance below which the value snaps onto the target. A step too
/// small to change the value in f32 also snaps.
const SNAP_EPSILON: f32 = 1e-7;

#[derive(Debug, Clone)]
pub struct SmoothedParam {
    value: f32,
    target: f32,
    coeff: f32,
}

impl SmoothedParam {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            target: value,
            coeff: 1.0,
        }
    }

    /// Start approaching `target` with time constant `time_constant` seconds.
    pub fn set_target(&mut self, target: f32, time_constant: f32, sample_rate: f32) {
        self.target = target;

        if time_constant <= MIN_TIME {
            self.value = target;
            self.coeff = 1.0;
        } else {
            self.coeff = 1.0 - (-1.0 / (time_constant * sample_rate)).exp();
        }
    }

    #[inline]
    pub fn next(&mut self) -> f32 {
        let delta = self.target - self.value;
        let next = self.value + delta * self.coeff;
        if next == self.value || delta.abs() < SNAP_EPSILON {
            self.value = self.target;
        } else {
            self.value = next;
        }
        self.value
    }

    /// Multiply `buffer` by the smoothed value, advancing once per sample.
    pub fn apply(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample *= self.next();
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self, tolerance: f32) -> bool {
        (self.target - self.value).abs() <= tolerance
    }
}
