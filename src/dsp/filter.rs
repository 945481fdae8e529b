use std::f32::consts::{FRAC_1_SQRT_2, PI};

/*
Topology-Preserving State-Variable Low-Pass
===========================================

Two trapezoidal integrators in a loop. Per sample:

    h  = 1 / (1 + g·(g + k))
    v3 = x - ic2
    v1 = h·(ic1 + g·v3)          band-pass
    v2 = ic2 + g·v1              low-pass
    ic1 = 2·v1 - ic1
    ic2 = 2·v2 - ic2

with g = tan(π·fc / fs) (pre-warped cutoff) and k = 1/Q (damping).
Q = 1/√2 gives the maximally flat (Butterworth) response, 12 dB/octave above
the cutoff. That is what softens the noise texture into a hiss.
*/

pub struct SVFilter {
    ic1eq: f32, // First integrator's memory
    ic2eq: f32, // Second integrator's memory

    pub cutoff_hz: f32,
    pub q: f32,
}

impl SVFilter {
    pub fn lowpass(cutoff_hz: f32) -> Self {
        Self {
            ic1eq: 0.0,
            ic2eq: 0.0,
            cutoff_hz,
            q: FRAC_1_SQRT_2,
        }
    }

    #[inline]
    fn compute_g(&self, sample_rate: f32) -> f32 {
        // Keep the pre-warp away from tan's pole at Nyquist
        let cutoff = self.cutoff_hz.clamp(1.0, sample_rate * 0.49);
        (PI * cutoff / sample_rate).tan()
    }

    #[inline]
    pub fn next_sample(&mut self, sample: f32, k: f32, g: f32) -> f32 {
        let h = 1.0 / (1.0 + g * (g + k));
        let v3 = sample - self.ic2eq;
        let v1 = h * (self.ic1eq + g * v3);
        let v2 = self.ic2eq + g * v1;

        self.ic1eq = 2.0 * v1 - self.ic1eq;
        self.ic2eq = 2.0 * v2 - self.ic2eq;

        v2
    }

    pub fn render(&mut self, buffer: &mut [f32], sample_rate: f32) {
        let g = self.compute_g(sample_rate);
        let k = 1.0 / self.q.max(0.05);

        for sample in buffer.iter_mut() {
            *sample = self.next_sample(*sample, k, g);
        }
    }

    pub fn reset(&mut self) {
        self.ic1eq = 0.0;
        self.ic2eq = 0.0;
    }

    pub fn set_cutoff(&mut self, cutoff: f32) {
        self.cutoff_hz = cutoff;
    }

    pub fn set_q(&mut self, q: f32) {
        self.q = q;
    }
}
