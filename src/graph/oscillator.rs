use crate::dsp::oscillator::{OscillatorBlock, Waveform};
use crate::graph::node::{GraphNode, Modulatable, RenderCtx};

/*
Tone Generator
==============

An OscNode is one sustained tone of the ambience. It plays a fixed frequency
forever; there are no notes, no pitch tracking and no envelope of its own.
Loudness is set by a Gain stage after it, so each tone can be balanced
independently before everything meets at the master gain.

The ambience stacks three of them:

  Drone     60 Hz   the harmonic floor, slowly drifting
  Harmonic  90 Hz   a fifth above the drone, quieter
  Ethereal  220 Hz  barely audible shimmer on top

Example usage:
  let drone = OscNode::sine()
      .with_frequency(60.0)
      .modulate(LfoNode::sine(0.1), OscParam::Frequency, 5.0)
      .gain(0.3);
*/

pub struct OscNode {
    osc: OscillatorBlock,
    /// Unmodulated frequency (Hz)
    base_frequency: f32,
    /// Frequency after modulation, what actually gets rendered
    current_frequency: f32,
}

/// Parameters that can be modulated on an oscillator
#[derive(Clone, Copy, Debug)]
pub enum OscParam {
    /// Oscillator frequency in Hz
    Frequency,
}

impl OscNode {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            osc: OscillatorBlock::new(waveform),
            base_frequency: 440.0,
            current_frequency: 440.0,
        }
    }

    pub fn sine() -> Self {
        Self::new(Waveform::Sine)
    }

    pub fn triangle() -> Self {
        Self::new(Waveform::Triangle)
    }

    pub fn with_frequency(mut self, freq: f32) -> Self {
        self.base_frequency = freq;
        self.current_frequency = freq;
        self
    }

    pub fn base_frequency(&self) -> f32 {
        self.base_frequency
    }

    pub fn current_frequency(&self) -> f32 {
        self.current_frequency
    }
}

impl GraphNode for OscNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.osc
            .render(out, self.current_frequency, ctx.sample_rate);
    }
}

impl Modulatable for OscNode {
    type Param = OscParam;

    fn get_param(&self, param: Self::Param) -> f32 {
        match param {
            OscParam::Frequency => self.base_frequency,
        }
    }

    fn apply_modulation(&mut self, param: Self::Param, base: f32, modulation: f32) {
        match param {
            OscParam::Frequency => {
                // Clamp to audible range (20 Hz - 20 kHz)
                self.current_frequency = (base + modulation).clamp(20.0, 20_000.0);
            }
        }
    }
}
