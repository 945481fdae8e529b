use crate::{
    dsp::oscillator::OscillatorBlock,
    graph::node::{GraphNode, RenderCtx},
};

/*
LFO (Low Frequency Oscillator)
==============================

An LFO is an oscillator that runs at sub-audio frequencies to move a
parameter over time. It is never heard directly; its output is routed into
another node with `.modulate()`.

The ambience uses one: a 0.1 Hz sine (ten second cycle) that drifts the
deep drone's frequency by a few hertz, so the base tone breathes instead of
sitting on a fixed pitch.

  let drift = LfoNode::sine(0.1);
  let drone = OscNode::sine()
      .with_frequency(60.0)
      .modulate(drift, OscParam::Frequency, 5.0);
  // Frequency sweeps 55 Hz - 65 Hz over ten seconds

Output is bipolar, [-1.0, +1.0].
*/

pub struct LfoNode {
    osc: OscillatorBlock,
    frequency: f32,
}

impl LfoNode {
    pub fn sine(frequency: f32) -> Self {
        Self {
            osc: OscillatorBlock::sine(),
            frequency,
        }
    }

    pub fn triangle(frequency: f32) -> Self {
        Self {
            osc: OscillatorBlock::triangle(),
            frequency,
        }
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }
}

impl GraphNode for LfoNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.osc.render(out, self.frequency, ctx.sample_rate);
    }
}
