use crate::{
    dsp::filter::SVFilter,
    graph::node::{GraphNode, RenderCtx},
};

/*
Low-Pass Filter Node
====================

Passes frequencies below the cutoff and rolls off everything above it at
12 dB/octave. Raw white noise is harsh and bright; at a 500 Hz cutoff it
becomes a soft, distant rumble that fills the gaps between the tones.

  Cutoff (Hz)
    200    muffled, like through a wall
    500    soft hiss (ambience default)
    5000   bright, present

  Q
    0.707  flat passband, no peak (default)
    > 1    emphasis around the cutoff

Example usage:
  let hiss = NoiseNode::new(table).through(FilterNode::lowpass(500.0));
*/

pub struct FilterNode {
    filter: SVFilter,
}

impl FilterNode {
    pub fn lowpass(cutoff_hz: f32) -> Self {
        Self {
            filter: SVFilter::lowpass(cutoff_hz),
        }
    }

    pub fn with_q(mut self, q: f32) -> Self {
        self.filter.set_q(q);
        self
    }

    pub fn cutoff(&self) -> f32 {
        self.filter.cutoff_hz
    }
}

impl GraphNode for FilterNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.filter.render(out, ctx.sample_rate);
    }
}
