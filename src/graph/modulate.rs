use crate::{
    dsp::modulate::block_average,
    graph::node::{GraphNode, Modulatable, RenderCtx},
    MAX_BLOCK_SIZE,
};

/*
Modulate Node
=============

Connects an LFO (or any signal) to a parameter on another node:

  let drone = OscNode::sine()
      .with_frequency(60.0)
      .modulate(LfoNode::sine(0.1), OscParam::Frequency, 5.0);

    modulated_value = base_value + (LFO × depth)

The modulator runs alongside the source; the source does not own it. Each
block is split into CONTROL_INTERVAL sized slices and the parameter is
rewritten before every slice, so the target moves continuously at control
rate rather than once per audio callback.

See `dsp/modulate.rs` for the control-rate tradeoffs and why the result
always stays within base ± depth.
*/

/// Samples between parameter updates.
pub const CONTROL_INTERVAL: usize = 32;

pub struct Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    source: S,            // The node being modulated (e.g., OscNode)
    lfo: L,               // The modulation source (e.g., LfoNode)
    param: S::Param,      // Which parameter to modulate
    depth: f32,           // Modulation amount (scales LFO output)
    lfo_buffer: Vec<f32>, // Temp buffer for LFO output
}

impl<S, L> Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    pub fn new(source: S, lfo: L, param: S::Param, depth: f32) -> Self {
        Self {
            source,
            lfo,
            param,
            depth,
            lfo_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }
}

impl<S, L> GraphNode for Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let base_value = self.source.get_param(self.param);

        for block in out.chunks_mut(MAX_BLOCK_SIZE) {
            let lfo = &mut self.lfo_buffer[..block.len()];
            self.lfo.render_block(lfo, ctx);

            for (slice, lfo_slice) in block
                .chunks_mut(CONTROL_INTERVAL)
                .zip(lfo.chunks(CONTROL_INTERVAL))
            {
                let modulation = block_average(lfo_slice) * self.depth;
                self.source
                    .apply_modulation(self.param, base_value, modulation);
                self.source.render_block(slice, ctx);
            }
        }
    }
}
