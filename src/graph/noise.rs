use crate::{
    dsp::noise::NoiseBuffer,
    graph::node::{GraphNode, RenderCtx},
};

/// Plays a noise table end to end, wrapping back to the start with no gap.
pub struct NoiseNode {
    buffer: NoiseBuffer,
    position: usize,
}

impl NoiseNode {
    pub fn new(buffer: NoiseBuffer) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    pub fn table_len(&self) -> usize {
        self.buffer.len()
    }
}

impl GraphNode for NoiseNode {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        let table = self.buffer.samples();
        let mut written = 0;

        while written < out.len() {
            let run = (table.len() - self.position).min(out.len() - written);
            out[written..written + run].copy_from_slice(&table[self.position..self.position + run]);

            written += run;
            self.position = (self.position + run) % table.len();
        }
    }
}
