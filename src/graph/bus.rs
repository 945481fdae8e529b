use crate::{
    graph::node::{GraphNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

/*
Summing Bus
===========

The ambience is several independent layers that all feed one master gain.
A Bus renders each input into a scratch buffer and adds it to the output:

  [Drone]    ──┐
  [Harmonic] ──┤
  [Ethereal] ──┼──→ (+) ──→ output
  [Texture]  ──┘

Inputs keep their own levels (each ends in a Gain); the bus does no scaling.
*/

#[derive(Default)]
pub struct Bus {
    inputs: Vec<Box<dyn GraphNode>>,
    scratch: Vec<f32>,
}

impl Bus {
    pub fn new() -> Self {
        Self {
            inputs: Vec::new(),
            scratch: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    pub fn with<N: GraphNode + 'static>(mut self, input: N) -> Self {
        self.inputs.push(Box::new(input));
        self
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl GraphNode for Bus {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        out.fill(0.0);
        if self.scratch.len() < MAX_BLOCK_SIZE {
            self.scratch.resize(MAX_BLOCK_SIZE, 0.0);
        }

        for block in out.chunks_mut(MAX_BLOCK_SIZE) {
            let scratch = &mut self.scratch[..block.len()];
            for input in self.inputs.iter_mut() {
                input.render_block(scratch, ctx);
                for (o, s) in block.iter_mut().zip(scratch.iter()) {
                    *o += s;
                }
            }
        }
    }
}
