use crate::graph::node::{GraphNode, RenderCtx};

/*
Serial Signal Chain (Through)
=============================

Through connects two nodes in series, passing the output of the first (source)
into the second (processor):

  1. Render the source into the output buffer
  2. Let the processor transform that buffer in place

  Through: [Source] ──→ [Processor] ──→ output

The texture layer of the ambience is a chain of three:

  let texture = NoiseNode::new(buffer)
      .through(FilterNode::lowpass(500.0))
      .gain(0.5);

`.gain()` is itself a Through with a Gain as the processor.
*/

pub struct Through<S, F> {
    source: S,
    filter: F,
}

impl<S, F> Through<S, F> {
    pub fn new(source: S, filter: F) -> Self {
        Self { source, filter }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn processor(&self) -> &F {
        &self.filter
    }
}

impl<S: GraphNode, F: GraphNode> GraphNode for Through<S, F> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source.render_block(out, ctx);
        self.filter.render_block(out, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{extensions::NodeExt, gain::Gain, oscillator::OscNode};

    fn ctx() -> RenderCtx {
        RenderCtx::new(48_000.0)
    }

    #[test]
    fn renders_source_then_processor() {
        let mut plain = OscNode::sine().with_frequency(90.0);
        let mut scaled = OscNode::sine().with_frequency(90.0).through(Gain::new(0.15));

        let mut a = vec![0.0; 256];
        let mut b = vec![0.0; 256];
        plain.render_block(&mut a, &ctx());
        scaled.render_block(&mut b, &ctx());

        for (&x, &y) in a.iter().zip(&b) {
            assert!((x * 0.15 - y).abs() < 1e-6);
        }
    }

    #[test]
    fn overwrites_stale_buffer_contents() {
        let mut node = OscNode::sine().with_frequency(60.0).gain(0.3);
        let mut buffer = vec![1.0; 128];
        node.render_block(&mut buffer, &ctx());

        assert_eq!(buffer[0], 0.0, "source should overwrite, not accumulate");
        assert!(buffer.iter().all(|&s| s.abs() <= 0.3 + 1e-6));
    }

    #[test]
    fn exposes_both_stages() {
        let node = OscNode::sine().with_frequency(220.0).through(Gain::new(0.05));

        assert_eq!(node.source().base_frequency(), 220.0);
        assert_eq!(node.processor().level(), 0.05);
    }
}
