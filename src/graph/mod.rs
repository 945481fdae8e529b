//! Composable building blocks for constructing the ambience graph.
//!
//! Graph nodes wrap the low-level DSP primitives with block-based rendering,
//! modulation routing and summing. The `extensions` module adds fluent helpers
//! so the graph reads as a chain: `OscNode::sine().modulate(..).gain(..)`.

/// Summing bus for parallel layers.
pub mod bus;
/// Fluent combinators (`.through()`, `.modulate()`, `.gain()`).
pub mod extensions;
/// Low-pass filter node.
pub mod filter;
/// Fixed gain and the runtime-controlled master gain.
pub mod gain;
/// Low frequency oscillators for parameter modulation.
pub mod lfo;
/// Connect modulation sources to node parameters.
pub mod modulate;
/// Core traits shared by all graph nodes.
pub mod node;
/// Looped noise playback.
pub mod noise;
/// Fixed-frequency tone generators.
pub mod oscillator;
/// Serial chaining of two nodes (source → processor).
pub mod through;

pub use extensions::NodeExt;
pub use node::{GraphNode, Modulatable, RenderCtx};
