//! Audio output backends.
//!
//! The synthesizer never talks to a sound device directly. It asks an
//! [`AudioEngine`] for a sample rate, builds the graph at that rate, then
//! hands the whole graph over with [`AudioEngine::play`]. From that point the
//! engine owns the graph and pulls blocks from it; the synthesizer keeps only
//! the master [`GainHandle`](crate::graph::gain::GainHandle).
//!
//! - [`CpalEngine`] plays through the default output device.
//! - [`OfflineEngine`] holds the graph and renders on demand, for tests and
//!   bouncing to disk.

mod device;
mod offline;

pub use self::device::CpalEngine;
pub use self::offline::OfflineEngine;

use crate::{error::SynthResult, synth::AmbientGraph};

pub trait AudioEngine {
    /// Open the output if needed and report its sample rate.
    ///
    /// Fails with `PlaybackUnavailable` when the platform refuses output.
    fn prepare(&mut self) -> SynthResult<f32>;

    /// Take ownership of `graph` and start pulling audio from it.
    ///
    /// On failure the graph is dropped and nothing plays.
    fn play(&mut self, graph: AmbientGraph) -> SynthResult<()>;
}
