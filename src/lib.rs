pub mod config; // Tunable constants, TOML loading
pub mod control; // Mute indicator and enable hint
pub mod dsp;
pub mod engine; // Audio output backends
pub mod error;
pub mod gesture; // First user interaction
pub mod graph; // Composable audio graph nodes
pub mod io;
pub mod synth; // Ambience lifecycle

pub use config::SynthConfig;
pub use error::{SynthError, SynthResult};
pub use synth::{AmbientSynth, SynthState};

pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
