// Purpose: Lifecycle of the ambience: start on first gesture, mute/unmute, breathing pulse
// This layer sits above graph nodes and owns the engine and the master gain handle

pub mod ambient;
pub mod graph;
pub mod pulse;

pub use ambient::{AmbientSynth, SynthState};
pub use graph::AmbientGraph;
pub use pulse::{PulseTask, TaskControl};
