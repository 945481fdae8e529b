//! Real-world scenario benchmarks.
//!
//! These render what the audio callback actually runs: the drifting drone on
//! its own, then the complete four-layer ambience through the master gain.

mod ambient;

pub use ambient::bench_ambient;
