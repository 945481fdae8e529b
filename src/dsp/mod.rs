//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components are allocation-free once constructed and realtime-safe,
//! so they can live directly inside graph nodes on the audio thread. They stay
//! focused on the signal-processing math; routing and modulation are layered
//! on top by the `graph` module.

/// TPT state-variable low-pass filter.
pub mod filter;
/// Control-rate modulation helpers.
pub mod modulate;
/// Seeded, looped noise tables.
pub mod noise;
/// Phase-accumulating periodic oscillators.
pub mod oscillator;
/// One-pole parameter smoothing (click-free gain ramps).
pub mod param;

pub use oscillator::Waveform;
pub use param::SmoothedParam;
