use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use crate::{
    dsp::param::SmoothedParam,
    graph::node::{GraphNode, RenderCtx},
};

/*
Gain Stages
===========

Two kinds of gain live in the ambience graph:

  Gain        fixed level, set when the graph is built. Balances one layer
              (drone, harmonic, ethereal, texture) against the others.

  MasterGain  the single output level. Changed at runtime from the control
              thread: fades on mute/unmute and the slow breathing pulse.

The master gain runs on the audio thread, but it is controlled from the UI
thread. The two halves share one atomic slot holding the latest request:

  [GainHandle] ──store──→ [slot] ──swap──→ [MasterGain] ──→ output
   control thread                           audio thread

Every change is a "set target at time" request: the audio side takes the
slot at the start of the next block and glides toward the new level with
the requested time constant (see `dsp/param.rs`). A request overwrites any
request the audio side has not taken yet, so after a stall the audio side
sees the newest one.

Slot layout: level bits in the high half, time constant bits in the low
half. `EMPTY` is an all-NaN pattern no valid request produces.
*/

/// Fixed gain, multiplies the signal passing through it.
pub struct Gain {
    level: f32,
}

impl Gain {
    pub fn new(level: f32) -> Self {
        Self { level }
    }

    pub fn level(&self) -> f32 {
        self.level
    }
}

impl GraphNode for Gain {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        for sample in out.iter_mut() {
            *sample *= self.level;
        }
    }
}

const EMPTY: u64 = u64::MAX;

#[inline]
fn pack(level: f32, time_constant: f32) -> u64 {
    ((level.to_bits() as u64) << 32) | time_constant.to_bits() as u64
}

#[inline]
fn unpack(bits: u64) -> (f32, f32) {
    (
        f32::from_bits((bits >> 32) as u32),
        f32::from_bits(bits as u32),
    )
}

/// Audio-side half of the master output level.
pub struct MasterGain {
    param: SmoothedParam,
    slot: Arc<AtomicU64>,
}

/// Control-side half of the master output level.
pub struct GainHandle {
    slot: Arc<AtomicU64>,
    target: f32,
    writes: u64,
}

impl MasterGain {
    pub fn new(level: f32) -> (Self, GainHandle) {
        let slot = Arc::new(AtomicU64::new(EMPTY));
        let node = Self {
            param: SmoothedParam::new(level),
            slot: Arc::clone(&slot),
        };
        let handle = GainHandle {
            slot,
            target: level,
            writes: 0,
        };
        (node, handle)
    }

    /// Current (smoothed) output level.
    pub fn level(&self) -> f32 {
        self.param.value()
    }

    pub fn target(&self) -> f32 {
        self.param.target()
    }
}

impl GraphNode for MasterGain {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let bits = self.slot.swap(EMPTY, Ordering::Acquire);
        if bits != EMPTY {
            let (level, time_constant) = unpack(bits);
            self.param.set_target(level, time_constant, ctx.sample_rate);
        }
        self.param.apply(out);
    }
}

impl GainHandle {
    /// Ask the master gain to glide to `level`.
    ///
    /// Replaces any earlier request the audio side has not picked up yet.
    pub fn set_target_at_time(&mut self, level: f32, time_constant: f32) {
        self.target = level;
        self.writes += 1;
        self.slot.store(pack(level, time_constant), Ordering::Release);
    }

    /// Last level requested from the control side.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Number of target writes issued so far.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}
