//! Breathing envelope on the master gain.

use std::{f32::consts::TAU, time::Duration};

use crate::{config::PulseConfig, graph::gain::GainHandle};

/*
Pulse
=====

While the ambience is playing, the master level slowly swells and recedes
around the ambient baseline:

    level(t) = baseline × (1 + depth × sin(2π t / period))

With the defaults (baseline 0.08, depth 0.25, period 20 s) the master moves
between 0.06 and 0.10 over twenty seconds.

The task is driven from the frame loop: each tick writes one new target to
the master gain with a smoothing time constant, so the audio side glides
between frame values instead of stepping.

It is an explicit repeating task. Every tick first checks the cancellation
flag; once cancelled, the tick writes nothing and reports Stop, and the
owner drops it. Muting cancels the task, so the fade to silence is never
overwritten by a late pulse write.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskControl {
    /// Schedule again on the next frame.
    Continue,
    /// Do not reschedule.
    Stop,
}

#[derive(Debug, Clone)]
pub struct PulseTask {
    baseline: f32,
    depth: f32,
    period_secs: f32,
    smoothing_secs: f32,
    origin: Option<Duration>,
    cancelled: bool,
}

impl PulseTask {
    pub fn new(baseline: f32, config: &PulseConfig) -> Self {
        Self {
            baseline,
            depth: config.depth,
            period_secs: config.period_secs,
            smoothing_secs: config.smoothing_secs,
            origin: None,
            cancelled: false,
        }
    }

    /// Target level `since` after the first tick.
    pub fn level_at(&self, since: Duration) -> f32 {
        let phase = since.as_secs_f32() / self.period_secs;
        self.baseline * (1.0 + self.depth * (TAU * phase).sin())
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Run one frame. `now` is any monotonic clock reading.
    pub fn tick(&mut self, now: Duration, master: &mut GainHandle) -> TaskControl {
        if self.cancelled {
            return TaskControl::Stop;
        }

        let origin = *self.origin.get_or_insert(now);
        let level = self.level_at(now.saturating_sub(origin));
        master.set_target_at_time(level, self.smoothing_secs);

        TaskControl::Continue
    }
}
