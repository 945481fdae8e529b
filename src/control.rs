//! Presentation state of the mute control.

use std::time::Duration;

use crate::synth::SynthState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    VolumeUp,
    VolumeMuted,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::VolumeUp => "🔊",
            Icon::VolumeMuted => "🔇",
        }
    }
}

/// What the mute control shows. Always derived from `SynthState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub playing: bool,
    pub icon: Icon,
}

impl Indicator {
    pub fn from_state(state: SynthState) -> Self {
        let playing = state.is_audible();
        Self {
            playing,
            icon: if playing {
                Icon::VolumeUp
            } else {
                Icon::VolumeMuted
            },
        }
    }

    pub fn label(&self) -> &'static str {
        if self.playing {
            "playing"
        } else {
            "muted"
        }
    }
}

/// Nudge toward the mute control when sound is still off after a delay.
///
/// The check happens once, when `delay` has elapsed. If nothing is playing
/// at that moment the control glows for `repeats` cycles of `period`, even
/// if sound starts part way through.
#[derive(Debug, Clone)]
pub struct EnableHint {
    delay: Duration,
    period: Duration,
    repeats: u32,
    checked: bool,
    started_at: Option<Duration>,
}

impl Default for EnableHint {
    fn default() -> Self {
        Self::new(Duration::from_secs(3), Duration::from_secs(2), 3)
    }
}

impl EnableHint {
    pub fn new(delay: Duration, period: Duration, repeats: u32) -> Self {
        Self {
            delay,
            period,
            repeats,
            checked: false,
            started_at: None,
        }
    }

    pub fn update(&mut self, elapsed: Duration, playing: bool) {
        if self.checked || elapsed < self.delay {
            return;
        }
        self.checked = true;
        if !playing {
            self.started_at = Some(self.delay);
        }
    }

    /// Glow intensity in [0, 1] while the hint runs, `None` otherwise.
    pub fn glow(&self, elapsed: Duration) -> Option<f32> {
        let start = self.started_at?;
        let since = elapsed.checked_sub(start)?;
        let total = self.period.as_secs_f32() * self.repeats as f32;
        let t = since.as_secs_f32();
        if t >= total || self.period.is_zero() {
            return None;
        }

        let cycle = (t / self.period.as_secs_f32()).fract();
        Some((std::f32::consts::PI * cycle).sin())
    }
}
