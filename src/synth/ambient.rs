use std::time::Duration;

use crate::{
    config::SynthConfig,
    control::Indicator,
    engine::AudioEngine,
    error::SynthResult,
    graph::gain::GainHandle,
    synth::{
        graph::AmbientGraph,
        pulse::{PulseTask, TaskControl},
    },
};

/*
Lifecycle
=========

             try_start / toggle_mute
  [Idle] ──────────────────────────────→ [Playing]
    ↑  │                                   │    ↑
    └──┘ engine refused                    │    │ toggle_mute
         (retry on next gesture)           │    │ fade in, pulse re-armed
                               toggle_mute │    │
              fade out, pulse cancelled    ↓    │
                                         [Muted]

The graph is built once, on the first successful start, and lives for the
rest of the session. Muting never tears it down; it only fades the master
gain. There is no way back to Idle.
*/

/// Observable lifecycle flags. `muted` only has meaning once `started`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthState {
    pub started: bool,
    pub muted: bool,
}

impl SynthState {
    /// Started and not muted.
    pub fn is_audible(&self) -> bool {
        self.started && !self.muted
    }
}

/// The ambient synthesizer controller.
///
/// Owns the audio engine, the lifecycle state, the master gain handle and the
/// pulse task. All methods run on the control thread; the audio graph itself
/// belongs to the engine once started.
pub struct AmbientSynth<E: AudioEngine> {
    config: SynthConfig,
    engine: E,
    state: SynthState,
    master: Option<GainHandle>,
    pulse: Option<PulseTask>,
}

impl<E: AudioEngine> AmbientSynth<E> {
    pub fn new(config: SynthConfig, engine: E) -> Self {
        Self {
            config,
            engine,
            state: SynthState::default(),
            master: None,
            pulse: None,
        }
    }

    /// Build the graph and start playback, once.
    ///
    /// A second call after success is a no-op. If the engine refuses, the
    /// state stays idle and a later call (the next gesture) tries again.
    pub fn try_start(&mut self) -> SynthResult<()> {
        if self.state.started {
            return Ok(());
        }

        match self.start_graph() {
            Ok(master) => {
                self.master = Some(master);
                self.state = SynthState {
                    started: true,
                    muted: false,
                };
                self.arm_pulse();
                log::info!("ambient sound started");
                Ok(())
            }
            Err(err) => {
                log::warn!("could not start ambient sound, will retry on next gesture: {err}");
                Err(err)
            }
        }
    }

    fn start_graph(&mut self) -> SynthResult<GainHandle> {
        let sample_rate = self.engine.prepare()?;
        let (graph, master) = AmbientGraph::build(&self.config, sample_rate);
        self.engine.play(graph)?;
        Ok(master)
    }

    /// Flip between playing and muted with a smooth fade.
    ///
    /// Before the first start this is an attempt to start instead.
    pub fn toggle_mute(&mut self) -> SynthResult<()> {
        if !self.state.started {
            return self.try_start();
        }
        let Some(master) = self.master.as_mut() else {
            return Ok(());
        };

        if self.state.muted {
            master.set_target_at_time(self.config.ambient_level, self.config.fade_secs);
            self.state.muted = false;
            self.arm_pulse();
            log::debug!("unmuted");
        } else {
            master.set_target_at_time(0.0, self.config.fade_secs);
            self.state.muted = true;
            if let Some(pulse) = self.pulse.as_mut() {
                pulse.cancel();
            }
            log::debug!("muted");
        }

        Ok(())
    }

    fn arm_pulse(&mut self) {
        self.pulse = Some(PulseTask::new(self.config.ambient_level, &self.config.pulse));
    }

    /// Drive the pulse task. Call once per UI frame with a monotonic clock.
    pub fn on_frame(&mut self, now: Duration) {
        let (Some(pulse), Some(master)) = (self.pulse.as_mut(), self.master.as_mut()) else {
            return;
        };
        if !self.state.is_audible() {
            pulse.cancel();
        }
        if pulse.tick(now, master) == TaskControl::Stop {
            self.pulse = None;
        }
    }

    pub fn state(&self) -> SynthState {
        self.state
    }

    pub fn indicator(&self) -> Indicator {
        Indicator::from_state(self.state)
    }

    /// Last level requested for the master gain, `None` before start.
    pub fn master_target(&self) -> Option<f32> {
        self.master.as_ref().map(GainHandle::target)
    }

    /// Number of master gain writes issued so far.
    pub fn master_writes(&self) -> u64 {
        self.master.as_ref().map_or(0, GainHandle::writes)
    }

    /// True while a pulse task is scheduled.
    pub fn is_pulsing(&self) -> bool {
        self.pulse.is_some()
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}
