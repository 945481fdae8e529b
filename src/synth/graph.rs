//! The ambience as one graph.

use crate::{
    config::{SynthConfig, ToneConfig},
    dsp::noise::NoiseBuffer,
    graph::{
        bus::Bus,
        filter::FilterNode,
        gain::{GainHandle, MasterGain},
        lfo::LfoNode,
        noise::NoiseNode,
        oscillator::{OscNode, OscParam},
        GraphNode, NodeExt, RenderCtx,
    },
    MAX_BLOCK_SIZE,
};

/*
Signal Flow
===========

  [Drift LFO 0.1 Hz] ··· ±5 Hz ···┐
                                  ↓
  [Drone 60 Hz]  ────────────── (gain 0.3)  ──┐
  [Harmonic 90 Hz] ──────────── (gain 0.15) ──┤
  [Ethereal 220 Hz] ─────────── (gain 0.05) ──┼──→ [Bus] ──→ [MasterGain 0.08] ──→ out
  [Noise table] → [LPF 500 Hz] → (gain 0.5) ──┘                  ↑
                                                            GainHandle
                                                      (fades, breathing pulse)

Values shown are the defaults from `SynthConfig`.
*/

pub struct AmbientGraph {
    layers: Bus,
    master: MasterGain,
    sample_rate: f32,
}

fn tone(config: &ToneConfig) -> OscNode {
    OscNode::new(config.waveform).with_frequency(config.frequency_hz)
}

impl AmbientGraph {
    /// Build every layer and the master gain, returning the control handle.
    pub fn build(config: &SynthConfig, sample_rate: f32) -> (Self, GainHandle) {
        let drone = tone(&config.drone)
            .modulate(
                LfoNode::sine(config.drift.rate_hz),
                OscParam::Frequency,
                config.drift.depth_hz,
            )
            .gain(config.drone.gain);
        let harmonic = tone(&config.harmonic).gain(config.harmonic.gain);
        let ethereal = tone(&config.ethereal).gain(config.ethereal.gain);

        let noise = &config.noise;
        let table =
            NoiseBuffer::from_duration(noise.duration_secs, sample_rate, noise.amplitude, noise.seed);
        let texture = NoiseNode::new(table)
            .through(FilterNode::lowpass(noise.cutoff_hz).with_q(noise.q))
            .gain(noise.gain);

        let layers = Bus::new()
            .with(drone)
            .with(harmonic)
            .with(ethereal)
            .with(texture);
        let (master, handle) = MasterGain::new(config.ambient_level);

        log::info!(
            "built ambient graph: {} layers at {} Hz, master {}",
            layers.len(),
            sample_rate,
            config.ambient_level
        );

        (
            Self {
                layers,
                master,
                sample_rate,
            },
            handle,
        )
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Smoothed master level as of the last rendered sample.
    pub fn master_level(&self) -> f32 {
        self.master.level()
    }

    pub fn master_target(&self) -> f32 {
        self.master.target()
    }

    /// Render at the graph's own sample rate.
    pub fn render(&mut self, out: &mut [f32]) {
        let ctx = RenderCtx::new(self.sample_rate);
        self.render_block(out, &ctx);
    }
}

impl GraphNode for AmbientGraph {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        for block in out.chunks_mut(MAX_BLOCK_SIZE) {
            self.layers.render_block(block, ctx);
            self.master.render_block(block, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 48_000.0;

    fn rms(buffer: &[f32]) -> f32 {
        (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt()
    }

    #[test]
    fn builds_four_layers() {
        let (graph, handle) = AmbientGraph::build(&SynthConfig::default(), SAMPLE_RATE);

        assert_eq!(graph.layer_count(), 4);
        assert_eq!(graph.master_level(), 0.08);
        assert_eq!(handle.target(), 0.08);
    }

    #[test]
    fn output_is_quiet_but_audible() {
        let (mut graph, _handle) = AmbientGraph::build(&SynthConfig::default(), SAMPLE_RATE);
        let mut buffer = vec![0.0f32; 48_000];
        graph.render(&mut buffer);

        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        assert!(peak > 0.005, "ambience should be audible, peak={peak}");
        assert!(peak < 0.1, "ambience should stay very quiet, peak={peak}");
        assert!(buffer.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn handle_silences_output() {
        let (mut graph, mut handle) = AmbientGraph::build(&SynthConfig::default(), SAMPLE_RATE);
        handle.set_target_at_time(0.0, 0.05);

        let mut buffer = vec![0.0f32; 48_000];
        graph.render(&mut buffer);

        let tail = &buffer[40_000..];
        assert!(rms(tail) < 1e-5, "tail should be silent, rms={}", rms(tail));
        assert!(graph.master_level() < 1e-5);
    }

    #[test]
    fn zero_noise_gain_leaves_pure_tones() {
        let mut config = SynthConfig::default();
        config.noise.gain = 0.0;
        config.drone.gain = 0.0;
        config.harmonic.gain = 0.0;
        config.ethereal.gain = 0.0;

        let (mut graph, _handle) = AmbientGraph::build(&config, SAMPLE_RATE);
        let mut buffer = vec![1.0f32; 4_096];
        graph.render(&mut buffer);

        assert!(buffer.iter().all(|&s| s == 0.0));
    }
}
