use crate::{
    engine::AudioEngine,
    error::{SynthError, SynthResult},
    synth::AmbientGraph,
};

/// Holds the graph in memory and renders only when asked.
///
/// Stands in for a sound device in tests and when bouncing to a file. It can
/// also refuse a number of start attempts, the way a platform does before the
/// user has interacted with the page or app.
pub struct OfflineEngine {
    sample_rate: f32,
    graph: Option<AmbientGraph>,
    refusals: usize,
    play_attempts: usize,
    graphs_received: usize,
}

impl OfflineEngine {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            graph: None,
            refusals: 0,
            play_attempts: 0,
            graphs_received: 0,
        }
    }

    /// Refuse the next `attempts` calls to `play`.
    pub fn refusing(mut self, attempts: usize) -> Self {
        self.refusals = attempts;
        self
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Number of calls to `play`, refused or not.
    pub fn play_attempts(&self) -> usize {
        self.play_attempts
    }

    /// Number of graphs successfully handed over.
    pub fn graphs_received(&self) -> usize {
        self.graphs_received
    }

    pub fn graph(&self) -> Option<&AmbientGraph> {
        self.graph.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.graph.is_some()
    }

    /// Pull the next `out.len()` samples. Silence until a graph is playing.
    pub fn render(&mut self, out: &mut [f32]) {
        match self.graph.as_mut() {
            Some(graph) => graph.render(out),
            None => out.fill(0.0),
        }
    }

    /// Render `seconds` of output into a new buffer.
    pub fn render_seconds(&mut self, seconds: f32) -> Vec<f32> {
        let frames = (seconds.max(0.0) * self.sample_rate).round() as usize;
        let mut out = vec![0.0f32; frames];
        self.render(&mut out);
        out
    }
}

impl AudioEngine for OfflineEngine {
    fn prepare(&mut self) -> SynthResult<f32> {
        Ok(self.sample_rate)
    }

    fn play(&mut self, graph: AmbientGraph) -> SynthResult<()> {
        self.play_attempts += 1;
        if self.refusals > 0 {
            self.refusals -= 1;
            return Err(SynthError::playback("output refused before user interaction"));
        }
        if self.graph.is_some() {
            return Err(SynthError::playback("a graph is already playing"));
        }

        self.graph = Some(graph);
        self.graphs_received += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SynthConfig;

    const SAMPLE_RATE: f32 = 48_000.0;

    #[test]
    fn silent_without_graph() {
        let mut engine = OfflineEngine::new(SAMPLE_RATE);
        let mut out = vec![1.0f32; 256];
        engine.render(&mut out);
        assert!(out.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn renders_handed_over_graph() {
        let mut engine = OfflineEngine::new(SAMPLE_RATE);
        let (graph, _handle) = AmbientGraph::build(&SynthConfig::default(), SAMPLE_RATE);

        engine.play(graph).unwrap();
        let out = engine.render_seconds(0.5);

        assert_eq!(out.len(), 24_000);
        assert!(out.iter().any(|&s| s != 0.0));
        assert_eq!(engine.graphs_received(), 1);
    }

    #[test]
    fn refusals_run_out() {
        let mut engine = OfflineEngine::new(SAMPLE_RATE).refusing(2);
        let config = SynthConfig::default();

        for _ in 0..2 {
            let (graph, _) = AmbientGraph::build(&config, SAMPLE_RATE);
            let err = engine.play(graph).unwrap_err();
            assert!(err.is_playback_unavailable());
        }

        let (graph, _) = AmbientGraph::build(&config, SAMPLE_RATE);
        engine.play(graph).unwrap();
        assert!(engine.is_playing());
        assert_eq!(engine.play_attempts(), 3);
    }

    #[test]
    fn second_graph_is_rejected() {
        let mut engine = OfflineEngine::new(SAMPLE_RATE);
        let config = SynthConfig::default();

        let (first, _) = AmbientGraph::build(&config, SAMPLE_RATE);
        engine.play(first).unwrap();
        let (second, _) = AmbientGraph::build(&config, SAMPLE_RATE);
        assert!(engine.play(second).is_err());
        assert_eq!(engine.graphs_received(), 1);
    }
}
