//! Benchmarks for the ambience graph.

use std::hint::black_box;

use ambient_drone::{
    graph::{
        lfo::LfoNode,
        oscillator::{OscNode, OscParam},
        GraphNode, NodeExt, RenderCtx,
    },
    synth::AmbientGraph,
    SynthConfig,
};
use criterion::{BenchmarkId, Criterion};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_ambient(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/ambient");
    let ctx = RenderCtx::new(SAMPLE_RATE);
    let config = SynthConfig::default();

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // === DRONE: 60 Hz sine with 0.1 Hz drift ===
        let mut drone = OscNode::sine()
            .with_frequency(60.0)
            .modulate(LfoNode::sine(0.1), OscParam::Frequency, 5.0)
            .gain(0.3);
        group.bench_with_input(BenchmarkId::new("drone", size), &size, |b, _| {
            b.iter(|| {
                drone.render_block(black_box(&mut buffer), &ctx);
            })
        });

        // === FULL: drone + harmonic + ethereal + texture → master ===
        let (mut graph, mut master) = AmbientGraph::build(&config, SAMPLE_RATE);
        group.bench_with_input(BenchmarkId::new("full", size), &size, |b, _| {
            b.iter(|| {
                graph.render_block(black_box(&mut buffer), &ctx);
            })
        });

        // === FULL + PULSE: a master write every block ===
        let mut level = 0.08f32;
        group.bench_with_input(BenchmarkId::new("full_pulsing", size), &size, |b, _| {
            b.iter(|| {
                level = if level > 0.07 { 0.06 } else { 0.10 };
                master.set_target_at_time(level, 0.5);
                graph.render_block(black_box(&mut buffer), &ctx);
            })
        });
    }

    group.finish();
}
