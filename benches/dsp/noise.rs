//! Benchmarks for the looped noise table.

use std::hint::black_box;

use ambient_drone::{
    dsp::noise::NoiseBuffer,
    graph::{noise::NoiseNode, GraphNode, RenderCtx},
};
use criterion::{BenchmarkId, Criterion};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/noise");
    let ctx = RenderCtx::new(SAMPLE_RATE);

    // Table generation happens once per start, off the audio thread
    group.bench_function("table_2s", |b| {
        b.iter(|| NoiseBuffer::from_duration(black_box(2.0), SAMPLE_RATE, 0.05, 0x5eed))
    });

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];
        let mut node = NoiseNode::new(NoiseBuffer::from_duration(2.0, SAMPLE_RATE, 0.05, 0x5eed));
        group.bench_with_input(BenchmarkId::new("loop", size), &size, |b, _| {
            b.iter(|| {
                node.render_block(black_box(&mut buffer), &ctx);
            })
        });
    }

    group.finish();
}
