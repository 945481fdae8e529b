//! Benchmarks for the smoothed master gain parameter.

use std::hint::black_box;

use ambient_drone::dsp::param::SmoothedParam;
use criterion::{BenchmarkId, Criterion};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_param(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/param");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![1.0f32; size];

        // Gliding - one exp step per sample
        let mut param = SmoothedParam::new(0.08);
        group.bench_with_input(BenchmarkId::new("gliding", size), &size, |b, _| {
            b.iter(|| {
                // Retarget each pass so the glide never settles
                let target = if param.target() > 0.04 { 0.0 } else { 0.08 };
                param.set_target(target, 0.3, SAMPLE_RATE);
                param.apply(black_box(&mut buffer));
            })
        });

        // Settled - constant multiply
        let mut param = SmoothedParam::new(0.08);
        group.bench_with_input(BenchmarkId::new("settled", size), &size, |b, _| {
            b.iter(|| {
                param.apply(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
