//! Benchmarks for state-variable filter.

use std::hint::black_box;

use ambient_drone::dsp::filter::SVFilter;
use criterion::{BenchmarkId, Criterion};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        // Generate a test signal (sawtooth-like ramp)
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();

        // Texture lowpass at Butterworth Q
        let mut filter = SVFilter::lowpass(500.0);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("lowpass", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                filter.render(black_box(&mut buffer), SAMPLE_RATE);
            })
        });

        // Resonant lowpass
        let mut filter = SVFilter::lowpass(500.0);
        filter.set_q(4.0);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("lowpass_resonant", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                filter.render(black_box(&mut buffer), SAMPLE_RATE);
            })
        });
    }

    group.finish();
}
