use std::{path::Path, time::Duration};

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::{
    config::SynthConfig,
    engine::OfflineEngine,
    error::SynthResult,
    synth::AmbientSynth,
};

/// Write mono 32-bit float samples to `path`.
pub fn write_wav(path: impl AsRef<Path>, samples: &[f32], sample_rate: u32) -> SynthResult<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path.as_ref(), spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Render `seconds` of the ambience offline and write it to `path`.
///
/// Frame ticks are simulated at 60 Hz so the pulse moves the way it would on
/// screen. Returns the number of frames written.
pub fn bounce(
    config: &SynthConfig,
    sample_rate: u32,
    seconds: f32,
    path: impl AsRef<Path>,
) -> SynthResult<usize> {
    const FRAME_SECS: f32 = 1.0 / 60.0;

    let rate = sample_rate as f32;
    let mut synth = AmbientSynth::new(config.clone(), OfflineEngine::new(rate));
    synth.try_start()?;

    let total = (seconds.max(0.0) * rate).round() as usize;
    let frame_len = ((FRAME_SECS * rate).round() as usize).max(1);
    let mut samples = vec![0.0f32; total];

    for (index, block) in samples.chunks_mut(frame_len).enumerate() {
        synth.on_frame(Duration::from_secs_f32(index as f32 * FRAME_SECS));
        synth.engine_mut().render(block);
    }

    write_wav(path.as_ref(), &samples, sample_rate)?;
    log::info!(
        "bounced {:.1}s of ambience to {}",
        seconds,
        path.as_ref().display()
    );
    Ok(total)
}
