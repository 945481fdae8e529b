use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    SampleFormat, StreamConfig,
};
use rtrb::{Consumer, PushError, RingBuffer};

use crate::{
    engine::AudioEngine,
    error::{SynthError, SynthResult},
    graph::{GraphNode, RenderCtx},
    synth::AmbientGraph,
    MAX_BLOCK_SIZE,
};

struct Output {
    device: cpal::Device,
    config: StreamConfig,
    sample_rate: f32,
}

/// Plays the graph through the host's default output device.
///
/// The device is opened lazily on the first `prepare`, so constructing the
/// engine never touches audio hardware. Any failure along the way is reported
/// as `PlaybackUnavailable` and can be retried.
pub struct CpalEngine {
    output: Option<Output>,
    stream: Option<cpal::Stream>,
    scope_capacity: usize,
    scope: Option<Consumer<f32>>,
}

impl Default for CpalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CpalEngine {
    pub fn new() -> Self {
        Self {
            output: None,
            stream: None,
            scope_capacity: 0,
            scope: None,
        }
    }

    /// Copy every rendered mono sample into a ring of `capacity` samples that
    /// the UI can drain with [`take_scope`](Self::take_scope).
    pub fn with_scope(mut self, capacity: usize) -> Self {
        self.scope_capacity = capacity;
        self
    }

    /// Reader side of the scope ring, once playback has started.
    pub fn take_scope(&mut self) -> Option<Consumer<f32>> {
        self.scope.take()
    }

    /// Device sample rate, once opened.
    pub fn sample_rate(&self) -> Option<f32> {
        self.output.as_ref().map(|o| o.sample_rate)
    }

    pub fn device_name(&self) -> Option<String> {
        self.output.as_ref().and_then(|o| o.device.name().ok())
    }

    pub fn is_playing(&self) -> bool {
        self.stream.is_some()
    }

    fn open() -> SynthResult<Output> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| SynthError::playback("no default output device available"))?;
        let supported = device.default_output_config().map_err(|err| {
            SynthError::playback(format!("failed to fetch default output config: {err}"))
        })?;
        if supported.sample_format() != SampleFormat::F32 {
            return Err(SynthError::playback(format!(
                "unsupported sample format {:?}",
                supported.sample_format()
            )));
        }

        let sample_rate = supported.sample_rate().0 as f32;
        let config: StreamConfig = supported.into();
        log::info!(
            "opened output device {:?}: {} Hz, {} channels",
            device.name().unwrap_or_default(),
            sample_rate,
            config.channels
        );

        Ok(Output {
            device,
            config,
            sample_rate,
        })
    }
}

impl AudioEngine for CpalEngine {
    fn prepare(&mut self) -> SynthResult<f32> {
        if let Some(output) = &self.output {
            return Ok(output.sample_rate);
        }
        let output = Self::open()?;
        let sample_rate = output.sample_rate;
        self.output = Some(output);
        Ok(sample_rate)
    }

    fn play(&mut self, mut graph: AmbientGraph) -> SynthResult<()> {
        if self.stream.is_some() {
            return Err(SynthError::playback("output stream already running"));
        }
        self.prepare()?;
        let Some(output) = &self.output else {
            return Err(SynthError::playback("output device not prepared"));
        };

        let channels = output.config.channels as usize;
        let ctx = RenderCtx::new(output.sample_rate);
        let (mut scope_tx, scope_rx) = if self.scope_capacity > 0 {
            let (tx, rx) = RingBuffer::<f32>::new(self.scope_capacity);
            (Some(tx), Some(rx))
        } else {
            (None, None)
        };

        // Buffer reused by audio callback
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = output
            .device
            .build_output_stream(
                &output.config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let total_frames = data.len() / channels;
                    let mut frames_written = 0;
                    while frames_written < total_frames {
                        let frames_remaining = total_frames - frames_written;
                        let frames_to_render = frames_remaining.min(MAX_BLOCK_SIZE);

                        let block = &mut render_buf[..frames_to_render];
                        graph.render_block(block, &ctx);

                        // Duplicate mono to all channels and write to device
                        let out_off = frames_written * channels;
                        for (i, &s) in block.iter().enumerate() {
                            for ch in 0..channels {
                                data[out_off + i * channels + ch] = s;
                            }
                        }

                        // Non-blocking, drop on overflow
                        if let Some(tx) = scope_tx.as_mut() {
                            for &s in block.iter() {
                                if let Err(PushError::Full(_)) = tx.push(s) {
                                    break;
                                }
                            }
                        }

                        frames_written += frames_to_render;
                    }
                },
                |err| log::error!("output stream error: {err}"),
                None,
            )
            .map_err(|err| SynthError::playback(format!("failed to build output stream: {err}")))?;

        stream
            .play()
            .map_err(|err| SynthError::playback(format!("failed to start output stream: {err}")))?;

        self.stream = Some(stream);
        self.scope = scope_rx;
        Ok(())
    }
}
