//! Tunable constants of the ambience.
//!
//! `SynthConfig::default()` is the stock sound. With the `serde` feature the
//! same structure can be read from a TOML file; any section left out keeps its
//! default:
//!
//! ```toml
//! ambient_level = 0.06
//!
//! [drone]
//! frequency_hz = 55.0
//! gain = 0.3
//!
//! [pulse]
//! period_secs = 30.0
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::Waveform,
    error::{SynthError, SynthResult},
    gesture::GestureKind,
};

/// Lowest frequency a modulated tone may reach.
pub const MIN_TONE_HZ: f32 = 20.0;

/// One sustained tone layer.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ToneConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub waveform: Waveform,
    pub frequency_hz: f32,
    pub gain: f32,
}

impl ToneConfig {
    pub fn sine(frequency_hz: f32, gain: f32) -> Self {
        Self {
            waveform: Waveform::Sine,
            frequency_hz,
            gain,
        }
    }
}

/// Slow LFO that drifts the drone's frequency.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct DriftConfig {
    pub rate_hz: f32,
    /// Peak deviation from the drone frequency, in Hz.
    pub depth_hz: f32,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            rate_hz: 0.1,
            depth_hz: 5.0,
        }
    }
}

/// Filtered noise texture.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseConfig {
    /// Length of the looped table.
    pub duration_secs: f32,
    /// Peak value of the raw samples.
    pub amplitude: f32,
    pub cutoff_hz: f32,
    pub q: f32,
    pub gain: f32,
    pub seed: u64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            duration_secs: 2.0,
            amplitude: 0.05,
            cutoff_hz: 500.0,
            q: std::f32::consts::FRAC_1_SQRT_2,
            gain: 0.5,
            seed: 0x5eed,
        }
    }
}

/// Breathing envelope on the master gain.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct PulseConfig {
    pub period_secs: f32,
    /// Swing as a fraction of the ambient level.
    pub depth: f32,
    /// Time constant used for each per-frame target write.
    pub smoothing_secs: f32,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            period_secs: 20.0,
            depth: 0.25,
            smoothing_secs: 0.5,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct SynthConfig {
    /// Master level while unmuted.
    pub ambient_level: f32,
    /// Time constant of the mute/unmute fade.
    pub fade_secs: f32,
    pub drone: ToneConfig,
    pub harmonic: ToneConfig,
    pub ethereal: ToneConfig,
    pub drift: DriftConfig,
    pub noise: NoiseConfig,
    pub pulse: PulseConfig,
    /// Gesture kinds that may trigger the first start.
    pub gestures: Vec<GestureKind>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            ambient_level: 0.08,
            fade_secs: 0.3,
            drone: ToneConfig::sine(60.0, 0.3),
            harmonic: ToneConfig::sine(90.0, 0.15),
            ethereal: ToneConfig::sine(220.0, 0.05),
            drift: DriftConfig::default(),
            noise: NoiseConfig::default(),
            pulse: PulseConfig::default(),
            gestures: GestureKind::ALL.to_vec(),
        }
    }
}

fn positive(field: &str, value: f32) -> SynthResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SynthError::invalid_config(field, format!("must be positive, got {value}")))
    }
}

fn non_negative(field: &str, value: f32) -> SynthResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SynthError::invalid_config(field, format!("must not be negative, got {value}")))
    }
}

impl SynthConfig {
    pub fn validate(&self) -> SynthResult<()> {
        if !(self.ambient_level > 0.0 && self.ambient_level <= 1.0) {
            return Err(SynthError::invalid_config(
                "ambient_level",
                format!("must be in (0, 1], got {}", self.ambient_level),
            ));
        }
        non_negative("fade_secs", self.fade_secs)?;

        for (name, tone) in [
            ("drone", &self.drone),
            ("harmonic", &self.harmonic),
            ("ethereal", &self.ethereal),
        ] {
            positive(&format!("{name}.frequency_hz"), tone.frequency_hz)?;
            if tone.frequency_hz > 20_000.0 {
                return Err(SynthError::invalid_config(
                    format!("{name}.frequency_hz"),
                    "must be at most 20000",
                ));
            }
            non_negative(&format!("{name}.gain"), tone.gain)?;
        }

        positive("drift.rate_hz", self.drift.rate_hz)?;
        non_negative("drift.depth_hz", self.drift.depth_hz)?;
        if self.drone.frequency_hz - self.drift.depth_hz < MIN_TONE_HZ {
            return Err(SynthError::invalid_config(
                "drift.depth_hz",
                format!("drone would dip below {MIN_TONE_HZ} Hz"),
            ));
        }

        positive("noise.duration_secs", self.noise.duration_secs)?;
        non_negative("noise.amplitude", self.noise.amplitude)?;
        positive("noise.cutoff_hz", self.noise.cutoff_hz)?;
        positive("noise.q", self.noise.q)?;
        non_negative("noise.gain", self.noise.gain)?;

        positive("pulse.period_secs", self.pulse.period_secs)?;
        if !(0.0..1.0).contains(&self.pulse.depth) {
            return Err(SynthError::invalid_config(
                "pulse.depth",
                format!("must be in [0, 1), got {}", self.pulse.depth),
            ));
        }
        non_negative("pulse.smoothing_secs", self.pulse.smoothing_secs)?;

        Ok(())
    }

    #[cfg(feature = "serde")]
    pub fn from_toml_str(text: &str) -> SynthResult<Self> {
        let config: SynthConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<std::path::Path>) -> SynthResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        SynthConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_silent_ambient_level() {
        let config = SynthConfig {
            ambient_level: 0.0,
            ..SynthConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ambient_level"));
    }

    #[test]
    fn rejects_drift_below_audible_floor() {
        let mut config = SynthConfig::default();
        config.drift.depth_hz = 45.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("drift.depth_hz"));
    }

    #[test]
    fn rejects_negative_tone_gain() {
        let mut config = SynthConfig::default();
        config.ethereal.gain = -0.1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ethereal.gain"));
    }

    #[test]
    fn rejects_full_depth_pulse() {
        let mut config = SynthConfig::default();
        config.pulse.depth = 1.0;
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn empty_toml_is_default() {
        let config = SynthConfig::from_toml_str("").unwrap();
        assert_eq!(config, SynthConfig::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_toml_keeps_other_sections() {
        let config = SynthConfig::from_toml_str(
            r#"
            ambient_level = 0.05
            gestures = ["click", "key"]

            [drone]
            waveform = "triangle"
            frequency_hz = 55.0
            gain = 0.25

            [pulse]
            period_secs = 30.0
            "#,
        )
        .unwrap();

        assert_eq!(config.ambient_level, 0.05);
        assert_eq!(config.drone.waveform, Waveform::Triangle);
        assert_eq!(config.drone.frequency_hz, 55.0);
        assert_eq!(config.harmonic, SynthConfig::default().harmonic);
        assert_eq!(config.pulse.period_secs, 30.0);
        assert_eq!(config.pulse.depth, PulseConfig::default().depth);
        assert_eq!(config.gestures, vec![GestureKind::Click, GestureKind::Key]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn invalid_toml_values_are_rejected() {
        let err = SynthConfig::from_toml_str("fade_secs = -1.0").unwrap_err();
        assert!(matches!(err, SynthError::InvalidConfig { .. }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SynthConfig::from_toml_str("ambient_level = ").unwrap_err();
        assert!(matches!(err, SynthError::ConfigParse(_)));
    }
}
