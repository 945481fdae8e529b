//! Error types for the ambient synthesizer.

use thiserror::Error;

/// Result type for synthesizer operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while starting, configuring or exporting the ambience.
#[derive(Debug, Error)]
pub enum SynthError {
    /// The platform declined to start audio output.
    ///
    /// Raised when no output device is available, the device configuration is
    /// unsupported, or the stream cannot be built or started. Always retryable.
    #[error("playback unavailable: {reason}")]
    PlaybackUnavailable {
        /// What the engine reported.
        reason: String,
    },

    /// A configuration value is out of range.
    #[error("invalid config '{field}': {message}")]
    InvalidConfig {
        /// Dotted path of the offending field.
        field: String,
        /// Why it was rejected.
        message: String,
    },

    /// The configuration file could not be parsed.
    #[cfg(feature = "serde")]
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// WAV export failed.
    #[error("WAV export failed: {0}")]
    Wav(#[from] hound::Error),
}

impl SynthError {
    pub fn playback(reason: impl ToString) -> Self {
        SynthError::PlaybackUnavailable {
            reason: reason.to_string(),
        }
    }

    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        SynthError::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True for the retryable "engine said no" case.
    pub fn is_playback_unavailable(&self) -> bool {
        matches!(self, SynthError::PlaybackUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playback_message_includes_reason() {
        let err = SynthError::playback("no default output device");
        assert_eq!(err.to_string(), "playback unavailable: no default output device");
        assert!(err.is_playback_unavailable());
    }

    #[test]
    fn config_error_names_field() {
        let err = SynthError::invalid_config("drone.frequency_hz", "must be positive");
        assert_eq!(
            err.to_string(),
            "invalid config 'drone.frequency_hz': must be positive"
        );
        assert!(!err.is_playback_unavailable());
    }
}
