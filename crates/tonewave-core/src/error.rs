//! Error types for tone generation and WAV emission.

use thiserror::Error;

/// Result type for tone operations.
pub type ToneResult<T> = Result<T, ToneError>;

/// Errors that can occur while validating a configuration or emitting a file.
#[derive(Debug, Error)]
pub enum ToneError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid tone frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Invalid peak amplitude.
    #[error("invalid amplitude: {amplitude} (expected 0 < amplitude <= 32767)")]
    InvalidAmplitude {
        /// The invalid amplitude.
        amplitude: f64,
    },

    /// Unsupported channel count.
    #[error("unsupported channel count: {channels} (expected 1 or 2)")]
    InvalidChannels {
        /// The invalid channel count.
        channels: u16,
    },

    /// Unsupported bit depth.
    #[error("unsupported bit depth: {bits} (only 16-bit PCM is supported)")]
    InvalidBitDepth {
        /// The invalid bit depth.
        bits: u16,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_value() {
        let err = ToneError::InvalidSampleRate { rate: 0 };
        assert!(err.to_string().contains('0'));

        let err = ToneError::InvalidFrequency { freq: -250.0 };
        assert!(err.to_string().contains("-250"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ToneError = io.into();
        assert!(matches!(err, ToneError::Io(_)));
    }
}
