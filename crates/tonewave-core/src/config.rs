//! Tone generation configuration.
//!
//! All audio parameters that the original tutorial program hardcoded as
//! process-wide constants live here as an explicit, validated config struct.

use serde::{Deserialize, Serialize};

use crate::error::{ToneError, ToneResult};
use crate::wav::WavFormat;

/// Configuration for one tone emission.
///
/// The defaults reproduce the canonical 2-second, 250 Hz stereo tone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToneConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Tone duration in seconds. Zero is allowed and produces a valid
    /// header-only file.
    pub duration_seconds: f64,
    /// Number of output channels (1 or 2).
    pub num_channels: u16,
    /// Bits per sample. Only 16-bit PCM is supported.
    pub bits_per_sample: u16,
    /// Tone frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude in raw PCM units, at most `i16::MAX`.
    pub amplitude: f64,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            duration_seconds: 2.0,
            num_channels: 2,
            bits_per_sample: 16,
            frequency: 250.0,
            amplitude: 32760.0,
        }
    }
}

impl ToneConfig {
    /// Checks every field against its valid range.
    ///
    /// Returns the first violation found. A passing config is guaranteed to
    /// produce a structurally valid WAV file, degenerate cases included.
    pub fn validate(&self) -> ToneResult<()> {
        if self.sample_rate == 0 {
            return Err(ToneError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if !self.duration_seconds.is_finite() || self.duration_seconds < 0.0 {
            return Err(ToneError::InvalidDuration {
                duration: self.duration_seconds,
            });
        }
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(ToneError::InvalidFrequency {
                freq: self.frequency,
            });
        }
        if !self.amplitude.is_finite()
            || self.amplitude <= 0.0
            || self.amplitude > f64::from(i16::MAX)
        {
            return Err(ToneError::InvalidAmplitude {
                amplitude: self.amplitude,
            });
        }
        if !(1..=2).contains(&self.num_channels) {
            return Err(ToneError::InvalidChannels {
                channels: self.num_channels,
            });
        }
        if self.bits_per_sample != 16 {
            return Err(ToneError::InvalidBitDepth {
                bits: self.bits_per_sample,
            });
        }
        Ok(())
    }

    /// Number of sample frames the tone spans.
    pub fn num_frames(&self) -> u64 {
        (f64::from(self.sample_rate) * self.duration_seconds).round() as u64
    }

    /// WAV format parameters derived from this config.
    pub fn wav_format(&self) -> WavFormat {
        WavFormat {
            channels: self.num_channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bits_per_sample,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_canonical_tone() {
        let config = ToneConfig::default();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.duration_seconds, 2.0);
        assert_eq!(config.num_channels, 2);
        assert_eq!(config.bits_per_sample, 16);
        assert_eq!(config.frequency, 250.0);
        assert_eq!(config.amplitude, 32760.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_num_frames() {
        let config = ToneConfig::default();
        assert_eq!(config.num_frames(), 88200);

        let half_second = ToneConfig {
            duration_seconds: 0.5,
            ..ToneConfig::default()
        };
        assert_eq!(half_second.num_frames(), 22050);
    }

    #[test]
    fn test_zero_duration_is_valid() {
        let config = ToneConfig {
            duration_seconds: 0.0,
            ..ToneConfig::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.num_frames(), 0);
    }

    #[test]
    fn test_rejects_zero_sample_rate() {
        let config = ToneConfig {
            sample_rate: 0,
            ..ToneConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ToneError::InvalidSampleRate { rate: 0 })
        ));
    }

    #[test]
    fn test_rejects_negative_duration() {
        let config = ToneConfig {
            duration_seconds: -1.0,
            ..ToneConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ToneError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_duration() {
        let config = ToneConfig {
            duration_seconds: f64::NAN,
            ..ToneConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_frequency() {
        for freq in [0.0, -440.0, f64::INFINITY] {
            let config = ToneConfig {
                frequency: freq,
                ..ToneConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ToneError::InvalidFrequency { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_out_of_range_amplitude() {
        for amplitude in [0.0, -1.0, 40000.0] {
            let config = ToneConfig {
                amplitude,
                ..ToneConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ToneError::InvalidAmplitude { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_unsupported_channels_and_depth() {
        let config = ToneConfig {
            num_channels: 3,
            ..ToneConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ToneError::InvalidChannels { channels: 3 })
        ));

        let config = ToneConfig {
            bits_per_sample: 8,
            ..ToneConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ToneError::InvalidBitDepth { bits: 8 })
        ));
    }

    #[test]
    fn test_deserializes_partial_config() {
        let config: ToneConfig =
            serde_json::from_str(r#"{"frequency": 440.0, "duration_seconds": 1.0}"#)
                .expect("partial config should deserialize");
        assert_eq!(config.frequency, 440.0);
        assert_eq!(config.duration_seconds, 1.0);
        assert_eq!(config.sample_rate, 44100);
    }

    #[test]
    fn test_rejects_unknown_config_keys() {
        let result: Result<ToneConfig, _> = serde_json::from_str(r#"{"freqency": 440.0}"#);
        assert!(result.is_err());
    }
}
