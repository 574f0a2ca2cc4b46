//! Cross-faded sine tone synthesis.
//!
//! The stereo tone is not a constant-amplitude sine duplicated into both
//! channels: the left channel ramps up from silence over the whole duration
//! while the right channel ramps down from full amplitude, producing a
//! cross-fade between the channels. This envelope is the documented behavior
//! of the tone and is preserved as-is.

use crate::config::ToneConfig;

const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

/// Saturates a raw sample value to the representable 16-bit signed range.
///
/// Values outside the range clip to the nearest bound rather than wrap.
pub fn saturate(value: f64) -> i16 {
    value.clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}

/// Sine oscillator value at discrete step `i`.
fn sine_at(i: u64, sample_rate: u32, frequency: f64) -> f64 {
    (TWO_PI * frequency * i as f64 / f64::from(sample_rate)).sin()
}

/// Linear amplitude ramp at discrete step `i`: zero at the first sample,
/// `peak` after one second, `duration × peak` at the end of the tone.
fn ramp_at(i: u64, sample_rate: u32, peak: f64) -> f64 {
    i as f64 / f64::from(sample_rate) * peak
}

/// Iterator over the stereo sample frames of the cross-faded tone.
///
/// Yields `(left, right)` pairs of saturated 16-bit samples:
/// `left = ramp × sine / 2`, `right = (peak − ramp) × sine`.
#[derive(Debug, Clone)]
pub struct CrossfadeTone {
    sample_rate: u32,
    frequency: f64,
    peak: f64,
    num_frames: u64,
    position: u64,
}

impl CrossfadeTone {
    /// Creates the stereo frame source for a config.
    pub fn new(config: &ToneConfig) -> Self {
        Self {
            sample_rate: config.sample_rate,
            frequency: config.frequency,
            peak: config.amplitude,
            num_frames: config.num_frames(),
            position: 0,
        }
    }
}

impl Iterator for CrossfadeTone {
    type Item = (i16, i16);

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.num_frames {
            return None;
        }
        let i = self.position;
        self.position += 1;

        let sine = sine_at(i, self.sample_rate, self.frequency);
        let ramp = ramp_at(i, self.sample_rate, self.peak);
        let left = saturate(ramp * sine / 2.0);
        let right = saturate((self.peak - ramp) * sine);
        Some((left, right))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.num_frames - self.position) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CrossfadeTone {}

/// Iterator over the mono reduction of the tone: the un-split ramped sine
/// `ramp × sine`, saturated to 16 bits.
#[derive(Debug, Clone)]
pub struct MonoTone {
    sample_rate: u32,
    frequency: f64,
    peak: f64,
    num_frames: u64,
    position: u64,
}

impl MonoTone {
    /// Creates the mono frame source for a config.
    pub fn new(config: &ToneConfig) -> Self {
        Self {
            sample_rate: config.sample_rate,
            frequency: config.frequency,
            peak: config.amplitude,
            num_frames: config.num_frames(),
            position: 0,
        }
    }
}

impl Iterator for MonoTone {
    type Item = i16;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.num_frames {
            return None;
        }
        let i = self.position;
        self.position += 1;

        let sine = sine_at(i, self.sample_rate, self.frequency);
        let ramp = ramp_at(i, self.sample_rate, self.peak);
        Some(saturate(ramp * sine))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.num_frames - self.position) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MonoTone {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToneConfig;

    fn short_config() -> ToneConfig {
        ToneConfig {
            sample_rate: 8000,
            duration_seconds: 0.25,
            frequency: 100.0,
            ..ToneConfig::default()
        }
    }

    #[test]
    fn test_frame_count_matches_config() {
        let config = short_config();
        let tone = CrossfadeTone::new(&config);
        assert_eq!(tone.len(), 2000);
        assert_eq!(tone.count(), 2000);
    }

    #[test]
    fn test_first_frame_is_silent() {
        // At i = 0 both the ramp and the sine are zero.
        let mut tone = CrossfadeTone::new(&short_config());
        assert_eq!(tone.next(), Some((0, 0)));
    }

    #[test]
    fn test_crossfade_direction() {
        // Early in the tone the right channel carries nearly the full
        // amplitude while the left is still close to silence; by the end of
        // a one-second tone the relation flips.
        let config = ToneConfig {
            sample_rate: 8000,
            duration_seconds: 1.0,
            frequency: 100.0,
            ..ToneConfig::default()
        };
        let frames: Vec<(i16, i16)> = CrossfadeTone::new(&config).collect();

        let early_left: i64 = frames[..400].iter().map(|f| i64::from(f.0.unsigned_abs())).max().unwrap();
        let early_right: i64 = frames[..400].iter().map(|f| i64::from(f.1.unsigned_abs())).max().unwrap();
        assert!(early_right > early_left * 4);

        let late = &frames[frames.len() - 400..];
        let late_left: i64 = late.iter().map(|f| i64::from(f.0.unsigned_abs())).max().unwrap();
        let late_right: i64 = late.iter().map(|f| i64::from(f.1.unsigned_abs())).max().unwrap();
        assert!(late_left > late_right * 4);
    }

    #[test]
    fn test_saturate_clips_instead_of_wrapping() {
        assert_eq!(saturate(40000.0), i16::MAX);
        assert_eq!(saturate(-40000.0), i16::MIN);
        assert_eq!(saturate(0.0), 0);
        assert_eq!(saturate(-1.5), -1); // truncation toward zero inside range
    }

    #[test]
    fn test_long_tone_saturates() {
        // With a duration over 2 seconds the left-channel ramp exceeds the
        // 16-bit range near the end; the samples must clip to the nearest
        // bound, not wrap. The bounds are asymmetric: positive overflow
        // clips to i16::MAX, negative overflow to i16::MIN.
        let config = ToneConfig {
            sample_rate: 8000,
            duration_seconds: 4.0,
            frequency: 50.0,
            ..ToneConfig::default()
        };
        let frames: Vec<(i16, i16)> = CrossfadeTone::new(&config).collect();
        let max_left = frames.iter().map(|f| f.0).max().unwrap();
        let min_left = frames.iter().map(|f| f.0).min().unwrap();
        assert_eq!(max_left, i16::MAX);
        assert_eq!(min_left, i16::MIN);
    }

    #[test]
    fn test_mono_reduction() {
        let config = ToneConfig {
            num_channels: 1,
            ..short_config()
        };
        let samples: Vec<i16> = MonoTone::new(&config).collect();
        assert_eq!(samples.len(), 2000);
        assert_eq!(samples[0], 0);
        assert!(samples.iter().any(|&s| s != 0));
    }

    #[test]
    fn test_zero_duration_yields_no_frames() {
        let config = ToneConfig {
            duration_seconds: 0.0,
            ..ToneConfig::default()
        };
        assert_eq!(CrossfadeTone::new(&config).count(), 0);
        assert_eq!(MonoTone::new(&config).count(), 0);
    }
}
