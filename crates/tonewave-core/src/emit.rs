//! Top-level tone emission.
//!
//! Ties the pieces together: validate the config, open the output, stream
//! the synthesized frames through the WAV emitter, backpatch the size
//! fields, and report what was written.

use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use crate::config::ToneConfig;
use crate::error::{ToneError, ToneResult};
use crate::tone::{CrossfadeTone, MonoTone};
use crate::wav::{WavFormat, WaveEmitter, HEADER_LEN};

/// Summary of one completed emission.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EmitReport {
    /// Sample frames written per channel.
    pub num_frames: u64,
    /// Byte length of the data chunk payload.
    pub data_size: u64,
    /// Total file length, header included.
    pub file_size: u64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels.
    pub channels: u16,
    /// BLAKE3 hash of the PCM payload. Identical configs always produce
    /// identical hashes.
    pub pcm_hash: String,
}

impl EmitReport {
    /// Duration of the emitted audio in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames as f64 / f64::from(self.sample_rate)
    }
}

/// Streams the tone for `config` into `writer` and returns it with the
/// emission summary. The config must already be validated.
fn stream_tone<W: Write + Seek>(writer: W, config: &ToneConfig) -> ToneResult<(W, EmitReport)> {
    let format: WavFormat = config.wav_format();
    let mut emitter = WaveEmitter::new(writer, format)?;
    let mut hasher = blake3::Hasher::new();

    match config.num_channels {
        1 => {
            for sample in MonoTone::new(config) {
                hasher.update(&sample.to_le_bytes());
                emitter.write_frame(&[sample])?;
            }
        }
        2 => {
            for (left, right) in CrossfadeTone::new(config) {
                hasher.update(&left.to_le_bytes());
                hasher.update(&right.to_le_bytes());
                emitter.write_frame(&[left, right])?;
            }
        }
        channels => return Err(ToneError::InvalidChannels { channels }),
    }

    let num_frames = emitter.frames_written();
    let writer = emitter.finish()?;

    let data_size = num_frames * u64::from(format.block_align());
    let report = EmitReport {
        num_frames,
        data_size,
        file_size: HEADER_LEN + data_size,
        sample_rate: config.sample_rate,
        channels: config.num_channels,
        pcm_hash: hasher.finalize().to_hex().to_string(),
    };
    Ok((writer, report))
}

/// Emits the configured tone to a WAV file at `path`.
///
/// Any existing file is truncated. Failure to open the path surfaces
/// immediately as [`ToneError::Io`]; no retry or cleanup is attempted.
pub fn emit(path: impl AsRef<Path>, config: &ToneConfig) -> ToneResult<EmitReport> {
    config.validate()?;

    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);
    let (writer, report) = stream_tone(writer, config)?;
    writer
        .into_inner()
        .map_err(|err| ToneError::Io(err.into_error()))?;
    Ok(report)
}

/// Emits the configured tone into an in-memory buffer.
///
/// Byte-identical to what [`emit`] writes to disk for the same config.
pub fn emit_to_vec(config: &ToneConfig) -> ToneResult<Vec<u8>> {
    config.validate()?;

    let cursor = Cursor::new(Vec::new());
    let (cursor, _report) = stream_tone(cursor, config)?;
    Ok(cursor.into_inner())
}
