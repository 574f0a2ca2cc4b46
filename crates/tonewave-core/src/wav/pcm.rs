//! WAV header parsing, PCM data extraction and hashing.

use serde::Serialize;

use super::format::WavFormat;

/// Header fields decoded from an existing WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WavInfo {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// `ChunkSize` field of the RIFF header.
    pub chunk_size: u32,
    /// Byte length of the data chunk payload.
    pub data_size: u32,
}

impl WavInfo {
    /// Decodes the RIFF header, fmt chunk, and data chunk size of a WAV
    /// buffer. Returns `None` for anything that is not linear PCM or does
    /// not carry both chunks.
    pub fn parse(wav_data: &[u8]) -> Option<Self> {
        if wav_data.len() < 44 {
            return None;
        }

        // Verify RIFF header
        if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
            return None;
        }
        let chunk_size = u32::from_le_bytes([wav_data[4], wav_data[5], wav_data[6], wav_data[7]]);

        let mut fmt: Option<(u16, u32, u16)> = None;
        let mut data_size: Option<u32> = None;

        // Walk sub-chunks
        let mut pos = 12;
        while pos + 8 <= wav_data.len() {
            let chunk_id = &wav_data[pos..pos + 4];
            let sub_size = u32::from_le_bytes([
                wav_data[pos + 4],
                wav_data[pos + 5],
                wav_data[pos + 6],
                wav_data[pos + 7],
            ]) as usize;
            let body = pos + 8;

            if chunk_id == b"fmt " && sub_size >= 16 && body + 16 <= wav_data.len() {
                let audio_format = u16::from_le_bytes([wav_data[body], wav_data[body + 1]]);
                if audio_format != 1 {
                    return None; // not linear PCM
                }
                let channels = u16::from_le_bytes([wav_data[body + 2], wav_data[body + 3]]);
                let sample_rate = u32::from_le_bytes([
                    wav_data[body + 4],
                    wav_data[body + 5],
                    wav_data[body + 6],
                    wav_data[body + 7],
                ]);
                let bits = u16::from_le_bytes([wav_data[body + 14], wav_data[body + 15]]);
                fmt = Some((channels, sample_rate, bits));
            } else if chunk_id == b"data" && body + sub_size <= wav_data.len() {
                data_size = Some(sub_size as u32);
            }

            pos = body + sub_size;
            // Align to word boundary
            if !sub_size.is_multiple_of(2) {
                pos += 1;
            }
        }

        let (channels, sample_rate, bits_per_sample) = fmt?;
        Some(Self {
            channels,
            sample_rate,
            bits_per_sample,
            chunk_size,
            data_size: data_size?,
        })
    }

    /// Format parameters of the parsed file.
    pub fn format(&self) -> WavFormat {
        WavFormat {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bits_per_sample,
        }
    }

    /// Number of sample frames in the data chunk.
    pub fn num_frames(&self) -> u64 {
        let block_align = u32::from(self.format().block_align());
        if block_align == 0 {
            return 0;
        }
        u64::from(self.data_size / block_align)
    }

    /// Playback duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames() as f64 / f64::from(self.sample_rate)
    }
}

/// Extracts the raw PCM payload from a WAV file buffer.
///
/// Used for comparing WAV files by their audio content only.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 {
        return None;
    }

    // Verify RIFF header
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    // Find data chunk
    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = data_start + chunk_size;
            if data_end <= wav_data.len() {
                return Some(&wav_data[data_start..data_end]);
            }
        }

        pos += 8 + chunk_size;
        // Align to word boundary
        if !chunk_size.is_multiple_of(2) {
            pos += 1;
        }
    }

    None
}

/// Computes the BLAKE3 hash of a WAV file's PCM payload.
///
/// Returns `None` if the buffer is not a valid WAV file.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
