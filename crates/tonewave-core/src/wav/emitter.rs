//! Streaming WAV emitter with deferred size fields.
//!
//! The emitter writes the canonical 44-byte RIFF/WAVE header up front with
//! placeholder bytes in the two size fields, streams interleaved 16-bit PCM
//! frames, and patches `ChunkSize` and `Subchunk2Size` by seeking backward
//! once the total payload length is known. This is the "reserve header,
//! stream payload, backpatch lengths" pattern for length-prefixed containers.

use std::io::{self, Seek, SeekFrom, Write};

use super::format::{WavFormat, CHUNK_SIZE_OFFSET};

/// Incremental writer for one 16-bit PCM WAV stream.
#[derive(Debug)]
pub struct WaveEmitter<W: Write + Seek> {
    writer: W,
    format: WavFormat,
    /// Stream offset immediately after the header.
    data_start: u64,
    frames_written: u64,
}

impl<W: Write + Seek> WaveEmitter<W> {
    /// Writes the header and positions the stream at the start of the data
    /// chunk payload.
    ///
    /// `ChunkSize` and `Subchunk2Size` are left as zero placeholders; their
    /// real values are not known until [`finish`](Self::finish).
    pub fn new(mut writer: W, format: WavFormat) -> io::Result<Self> {
        // RIFF header
        writer.write_all(b"RIFF")?;
        writer.write_all(&0u32.to_le_bytes())?; // ChunkSize, patched in finish()
        writer.write_all(b"WAVE")?;

        // fmt chunk
        writer.write_all(b"fmt ")?;
        writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
        writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
        writer.write_all(&format.channels.to_le_bytes())?;
        writer.write_all(&format.sample_rate.to_le_bytes())?;
        writer.write_all(&format.byte_rate().to_le_bytes())?;
        writer.write_all(&format.block_align().to_le_bytes())?;
        writer.write_all(&format.bits_per_sample.to_le_bytes())?;

        // data chunk
        writer.write_all(b"data")?;
        writer.write_all(&0u32.to_le_bytes())?; // Subchunk2Size, patched in finish()

        let data_start = writer.stream_position()?;

        Ok(Self {
            writer,
            format,
            data_start,
            frames_written: 0,
        })
    }

    /// Appends one interleaved sample frame, little-endian, channel 0 first.
    ///
    /// The frame length must equal the channel count of the format.
    pub fn write_frame(&mut self, frame: &[i16]) -> io::Result<()> {
        if frame.len() != usize::from(self.format.channels) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "frame has {} samples, format has {} channels",
                    frame.len(),
                    self.format.channels
                ),
            ));
        }
        for &sample in frame {
            self.writer.write_all(&sample.to_le_bytes())?;
        }
        self.frames_written += 1;
        Ok(())
    }

    /// Number of frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Backpatches the two size fields and returns the writer.
    ///
    /// `ChunkSize` receives the stream length minus the 8 bytes of the RIFF
    /// tag and the field itself; `Subchunk2Size` receives the byte length of
    /// the sample data. The writer is flushed and left positioned at end of
    /// stream.
    ///
    /// Fails with `InvalidInput` if the stream has grown past what the
    /// 32-bit size fields can express; nothing is patched in that case.
    pub fn finish(mut self) -> io::Result<W> {
        let data_end = self.writer.stream_position()?;
        let overflow = |_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "sample data too large for the 32-bit WAV size fields",
            )
        };
        let chunk_size = u32::try_from(data_end - 8).map_err(overflow)?;
        let data_size = u32::try_from(data_end - self.data_start).map_err(overflow)?;

        self.writer.seek(SeekFrom::Start(CHUNK_SIZE_OFFSET))?;
        self.writer.write_all(&chunk_size.to_le_bytes())?;

        self.writer.seek(SeekFrom::Start(self.data_start - 4))?;
        self.writer.write_all(&data_size.to_le_bytes())?;

        self.writer.seek(SeekFrom::Start(data_end))?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}
