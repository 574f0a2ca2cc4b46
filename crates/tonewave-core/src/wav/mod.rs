//! Streaming WAV container support.
//!
//! This module owns the byte-exact RIFF/WAVE layout: format math, the
//! streaming emitter with deferred size fields, and the parsing helpers
//! used to verify emitted files.

mod emitter;
mod format;
mod pcm;


// Re-export public API
pub use emitter::WaveEmitter;
pub use format::{WavFormat, CHUNK_SIZE_OFFSET, DATA_SIZE_OFFSET, HEADER_LEN};
pub use pcm::{compute_pcm_hash, extract_pcm_data, WavInfo};
