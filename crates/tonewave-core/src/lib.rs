//! tonewave core library
//!
//! Synthesizes a fixed-duration cross-faded stereo sine tone and writes it
//! as an uncompressed 16-bit PCM RIFF/WAVE file.
//!
//! # Overview
//!
//! Emission is a single linear pass with one backward patch at the end: the
//! 44-byte header is written with placeholder size fields, the interleaved
//! samples are streamed behind it, and the two deferred lengths
//! (`ChunkSize`, `Subchunk2Size`) are patched via tracked offsets once the
//! payload length is known.
//!
//! # Determinism
//!
//! Synthesis has no random or time-dependent input: the same [`ToneConfig`]
//! always produces a byte-identical file. Every emission reports the BLAKE3
//! hash of its PCM payload so this can be checked cheaply.
//!
//! # Example
//!
//! ```no_run
//! use tonewave_core::{emit, ToneConfig};
//!
//! let config = ToneConfig::default();
//! let report = emit("tone.wav", &config)?;
//! println!("{} bytes, PCM hash {}", report.file_size, report.pcm_hash);
//! # Ok::<(), tonewave_core::ToneError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`emit()`] / [`emit_to_vec()`] - top-level emission entry points
//! - [`config`] - validated tone configuration
//! - [`tone`] - cross-fade sine frame sources
//! - [`wav`] - streaming WAV container writer and parsing helpers

pub mod config;
pub mod emit;
pub mod error;
pub mod tone;
pub mod wav;

// Re-export main types at crate root
pub use config::ToneConfig;
pub use emit::{emit, emit_to_vec, EmitReport};
pub use error::{ToneError, ToneResult};
pub use wav::{WavFormat, WavInfo, WaveEmitter};
