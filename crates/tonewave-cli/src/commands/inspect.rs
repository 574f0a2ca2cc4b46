//! Inspect command implementation
//!
//! Parses the header of an existing WAV file and prints its format fields,
//! data size, duration, and PCM payload hash.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use tonewave_core::wav::{compute_pcm_hash, WavInfo};

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 unparseable file
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let wav_data =
        std::fs::read(input).with_context(|| format!("Failed to read file: {}", input))?;

    let Some(info) = WavInfo::parse(&wav_data) else {
        if json_output {
            let diagnostics = serde_json::json!({
                "success": false,
                "input": input,
                "error": "not a 16-bit linear PCM WAV file",
            });
            println!("{}", serde_json::to_string_pretty(&diagnostics)?);
        } else {
            eprintln!(
                "{} {} is not a linear PCM WAV file",
                "Invalid input:".red().bold(),
                input
            );
        }
        return Ok(ExitCode::from(1));
    };
    let pcm_hash = compute_pcm_hash(&wav_data);

    if json_output {
        let diagnostics = serde_json::json!({
            "success": true,
            "input": input,
            "info": info,
            "num_frames": info.num_frames(),
            "duration_seconds": info.duration_seconds(),
            "file_size": wav_data.len(),
            "pcm_hash": pcm_hash,
        });
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "File:".cyan().bold(), input);
    println!("{} {}", "Channels:".cyan().bold(), info.channels);
    println!("{} {} Hz", "Sample rate:".cyan().bold(), info.sample_rate);
    println!(
        "{} {}",
        "Bits per sample:".cyan().bold(),
        info.bits_per_sample
    );
    println!(
        "{} {} bytes ({} frames, {:.3} s)",
        "Data:".cyan().bold(),
        info.data_size,
        info.num_frames(),
        info.duration_seconds()
    );
    println!(
        "{} {} bytes (chunk size {})",
        "File size:".cyan().bold(),
        wav_data.len(),
        info.chunk_size
    );
    if let Some(hash) = pcm_hash {
        println!("{} {}", "PCM hash:".dimmed(), hash);
    }

    Ok(ExitCode::SUCCESS)
}
