//! tonewave CLI - generates cross-faded sine tone WAV files
//!
//! This binary provides commands for emitting the synthesized tone to disk
//! and for inspecting the header of an existing WAV file.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

mod commands;

use commands::generate::ToneOverrides;

/// tonewave - Synthetic Tone WAV Generator
#[derive(Parser)]
#[command(name = "tonewave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a tone and write it as a 16-bit PCM WAV file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "tone.wav")]
        output: String,

        /// Load base configuration from a JSON file (flags override it)
        #[arg(short, long)]
        config: Option<String>,

        /// Sample rate in Hz
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Tone duration in seconds
        #[arg(long)]
        duration: Option<f64>,

        /// Tone frequency in Hz
        #[arg(long)]
        frequency: Option<f64>,

        /// Number of output channels (1 or 2)
        #[arg(long)]
        channels: Option<u16>,

        /// Peak amplitude in raw PCM units
        #[arg(long)]
        amplitude: Option<f64>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Inspect the header of an existing WAV file
    Inspect {
        /// Path to the WAV file
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            output,
            config,
            sample_rate,
            duration,
            frequency,
            channels,
            amplitude,
            json,
        } => commands::generate::run(
            &output,
            config.as_deref(),
            ToneOverrides {
                sample_rate,
                duration,
                frequency,
                channels,
                amplitude,
            },
            json,
        ),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::from(2)
        }
    }
}
