//! Generate command implementation
//!
//! Builds a tone configuration from an optional JSON file plus flag
//! overrides, emits the WAV file, and reports what was written.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use tonewave_core::{emit, ToneConfig, ToneError};

/// Flag-level overrides applied on top of the base configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct ToneOverrides {
    /// Sample rate in Hz.
    pub sample_rate: Option<u32>,
    /// Duration in seconds.
    pub duration: Option<f64>,
    /// Tone frequency in Hz.
    pub frequency: Option<f64>,
    /// Channel count.
    pub channels: Option<u16>,
    /// Peak amplitude in PCM units.
    pub amplitude: Option<f64>,
}

impl ToneOverrides {
    fn apply(self, mut config: ToneConfig) -> ToneConfig {
        if let Some(rate) = self.sample_rate {
            config.sample_rate = rate;
        }
        if let Some(duration) = self.duration {
            config.duration_seconds = duration;
        }
        if let Some(freq) = self.frequency {
            config.frequency = freq;
        }
        if let Some(channels) = self.channels {
            config.num_channels = channels;
        }
        if let Some(amplitude) = self.amplitude {
            config.amplitude = amplitude;
        }
        config
    }
}

/// Run the generate command
///
/// # Arguments
/// * `output` - Output WAV file path
/// * `config_path` - Optional JSON configuration file
/// * `overrides` - Flag overrides applied after the config file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 configuration error, 2 emission error
pub fn run(
    output: &str,
    config_path: Option<&str>,
    overrides: ToneOverrides,
    json_output: bool,
) -> Result<ExitCode> {
    let base = match config_path {
        Some(path) => {
            let loaded = load_config(Path::new(path))
                .with_context(|| format!("Failed to load config file: {}", path));
            match loaded {
                Ok(config) => config,
                // A bad config file is a configuration error, not an
                // emission failure: report it and exit 1.
                Err(err) => {
                    if json_output {
                        let diagnostics = serde_json::json!({
                            "success": false,
                            "error": format!("{:#}", err),
                        });
                        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
                    } else {
                        eprintln!("{} {:#}", "Invalid configuration:".red().bold(), err);
                    }
                    return Ok(ExitCode::from(1));
                }
            }
        }
        None => ToneConfig::default(),
    };
    let config = overrides.apply(base);

    if let Err(err) = config.validate() {
        if json_output {
            let diagnostics = serde_json::json!({
                "success": false,
                "error": err.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&diagnostics)?);
        } else {
            eprintln!("{} {}", "Invalid configuration:".red().bold(), err);
        }
        return Ok(ExitCode::from(1));
    }

    if json_output {
        run_json(output, &config)
    } else {
        run_human(output, &config)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(output: &str, config: &ToneConfig) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Generating tone:".cyan().bold(), output);
    println!(
        "{} {} Hz, {} s, {} channel(s), {} Hz sample rate",
        "Parameters:".cyan().bold(),
        config.frequency,
        config.duration_seconds,
        config.num_channels,
        config.sample_rate
    );

    let report = match emit(output, config) {
        Ok(report) => report,
        Err(err) => return Ok(report_emit_error(err)),
    };

    println!(
        "{} {} ({} bytes, {} frames, {:.3} s)",
        "Wrote".green().bold(),
        output,
        report.file_size,
        report.num_frames,
        report.duration_seconds()
    );
    println!("{} {}", "PCM hash:".dimmed(), report.pcm_hash);
    println!("{} {:.2?}", "Elapsed:".dimmed(), start.elapsed());

    Ok(ExitCode::SUCCESS)
}

/// Run generate with machine-readable JSON output
fn run_json(output: &str, config: &ToneConfig) -> Result<ExitCode> {
    let (success, report, error) = match emit(output, config) {
        Ok(report) => (true, Some(report), None),
        Err(err) => (false, None, Some(err.to_string())),
    };
    let exit = if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    };

    let diagnostics = serde_json::json!({
        "success": success,
        "output": output,
        "config": config,
        "report": report,
        "error": error,
    });
    println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    Ok(exit)
}

fn report_emit_error(err: ToneError) -> ExitCode {
    match err {
        ToneError::Io(err) => {
            eprintln!("{} {}", "Failed to write output:".red().bold(), err);
            ExitCode::from(2)
        }
        err => {
            eprintln!("{} {}", "Invalid configuration:".red().bold(), err);
            ExitCode::from(1)
        }
    }
}

fn load_config(path: &Path) -> Result<ToneConfig> {
    let contents = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&contents)?;
    Ok(config)
}
