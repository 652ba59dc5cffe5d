#![deny(unsafe_code)]
//! CLI binary for the huepick color utility.
//!
//! Subcommands:
//! - `fmt <color>` — format a hex color as hex/RGB/HSL text
//! - `hsb <hue> <saturation> <brightness>` — format a wheel-style selection
//! - `init-config` — write a default options file

mod error;

use clap::{Parser, Subcommand, ValueEnum};
use error::CliError;
use huepick_core::{FormatOptions, FormattedColor, Rgb};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "huepick", about = "Color conversion and formatting CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format a hex color as hex, RGB, and HSL text.
    Fmt {
        /// Color as a hex string (e.g. "#ff8800" or "ff8800").
        color: String,

        /// Render hex digits in uppercase.
        #[arg(long)]
        uppercase: bool,

        /// Use bare legacy syntax for RGB and HSL text.
        #[arg(long)]
        legacy: bool,

        /// Options file to load (flags override loaded values).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print only one representation.
        #[arg(long, value_enum)]
        only: Option<OutputKind>,
    },
    /// Format a color selected by hue/saturation/brightness.
    Hsb {
        /// Hue in degrees [0, 360].
        hue: f64,

        /// Saturation as a fraction in [0, 1].
        saturation: f64,

        /// Brightness as a fraction in [0, 1].
        brightness: f64,

        /// Render hex digits in uppercase.
        #[arg(long)]
        uppercase: bool,

        /// Use bare legacy syntax for RGB and HSL text.
        #[arg(long)]
        legacy: bool,

        /// Options file to load (flags override loaded values).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print only one representation.
        #[arg(long, value_enum)]
        only: Option<OutputKind>,
    },
    /// Write a default options file.
    InitConfig {
        /// Output file path.
        #[arg(short, long, default_value = "huepick.json")]
        output: PathBuf,
    },
}

/// Which single representation to print with `--only`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputKind {
    Hex,
    Rgb,
    Hsl,
}

/// Builds the effective options: the loaded file (if any) with flags OR-ed in.
fn resolve_options(
    config: Option<&Path>,
    uppercase: bool,
    legacy: bool,
) -> Result<FormatOptions, CliError> {
    let mut options = match config {
        Some(path) => FormatOptions::from_json_file(path)?,
        None => FormatOptions::default(),
    };
    options.uppercase_hex |= uppercase;
    options.legacy_syntax |= legacy;
    Ok(options)
}

/// Prints the formatted color, honoring `--only` and `--json`.
fn emit(
    formatted: &FormattedColor,
    only: Option<OutputKind>,
    json: bool,
) -> Result<(), CliError> {
    match only {
        Some(kind) => {
            let value = match kind {
                OutputKind::Hex => &formatted.hex,
                OutputKind::Rgb => &formatted.rgb,
                OutputKind::Hsl => &formatted.hsl,
            };
            if json {
                println!("{}", serde_json::to_string(value)?);
            } else {
                println!("{value}");
            }
        }
        None => {
            if json {
                println!("{}", serde_json::to_string_pretty(formatted)?);
            } else {
                println!("Hex: {}", formatted.hex);
                println!("RGB: {}", formatted.rgb);
                println!("HSL: {}", formatted.hsl);
            }
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Fmt {
            color,
            uppercase,
            legacy,
            config,
            only,
        } => {
            let options = resolve_options(config.as_deref(), uppercase, legacy)?;
            let rgb = Rgb::from_hex(&color)?;
            emit(&FormattedColor::new(rgb, options), only, cli.json)?;
        }
        Command::Hsb {
            hue,
            saturation,
            brightness,
            uppercase,
            legacy,
            config,
            only,
        } => {
            if !(0.0..=360.0).contains(&hue) {
                return Err(CliError::Input(format!(
                    "hue must be in [0, 360], got {hue}"
                )));
            }
            if !(0.0..=1.0).contains(&saturation) {
                return Err(CliError::Input(format!(
                    "saturation must be in [0, 1], got {saturation}"
                )));
            }
            if !(0.0..=1.0).contains(&brightness) {
                return Err(CliError::Input(format!(
                    "brightness must be in [0, 1], got {brightness}"
                )));
            }
            let options = resolve_options(config.as_deref(), uppercase, legacy)?;
            let rgb = Rgb::from_hsb(hue / 360.0, saturation, brightness);
            emit(&FormattedColor::new(rgb, options), only, cli.json)?;
        }
        Command::InitConfig { output } => {
            FormatOptions::default().to_json_file(&output)?;
            if cli.json {
                let info = serde_json::json!({
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!("wrote default options -> {}", output.display());
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
