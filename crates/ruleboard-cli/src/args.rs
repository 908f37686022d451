//! Command-line argument definitions for the Ruleboard CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the output format,
//! configuration file selection, and logging verbosity.

use std::str::FromStr;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use ruleboard::config::ExportFormat;

/// Output path that writes to standard output instead of a file.
pub const STDOUT: &str = "-";

/// Base name of the output file when `--output` is not given.
const DEFAULT_OUTPUT_STEM: &str = "firewall_rules";

/// Level used when `--log-level` is not a valid level name.
const FALLBACK_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Command-line arguments for the Ruleboard firewall rule extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input tldraw document
    #[arg(help = "Path to the input .tldr file")]
    pub input: String,

    /// Path to the output file, `-` for standard output
    /// [default: firewall_rules.csv, or .json with `--format json`]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format, overriding the configuration file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Accept input files without the .tldr extension
    #[arg(long)]
    pub force: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Returns the output path, falling back to a default named after
    /// `format`.
    pub fn output_path(&self, format: ExportFormat) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| format!("{DEFAULT_OUTPUT_STEM}.{}", format.extension()))
    }

    /// Returns the requested log level, or `warn` if the name is invalid.
    pub fn log_level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or_else(|_| {
            eprintln!(
                "Invalid log level: {}. Using '{}' instead.",
                self.log_level,
                FALLBACK_LOG_LEVEL.as_str().to_lowercase()
            );
            FALLBACK_LOG_LEVEL
        })
    }
}

/// Output formats selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => ExportFormat::Csv,
            OutputFormat::Json => ExportFormat::Json,
        }
    }
}
