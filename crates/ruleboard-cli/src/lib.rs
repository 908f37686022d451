//! Ruleboard CLI library
//!
//! This module contains the core CLI logic for the Ruleboard firewall rule
//! extractor.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat, STDOUT};

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use log::{info, warn};

use ruleboard::{RuleExtractor, RuleboardError};

/// Extension of tldraw documents.
const TLDR_EXTENSION: &str = "tldr";

/// Run the Ruleboard CLI application
///
/// This function reads a tldraw document, extracts its firewall rules and
/// writes the rendered table to the output file or standard output.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `RuleboardError` for:
/// - Input files without the `.tldr` extension, unless `--force` is given
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed documents
/// - Export errors
pub fn run(args: &Args) -> Result<(), RuleboardError> {
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(format) = args.format {
        app_config = app_config.with_format(format.into());
    }
    let output = args.output_path(app_config.export().format());

    info!(
        input_path = args.input,
        output_path = output;
        "Extracting firewall rules"
    );

    check_input_extension(Path::new(&args.input), args.force)?;

    let source = fs::read_to_string(&args.input)?;

    let extractor = RuleExtractor::new(app_config);
    let rows = extractor.extract(&source)?;
    let rendered = extractor.render(&rows)?;

    write_output(&output, &rendered, &mut io::stdout().lock())?;

    info!(output_file = output, rows = rows.len(); "Firewall rules exported successfully");

    Ok(())
}

/// Write `rendered` to `stdout` when `output` is [`STDOUT`], else to the
/// file at `output`.
fn write_output(output: &str, rendered: &str, stdout: &mut impl Write) -> io::Result<()> {
    if output == STDOUT {
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()
    } else {
        fs::write(output, rendered)
    }
}

fn check_input_extension(path: &Path, force: bool) -> Result<(), RuleboardError> {
    let is_tldr = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(TLDR_EXTENSION));

    if is_tldr {
        return Ok(());
    }
    if force {
        warn!(path = path.display().to_string(); "Input is not a .tldr file, reading it anyway");
        return Ok(());
    }

    Err(RuleboardError::Io(io::Error::new(
        io::ErrorKind::InvalidInput,
        format!(
            "{} is not a .tldr file (use --force to read it anyway)",
            path.display()
        ),
    )))
}
