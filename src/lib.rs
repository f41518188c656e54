//! Main library for the SPDX JSON converter.
//!
//! Converts between the SPDX 2.x document model and its JSON serialization.
//! Parsing reports every problem in the input at once instead of stopping at
//! the first one.

pub mod casing;
pub mod converter;
pub mod datetime_conversions;
pub mod errors;
pub mod formats;
pub mod logger;
pub mod models_spdx;
pub mod parser;
pub mod report;
pub mod version_detection;

use errors::ConverterError;
use formats::Format;
use log::info;
use models_spdx::Document;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level configuration for a run.
#[derive(Debug)]
pub struct Config {
    pub input_file: PathBuf,
    /// Where to write the re-serialized document. `None` only parses.
    pub output_file: Option<PathBuf>,
    /// Indent the output.
    pub pretty: bool,
}

/// The main entry point.
///
/// Reads the whole input, parses it into a [`Document`] and, if an output
/// file is configured, writes the document back as SPDX JSON.
pub fn run(config: &Config) -> Result<Document, ConverterError> {
    let start_time = Instant::now();
    info!("  Input: {}", config.input_file.display());
    if let Some(output_file) = &config.output_file {
        info!("  Output: {}", output_file.display());
    }

    // --- 1. Read and check the input ---
    let content = std::fs::read(&config.input_file)
        .map_err(|e| ConverterError::Io(e, "Failed to read input file".to_string()))?;
    let input_format = match Format::from_extension(&config.input_file) {
        Some(format) => format,
        None => Format::from_content(&content)?,
    };
    info!("  Input format: {}", input_format.name());
    input_format.ensure_supported()?;

    // --- 2. Parse ---
    let parse_start = Instant::now();
    let document = formats::spdx::json::parse(content.as_slice())?;
    info!(
        "Parsed {} packages, {} files, {} snippets. (Took {:.2?})",
        document.packages.len(),
        document.files.len(),
        document.snippets.len(),
        parse_start.elapsed()
    );

    // --- 3. Write ---
    if let Some(output_file) = &config.output_file {
        let write_start = Instant::now();
        let file = File::create(output_file)
            .map_err(|e| ConverterError::Io(e, "Failed to create output file".to_string()))?;
        formats::spdx::json::write(BufWriter::new(file), &document, config.pretty)?;
        info!("Wrote SPDX JSON. (Took {:.2?})", write_start.elapsed());
    }

    info!("Total execution time: {:.2?}", start_time.elapsed());
    Ok(document)
}
