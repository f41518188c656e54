//! Main binary entry point for spdx-json.

use clap::Parser;
use spdx_json_converter::errors::ConverterError;
use spdx_json_converter::{Config, report};
use std::path::PathBuf;
use std::process::ExitCode;

/// Parse an SPDX 2.x JSON document, report every problem in it and
/// optionally write it back as normalised JSON.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE", help = "Write the document back as SPDX JSON")]
    output: Option<PathBuf>,

    #[arg(long, help = "Write the output on a single line")]
    compact: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let filter_level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter(None, filter_level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = Config {
        input_file: cli.input,
        output_file: cli.output,
        pretty: !cli.compact,
    };
    let source = config.input_file.display().to_string();

    match spdx_json_converter::run(&config) {
        Ok(document) => {
            println!("{}", report::format_success(&source, &document));
            ExitCode::SUCCESS
        }
        Err(ConverterError::Parsing(err)) => {
            eprint!("{}", report::format_diagnostics(&source, &err));
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("A fatal error occurred:");
            log::error!("{}", e);
            let mut source = std::error::Error::source(&e);
            while let Some(s) = source {
                log::error!("  Caused by: {}", s);
                source = std::error::Error::source(s);
            }
            ExitCode::FAILURE
        }
    }
}
