//! CLI for the harx HAR extractor.

use anyhow::Result;
use clap::Parser;
use harx_core::config;
use harx_core::extract;
use std::path::PathBuf;

/// Extracts and saves all HTTP response bodies from a HAR file.
#[derive(Debug, Parser)]
#[command(name = "harx")]
#[command(about = "harx: extract HTTP response bodies from a HAR capture", long_about = None)]
pub struct Cli {
    /// Path to the input .har file.
    pub har_file: PathBuf,

    /// Directory to save the extracted files into
    /// (default: the configured default_output_dir, normally "output").
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let output_dir = cli
        .output
        .unwrap_or_else(|| PathBuf::from(cfg.default_output_dir));

    // A load failure is reported and ends the run, but it is not the
    // process's own error: the tool exits normally, like when every
    // entry was simply skipped.
    match extract::extract_archive(&cli.har_file, &output_dir) {
        Ok(report) => println!("Done: {}", report.summary()),
        Err(err) => println!("Error: {:#}", anyhow::Error::new(err)),
    }
    Ok(())
}
