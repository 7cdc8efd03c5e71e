//! Nefro-Stats - nephrology statistics report exporter
//!
//! Reads the four dashboard endpoint bodies from disk, builds the flat
//! statistics report and writes it as JSON or CSV.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Any failure (unreadable file, malformed payload, bad config)

mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, OutputFormat};
use config::Config;
use nefro_stats_core::{build_report, CalendarMonthAverages, ReportExport, ReportSources};
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    init_logging(&args);
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(&args) {
        error!("Export failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` wins over the verbosity flags.
fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = Config::resolve(args)?;
    let content = render_export(args, &config)?;

    match &config.export.output {
        Some(path) => {
            std::fs::write(path, &content)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => print!("{}", content),
    }

    Ok(())
}

/// Read the sources, build the report and render it in the configured format.
fn render_export(args: &Args, config: &Config) -> Result<String> {
    let estadisticas = read_source(&args.estadisticas)?;
    let estados = read_source(&args.estados)?;
    let demograficos = read_source(&args.demograficos)?;
    let laboratorios = read_source(&args.laboratorios)?;

    let sources =
        ReportSources::from_json_strs(&estadisticas, &estados, &demograficos, &laboratorios)?;

    let mut aggregator = CalendarMonthAverages::new();
    if let Some(max_months) = config.monthly.max_months {
        aggregator = aggregator.with_max_months(max_months);
    }

    let report = build_report(&sources, &aggregator);
    let export = ReportExport::from_report(report, config.export.system_id.clone())?;

    let content = match config.export.format {
        OutputFormat::Json => export.to_json()?,
        OutputFormat::Csv => export.to_csv()?,
    };
    Ok(content)
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))
}
