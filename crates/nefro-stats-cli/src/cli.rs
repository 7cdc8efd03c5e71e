//! Command-line interface argument parsing.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Nefro-Stats - nephrology statistics report exporter
///
/// Reads the four dashboard endpoint bodies (each a `{ "data": ... }`
/// envelope) and writes the flat report as JSON or CSV.
///
/// Examples:
///   nefro-stats --estadisticas e.json --estados s.json --demograficos d.json --laboratorios l.json
///   nefro-stats ... --format csv --output reporte.csv
///   nefro-stats ... --max-months 12 --system-id nefro-hgm
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Body of the /estadisticas endpoint
    #[arg(long, value_name = "FILE")]
    pub estadisticas: PathBuf,

    /// Body of the /estados endpoint
    #[arg(long, value_name = "FILE")]
    pub estados: PathBuf,

    /// Body of the /demograficos endpoint
    #[arg(long, value_name = "FILE")]
    pub demograficos: PathBuf,

    /// Body of the /laboratorios endpoint
    #[arg(long, value_name = "FILE")]
    pub laboratorios: PathBuf,

    /// Output format (defaults to the config file, then JSON)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file path; writes to stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for nefro-stats.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep only the most recent N months in the monthly series
    #[arg(long, value_name = "COUNT")]
    pub max_months: Option<usize>,

    /// Identifier of the exporting system, recorded in the export metadata
    #[arg(long, value_name = "ID", env = "NEFRO_STATS_SYSTEM_ID")]
    pub system_id: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Export output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl Args {
    /// Default log filter derived from the verbosity flags.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Vec<&'static str> {
        vec![
            "nefro-stats",
            "--estadisticas",
            "e.json",
            "--estados",
            "s.json",
            "--demograficos",
            "d.json",
            "--laboratorios",
            "l.json",
        ]
    }

    #[test]
    fn test_parse_minimal_args() {
        let args = Args::try_parse_from(base_args()).unwrap();

        assert_eq!(args.estados, PathBuf::from("s.json"));
        assert!(args.format.is_none());
        assert!(args.output.is_none());
        assert_eq!(args.log_level(), "info");
    }

    #[test]
    fn test_parse_format_and_verbosity() {
        let mut argv = base_args();
        argv.extend(["--format", "csv", "-v", "--max-months", "6"]);

        let args = Args::try_parse_from(argv).unwrap();

        assert_eq!(args.format, Some(OutputFormat::Csv));
        assert_eq!(args.max_months, Some(6));
        assert_eq!(args.log_level(), "debug");
    }

    #[test]
    fn test_missing_source_is_rejected() {
        let argv = base_args();
        assert!(Args::try_parse_from(argv[..7].iter().copied()).is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let mut argv = base_args();
        argv.extend(["-v", "-q"]);
        assert!(Args::try_parse_from(argv).is_err());
    }
}
