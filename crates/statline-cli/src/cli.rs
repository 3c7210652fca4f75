//! CLI argument definitions for statline.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "statline",
    version,
    about = "Enrich a whoscored.com player table with per-90 rates and career totals",
    long_about = "Enrich a player's whoscored.com \"Tournaments\" table.\n\n\
                  Splits appearances into starts and substitute appearances, merges\n\
                  competitions within a season, adds per-90 rates and one Combined\n\
                  row per team. The file is overwritten unless --output is given."
)]
pub struct Cli {
    /// Path to the exported .csv file (prompted for when omitted).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Write the enriched table here instead of overwriting the input.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Run every stage and print the result without writing anything.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn path_is_optional() {
        let cli = Cli::try_parse_from(["statline"]).unwrap();
        assert!(cli.path.is_none());
        assert!(!cli.dry_run);
    }

    #[test]
    fn parses_output_and_dry_run() {
        let cli = Cli::try_parse_from([
            "statline",
            "player.csv",
            "--output",
            "enriched.csv",
            "--dry-run",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("player.csv")));
        assert_eq!(cli.output, Some(PathBuf::from("enriched.csv")));
        assert!(cli.dry_run);
        assert!(matches!(cli.log_format, LogFormatArg::Json));
    }
}
