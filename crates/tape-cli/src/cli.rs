//! CLI argument definitions for `loan-tape`.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "loan-tape",
    version,
    about = "Map, validate, and ingest loan tapes",
    long_about = "Map spreadsheet columns onto canonical loan fields, validate each row,\n\
                  and convert tapes into typed loan records.\n\n\
                  Quick validation reports issues per row; strict ingestion accepts\n\
                  a tape only when every row passes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML configuration file (mapping overrides, ingest policy, output batching).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix pretty and compact log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List canonical fields with their labels and aliases.
    Fields,

    /// Show how a tape's headers map onto canonical fields.
    Map(MapArgs),

    /// Validate a tape and report issues per row.
    Validate(ValidateArgs),

    /// Convert a tape into loan records, rejecting it if any row fails.
    Ingest(IngestArgs),
}

#[derive(Parser)]
pub struct MapArgs {
    /// Path to the tape (CSV).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Use the ingestion field set and header rule.
    #[arg(long = "ingest")]
    pub ingest: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the tape (CSV).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write summary.json and cleaned.csv to this directory.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the summary report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct IngestArgs {
    /// Path to the tape (CSV).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write records-NNNN.json batches to this directory.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Records per output file (overrides the config file).
    #[arg(long = "batch-size", value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub batch_size: Option<u32>,
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

/// Build logging configuration from CLI flags with consistent precedence.
pub fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_timestamps = cli.log_timestamps;
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("loan-tape").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn timestamps_are_off_unless_requested() {
        let config = log_config_from_cli(&parse(&["fields"]));
        assert!(!config.with_timestamps);

        let config = log_config_from_cli(&parse(&["fields", "--log-timestamps"]));
        assert!(config.with_timestamps);
    }

    #[test]
    fn explicit_level_disables_env_filter() {
        let config = log_config_from_cli(&parse(&[
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--color",
            "never",
            "fields",
        ]));
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.with_ansi);
    }

    #[test]
    fn verbosity_flags_set_the_level() {
        let config = log_config_from_cli(&parse(&["-v", "fields"]));
        assert_eq!(config.level_filter, LevelFilter::INFO);
        assert!(!config.use_env_filter);

        let config = log_config_from_cli(&parse(&["fields"]));
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
    }

    #[test]
    fn batch_size_must_be_positive() {
        assert!(
            Cli::try_parse_from(["loan-tape", "ingest", "tape.csv", "--batch-size", "0"]).is_err()
        );
    }
}
