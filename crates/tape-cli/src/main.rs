//! Loan tape CLI.

use clap::Parser;
use tape_cli::cli::{Cli, Command, log_config_from_cli};
use tape_cli::commands::{run_fields, run_ingest, run_map, run_validate, summary_report};
use tape_cli::config::TapeConfig;
use tape_cli::logging::init_logging;
use tape_cli::summary::{print_ingest, print_validation};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let config = match TapeConfig::load_optional(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    };
    let exit_code = match cli.command {
        Command::Fields => match run_fields() {
            Ok(()) => 0,
            Err(error) => report_error(&error),
        },
        Command::Map(args) => match run_map(&args, &config) {
            Ok(()) => 0,
            Err(error) => report_error(&error),
        },
        Command::Validate(args) => match run_validate(&args, &config) {
            Ok(result) => {
                if args.json {
                    match serde_json::to_string_pretty(&summary_report(&result)) {
                        Ok(json) => println!("{json}"),
                        Err(error) => eprintln!("error: {error}"),
                    }
                } else {
                    print_validation(&result);
                }
                if result.has_errors() { 1 } else { 0 }
            }
            Err(error) => report_error(&error),
        },
        Command::Ingest(args) => match run_ingest(&args, &config) {
            Ok(outcome) => {
                print_ingest(&outcome);
                if outcome.is_rejected() { 1 } else { 0 }
            }
            Err(error) => report_error(&error),
        },
    };
    std::process::exit(exit_code);
}

fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
}
