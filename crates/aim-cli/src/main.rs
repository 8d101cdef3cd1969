//! Asset Inventory Mapper CLI.

use clap::{ColorChoice, Parser};
use std::io::IsTerminal;

mod cli;
mod commands;
mod logging;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{run_detect, run_fields, run_map, run_names};
use crate::logging::{LogConfig, LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));

    let outcome = match &cli.command {
        Command::Fields => run_fields(),
        Command::Detect(args) => run_detect(args),
        Command::Map(args) => run_map(args),
        Command::Names(args) => run_names(args),
    };

    if let Err(error) = outcome {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stderr().is_terminal(),
        },
        use_env_filter: !cli.verbosity.is_present(),
    }
}
