//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "aim",
    version,
    about = "Asset Inventory Mapper - resolve spreadsheet columns to canonical fields",
    long_about = "Resolve loosely-structured inventory exports against the canonical\n\
                  field catalog: detect the real header row, map columns to requested\n\
                  fields, and synthesize display names for unlabeled rows."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the canonical field catalog.
    Fields,

    /// Detect the header row of a CSV export.
    Detect(DetectArgs),

    /// Auto-map requested fields against a CSV export's header.
    Map(MapArgs),

    /// Synthesize display names for every data row.
    Names(NamesArgs),
}

#[derive(Parser)]
pub struct DetectArgs {
    /// Path to the CSV export.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Rows to consider as header candidates.
    #[arg(long = "scan-window", value_name = "ROWS", default_value_t = 5)]
    pub scan_window: usize,
}

#[derive(Parser)]
pub struct MapArgs {
    /// Path to the CSV export.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Comma-separated canonical field keys to map.
    #[arg(
        long = "fields",
        short = 'f',
        value_name = "KEYS",
        value_delimiter = ',',
        required = true
    )]
    pub fields: Vec<String>,

    /// Minimum confidence for committing a column assignment.
    #[arg(long = "min-confidence", value_name = "SCORE")]
    pub min_confidence: Option<f64>,

    /// Skip this many leading columns.
    #[arg(long = "start-column", value_name = "N", default_value_t = 0)]
    pub start_column: usize,

    /// Save the resulting mapping config to this store directory.
    #[arg(long = "save-to", value_name = "DIR")]
    pub save_to: Option<PathBuf>,

    /// Sheet id used when saving (default: the file stem).
    #[arg(long = "sheet-id", value_name = "ID")]
    pub sheet_id: Option<String>,
}

#[derive(Parser)]
pub struct NamesArgs {
    /// Path to the CSV export.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Comma-separated canonical field keys to map before synthesis
    /// (default: the identification fields).
    #[arg(long = "fields", short = 'f', value_name = "KEYS", value_delimiter = ',')]
    pub fields: Option<Vec<String>>,
}

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
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn map_fields_split_on_commas() {
        let cli = Cli::parse_from([
            "aim",
            "map",
            "export.csv",
            "--fields",
            "serialNumber,assetTag",
        ]);
        match cli.command {
            Command::Map(args) => {
                assert_eq!(args.fields, vec!["serialNumber", "assetTag"]);
            }
            _ => panic!("expected map command"),
        }
    }
}
