use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use crate::dataset::{CsvSource, DataSource, RandomSource};

/// Top-level CLI entrypoint for `fastfinder`.
#[derive(Parser, Debug)]
#[command(
    name = "fastfinder",
    about = "Compare search and max/min algorithms over a numeric dataset",
    author = "fastfinder developers",
    subcommand_required = false,
    arg_required_else_help = false
)]
pub struct Cli {
    /// Print the JSON schema version used for `--format=json` output
    /// and exit.
    #[arg(long = "schema-version")]
    pub schema_version: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare linear and binary search for a key.
    Search(SearchArgs),
    /// Compare iterative and divide-and-conquer max/min.
    Extremum(ExtremumArgs),
    /// Summary statistics and a histogram of the dataset.
    Overview(OverviewArgs),
    /// Print a random dataset as CSV.
    Generate(GenerateArgs),
}

/// Where the dataset comes from. Shared by the analysis subcommands.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DataArgs {
    /// Read the first column of a CSV file (first line is a header).
    ///
    /// Takes precedence over `--random` when both are given.
    #[arg(long = "csv")]
    pub csv: Option<PathBuf>,

    /// Generate this many random integers instead of reading a file.
    ///
    /// When neither `--csv` nor `--random` is given, 1000 values are
    /// generated.
    #[arg(long = "random")]
    pub random: Option<usize>,

    /// Seed for reproducible random data.
    #[arg(long = "seed", env = "FASTFINDER_SEED")]
    pub seed: Option<u64>,

    /// Smallest random value (inclusive, default 1).
    #[arg(long = "min", allow_negative_numbers = true)]
    pub min: Option<i64>,

    /// Largest random value (inclusive, default 100000).
    #[arg(long = "max", allow_negative_numbers = true)]
    pub max: Option<i64>,
}

/// Arguments specific to the `search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Value to search for.
    ///
    /// Defaults to the element in the middle of the dataset's original
    /// order.
    #[arg(allow_negative_numbers = true)]
    pub key: Option<f64>,

    #[command(flatten)]
    pub data: DataArgs,

    /// Print the binary search probe trace in text output.
    ///
    /// JSON output always includes the trace.
    #[arg(long = "steps")]
    pub steps: bool,

    /// Output format (text, table, or json; default text).
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments specific to the `extremum` subcommand.
#[derive(Args, Debug)]
pub struct ExtremumArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Output format (text, table, or json; default text).
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments specific to the `overview` subcommand.
#[derive(Args, Debug)]
pub struct OverviewArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Number of equal-width histogram bins (default 20).
    #[arg(long = "bins")]
    pub bins: Option<usize>,

    /// Output format (text, table, or json; default text).
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments specific to the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of values to generate (default 1000).
    #[arg(long = "count")]
    pub count: Option<usize>,

    /// Seed for reproducible output.
    #[arg(long = "seed", env = "FASTFINDER_SEED")]
    pub seed: Option<u64>,

    /// Smallest value (inclusive, default 1).
    #[arg(long = "min", allow_negative_numbers = true)]
    pub min: Option<i64>,

    /// Largest value (inclusive, default 100000).
    #[arg(long = "max", allow_negative_numbers = true)]
    pub max: Option<i64>,
}

/// CLI representation of output format.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Table,
    Json,
}

/// Build the data source selected by `DataArgs`.
pub fn data_source_from_args(args: &DataArgs) -> Box<dyn DataSource> {
    if let Some(path) = &args.csv {
        return Box::new(CsvSource::new(path.clone()));
    }

    let defaults = RandomSource::default();
    Box::new(RandomSource {
        count: args.random.unwrap_or(defaults.count),
        min: args.min.unwrap_or(defaults.min),
        max: args.max.unwrap_or(defaults.max),
        seed: args.seed,
    })
}

/// Build a `RandomSource` from `GenerateArgs`.
pub fn random_source_from_args(args: &GenerateArgs) -> RandomSource {
    let defaults = RandomSource::default();
    RandomSource {
        count: args.count.unwrap_or(defaults.count),
        min: args.min.unwrap_or(defaults.min),
        max: args.max.unwrap_or(defaults.max),
        seed: args.seed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_args_default_to_random_source() {
        let source = data_source_from_args(&DataArgs::default());
        assert_eq!(source.describe(), "random 1000 values in 1..=100000");
    }

    #[test]
    fn csv_takes_precedence_over_random() {
        let args = DataArgs {
            csv: Some(PathBuf::from("numbers.csv")),
            random: Some(10),
            ..DataArgs::default()
        };
        let source = data_source_from_args(&args);
        assert_eq!(source.describe(), "csv numbers.csv");
    }

    #[test]
    fn random_args_respect_all_fields() {
        let args = DataArgs {
            csv: None,
            random: Some(25),
            seed: Some(9),
            min: Some(-5),
            max: Some(5),
        };
        let source = data_source_from_args(&args);
        assert_eq!(source.describe(), "random 25 values in -5..=5 (seed 9)");
        assert_eq!(source.load().expect("dataset").len(), 25);
    }

    #[test]
    fn cli_parses_negative_search_key() {
        let cli = Cli::try_parse_from(["fastfinder", "search", "-3.5", "--random", "10"])
            .expect("parse");
        match cli.command {
            Some(Commands::Search(args)) => {
                assert_eq!(args.key, Some(-3.5));
                assert_eq!(args.data.random, Some(10));
                assert_eq!(args.format, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn explicit_format_is_recorded() {
        let cli = Cli::try_parse_from(["fastfinder", "overview", "--format", "text"])
            .expect("parse");
        match cli.command {
            Some(Commands::Overview(args)) => {
                assert_eq!(args.format, Some(OutputFormat::Text));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
