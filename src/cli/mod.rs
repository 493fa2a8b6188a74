use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::{debug, warn};

use crate::analysis::{self, DEFAULT_BINS};
use crate::dataset::{validate_key, DataSource, Dataset};
use crate::models::REPORT_VERSION;

mod args;
mod config;
mod format;

pub use args::{
    Cli, Commands, DataArgs, ExtremumArgs, GenerateArgs, OutputFormat, OverviewArgs, SearchArgs,
};

use config::{
    apply_extremum_config_defaults, apply_generate_config_defaults,
    apply_overview_config_defaults, apply_search_config_defaults, load_cli_config,
};

/// Entry point for the CLI binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.schema_version {
        println!("Report JSON schema version: {}", REPORT_VERSION);
        return Ok(());
    }

    let cli_config = load_cli_config()?;

    match cli.command {
        Some(Commands::Search(mut search_args)) => {
            if let Some(ref config) = cli_config {
                apply_search_config_defaults(config, &mut search_args);
            }

            let source = args::data_source_from_args(&search_args.data);
            let dataset = load_dataset(source.as_ref())?;

            let key = match search_args.key {
                Some(key) => validate_key(key)?,
                None => dataset.middle().unwrap_or(0.0),
            };

            let result = analysis::compare_search(dataset.values(), key);

            match search_args.format.unwrap_or(OutputFormat::Text) {
                OutputFormat::Text => format::print_search_text(
                    &result,
                    &dataset,
                    &source.describe(),
                    search_args.steps,
                ),
                OutputFormat::Table => format::print_search_table(&result),
                OutputFormat::Json => {
                    serde_json::to_writer(std::io::stdout(), &result)?;
                    println!();
                    Ok(())
                }
            }
        }
        Some(Commands::Extremum(mut extremum_args)) => {
            if let Some(ref config) = cli_config {
                apply_extremum_config_defaults(config, &mut extremum_args);
            }

            let source = args::data_source_from_args(&extremum_args.data);
            let dataset = load_dataset(source.as_ref())?;
            let result = analysis::compare_extremum(dataset.values());

            match extremum_args.format.unwrap_or(OutputFormat::Text) {
                OutputFormat::Text => {
                    format::print_extremum_text(&result, &dataset, &source.describe())
                }
                OutputFormat::Table => format::print_extremum_table(&result),
                OutputFormat::Json => {
                    serde_json::to_writer(std::io::stdout(), &result)?;
                    println!();
                    Ok(())
                }
            }
        }
        Some(Commands::Overview(mut overview_args)) => {
            if let Some(ref config) = cli_config {
                apply_overview_config_defaults(config, &mut overview_args);
            }

            let source = args::data_source_from_args(&overview_args.data);
            let dataset = load_dataset(source.as_ref())?;
            let summary = analysis::overview(&dataset, overview_args.bins.unwrap_or(DEFAULT_BINS));

            match overview_args.format.unwrap_or(OutputFormat::Text) {
                OutputFormat::Text => format::print_overview_text(&summary, &source.describe()),
                OutputFormat::Table => format::print_overview_table(&summary),
                OutputFormat::Json => {
                    serde_json::to_writer(std::io::stdout(), &summary)?;
                    println!();
                    Ok(())
                }
            }
        }
        Some(Commands::Generate(mut generate_args)) => {
            if let Some(ref config) = cli_config {
                apply_generate_config_defaults(config, &mut generate_args);
            }

            let source = args::random_source_from_args(&generate_args);
            let dataset = load_dataset(&source)?;
            dataset
                .write_csv(std::io::stdout().lock())
                .context("failed to write generated dataset")?;
            Ok(())
        }
        None => {
            let mut cmd = Cli::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}

fn load_dataset(source: &dyn DataSource) -> Result<Dataset> {
    let description = source.describe();
    let dataset = source
        .load()
        .with_context(|| format!("failed to load dataset ({description})"))?;

    if dataset.is_empty() {
        warn!(source = %description, "dataset is empty");
    } else {
        debug!(source = %description, values = dataset.len(), "dataset ready");
    }

    Ok(dataset)
}
