use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::args::{DataArgs, OutputFormat};
use crate::cli::{ExtremumArgs, GenerateArgs, OverviewArgs, SearchArgs};

/// Top-level representation of `.fastfinder/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub data: Option<DataSection>,

    #[serde(default)]
    pub search: Option<SearchSection>,

    #[serde(default)]
    pub extremum: Option<ExtremumSection>,

    #[serde(default)]
    pub overview: Option<OverviewSection>,
}

impl CliConfig {
    /// Anchor relative paths in the config to the project root (the
    /// directory holding `.fastfinder/`) instead of the working directory.
    pub fn resolve_paths(&mut self, project_root: &Path) {
        if let Some(data) = &mut self.data {
            if let Some(csv) = &data.csv {
                if csv.is_relative() {
                    data.csv = Some(project_root.join(csv));
                }
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DataSection {
    #[serde(default)]
    pub csv: Option<PathBuf>,
    #[serde(default, alias = "count")]
    pub random: Option<usize>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub max: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchSection {
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub steps: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExtremumSection {
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OverviewSection {
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub bins: Option<usize>,
}

/// Discover and load a project-local `.fastfinder/config.toml` (or
/// `.fastfinder/fastfinder.toml`) starting from the current working
/// directory and walking up parent directories.
pub fn load_cli_config() -> Result<Option<CliConfig>> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config_path = find_project_config(&cwd);

    let Some(path) = config_path else {
        return Ok(None);
    };

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let mut config: CliConfig = toml::from_str(&contents)
        .with_context(|| format!("failed to parse TOML config at {}", path.display()))?;

    // <root>/.fastfinder/<file>
    if let Some(root) = path.parent().and_then(Path::parent) {
        config.resolve_paths(root);
    }

    Ok(Some(config))
}

fn find_project_config(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);

    while let Some(current) = dir {
        let project_dir = current.join(".fastfinder");
        let config_toml = project_dir.join("config.toml");
        if config_toml.is_file() {
            return Some(config_toml);
        }

        let named_toml = project_dir.join("fastfinder.toml");
        if named_toml.is_file() {
            return Some(named_toml);
        }

        dir = current.parent();
    }

    None
}

/// Fill unset data-source flags from the `[data]` section.
///
/// A source chosen on the command line (`--csv` or `--random`) is never
/// replaced by the configured one.
pub fn apply_data_config_defaults(config: &CliConfig, args: &mut DataArgs) {
    let Some(data) = &config.data else {
        return;
    };

    if args.csv.is_none() && args.random.is_none() {
        if let Some(csv) = &data.csv {
            args.csv = Some(csv.clone());
        } else if let Some(random) = data.random {
            args.random = Some(random);
        }
    }

    if args.seed.is_none() {
        args.seed = data.seed;
    }

    if args.min.is_none() {
        args.min = data.min;
    }

    if args.max.is_none() {
        args.max = data.max;
    }
}

pub fn apply_search_config_defaults(config: &CliConfig, args: &mut SearchArgs) {
    apply_data_config_defaults(config, &mut args.data);

    if let Some(search) = &config.search {
        if args.format.is_none() {
            args.format = search.format;
        }

        if !args.steps {
            if let Some(true) = search.steps {
                args.steps = true;
            }
        }
    }
}

pub fn apply_extremum_config_defaults(config: &CliConfig, args: &mut ExtremumArgs) {
    apply_data_config_defaults(config, &mut args.data);

    if let Some(extremum) = &config.extremum {
        if args.format.is_none() {
            args.format = extremum.format;
        }
    }
}

pub fn apply_overview_config_defaults(config: &CliConfig, args: &mut OverviewArgs) {
    apply_data_config_defaults(config, &mut args.data);

    if let Some(overview) = &config.overview {
        if args.format.is_none() {
            args.format = overview.format;
        }

        if args.bins.is_none() {
            args.bins = overview.bins;
        }
    }
}

/// `generate` only reads the random-generation keys of `[data]`.
pub fn apply_generate_config_defaults(config: &CliConfig, args: &mut GenerateArgs) {
    if let Some(data) = &config.data {
        if args.count.is_none() {
            args.count = data.random;
        }

        if args.seed.is_none() {
            args.seed = data.seed;
        }

        if args.min.is_none() {
            args.min = data.min;
        }

        if args.max.is_none() {
            args.max = data.max;
        }
    }
}
