//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use crate::config::cli_convert;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
///
/// Omitted keys fall back to the defaults; a file with no `[[distribution]]`
/// tables draws the standard normal, binomial and Poisson set.
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    if let Some(samples) = cli.samples {
        config.samples = samples;
        // An explicit CLI sample count applies to every distribution
        for request in &mut config.distributions {
            request.samples = None;
        }
    }
    if let Some(bins) = cli.bins {
        config.bins = bins;
    }
    if let Some(height) = cli.height {
        config.display.height = height;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(pause) = cli.pause {
        config.display.pause = cli_convert::convert_pause_mode(pause);
    }

    cli_convert::apply_only_filter(&mut config, &cli.only)?;

    config.runtime.debug = cli.debug;

    Ok(config)
}

/// Build the effective configuration: defaults, then file, then CLI
pub fn load_config(cli: &Cli) -> Result<Config> {
    let base = match cli.config {
        Some(ref path) => parse_toml_file(path)?,
        None => Config::default(),
    };

    merge_cli_with_config(cli, base)
}
