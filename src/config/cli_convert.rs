//! CLI to Config conversion utilities

use crate::config::{cli, Config, PauseMode};
use crate::distribution::Distribution;
use anyhow::{Context, Result};

/// Convert CLI PauseMode to config PauseMode
pub fn convert_pause_mode(cli_mode: cli::PauseMode) -> PauseMode {
    match cli_mode {
        cli::PauseMode::Auto => PauseMode::Auto,
        cli::PauseMode::Always => PauseMode::Always,
        cli::PauseMode::Never => PauseMode::Never,
    }
}

/// Restrict `config` to the distributions named in `only`, keeping config order
///
/// Every name must be a supported distribution. Returns an error if a name
/// is unsupported or matches none of the configured distributions.
pub fn apply_only_filter(config: &mut Config, only: &[String]) -> Result<()> {
    if only.is_empty() {
        return Ok(());
    }

    let mut wanted = Vec::with_capacity(only.len());
    for name in only {
        let dist = Distribution::from_name(name)
            .with_context(|| format!("Invalid --only value: {}", name))?;
        wanted.push(dist.name());
    }

    config
        .distributions
        .retain(|request| wanted.contains(&request.name.as_str()));

    if config.distributions.is_empty() {
        anyhow::bail!(
            "--only {} matched none of the configured distributions",
            only.join(", ")
        );
    }

    Ok(())
}
