//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! CLI flags (CLI takes precedence).

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::distribution::{Distribution, DistributionError, ParamMap};
use crate::output::text::DEFAULT_HEIGHT;
use crate::stats::histogram::DEFAULT_BINS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Samples drawn per distribution unless a request overrides it
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Number of histogram bins
    #[serde(default = "default_bins")]
    pub bins: usize,
    /// Seed for the random source (None = fresh entropy each run)
    #[serde(default)]
    pub seed: Option<u64>,
    /// Chart display settings
    #[serde(default)]
    pub display: DisplayConfig,
    /// Distributions to draw, in order
    #[serde(rename = "distribution", default = "default_requests")]
    pub distributions: Vec<DistributionRequest>,
    /// Runtime flags (CLI only)
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            bins: default_bins(),
            seed: None,
            display: DisplayConfig::default(),
            distributions: default_requests(),
            runtime: RuntimeConfig::default(),
        }
    }
}

impl Config {
    /// Number of samples to draw for `request`
    pub fn sample_count(&self, request: &DistributionRequest) -> usize {
        request.samples.unwrap_or(self.samples)
    }
}

/// One distribution to draw: name, optional sample count, parameter mapping
///
/// The name stays a plain string until validation so that unsupported names
/// are reported as [`DistributionError::UnsupportedDistribution`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistributionRequest {
    /// Distribution name ("normal", "binomial", "poisson")
    pub name: String,
    /// Per-distribution sample count override
    #[serde(default)]
    pub samples: Option<usize>,
    /// Parameter name → value
    #[serde(default)]
    pub params: ParamMap,
}

impl DistributionRequest {
    /// Request with default parameters
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            samples: None,
            params: ParamMap::new(),
        }
    }

    /// Set a parameter
    pub fn with_param(mut self, key: &str, value: f64) -> Self {
        self.params.insert(key.to_string(), value);
        self
    }

    /// Parse into a validated [`Distribution`]
    pub fn distribution(&self) -> Result<Distribution, DistributionError> {
        Distribution::from_params(&self.name, &self.params)
    }
}

/// Chart display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Chart height in text rows
    #[serde(default = "default_height")]
    pub height: usize,
    /// When to wait for the user after each chart
    #[serde(default)]
    pub pause: PauseMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            pause: PauseMode::default(),
        }
    }
}

/// Blocking policy after each rendered histogram
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PauseMode {
    /// Wait for Enter only when stdin and stdout are terminals
    #[default]
    Auto,
    /// Always wait for Enter
    Always,
    /// Never wait
    Never,
}

/// Runtime flags
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Print debug diagnostics on stderr
    pub debug: bool,
}

fn default_samples() -> usize {
    1000
}

fn default_bins() -> usize {
    DEFAULT_BINS
}

fn default_height() -> usize {
    DEFAULT_HEIGHT
}

/// Normal, binomial and Poisson with their standard example parameters
pub fn default_requests() -> Vec<DistributionRequest> {
    vec![
        DistributionRequest::named("normal")
            .with_param("mean", 0.0)
            .with_param("std_dev", 1.0),
        DistributionRequest::named("binomial")
            .with_param("n", 10.0)
            .with_param("p", 0.5),
        DistributionRequest::named("poisson").with_param("lam", 3.0),
    ]
}

impl fmt::Display for PauseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PauseMode::Auto => write!(f, "auto"),
            PauseMode::Always => write!(f, "always"),
            PauseMode::Never => write!(f, "never"),
        }
    }
}

impl fmt::Display for DistributionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.params.is_empty() {
            let params: Vec<String> = self
                .params
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            write!(f, "({})", params.join(", "))?;
        }
        Ok(())
    }
}
