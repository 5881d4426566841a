//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// When to wait for the user after each histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PauseMode {
    /// Wait only in an interactive terminal (default)
    Auto,
    /// Always wait for Enter
    Always,
    /// Never wait
    Never,
}

/// distplot - Sample probability distributions and plot their histograms
///
/// Without arguments, draws 1000 samples each from normal(0, 1),
/// binomial(10, 0.5) and poisson(3) and shows their histograms in turn.
#[derive(Parser, Debug)]
#[command(name = "distplot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of samples per distribution
    #[arg(short = 's', long)]
    pub samples: Option<usize>,

    /// Number of histogram bins
    #[arg(short = 'b', long)]
    pub bins: Option<usize>,

    /// Chart height in text rows
    #[arg(long)]
    pub height: Option<usize>,

    /// Seed for the random generator (omit for a different run every time)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only draw the named distribution (repeatable: normal, binomial, poisson)
    #[arg(long = "only", value_name = "NAME")]
    pub only: Vec<String>,

    /// When to wait for Enter after each histogram
    #[arg(long, value_enum)]
    pub pause: Option<PauseMode>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bins == Some(0) {
            anyhow::bail!("--bins must be at least 1");
        }
        if let Some(height) = self.height {
            if height < 2 {
                anyhow::bail!("--height must be at least 2, got {}", height);
            }
        }
        Ok(())
    }
}
