//! distplot - Probability distribution sampler and histogram plotter
//!
//! distplot draws random samples from a small set of named probability
//! distributions and renders each sample set as a histogram in the terminal.
//!
//! # Architecture
//!
//! - **Sample generation**: normal, binomial and Poisson samplers behind a closed enum
//! - **Binning**: equal-width histograms with descriptive summaries
//! - **Rendering**: vertical bar charts drawn with box-drawing characters
//! - **Driver**: generate-then-render cycles in a fixed order

pub mod config;
pub mod distribution;
pub mod driver;
pub mod output;
pub mod stats;
pub mod util;

// Re-export commonly used types
pub use config::Config;
pub use distribution::{Distribution, DistributionError, SampleArray};
pub use output::Renderer;

/// Result type used throughout distplot
pub type Result<T> = anyhow::Result<T>;
