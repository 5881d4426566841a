//! Sample statistics
//!
//! Binning for histogram rendering and a descriptive summary printed
//! alongside each chart.

pub mod histogram;

pub use histogram::Histogram;

/// Descriptive statistics of a sample array
///
/// The standard deviation is the population form (divides by `n`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    /// Number of samples
    pub count: usize,

    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Summarize `values`
    ///
    /// Returns an all-zero summary for empty input.
    pub fn from_samples(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let count = values.len();
        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }

        Self {
            count,
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        }
    }
}
