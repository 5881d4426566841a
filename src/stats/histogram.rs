//! Equal-width histogram binning
//!
//! Partitions the observed value range into a fixed number of equal-width
//! bins and counts the samples falling into each one.
//!
//! # Bin Layout
//!
//! - Range is `[min, max]` of the samples; every bin is half-open `[lo, hi)`
//!   except the last, which also includes `max`
//! - If all samples are equal the range is widened to `[v - 0.5, v + 0.5]`
//! - Empty input uses the range `[0, 1]` with all counts zero
//! - Non-finite samples are not counted
//!
//! # Example
//!
//! ```
//! use distplot::stats::histogram::Histogram;
//!
//! let hist = Histogram::from_samples(&[1.0, 2.0, 2.0, 3.0], 2);
//! assert_eq!(hist.counts(), &[1, 3]);
//! assert_eq!(hist.edges(), &[1.0, 2.0, 3.0]);
//! ```

/// Number of bins used when none is configured
pub const DEFAULT_BINS: usize = 30;

/// Binned frequency counts over an equal-width partition
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin edges, `bins + 1` ascending values
    edges: Vec<f64>,

    /// Sample count per bin
    counts: Vec<u64>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins
    ///
    /// # Panics
    ///
    /// Panics if `bins` is zero.
    pub fn from_samples(values: &[f64], bins: usize) -> Self {
        assert!(bins > 0, "Histogram needs at least one bin");

        let (lo, hi) = value_range(values);
        let width = (hi - lo) / bins as f64;

        // Pin the final edge to `hi` so rounding never drops the maximum
        let edges: Vec<f64> = (0..=bins)
            .map(|i| if i == bins { hi } else { lo + width * i as f64 })
            .collect();

        let mut counts = vec![0u64; bins];
        for &value in values {
            if let Some(idx) = bin_index(value, lo, hi, bins) {
                counts[idx] += 1;
            }
        }

        Self { edges, counts }
    }

    /// Number of bins
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Total number of binned samples
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest bin count (0 for an empty histogram)
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Lower and upper bound of the binned range
    pub fn range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }

    /// Check if no samples were binned
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Range covered by the bins
fn value_range(values: &[f64]) -> (f64, f64) {
    let (min, max) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        // No finite samples
        (0.0, 1.0)
    } else if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

#[inline]
fn bin_index(value: f64, lo: f64, hi: f64, bins: usize) -> Option<usize> {
    if !value.is_finite() || value < lo || value > hi {
        return None;
    }
    let idx = ((value - lo) / (hi - lo) * bins as f64) as usize;
    Some(idx.min(bins - 1))
}
