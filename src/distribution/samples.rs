//! Sample arrays produced by the generator

/// Ordered, immutable sequence of generated values
///
/// Integer-valued distributions (binomial, Poisson) store their draws as
/// whole-numbered `f64`s so every distribution feeds the same binning code.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleArray {
    values: Vec<f64>,
}

impl SampleArray {
    /// Create an empty sample array
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no samples
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the samples as a slice
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over the samples
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Consume the array and return the underlying values
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl From<Vec<f64>> for SampleArray {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl FromIterator<f64> for SampleArray {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SampleArray {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
