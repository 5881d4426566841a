//! Sample generator error types

use thiserror::Error;

use super::SUPPORTED_NAMES;

/// Errors raised while building a distribution or drawing samples from it.
///
/// # Variants
///
/// - `UnsupportedDistribution`: the name is not one of the supported distributions
/// - `UnknownParameter`: a parameter key the distribution does not recognize
/// - `InvalidParameter`: a recognized parameter with an out-of-range value
/// - `Sampler`: the underlying sampling algorithm refused its parameters
///
/// # Examples
///
/// ```
/// use distplot::distribution::DistributionError;
///
/// let err = DistributionError::UnsupportedDistribution { name: "gamma".to_string() };
/// assert!(err.to_string().contains("'gamma'"));
/// assert!(err.to_string().contains("'poisson'"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// Distribution name outside the supported set.
    #[error("Unsupported distribution type '{name}'. Choose from {}", supported_list())]
    UnsupportedDistribution {
        /// The rejected name
        name: String,
    },

    /// Parameter key not recognized by the distribution.
    #[error("Unknown parameter '{param}' for {distribution} distribution (expected one of: {expected})")]
    UnknownParameter {
        distribution: &'static str,
        param: String,
        expected: &'static str,
    },

    /// Parameter value outside the range the distribution accepts.
    #[error("Invalid {distribution} parameter {param} = {value}: {reason}")]
    InvalidParameter {
        distribution: &'static str,
        param: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Sampling algorithm rejected the parameters.
    #[error("{distribution} sampler rejected its parameters: {reason}")]
    Sampler {
        distribution: &'static str,
        reason: String,
    },
}

fn supported_list() -> String {
    SUPPORTED_NAMES
        .iter()
        .map(|name| format!("'{}'", name))
        .collect::<Vec<_>>()
        .join(", ")
}
