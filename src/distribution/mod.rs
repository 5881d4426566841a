//! Probability distributions and sample generation
//!
//! This module maps a distribution (name plus parameters) to an array of
//! independent random draws.
//!
//! # Distributions
//!
//! - **Normal**: Gaussian bell curve (`mean`, `std_dev`)
//! - **Binomial**: Successes in repeated Bernoulli trials (`n`, `p`)
//! - **Poisson**: Event counts at a fixed rate (`lam`)
//!
//! # Closed Set
//!
//! The supported distributions form a closed enum and sampling is an
//! exhaustive match. External names only enter through [`Distribution::from_name`]
//! and [`Distribution::from_params`], which reject anything outside the set
//! with [`DistributionError::UnsupportedDistribution`].
//!
//! # Randomness
//!
//! Generators never touch a global random source. Callers pass an `Rng`
//! explicitly, so seeded runs are reproducible.
//!
//! # Example
//!
//! ```
//! use distplot::distribution::{generator, Distribution};
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
//! let dist = Distribution::from_name("poisson").unwrap();
//! let samples = generator::generate(&dist, 1000, &mut rng).unwrap();
//! assert_eq!(samples.len(), 1000);
//! ```

pub mod binomial;
pub mod error;
pub mod generator;
pub mod normal;
pub mod poisson;
pub mod samples;

pub use binomial::BinomialParams;
pub use error::DistributionError;
pub use normal::NormalParams;
pub use poisson::PoissonParams;
pub use samples::SampleArray;

use std::collections::BTreeMap;
use std::fmt;

/// Names accepted by [`Distribution::from_name`], in driver order
pub const SUPPORTED_NAMES: [&str; 3] = [normal::NAME, binomial::NAME, poisson::NAME];

/// Parameter mapping: parameter name → numeric value
pub type ParamMap = BTreeMap<String, f64>;

/// A supported distribution together with its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    Normal(NormalParams),
    Binomial(BinomialParams),
    Poisson(PoissonParams),
}

impl Distribution {
    /// Parse a distribution name, using default parameters
    ///
    /// Names are matched exactly (`"normal"`, `"binomial"`, `"poisson"`).
    pub fn from_name(name: &str) -> Result<Self, DistributionError> {
        Self::from_params(name, &ParamMap::new())
    }

    /// Parse a distribution name and its parameter mapping
    ///
    /// Missing parameters fall back to their defaults. Unknown parameter
    /// keys and out-of-range values are rejected.
    pub fn from_params(name: &str, params: &ParamMap) -> Result<Self, DistributionError> {
        match name {
            normal::NAME => Ok(Self::Normal(NormalParams::from_params(params)?)),
            binomial::NAME => Ok(Self::Binomial(BinomialParams::from_params(params)?)),
            poisson::NAME => Ok(Self::Poisson(PoissonParams::from_params(params)?)),
            other => Err(DistributionError::UnsupportedDistribution {
                name: other.to_string(),
            }),
        }
    }

    /// Lower-case distribution name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal(_) => normal::NAME,
            Self::Binomial(_) => binomial::NAME,
            Self::Poisson(_) => poisson::NAME,
        }
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<(), DistributionError> {
        match self {
            Self::Normal(params) => params.validate(),
            Self::Binomial(params) => params.validate(),
            Self::Poisson(params) => params.validate(),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal(p) => write!(f, "normal(mean={}, std_dev={})", p.mean, p.std_dev),
            Self::Binomial(p) => write!(f, "binomial(n={}, p={})", p.n, p.p),
            Self::Poisson(p) => write!(f, "poisson(lam={})", p.lam),
        }
    }
}
