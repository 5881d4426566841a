//! Binomial distribution
//!
//! Number of successes in `n` independent Bernoulli trials with success
//! probability `p`.
//!
//! # Parameters
//!
//! - **n**: Number of trials per sample, at most 2^31 - 1 (default 10)
//! - **p**: Success probability per trial, within [0, 1] (default 0.5)

use super::{DistributionError, ParamMap};
use rand::Rng;
use rand_distr::{Binomial, Distribution as _};

/// Distribution name used for parsing and labels
pub const NAME: &str = "binomial";

const EXPECTED: &str = "n, p";

/// Largest supported trial count
///
/// rand_distr only takes its inversion path for `n` that fits in an `i32`;
/// beyond that, small `n * p` makes its BTPE path panic.
pub const MAX_TRIALS: u64 = i32::MAX as u64;

/// Parameters of a binomial distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialParams {
    /// Number of trials
    pub n: u64,

    /// Success probability per trial
    pub p: f64,
}

impl Default for BinomialParams {
    fn default() -> Self {
        Self { n: 10, p: 0.5 }
    }
}

impl BinomialParams {
    /// Create validated binomial parameters
    pub fn new(n: u64, p: f64) -> Result<Self, DistributionError> {
        let params = Self { n, p };
        params.validate()?;
        Ok(params)
    }

    /// Build parameters from a name → value mapping
    ///
    /// `n` arrives as a float from the mapping and must be a non-negative
    /// whole number.
    pub fn from_params(params: &ParamMap) -> Result<Self, DistributionError> {
        let mut out = Self::default();
        for (key, &value) in params {
            match key.as_str() {
                "n" => out.n = parse_trials(value)?,
                "p" => out.p = value,
                _ => {
                    return Err(DistributionError::UnknownParameter {
                        distribution: NAME,
                        param: key.clone(),
                        expected: EXPECTED,
                    })
                }
            }
        }
        out.validate()?;
        Ok(out)
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<(), DistributionError> {
        if self.n > MAX_TRIALS {
            return Err(DistributionError::InvalidParameter {
                distribution: NAME,
                param: "n",
                value: self.n as f64,
                reason: "must be at most 2147483647",
            });
        }
        if !(0.0..=1.0).contains(&self.p) {
            return Err(DistributionError::InvalidParameter {
                distribution: NAME,
                param: "p",
                value: self.p,
                reason: "must be within [0, 1]",
            });
        }
        Ok(())
    }

    /// Draw `size` independent samples
    pub fn sample<R: Rng + ?Sized>(
        &self,
        size: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>, DistributionError> {
        if self.n > MAX_TRIALS {
            return Err(DistributionError::Sampler {
                distribution: NAME,
                reason: format!("trial count {} exceeds {}", self.n, MAX_TRIALS),
            });
        }

        let binomial = Binomial::new(self.n, self.p).map_err(|e| DistributionError::Sampler {
            distribution: NAME,
            reason: e.to_string(),
        })?;

        Ok((0..size).map(|_| binomial.sample(&mut *rng) as f64).collect())
    }
}

fn parse_trials(value: f64) -> Result<u64, DistributionError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(DistributionError::InvalidParameter {
            distribution: NAME,
            param: "n",
            value,
            reason: "must be a non-negative whole number",
        });
    }
    Ok(value as u64)
}
