//! Normal (Gaussian) distribution
//!
//! Bell curve centered at `mean` with spread `std_dev`.
//!
//! # Parameters
//!
//! - **mean**: Center of the distribution (default 0.0)
//! - **std_dev**: Standard deviation, must be >= 0 (default 1.0)
//!
//! A standard deviation of zero is accepted and yields `mean` for every draw.
//!
//! # Example
//!
//! ```
//! use distplot::distribution::normal::NormalParams;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
//! let params = NormalParams::new(10.0, 2.0).unwrap();
//! let values = params.sample(100, &mut rng).unwrap();
//! assert_eq!(values.len(), 100);
//! ```

use super::{DistributionError, ParamMap};
use rand::Rng;
use rand_distr::{Distribution as _, Normal};

/// Distribution name used for parsing and labels
pub const NAME: &str = "normal";

const EXPECTED: &str = "mean, std_dev";

/// Parameters of a normal distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalParams {
    /// Center of the distribution
    pub mean: f64,

    /// Standard deviation (spread)
    pub std_dev: f64,
}

impl Default for NormalParams {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }
}

impl NormalParams {
    /// Create validated normal parameters
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, DistributionError> {
        let params = Self { mean, std_dev };
        params.validate()?;
        Ok(params)
    }

    /// Build parameters from a name → value mapping
    ///
    /// Recognized keys are `mean` and `std_dev`; missing keys keep their
    /// defaults and any other key is rejected.
    pub fn from_params(params: &ParamMap) -> Result<Self, DistributionError> {
        let mut out = Self::default();
        for (key, &value) in params {
            match key.as_str() {
                "mean" => out.mean = value,
                "std_dev" => out.std_dev = value,
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
        if !self.mean.is_finite() {
            return Err(DistributionError::InvalidParameter {
                distribution: NAME,
                param: "mean",
                value: self.mean,
                reason: "must be finite",
            });
        }
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(DistributionError::InvalidParameter {
                distribution: NAME,
                param: "std_dev",
                value: self.std_dev,
                reason: "must be finite and non-negative",
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
        let normal = Normal::new(self.mean, self.std_dev).map_err(|e| DistributionError::Sampler {
            distribution: NAME,
            reason: e.to_string(),
        })?;

        Ok((0..size).map(|_| normal.sample(&mut *rng)).collect())
    }
}
