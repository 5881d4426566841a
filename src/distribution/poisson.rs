//! Poisson distribution
//!
//! Event counts with mean and variance `lam`.
//!
//! # Parameters
//!
//! - **lam**: Rate, must be >= 0 (default 3.0). `lambda` is accepted as an alias.
//!
//! A rate of zero yields zero for every draw.

use super::{DistributionError, ParamMap};
use rand::Rng;
use rand_distr::{Distribution as _, Poisson};

/// Distribution name used for parsing and labels
pub const NAME: &str = "poisson";

const EXPECTED: &str = "lam";

/// Parameters of a Poisson distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoissonParams {
    /// Rate (mean event count)
    pub lam: f64,
}

impl Default for PoissonParams {
    fn default() -> Self {
        Self { lam: 3.0 }
    }
}

impl PoissonParams {
    /// Create validated Poisson parameters
    pub fn new(lam: f64) -> Result<Self, DistributionError> {
        let params = Self { lam };
        params.validate()?;
        Ok(params)
    }

    /// Build parameters from a name → value mapping
    pub fn from_params(params: &ParamMap) -> Result<Self, DistributionError> {
        let mut out = Self::default();
        for (key, &value) in params {
            match key.as_str() {
                "lam" | "lambda" => out.lam = value,
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
        if !self.lam.is_finite() || self.lam < 0.0 {
            return Err(DistributionError::InvalidParameter {
                distribution: NAME,
                param: "lam",
                value: self.lam,
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
        // rand_distr refuses lambda == 0
        if self.lam == 0.0 {
            return Ok(vec![0.0; size]);
        }

        let poisson: Poisson<f64> = Poisson::new(self.lam).map_err(|e| DistributionError::Sampler {
            distribution: NAME,
            reason: e.to_string(),
        })?;

        Ok((0..size)
            .map(|_| -> f64 { poisson.sample(&mut *rng) })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_poisson_non_negative_integers() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let values = PoissonParams::default().sample(1000, &mut rng).unwrap();
        assert_eq!(values.len(), 1000);

        for v in values {
            assert!(v >= 0.0, "value {} is negative", v);
            assert_eq!(v.fract(), 0.0, "value {} is not an integer", v);
        }
    }

    #[test]
    fn test_poisson_mean_tracks_rate() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);
        let values = PoissonParams::new(8.0).unwrap().sample(2000, &mut rng).unwrap();

        let mean = values.iter().sum::<f64>() / values.len() as f64;
        assert!((mean - 8.0).abs() < 0.5, "mean {} too far from 8", mean);
    }

    #[test]
    fn test_poisson_zero_rate() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let values = PoissonParams::new(0.0).unwrap().sample(25, &mut rng).unwrap();
        assert_eq!(values, vec![0.0; 25]);
    }

    #[test]
    fn test_poisson_lambda_alias() {
        let mut map = ParamMap::new();
        map.insert("lambda".to_string(), 4.5);
        assert_eq!(PoissonParams::from_params(&map).unwrap().lam, 4.5);
    }

    #[test]
    fn test_poisson_rejects_negative_rate() {
        let err = PoissonParams::new(-1.0).unwrap_err();
        assert!(matches!(err, DistributionError::InvalidParameter { param: "lam", .. }));
    }
}
