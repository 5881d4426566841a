//! Sample generator entry points

use super::{Distribution, DistributionError, ParamMap, SampleArray};
use rand::Rng;

/// Draw `size` i.i.d. samples from `distribution`
///
/// The returned array always holds exactly `size` values. Parameters are
/// validated first, so variants built from public fields are checked too.
pub fn generate<R: Rng + ?Sized>(
    distribution: &Distribution,
    size: usize,
    rng: &mut R,
) -> Result<SampleArray, DistributionError> {
    distribution.validate()?;

    let values = match distribution {
        Distribution::Normal(params) => params.sample(size, rng)?,
        Distribution::Binomial(params) => params.sample(size, rng)?,
        Distribution::Poisson(params) => params.sample(size, rng)?,
    };
    debug_assert_eq!(values.len(), size);
    Ok(SampleArray::from(values))
}

/// Draw samples for a distribution given by name and parameter mapping
///
/// # Errors
///
/// Fails with [`DistributionError::UnsupportedDistribution`] when `name` is
/// not a supported distribution, or with a parameter error when `params`
/// holds unknown keys or out-of-range values.
pub fn generate_distribution<R: Rng + ?Sized>(
    name: &str,
    size: usize,
    params: &ParamMap,
    rng: &mut R,
) -> Result<SampleArray, DistributionError> {
    let distribution = Distribution::from_params(name, params)?;
    generate(&distribution, size, rng)
}
