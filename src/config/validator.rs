//! Configuration validation

use super::*;
use anyhow::{Context, Result};

/// Validate complete configuration
///
/// Runs before any sampling so unsupported names and bad parameters are
/// reported before the first histogram is drawn.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.bins == 0 {
        anyhow::bail!("bins must be at least 1");
    }

    validate_display(&config.display)?;

    if config.distributions.is_empty() {
        anyhow::bail!("at least one distribution must be configured");
    }

    for (i, request) in config.distributions.iter().enumerate() {
        validate_request(request)
            .with_context(|| format!("Invalid distribution #{} ({})", i + 1, request.name))?;
    }

    Ok(())
}

/// Validate display configuration
pub fn validate_display(display: &DisplayConfig) -> Result<()> {
    if display.height < 2 {
        anyhow::bail!("display height must be at least 2 rows, got {}", display.height);
    }
    Ok(())
}

/// Validate one distribution request
pub fn validate_request(request: &DistributionRequest) -> Result<()> {
    request.distribution()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::DistributionError;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_bins() {
        let mut config = Config::default();
        config.bins = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_short_display() {
        let mut config = Config::default();
        config.display.height = 1;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_no_distributions() {
        let mut config = Config::default();
        config.distributions.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_unsupported_distribution() {
        let mut config = Config::default();
        config.distributions.push(DistributionRequest::named("cauchy"));

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("#4"));
        assert_eq!(
            err.downcast_ref::<DistributionError>(),
            Some(&DistributionError::UnsupportedDistribution {
                name: "cauchy".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_parameter() {
        let mut config = Config::default();
        config.distributions[1] = DistributionRequest::named("binomial").with_param("p", 2.0);

        let err = validate_config(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DistributionError>(),
            Some(DistributionError::InvalidParameter { param: "p", .. })
        ));
    }

    #[test]
    fn test_unknown_parameter() {
        let request = DistributionRequest::named("poisson").with_param("rate", 2.0);
        assert!(validate_request(&request).is_err());
    }
}
