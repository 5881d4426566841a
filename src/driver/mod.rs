//! Generate-then-render driver
//!
//! Runs one cycle per configured distribution, strictly in order: parse the
//! request, draw the samples, hand them to the renderer. The first failure
//! aborts the run and propagates to the caller.

use crate::config::Config;
use crate::distribution::generator;
use crate::output::Renderer;
use crate::Result;
use anyhow::Context;
use rand::Rng;

/// Informational line printed before the first cycle
pub const BANNER: &str = "Generating and visualizing probability distributions";

/// Outcome of one generate/render cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// Distribution name passed to the renderer
    pub label: String,
    /// Number of samples rendered
    pub sample_count: usize,
}

/// Run every configured distribution through generate and render
pub fn run<R: Rng + ?Sized>(
    config: &Config,
    rng: &mut R,
    renderer: &mut dyn Renderer,
) -> Result<Vec<CycleReport>> {
    println!("{}", BANNER);

    let mut reports = Vec::with_capacity(config.distributions.len());

    for request in &config.distributions {
        let distribution = request.distribution()?;
        let size = config.sample_count(request);

        if config.runtime.debug {
            eprintln!("DEBUG: Generating {} samples from {}", size, distribution);
        }

        let samples = generator::generate(&distribution, size, rng)?;
        renderer
            .render(&samples, distribution.name())
            .with_context(|| format!("Failed to render {} histogram", distribution.name()))?;

        reports.push(CycleReport {
            label: distribution.name().to_string(),
            sample_count: samples.len(),
        });
    }

    if config.runtime.debug {
        eprintln!("DEBUG: Completed {} cycles", reports.len());
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DistributionRequest;
    use crate::distribution::{DistributionError, SampleArray};
    use crate::output::text::chart_title;
    use crate::output::TerminalRenderer;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    /// Records every render call
    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<(String, SampleArray)>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, samples: &SampleArray, label: &str) -> Result<()> {
            self.calls.push((label.to_string(), samples.clone()));
            Ok(())
        }
    }

    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn render(&mut self, _samples: &SampleArray, _label: &str) -> Result<()> {
            anyhow::bail!("display unavailable")
        }
    }

    #[test]
    fn test_run_default_cycles_in_order() {
        let config = Config::default();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut renderer = RecordingRenderer::default();

        let reports = run(&config, &mut rng, &mut renderer).unwrap();

        let labels: Vec<&str> = renderer.calls.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["normal", "binomial", "poisson"]);

        let titles: Vec<String> = labels.iter().map(|l| chart_title(l)).collect();
        assert_eq!(
            titles,
            vec!["Normal Distribution", "Binomial Distribution", "Poisson Distribution"]
        );

        for (_, samples) in &renderer.calls {
            assert_eq!(samples.len(), 1000);
        }

        assert_eq!(reports.len(), 3);
        assert!(reports.iter().all(|r| r.sample_count == 1000));
    }

    #[test]
    fn test_run_seeded_is_reproducible() {
        let config = Config::default();

        let mut first = RecordingRenderer::default();
        run(&config, &mut Xoshiro256PlusPlus::seed_from_u64(5), &mut first).unwrap();

        let mut second = RecordingRenderer::default();
        run(&config, &mut Xoshiro256PlusPlus::seed_from_u64(5), &mut second).unwrap();

        assert_eq!(first.calls, second.calls);
    }

    #[test]
    fn test_run_stops_at_unsupported_distribution() {
        let mut config = Config::default();
        config.distributions.insert(1, DistributionRequest::named("unsupported_name"));

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut renderer = RecordingRenderer::default();
        let err = run(&config, &mut rng, &mut renderer).unwrap_err();

        assert!(err.to_string().contains("unsupported_name"));
        assert!(matches!(
            err.downcast_ref::<DistributionError>(),
            Some(DistributionError::UnsupportedDistribution { .. })
        ));
        // Only the cycle before the bad request ran
        assert_eq!(renderer.calls.len(), 1);
    }

    #[test]
    fn test_run_propagates_render_failure() {
        let config = Config::default();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        let err = run(&config, &mut rng, &mut FailingRenderer).unwrap_err();
        assert!(err.to_string().contains("normal"));
        assert!(format!("{:#}", err).contains("display unavailable"));
    }

    #[test]
    fn test_run_with_terminal_renderer() {
        let mut config = Config::default();
        config.samples = 200;

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut renderer = TerminalRenderer::new(Vec::new(), config.bins, 8, false);
        run(&config, &mut rng, &mut renderer).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        let normal = output.find("Normal Distribution").unwrap();
        let binomial = output.find("Binomial Distribution").unwrap();
        let poisson = output.find("Poisson Distribution").unwrap();
        assert!(normal < binomial && binomial < poisson);
        assert_eq!(output.matches("n = 200").count(), 3);
    }

    #[test]
    fn test_run_zero_samples() {
        let mut config = Config::default();
        config.samples = 0;

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut renderer = RecordingRenderer::default();
        let reports = run(&config, &mut rng, &mut renderer).unwrap();

        assert!(reports.iter().all(|r| r.sample_count == 0));
        assert!(renderer.calls.iter().all(|(_, s)| s.is_empty()));
    }
}
