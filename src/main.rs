//! distplot CLI entry point

use anyhow::{Context, Result};
use distplot::config::{cli::Cli, toml::load_config, validator, Config};
use distplot::driver;
use distplot::output::{should_pause, TerminalRenderer};
use distplot::util::rng::make_rng;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    cli.validate()?;

    let config = load_config(&cli)?;

    validator::validate_config(&config).context("Configuration validation failed")?;

    if config.runtime.debug {
        print_configuration(&config);
    }

    let mut rng = make_rng(config.seed);
    let mut renderer = TerminalRenderer::stdout(config.bins, &config.display);

    driver::run(&config, &mut rng, &mut renderer)?;

    Ok(())
}

/// Print the effective configuration to stderr
fn print_configuration(config: &Config) {
    eprintln!("DEBUG: Configuration:");
    eprintln!("DEBUG:   Samples:  {}", config.samples);
    eprintln!("DEBUG:   Bins:     {}", config.bins);
    eprintln!("DEBUG:   Height:   {}", config.display.height);
    match config.seed {
        Some(seed) => eprintln!("DEBUG:   Seed:     {}", seed),
        None => eprintln!("DEBUG:   Seed:     (entropy)"),
    }
    eprintln!(
        "DEBUG:   Pause:    {} (blocking: {})",
        config.display.pause,
        should_pause(config.display.pause)
    );
    for request in &config.distributions {
        eprintln!(
            "DEBUG:   Distribution: {} x{}",
            request,
            config.sample_count(request)
        );
    }
}
