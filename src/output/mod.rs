//! Histogram rendering
//!
//! The [`Renderer`] trait is the seam between the driver and the display
//! surface. [`TerminalRenderer`] bins a sample array, draws the chart as text
//! and prints a one-line summary under it.
//!
//! # Blocking
//!
//! Whether a render call blocks depends on the environment and the
//! configured [`PauseMode`]:
//!
//! - **Auto**: waits for Enter when both stdin and stdout are terminals
//!   (interactive session); returns immediately when piped or headless
//! - **Always**: waits for Enter (reads a line from stdin)
//! - **Never**: returns immediately

pub mod text;

use crate::config::{DisplayConfig, PauseMode};
use crate::distribution::SampleArray;
use crate::stats::{Histogram, Summary};
use crate::Result;
use anyhow::Context;
use std::io::{self, BufRead, IsTerminal, Write};

/// Display surface for sample histograms
pub trait Renderer {
    /// Display a histogram of `samples` titled after `label`
    ///
    /// `label` is the distribution name; the title is built by
    /// [`text::chart_title`]. Empty sample arrays produce an empty chart.
    fn render(&mut self, samples: &SampleArray, label: &str) -> Result<()>;
}

/// Renders histograms as text charts on a writer
pub struct TerminalRenderer<W: Write> {
    out: W,
    bins: usize,
    height: usize,
    pause: bool,
}

impl TerminalRenderer<io::Stdout> {
    /// Renderer writing to stdout
    ///
    /// The pause decision for [`PauseMode::Auto`] is made once, here.
    pub fn stdout(bins: usize, display: &DisplayConfig) -> Self {
        Self::new(io::stdout(), bins, display.height, should_pause(display.pause))
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Create a renderer on `out`
    ///
    /// # Panics
    ///
    /// Panics if `bins` is zero.
    pub fn new(out: W, bins: usize, height: usize, pause: bool) -> Self {
        assert!(bins > 0, "Renderer needs at least one bin");

        Self {
            out,
            bins,
            height,
            pause,
        }
    }

    /// Consume the renderer and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn wait_for_dismiss(&mut self) -> Result<()> {
        write!(self.out, "Press Enter to continue...")?;
        self.out.flush()?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, samples: &SampleArray, label: &str) -> Result<()> {
        let hist = Histogram::from_samples(samples.values(), self.bins);
        let summary = Summary::from_samples(samples.values());
        let chart = text::render_chart(&hist, &text::chart_title(label), self.height);

        writeln!(self.out)?;
        write!(self.out, "{}", chart)?;
        writeln!(self.out, "{}", text::format_summary(&summary))?;
        self.out.flush().context("Failed to flush chart output")?;

        if self.pause {
            self.wait_for_dismiss()?;
        }

        Ok(())
    }
}

/// Decide whether render calls should block
pub fn should_pause(mode: PauseMode) -> bool {
    match mode {
        PauseMode::Always => true,
        PauseMode::Never => false,
        PauseMode::Auto => io::stdin().is_terminal() && io::stdout().is_terminal(),
    }
}
