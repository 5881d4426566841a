//! Text rendering of histograms
//!
//! Draws a vertical bar chart with box-drawing characters:
//!
//! ```text
//!                  Normal Distribution
//! Frequency
//!  96 ┤ ·  ·  ·  ·  ·  · ┌─┐ ·  ·  ·
//!     │                  │▒│┌─┐
//!  48 ┤ ·  ·  ·  · ┌─┐┌─┐│▒││▒│ ·  ·
//!     │         ┌─┐│▒││▒││▒││▒│┌─┐
//!   0 └──────────────────────────────
//!     -3.12         0.04          3.20
//!                       Value
//! ```
//!
//! Bars are outlined and filled with a light shade so gridlines stay visible
//! between them. Every chart has a title, a "Frequency" y-axis label with
//! ticks on the gridline rows, and a "Value" x-axis label under the
//! outermost and middle bin edges.

use crate::stats::{Histogram, Summary};

/// Chart height in text rows when none is configured
pub const DEFAULT_HEIGHT: usize = 16;

/// Characters per bar
const BAR_WIDTH: usize = 3;

const BAR_CAP: &str = "┌─┐";
const BAR_FILL: &str = "│▒│";
const GRID_CELL: &str = " · ";
const EMPTY_CELL: &str = "   ";

/// Number of gridlines drawn above the x axis
const GRIDLINES: usize = 4;

/// Build the chart title for a distribution label
///
/// The first letter is upper-cased and the rest lower-cased, followed by
/// " Distribution" (e.g. `"normal"` → `"Normal Distribution"`).
pub fn chart_title(label: &str) -> String {
    let mut chars = label.chars();
    let head: String = match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    };
    format!("{} Distribution", head)
}

/// Render `hist` as a bar chart `height` rows tall
///
/// The output is newline-terminated. An empty histogram produces the axes,
/// labels and gridlines with no bars.
pub fn render_chart(hist: &Histogram, title: &str, height: usize) -> String {
    let height = height.max(1);
    let plot_width = hist.bins() * BAR_WIDTH;
    let max_count = hist.max_count();
    let grid_step = (height / GRIDLINES).max(1);

    let heights: Vec<usize> = hist
        .counts()
        .iter()
        .map(|&count| bar_height(count, max_count, height))
        .collect();

    let tick_value =
        |row: usize| -> u64 { (max_count as f64 * row as f64 / height as f64).round() as u64 };
    let label_width = tick_value(height).to_string().len();
    let indent = label_width + 2;

    let mut output = String::new();

    // Title centered over the plot area
    let title_pad = indent + plot_width.saturating_sub(title.chars().count()) / 2;
    output.push_str(&format!("{:pad$}{}\n", "", title, pad = title_pad));
    output.push_str("Frequency\n");

    for row in (1..=height).rev() {
        let is_grid = row % grid_step == 0;
        let mut line = if is_grid {
            format!("{:>w$} ┤", tick_value(row), w = label_width)
        } else {
            format!("{:w$} │", "", w = label_width)
        };

        for &bar in &heights {
            let cell = if bar > row {
                BAR_FILL
            } else if bar == row {
                BAR_CAP
            } else if is_grid {
                GRID_CELL
            } else {
                EMPTY_CELL
            };
            line.push_str(cell);
        }

        output.push_str(line.trim_end());
        output.push('\n');
    }

    output.push_str(&format!("{:>w$} └{}\n", 0, "─".repeat(plot_width), w = label_width));
    output.push_str(&format!("{:indent$}{}\n", "", x_tick_line(hist, plot_width), indent = indent));

    let value_pad = indent + plot_width.saturating_sub("Value".len()) / 2;
    output.push_str(&format!("{:pad$}Value\n", "", pad = value_pad));

    output
}

/// One-line summary printed under a chart
pub fn format_summary(summary: &Summary) -> String {
    format!(
        "n = {}   mean = {:.4}   std = {:.4}   min = {:.4}   max = {:.4}",
        summary.count, summary.mean, summary.std_dev, summary.min, summary.max
    )
}

/// Scale a bin count to rows; non-empty bins get at least one row
fn bar_height(count: u64, max_count: u64, height: usize) -> usize {
    if count == 0 || max_count == 0 {
        return 0;
    }
    let scaled = (count as f64 / max_count as f64 * height as f64).round() as usize;
    scaled.clamp(1, height)
}

/// Tick labels under the first, middle and last bin edges
fn x_tick_line(hist: &Histogram, plot_width: usize) -> String {
    let edges = hist.edges();
    let (lo, hi) = hist.range();
    let mid_bin = hist.bins() / 2;

    let left = format_tick(lo);
    let right = format_tick(hi);
    let mid = format_tick(edges[mid_bin]);

    let width = plot_width.max(left.len() + right.len() + 1);
    let mut line = vec![' '; width];

    place(&mut line, 0, &left);
    let right_start = width - right.chars().count();
    place(&mut line, right_start, &right);

    // Middle label only when it fits cleanly between the outer ones
    let mid_start = (mid_bin * BAR_WIDTH).saturating_sub(mid.chars().count() / 2);
    if mid_bin > 0
        && mid_start > left.chars().count()
        && mid_start + mid.chars().count() < right_start
    {
        place(&mut line, mid_start, &mid);
    }

    line.into_iter().collect::<String>().trim_end().to_string()
}

fn place(line: &mut [char], start: usize, text: &str) {
    for (slot, ch) in line.iter_mut().skip(start).zip(text.chars()) {
        *slot = ch;
    }
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e9 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot_rows(chart: &str) -> Vec<&str> {
        // Skip title and "Frequency"; drop axis, ticks and "Value"
        let lines: Vec<&str> = chart.lines().collect();
        lines[2..lines.len() - 3].to_vec()
    }

    #[test]
    fn test_chart_title() {
        assert_eq!(chart_title("normal"), "Normal Distribution");
        assert_eq!(chart_title("binomial"), "Binomial Distribution");
        assert_eq!(chart_title("POISSON"), "Poisson Distribution");
        assert_eq!(chart_title(""), " Distribution");
    }

    #[test]
    fn test_render_chart_layout() {
        let hist = Histogram::from_samples(&[0.0, 1.0, 1.0, 2.0, 2.0, 2.0], 3);
        let chart = render_chart(&hist, "Normal Distribution", 6);
        let lines: Vec<&str> = chart.lines().collect();

        // title + y label + 6 rows + axis + ticks + x label
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0].trim(), "Normal Distribution");
        assert_eq!(lines[1], "Frequency");
        assert_eq!(lines[2], "3 ┤ ·  · ┌─┐");
        assert_eq!(lines[8], "0 └─────────");
        assert_eq!(lines[10].trim(), "Value");
    }

    #[test]
    fn test_render_chart_bars_are_outlined() {
        let hist = Histogram::from_samples(&[0.0, 1.0, 1.0, 2.0, 2.0, 2.0], 3);
        let chart = render_chart(&hist, "Test Distribution", 6);
        let body = plot_rows(&chart).join("\n");

        // Heights 2, 4, 6: one cap per bar, the rest fill
        assert_eq!(body.matches(BAR_CAP).count(), 3);
        assert_eq!(body.matches(BAR_FILL).count(), 1 + 3 + 5);
    }

    #[test]
    fn test_render_chart_x_ticks() {
        let hist = Histogram::from_samples(&[-1.5, 1.5], 30);
        let chart = render_chart(&hist, "Normal Distribution", 8);
        let ticks = chart.lines().nth_back(1).unwrap();

        assert!(ticks.trim_start().starts_with("-1.50"));
        assert!(ticks.ends_with("1.50"));

        let middle = ticks
            .trim()
            .trim_start_matches("-1.50")
            .trim_end_matches("1.50")
            .trim();
        assert!(["0", "0.00", "-0.00"].contains(&middle), "middle tick {:?}", middle);
    }

    #[test]
    fn test_render_chart_empty_histogram() {
        let hist = Histogram::from_samples(&[], 30);
        let chart = render_chart(&hist, "Normal Distribution", 16);

        assert!(chart.contains("Normal Distribution"));
        assert!(chart.contains("Frequency"));
        assert!(chart.contains("Value"));
        assert!(chart.contains(GRID_CELL));
        assert!(!chart.contains(BAR_CAP));
        assert!(!chart.contains(BAR_FILL));
    }

    #[test]
    fn test_render_chart_gridlines() {
        let hist = Histogram::from_samples(&[1.0, 2.0], 4);
        let chart = render_chart(&hist, "T", 8);
        let grid_rows = plot_rows(&chart).iter().filter(|l| l.contains('┤')).count();
        assert_eq!(grid_rows, 4);
    }

    #[test]
    fn test_bar_height_scaling() {
        assert_eq!(bar_height(0, 10, 16), 0);
        assert_eq!(bar_height(10, 10, 16), 16);
        assert_eq!(bar_height(5, 10, 16), 8);
        // Tiny but non-empty bins stay visible
        assert_eq!(bar_height(1, 1000, 16), 1);
    }

    #[test]
    fn test_format_summary() {
        let summary = Summary {
            count: 3,
            mean: 1.0,
            std_dev: 0.5,
            min: 0.0,
            max: 2.0,
        };
        assert_eq!(
            format_summary(&summary),
            "n = 3   mean = 1.0000   std = 0.5000   min = 0.0000   max = 2.0000"
        );
    }
}
