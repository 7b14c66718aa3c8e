//! Horizontal ASCII bar charts.
//!
//! A [`BarChart`] is a title plus a non-empty, ordered list of [`Bar`]s. Rendering
//! is a pure function of the chart and a scale factor: every call with the same
//! inputs produces the same text.
//!
//! ```text
//!
//! ----- New cases -----
//!
//! 01/03 (12) | ************
//! 02/03 (7)  | *******
//!
//! ```

mod bar;
mod scale;

pub use bar::{Bar, LABEL_WIDTH};
pub use scale::scale_factor;

use thiserror::Error;

/// Errors raised while building a chart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("there are no bars in the bar chart")]
    EmptyChart,
}

/// A titled, ordered sequence of bars. Bars render top to bottom in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    title: String,
    bars: Vec<Bar>,
}

impl BarChart {
    /// Build a chart; fails with [`ChartError::EmptyChart`] when `bars` is empty.
    pub fn new(title: impl Into<String>, bars: Vec<Bar>) -> Result<Self, ChartError> {
        if bars.is_empty() {
            return Err(ChartError::EmptyChart);
        }
        Ok(Self {
            title: title.into(),
            bars,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    fn highest_count(&self) -> u64 {
        self.bars.iter().map(Bar::count).max().unwrap_or(0)
    }

    /// Render every line of the chart, without line terminators.
    ///
    /// The layout is: a blank line, the `----- title -----` header, a blank line,
    /// one line per bar, and a closing blank line.
    pub fn lines(&self, scale_factor: f64) -> Vec<String> {
        let highest = self.highest_count();
        let x_axis = scaled(highest, scale_factor) + 1;
        let count_width = digits(highest);

        let mut lines = Vec::with_capacity(self.bars.len() + 4);
        lines.push(String::new());
        lines.push(self.header_line());
        lines.push(String::new());
        lines.extend(
            self.bars
                .iter()
                .map(|bar| bar_line(bar, count_width, x_axis, scale_factor)),
        );
        lines.push(String::new());
        lines
    }

    /// Render the chart as a single block of text, each line ending in `\n`.
    pub fn plot(&self, scale_factor: f64) -> String {
        self.lines(scale_factor)
            .into_iter()
            .map(|line| line + "\n")
            .collect()
    }

    /// Select the scale factor for `desired_width` and render with it.
    pub fn plot_to_width(&self, desired_width: f64) -> String {
        self.plot(scale_factor(&self.bars, desired_width))
    }

    fn header_line(&self) -> String {
        format!("----- {} -----", self.title)
    }
}

/// One bar row: label, right-aligned count, then the bar padded with spaces
/// so that every row spans `x_axis + 1` drawing columns.
fn bar_line(bar: &Bar, count_width: usize, x_axis: usize, scale_factor: f64) -> String {
    let stars = scaled(bar.count(), scale_factor);
    let padding = count_width.saturating_sub(digits(bar.count()));
    // x_axis >= stars for every bar, since the highest count sets x_axis.
    let trailing = (x_axis + 1).saturating_sub(stars);
    format!(
        "{} ({}) {}| {}{}",
        bar.label(),
        bar.count(),
        " ".repeat(padding),
        "*".repeat(stars),
        " ".repeat(trailing)
    )
}

fn scaled(count: u64, scale_factor: f64) -> usize {
    // `as` saturates: NaN and negatives become 0.
    (count as f64 * scale_factor).floor() as usize
}

fn digits(n: u64) -> usize {
    n.to_string().len()
}
