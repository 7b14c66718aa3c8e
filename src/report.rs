//! Turns fetched daily figures into rendered bar charts.

use crate::api::DataSource;
use crate::chart::{Bar, BarChart};
use crate::models::{DailyFigures, LABEL_DATE_FORMAT};
use anyhow::Result;
use log::debug;

/// Default maximum number of asterisks for the tallest bar.
pub const DEFAULT_CHART_WIDTH: f64 = 100.0;

/// Which daily count to chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Cases,
    Deaths,
}

impl Metric {
    pub fn title(self) -> &'static str {
        match self {
            Metric::Cases => "New cases",
            Metric::Deaths => "New deaths",
        }
    }

    /// Plural noun used in prompts and progress messages.
    pub fn noun(self) -> &'static str {
        match self {
            Metric::Cases => "cases",
            Metric::Deaths => "deaths",
        }
    }

    pub fn value(self, day: &DailyFigures) -> u64 {
        match self {
            Metric::Cases => day.cases,
            Metric::Deaths => day.deaths,
        }
    }
}

/// Fetches figures from a [`DataSource`] and renders them as charts.
#[derive(Debug, Clone)]
pub struct Reporter<S> {
    source: S,
    chart_width: f64,
}

impl<S: DataSource> Reporter<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            chart_width: DEFAULT_CHART_WIDTH,
        }
    }

    /// Override the width the tallest bar is scaled down to.
    pub fn with_chart_width(mut self, chart_width: f64) -> Self {
        self.chart_width = chart_width;
        self
    }

    pub fn chart_width(&self) -> f64 {
        self.chart_width
    }

    /// Chart the last `weeks` weeks of `metric`, oldest day first.
    ///
    /// ### Errors
    /// Propagates data source failures unchanged, and
    /// [`ChartError::EmptyChart`](crate::chart::ChartError::EmptyChart) when the
    /// window holds no days.
    pub fn chart(&self, metric: Metric, weeks: u32) -> Result<String> {
        let mut days = self.source.fetch(weeks.saturating_mul(7))?;
        days.sort_by_key(|d| d.date);
        debug!("charting {} days of {}", days.len(), metric.noun());

        let bars = days
            .iter()
            .map(|d| Bar::new(&d.date.format(LABEL_DATE_FORMAT).to_string(), metric.value(d)))
            .collect();
        let chart = BarChart::new(metric.title(), bars)?;
        Ok(chart.plot_to_width(self.chart_width))
    }

    pub fn cases_chart(&self, weeks: u32) -> Result<String> {
        self.chart(Metric::Cases, weeks)
    }

    pub fn deaths_chart(&self, weeks: u32) -> Result<String> {
        self.chart(Metric::Deaths, weeks)
    }
}
