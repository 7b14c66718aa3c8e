//! covid_stats
//!
//! A small Rust library for fetching daily COVID-19 case and death counts and
//! rendering them as horizontal ASCII bar charts in the terminal. Pairs with
//! the `covid-stats` CLI.
//!
//! ### Features
//! - Fetch the last N weeks of figures for a nation/region
//! - Fixed-width bar labels and right-aligned counts
//! - Power-of-two scaling so the tallest bar fits a target width
//!
//! ### Example
//! ```no_run
//! use covid_stats::{ApiConfig, Client, Metric, Reporter};
//!
//! let client = Client::new(&ApiConfig::default())?;
//! let reporter = Reporter::new(client);
//! println!("{}", reporter.chart(Metric::Cases, 2)?);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! The chart module can also be used on its own:
//! ```
//! use covid_stats::chart::{Bar, BarChart};
//!
//! let bars = vec![Bar::new("Mon", 3), Bar::new("Tue", 5)];
//! let chart = BarChart::new("Visits", bars)?;
//! print!("{}", chart.plot(1.0));
//! # Ok::<(), covid_stats::chart::ChartError>(())
//! ```

pub mod api;
pub mod chart;
pub mod menu;
pub mod models;
pub mod report;

pub use api::{ApiConfig, Client, DataSource};
pub use chart::{Bar, BarChart, ChartError};
pub use models::DailyFigures;
pub use report::{Metric, Reporter};
