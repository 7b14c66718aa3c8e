//! Synchronous client for the **UK coronavirus dashboard API (v1)**.
//!
//! This module focuses on the `data` endpoint filtered to one area and returns
//! results as tidy `models::DailyFigures` rows, one per published day.
//!
//! ### Notes
//! - The API serves the full history in one response; the time window is applied
//!   locally by [`parse_figures`].
//! - The current day is always dropped because its figures are usually incomplete.
//! - A non-success HTTP status is reported straight away. Only transport failures
//!   (connection reset, DNS hiccup) are retried.
//!
//! Typical usage:
//! ```no_run
//! # use covid_stats::{ApiConfig, Client, DataSource};
//! let client = Client::new(&ApiConfig::default())?;
//! let days = client.fetch(14)?;
//! # Ok::<(), anyhow::Error>(())
//! ```
use crate::models::{API_DATE_FORMAT, DailyFigures, Response};
use anyhow::{Context, Result, anyhow, bail};
use chrono::{Days, Local, NaiveDate};
use log::{debug, warn};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;

/// Anything that can produce daily figures for the last `window_days` days.
///
/// Implemented by the HTTP [`Client`]; tests substitute an in-memory double.
pub trait DataSource {
    fn fetch(&self, window_days: u32) -> Result<Vec<DailyFigures>>;
}

impl<T: DataSource + ?Sized> DataSource for &T {
    fn fetch(&self, window_days: u32) -> Result<Vec<DailyFigures>> {
        (**self).fetch(window_days)
    }
}

/// Where and what to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    /// e.g. `nation`, `region`, `utla`
    pub area_type: String,
    /// e.g. `england`, `scotland`
    pub area_name: String,
    /// Total request timeout.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.coronavirus.data.gov.uk/v1/data".into(),
            area_type: "nation".into(),
            area_name: "england".into(),
            timeout: Duration::from_secs(30),
        }
    }
}

// Keep `-`, `_`, `.` readable in query values.
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Maps our field names to the API's metric names.
const STRUCTURE: &str = r#"{"date":"date","cases":"newCasesByPublishDate","deaths":"newDeaths28DaysByPublishDate"}"#;

/// Pause before each attempt; the first attempt goes out immediately.
const BACKOFF_MS: [u64; 3] = [0, 100, 300];

fn enc(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s, SAFE).to_string()
}

impl ApiConfig {
    /// Full request URL including the area filter and the response structure.
    pub fn url(&self) -> String {
        let filters = format!(
            "areaType={};areaName={}",
            self.area_type.trim(),
            self.area_name.trim()
        );
        format!(
            "{}?filters={}&structure={}",
            self.base_url.trim_end_matches('/'),
            enc(&filters),
            enc(STRUCTURE)
        )
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    pub url: String,
    http: HttpClient,
}

impl Client {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout) // total request timeout
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .user_agent(concat!("covid-stats/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build http client")?;
        Ok(Self {
            url: config.url(),
            http,
        })
    }

    /// GET the configured URL and return the body text.
    fn get_body(&self) -> Result<String> {
        let mut last_err: Option<anyhow::Error> = None;
        for (attempt, backoff_ms) in BACKOFF_MS.into_iter().enumerate() {
            if backoff_ms > 0 {
                std::thread::sleep(Duration::from_millis(backoff_ms));
            }
            match self.http.get(&self.url).send() {
                Ok(r) if r.status().is_success() => {
                    return r.text().context("read response body");
                }
                Ok(r) => bail!("received non-200 status code {}", r.status().as_u16()),
                Err(e) => {
                    debug!("request attempt {} failed: {e}", attempt + 1);
                    last_err = Some(e.into());
                }
            }
        }
        Err(last_err
            .unwrap_or_else(|| anyhow!("no request attempts"))
            .context("network error"))
    }
}

impl DataSource for Client {
    fn fetch(&self, window_days: u32) -> Result<Vec<DailyFigures>> {
        debug!("GET {}", self.url);
        let body = self
            .get_body()
            .with_context(|| format!("GET {}", self.url))?;
        parse_figures(&body, window_days, Local::now().date_naive())
    }
}

/// Decode an API body and keep the days inside the window.
///
/// A day is kept when it falls on or after `today - window_days` and is not
/// `today` itself. Missing counts become zero; negative corrections are clamped
/// to zero. Both are logged as warnings since they skew the chart.
///
/// ### Errors
/// - malformed JSON
/// - a response with no entries
/// - an entry without a date, or with a date not in `YYYY-MM-DD` form
pub fn parse_figures(
    body: &str,
    window_days: u32,
    today: NaiveDate,
) -> Result<Vec<DailyFigures>> {
    let response: Response = serde_json::from_str(body).context("decode json")?;
    if response.data.is_empty() {
        bail!("response is empty");
    }

    let from = today
        .checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN);

    let mut out = Vec::new();
    for entry in response.data {
        let Some(raw_date) = entry.date else {
            bail!("the covid data api is returning entries with no specified date");
        };
        let date = NaiveDate::parse_from_str(&raw_date, API_DATE_FORMAT)
            .with_context(|| format!("parse date {raw_date:?}"))?;

        if date < from || date == today {
            continue;
        }

        out.push(DailyFigures {
            date,
            cases: count_or_zero(entry.cases, "case", date),
            deaths: count_or_zero(entry.deaths, "death", date),
        });
    }
    Ok(out)
}

fn count_or_zero(value: Option<i64>, what: &str, date: NaiveDate) -> u64 {
    match value {
        Some(v) if v >= 0 => v as u64,
        Some(v) => {
            warn!("negative {what} count {v} for {date}; using 0, which might skew the results");
            0
        }
        None => {
            warn!("the api has no {what} data for {date}. This might skew the results.");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_encodes_filters_and_structure() {
        let url = ApiConfig::default().url();
        assert!(url.starts_with("https://api.coronavirus.data.gov.uk/v1/data?filters="));
        assert!(url.contains("areaType%3Dnation%3BareaName%3Dengland"));
        assert!(url.contains("newCasesByPublishDate"));
        assert!(!url.contains('{'));
        assert!(!url.contains('"'));
    }

    #[test]
    fn url_ignores_trailing_slash_on_base() {
        let cfg = ApiConfig {
            base_url: "http://localhost:8080/data/".into(),
            ..ApiConfig::default()
        };
        assert!(cfg.url().starts_with("http://localhost:8080/data?filters="));
    }

    #[test]
    fn count_or_zero_clamps() {
        let d = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        assert_eq!(count_or_zero(Some(5), "case", d), 5);
        assert_eq!(count_or_zero(Some(-3), "case", d), 0);
        assert_eq!(count_or_zero(None, "death", d), 0);
    }
}
