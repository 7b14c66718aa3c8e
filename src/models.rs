use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body returned by the coronavirus data API.
///
/// A body without a `data` field deserializes to an empty list; the caller
/// decides whether that is an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub data: Vec<RawEntry>,
}

/// Raw entry from the `data` array. Every field may be absent or null.
///
/// Counts are signed because publishers occasionally post negative corrections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawEntry {
    pub date: Option<String>,
    pub cases: Option<i64>,
    pub deaths: Option<i64>,
}

/// Tidy structure used by this crate (one row = one day).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyFigures {
    pub date: NaiveDate,
    pub cases: u64,
    pub deaths: u64,
}

/// Date format used by the API (`2021-01-31`).
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format used for bar labels (`31/01`), exactly five columns wide.
pub const LABEL_DATE_FORMAT: &str = "%d/%m";
