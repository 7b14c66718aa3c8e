use anyhow::Result;
use chrono::NaiveDate;
use covid_stats::menu;
use covid_stats::{DailyFigures, DataSource, Reporter};
use std::io::Cursor;

struct Fixed;

impl DataSource for Fixed {
    fn fetch(&self, _window_days: u32) -> Result<Vec<DailyFigures>> {
        Ok(vec![DailyFigures {
            date: NaiveDate::from_ymd_opt(2021, 2, 1).unwrap(),
            cases: 4,
            deaths: 2,
        }])
    }
}

struct Nothing;

impl DataSource for Nothing {
    fn fetch(&self, _window_days: u32) -> Result<Vec<DailyFigures>> {
        Ok(vec![])
    }
}

fn session<S: DataSource>(source: S, input: &str) -> String {
    let reporter = Reporter::new(source);
    let mut out = Vec::new();
    menu::run(&reporter, Cursor::new(input), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn prints_a_chart_for_a_valid_choice() {
    let out = session(Fixed, "c\nw\n");
    assert!(out.contains("- d for deaths"));
    assert!(out.contains("- www for cases over the last three weeks"));
    assert!(out.contains("Fetching cases for the last 1 week(s)..."));
    assert!(out.contains("----- New cases -----"));
    assert!(out.contains("01/02 (4) | ****"));
    assert!(out.trim_end().ends_with("Bye."));
}

#[test]
fn deaths_use_the_deaths_column() {
    let out = session(Fixed, "d\nmmm\n");
    assert!(out.contains("Fetching deaths for the last 12 week(s)..."));
    assert!(out.contains("01/02 (2) | **"));
}

#[test]
fn invalid_choices_reprompt() {
    let out = session(Fixed, "x\nc\nzz\nq\n");
    assert!(out.contains("'x' isn't one of the options."));
    assert!(out.contains("'zz' is not a valid period."));
    assert!(!out.contains("-----"));
    assert_eq!(out.matches("Type:").count(), 3);
}

#[test]
fn chart_errors_are_reported_and_the_loop_continues() {
    let out = session(Nothing, "c\nw\nd\nw\n");
    let cases_err = "Error fetching the cases stats: there are no bars in the bar chart";
    let deaths_err = "Error fetching the deaths stats: there are no bars in the bar chart";
    assert_eq!(out.matches(cases_err).count(), 1);
    assert_eq!(out.matches(deaths_err).count(), 1);
}

#[test]
fn end_of_input_ends_the_session() {
    let out = session(Fixed, "");
    assert!(out.contains("Type:"));
    assert!(out.trim_end().ends_with("Bye."));

    let out = session(Fixed, "c\n");
    assert!(!out.contains("Fetching"));
}
