//! Line-based interactive menu.
//!
//! The loop reads one choice per line: first the metric, then the period.
//! Invalid choices print a short message and the menu starts over. End of
//! input, or `q` at any prompt, ends the session.

use crate::api::DataSource;
use crate::report::{Metric, Reporter};
use anyhow::Result;
use std::io::{BufRead, Write};

/// How far back a chart reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub weeks: u32,
}

/// Menu keys for the available periods, shortest first.
pub const PERIODS: [(&str, u32, &str); 6] = [
    ("w", 1, "the last week"),
    ("ww", 2, "the last two weeks"),
    ("www", 3, "the last three weeks"),
    ("m", 4, "the last four weeks"),
    ("mm", 8, "the last eight weeks"),
    ("mmm", 12, "the last twelve weeks"),
];

pub fn parse_period(input: &str) -> Option<Period> {
    PERIODS
        .iter()
        .find(|(key, _, _)| *key == input.trim())
        .map(|&(_, weeks, _)| Period { weeks })
}

pub fn parse_metric(input: &str) -> Option<Metric> {
    match input.trim() {
        "c" => Some(Metric::Cases),
        "d" => Some(Metric::Deaths),
        _ => None,
    }
}

fn is_quit(input: &str) -> bool {
    matches!(input.trim(), "q" | "quit" | "exit")
}

fn write_intro<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Latest COVID-19 trends, straight from the public dashboard.")?;
    writeln!(out)?;
    writeln!(
        out,
        "NOTE: bars are scaled to fit the terminal; use the numbers in brackets for raw figures."
    )?;
    writeln!(out)?;
    Ok(())
}

fn write_metric_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Type:")?;
    writeln!(out)?;
    writeln!(out, "- d for deaths")?;
    writeln!(out, "- c for cases")?;
    writeln!(out, "- q to quit")?;
    writeln!(out)?;
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

fn write_period_menu<W: Write>(out: &mut W, metric: Metric) -> Result<()> {
    writeln!(out)?;
    for (key, _, text) in PERIODS {
        writeln!(out, "- {key} for {} over {text}", metric.noun())?;
    }
    writeln!(out)?;
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

/// Read the next trimmed line; `None` on end of input.
fn next_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Run the menu until the input ends or the user quits.
///
/// Chart failures are printed and the loop carries on; only I/O errors on
/// `input`/`output` end the session with an error.
pub fn run<S, R, W>(reporter: &Reporter<S>, mut input: R, mut out: W) -> Result<()>
where
    S: DataSource,
    R: BufRead,
    W: Write,
{
    write_intro(&mut out)?;
    loop {
        write_metric_menu(&mut out)?;
        let Some(choice) = next_line(&mut input)? else {
            break;
        };
        if is_quit(&choice) {
            break;
        }
        let Some(metric) = parse_metric(&choice) else {
            writeln!(out, "'{choice}' isn't one of the options.")?;
            writeln!(out)?;
            continue;
        };

        write_period_menu(&mut out, metric)?;
        let Some(choice) = next_line(&mut input)? else {
            break;
        };
        writeln!(out)?;
        if is_quit(&choice) {
            break;
        }
        let Some(period) = parse_period(&choice) else {
            writeln!(out, "'{choice}' is not a valid period.")?;
            writeln!(out)?;
            continue;
        };

        writeln!(
            out,
            "Fetching {} for the last {} week(s)...",
            metric.noun(),
            period.weeks
        )?;
        match reporter.chart(metric, period.weeks) {
            Ok(chart) => writeln!(out, "{chart}")?,
            Err(e) => writeln!(out, "Error fetching the {} stats: {e:#}", metric.noun())?,
        }
    }
    writeln!(out)?;
    writeln!(out, "Bye.")?;
    out.flush()?;
    Ok(())
}
