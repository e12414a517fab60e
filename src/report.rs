//! Text, CSV and JSON rendering of projection results
//!
//! All rounding happens here; the engine hands over unrounded balances.

use serde::Serialize;
use std::io::Write;

use crate::inputs::ProjectionInput;
use crate::projection::{BalanceSeries, ProjectionResult, ProjectionSummary, YearRow};

pub const CHART_TITLE: &str = "Compound Interest Growth";

/// Format a dollar amount with thousands separators and at most two decimals
///
/// Trailing zero decimals are dropped: `40000.0` renders as `$40,000`,
/// `1234.5` as `$1,234.5`.
pub fn format_dollars(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && rounded.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if negative { "-" } else { "" };
    if fraction.is_empty() {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{}", sign, grouped, fraction)
    }
}

/// The "Results" block: final balance, total contributions, interest earned
pub fn render_summary(result: &ProjectionResult) -> String {
    let summary = result.summary();
    format!(
        "Results:\n  Final Balance:         {}\n  Total Contributions:   {}\n  Total Interest Earned: {}\n",
        format_dollars(summary.final_balance),
        format_dollars(summary.total_contributions),
        format_dollars(summary.total_interest),
    )
}

/// Echo of the inputs a result was computed from
pub fn render_inputs(input: &ProjectionInput) -> String {
    let frequency = match input.frequency() {
        Some(f) => f.label().to_string(),
        None => format!("{} periods/year", input.periods_per_year),
    };
    format!(
        "  Initial Investment:   {}\n  Annual Contribution:  {}\n  Annual Interest Rate: {}%\n  Investment Period:    {} years\n  Compound Frequency:   {}\n",
        format_dollars(input.principal),
        format_dollars(input.annual_contribution),
        input.annual_rate_percent,
        input.years,
        frequency,
    )
}

/// Year-by-year table of balance, contributions and interest to date
pub fn render_table(result: &ProjectionResult) -> String {
    let mut out = format!(
        "{:>5} {:>18} {:>18} {:>18}\n{}\n",
        "Year",
        "Balance",
        "Contributions",
        "Interest",
        "-".repeat(62)
    );
    for row in result.year_rows() {
        out.push_str(&format!(
            "{:>5} {:>18} {:>18} {:>18}\n",
            row.year,
            format_dollars(row.balance),
            format_dollars(row.contributions),
            format_dollars(row.interest),
        ));
    }
    out
}

/// Horizontal bar chart of the balance series, one bar per year
///
/// Bars are scaled so the largest balance spans `width` characters.
pub fn render_chart(series: &BalanceSeries, width: usize) -> String {
    let max = series.iter().fold(0.0_f64, f64::max);
    let mut out = format!("{}\n{:>5} | Balance ($)\n", CHART_TITLE, "Years");

    for (year, balance) in series.iter().enumerate() {
        let filled = if max > 0.0 {
            ((balance / max) * width as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{:>5} | {:<width$} {}\n",
            year,
            "#".repeat(filled.min(width)),
            format_dollars(balance),
            width = width,
        ));
    }
    out
}

/// Full text report: inputs, results, table and chart
pub fn render_text(result: &ProjectionResult, chart_width: usize) -> String {
    format!(
        "Compound Interest Calculator\n\n{}\n{}\n{}\n{}",
        render_inputs(&result.input),
        render_summary(result),
        render_table(result),
        render_chart(&result.series, chart_width),
    )
}

/// CSV row for year-by-year output
#[derive(Debug, Serialize)]
struct CsvYearRow {
    #[serde(rename = "Year")]
    year: u32,
    #[serde(rename = "Balance")]
    balance: f64,
    #[serde(rename = "Contributions")]
    contributions: f64,
    #[serde(rename = "Interest")]
    interest: f64,
}

impl From<YearRow> for CsvYearRow {
    fn from(row: YearRow) -> Self {
        Self {
            year: row.year,
            balance: row.balance,
            contributions: row.contributions,
            interest: row.interest,
        }
    }
}

/// Write `Year,Balance,Contributions,Interest` rows at full precision
pub fn write_csv<W: Write>(result: &ProjectionResult, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in result.year_rows() {
        csv_writer.serialize(CsvYearRow::from(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    input: &'a ProjectionInput,
    frequency: Option<&'static str>,
    series: &'a BalanceSeries,
    summary: ProjectionSummary,
    years: Vec<YearRow>,
}

/// Pretty JSON with input, series, summary and per-year rows
pub fn to_json(result: &ProjectionResult) -> serde_json::Result<String> {
    let report = JsonReport {
        input: &result.input,
        frequency: result.input.frequency().map(|f| f.label()),
        series: &result.series,
        summary: result.summary(),
        years: result.year_rows(),
    };
    serde_json::to_string_pretty(&report)
}
