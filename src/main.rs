//! Compound Growth CLI
//!
//! Projects a single investment and prints the results, a year-by-year
//! table and a growth chart. Every input falls back to an environment
//! variable, then to the calculator defaults.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use compound_growth::{report, CompoundingFrequency, ProjectionEngine, ProjectionInput};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

/// Compound interest growth calculator
#[derive(Parser, Debug)]
#[command(name = "compound_growth")]
#[command(about = "Project compound-interest growth of an investment", long_about = None)]
#[command(version)]
struct Cli {
    /// Initial investment ($)
    #[arg(long, env = "PRINCIPAL", default_value_t = 10_000.0)]
    principal: f64,

    /// Annual contribution ($)
    #[arg(long, env = "ANNUAL_CONTRIBUTION", default_value_t = 1_000.0)]
    contribution: f64,

    /// Annual interest rate (%)
    #[arg(long, env = "RATE_PERCENT", default_value_t = 7.0)]
    rate: f64,

    /// Investment period (years)
    #[arg(long, env = "YEARS", default_value_t = 30)]
    years: u32,

    /// Compound frequency: annually, semi-annually, quarterly, monthly, daily (or 1, 2, 4, 12, 365)
    #[arg(long, env = "COMPOUND_FREQUENCY", default_value = "annually")]
    frequency: CompoundingFrequency,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Width of the growth chart in characters
    #[arg(long, default_value_t = 50)]
    chart_width: usize,

    /// Write to file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let input = ProjectionInput::new(cli.principal, cli.contribution, cli.rate, cli.years, cli.frequency);
    log::info!("Projecting {:?}", input);

    let engine = ProjectionEngine::new(input).context("Cannot project these inputs")?;
    let result = engine.run();

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Unable to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    match cli.format {
        OutputFormat::Text => out.write_all(report::render_text(&result, cli.chart_width).as_bytes())?,
        OutputFormat::Csv => report::write_csv(&result, &mut out)?,
        OutputFormat::Json => writeln!(out, "{}", report::to_json(&result)?)?,
    }
    out.flush()?;

    if let Some(path) = &cli.output {
        eprintln!("Results written to: {}", path.display());
    }
    Ok(())
}
