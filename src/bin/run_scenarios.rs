//! Run a batch of named scenarios from CSV
//!
//! Usage: cargo run --bin run_scenarios -- --input scenarios.csv [--output summary.csv]
//!
//! Input columns: Name,Principal,AnnualContribution,RatePercent,Years,Frequency
//! Output columns: Name,FinalBalance,TotalContributions,TotalInterest,Error

use anyhow::{Context, Result};
use clap::Parser;
use compound_growth::inputs::load_inputs;
use compound_growth::{ScenarioOutcome, ScenarioRunner};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_scenarios")]
#[command(about = "Project every scenario in a CSV file", long_about = None)]
struct Args {
    /// Scenario CSV file
    #[arg(short, long, env = "SCENARIO_FILE")]
    input: PathBuf,

    /// Write the summary CSV here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// One output line per scenario
#[derive(Debug, Serialize)]
struct SummaryRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "FinalBalance")]
    final_balance: Option<f64>,
    #[serde(rename = "TotalContributions")]
    total_contributions: Option<f64>,
    #[serde(rename = "TotalInterest")]
    total_interest: Option<f64>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl From<&ScenarioOutcome> for SummaryRow {
    fn from(outcome: &ScenarioOutcome) -> Self {
        match &outcome.result {
            Ok(result) => {
                let summary = result.summary();
                SummaryRow {
                    name: outcome.name.clone(),
                    final_balance: Some(summary.final_balance),
                    total_contributions: Some(summary.total_contributions),
                    total_interest: Some(summary.total_interest),
                    error: None,
                }
            }
            Err(e) => SummaryRow {
                name: outcome.name.clone(),
                final_balance: None,
                total_contributions: None,
                total_interest: None,
                error: Some(e.to_string()),
            },
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let scenarios = load_inputs(&args.input)
        .with_context(|| format!("Failed to load scenarios from {}", args.input.display()))?;
    log::info!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let outcomes = ScenarioRunner::new().run_batch(&scenarios);

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Unable to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = csv::Writer::from_writer(out);
    for outcome in &outcomes {
        writer.serialize(SummaryRow::from(outcome))?;
    }
    writer.flush()?;

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    eprintln!(
        "{} scenarios projected, {} rejected, in {:?}",
        outcomes.len() - failed,
        failed,
        start.elapsed()
    );
    Ok(())
}
