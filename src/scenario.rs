//! Scenario runner for batch projections
//!
//! Each scenario is an independent projection, so batches fan out across
//! threads while every individual projection stays single-threaded.

use rayon::prelude::*;

use crate::error::{ProjectionError, Result};
use crate::inputs::{NamedInput, ProjectionInput};
use crate::projection::{ProjectionEngine, ProjectionResult};

/// Outcome of one named scenario in a batch
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: std::result::Result<ProjectionResult, ProjectionError>,
}

impl ScenarioOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs single projections, batches, and rate sweeps
///
/// # Example
/// ```
/// use compound_growth::{ProjectionInput, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let results = runner.rate_sweep(&ProjectionInput::default(), &[3.0, 5.0, 7.0]).unwrap();
/// assert!(results[2].series.final_balance() > results[0].series.final_balance());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner;

impl ScenarioRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run a single projection
    pub fn run(&self, input: &ProjectionInput) -> Result<ProjectionResult> {
        Ok(ProjectionEngine::new(*input)?.run())
    }

    /// Run every scenario independently, preserving input order
    ///
    /// An invalid scenario produces an error outcome without affecting the rest.
    pub fn run_batch(&self, scenarios: &[NamedInput]) -> Vec<ScenarioOutcome> {
        let outcomes: Vec<ScenarioOutcome> = scenarios
            .par_iter()
            .map(|scenario| ScenarioOutcome {
                name: scenario.name.clone(),
                result: self.run(&scenario.input),
            })
            .collect();

        let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
        if failed > 0 {
            log::warn!("{} of {} scenarios rejected", failed, outcomes.len());
        }
        log::info!("Ran {} scenarios", outcomes.len());

        outcomes
    }

    /// Project the same input at each of the given annual rates
    ///
    /// All rates are validated before any projection runs; a single bad rate
    /// fails the whole sweep.
    pub fn rate_sweep(&self, input: &ProjectionInput, rates_percent: &[f64]) -> Result<Vec<ProjectionResult>> {
        let engines = rates_percent
            .iter()
            .map(|&rate| ProjectionEngine::new(input.with_rate(rate)))
            .collect::<Result<Vec<_>>>()?;

        Ok(engines.par_iter().map(ProjectionEngine::run).collect())
    }
}
