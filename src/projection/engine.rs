//! Core projection engine for compound growth with periodic contributions

use super::series::{BalanceSeries, ProjectionResult};
use super::state::AccumulationState;
use crate::error::Result;
use crate::inputs::ProjectionInput;

/// Engine bound to a single validated input
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    input: ProjectionInput,
}

impl ProjectionEngine {
    /// Validate the input and build an engine for it
    pub fn new(input: ProjectionInput) -> Result<Self> {
        input.validate()?;
        Ok(Self { input })
    }

    pub fn input(&self) -> &ProjectionInput {
        &self.input
    }

    /// Run the projection
    pub fn run(&self) -> ProjectionResult {
        ProjectionResult::new(self.input, self.accumulate())
    }

    /// Compound every period, recording the balance only when a full year closes
    fn accumulate(&self) -> BalanceSeries {
        let mut state = AccumulationState::from_input(&self.input);
        let mut series = BalanceSeries::with_capacity(self.input.years);
        series.push(state.balance);

        let total_periods = self.input.years * self.input.periods_per_year;
        for _ in 0..total_periods {
            state.advance_period();
            if state.is_year_end() {
                series.push(state.balance);
            }
        }

        log::debug!(
            "Projected {} years over {} periods: final balance {:.2}",
            self.input.years,
            total_periods,
            state.balance
        );

        series
    }
}

/// Project a yearly balance series from scalar inputs
///
/// Fails with [`ProjectionError::InvalidInput`](crate::ProjectionError::InvalidInput)
/// before any computation when an input is out of range.
pub fn project(
    principal: f64,
    annual_contribution: f64,
    annual_rate_percent: f64,
    years: u32,
    periods_per_year: u32,
) -> Result<BalanceSeries> {
    let input = ProjectionInput::with_periods(
        principal,
        annual_contribution,
        annual_rate_percent,
        years,
        periods_per_year,
    );
    Ok(ProjectionEngine::new(input)?.accumulate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;
    use crate::inputs::CompoundingFrequency;
    use approx::assert_relative_eq;

    /// Straight evaluation of the recurrence, independent of the state type
    fn recurrence(principal: f64, contribution: f64, rate: f64, years: u32, freq: u32) -> Vec<f64> {
        let rate_per_period = rate / 100.0 / freq as f64;
        let contribution_per_period = contribution / freq as f64;
        let mut balance = principal;
        let mut out = vec![balance];
        for p in 1..=years * freq {
            balance = balance * (1.0 + rate_per_period) + contribution_per_period;
            if p % freq == 0 {
                out.push(balance);
            }
        }
        out
    }

    #[test]
    fn test_form_defaults() {
        let series = project(10_000.0, 1_000.0, 7.0, 30, 1).unwrap();

        assert_eq!(series.len(), 31);
        assert_eq!(series.initial(), 10_000.0);
        assert_eq!(series.balances(), recurrence(10_000.0, 1_000.0, 7.0, 30, 1).as_slice());
        assert_relative_eq!(series.final_balance(), 170_583.336_750_363_76, max_relative = 1e-12);
    }

    #[test]
    fn test_first_year_by_hand() {
        let series = project(10_000.0, 1_000.0, 7.0, 1, 1).unwrap();
        assert_relative_eq!(series.final_balance(), 11_700.0, epsilon = 1e-9);
    }

    #[test]
    fn test_all_zero_monthly() {
        let series = project(0.0, 0.0, 0.0, 5, 12).unwrap();
        assert_eq!(series.into_vec(), vec![0.0; 6]);
    }

    #[test]
    fn test_zero_rate_zero_contribution_is_constant() {
        let series = project(2_500.0, 0.0, 0.0, 10, 365).unwrap();
        assert_eq!(series.len(), 11);
        assert!(series.iter().all(|b| b == 2_500.0));
    }

    #[test]
    fn test_zero_rate_accumulates_contributions() {
        let series = project(0.0, 1_200.0, 0.0, 3, 12).unwrap();
        assert_relative_eq!(series.at_year(1).unwrap(), 1_200.0, epsilon = 1e-9);
        assert_relative_eq!(series.final_balance(), 3_600.0, epsilon = 1e-9);
    }

    #[test]
    fn test_samples_only_at_year_ends() {
        for freq in [2, 4, 12, 365] {
            let series = project(1_000.0, 500.0, 5.0, 4, freq).unwrap();
            assert_eq!(series.len(), 5, "frequency {}", freq);
            assert_eq!(series.balances(), recurrence(1_000.0, 500.0, 5.0, 4, freq).as_slice());
        }
    }

    #[test]
    fn test_more_frequent_compounding_grows_faster() {
        let annual = project(10_000.0, 0.0, 6.0, 10, 1).unwrap();
        let monthly = project(10_000.0, 0.0, 6.0, 10, 12).unwrap();
        let daily = project(10_000.0, 0.0, 6.0, 10, 365).unwrap();

        assert!(monthly.final_balance() > annual.final_balance());
        assert!(daily.final_balance() > monthly.final_balance());
        assert_relative_eq!(monthly.final_balance(), 10_000.0 * 1.005f64.powi(120), max_relative = 1e-10);
    }

    #[test]
    fn test_invalid_inputs() {
        let cases = [
            project(1_000.0, 0.0, 5.0, 0, 1),
            project(1_000.0, 0.0, -1.0, 5, 1),
            project(1_000.0, 0.0, 5.0, 5, 0),
            project(-1.0, 0.0, 5.0, 5, 1),
            project(1_000.0, -100.0, 5.0, 5, 1),
        ];
        for result in cases {
            assert!(matches!(result, Err(ProjectionError::InvalidInput { .. })));
        }
    }

    #[test]
    fn test_engine_run_keeps_input() {
        let input = ProjectionInput::new(5_000.0, 600.0, 4.5, 15, CompoundingFrequency::Quarterly);
        let engine = ProjectionEngine::new(input).unwrap();
        let result = engine.run();

        assert_eq!(result.input, input);
        assert_eq!(result.series.len(), 16);
        assert_eq!(
            result.series.balances(),
            project(5_000.0, 600.0, 4.5, 15, 4).unwrap().balances()
        );
    }

    #[test]
    fn test_engine_rejects_invalid_input() {
        let input = ProjectionInput { years: 0, ..ProjectionInput::default() };
        let err = ProjectionEngine::new(input).unwrap_err();
        assert_eq!(err.field(), "years");
    }
}
