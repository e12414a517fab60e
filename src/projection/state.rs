//! Running balance carried period by period through a projection

use crate::inputs::ProjectionInput;

/// Balance and timing at a point in time during projection
#[derive(Debug, Clone)]
pub struct AccumulationState {
    /// Periods completed so far (0 before the first period)
    pub period: u32,

    /// Compounding periods per year
    pub periods_per_year: u32,

    /// Balance after the most recent period
    pub balance: f64,

    /// Interest rate applied each period, as a fraction
    pub rate_per_period: f64,

    /// Contribution added at the end of each period
    pub contribution_per_period: f64,
}

impl AccumulationState {
    /// Initialize state at projection start
    pub fn from_input(input: &ProjectionInput) -> Self {
        let periods = input.periods_per_year as f64;
        Self {
            period: 0,
            periods_per_year: input.periods_per_year,
            balance: input.principal,
            rate_per_period: input.annual_rate_percent / 100.0 / periods,
            contribution_per_period: input.annual_contribution / periods,
        }
    }

    /// Compound one period, then add that period's contribution
    pub fn advance_period(&mut self) -> f64 {
        self.period += 1;
        self.balance = self.balance * (1.0 + self.rate_per_period) + self.contribution_per_period;
        self.balance
    }

    /// Whether the last completed period closed a full year
    pub fn is_year_end(&self) -> bool {
        self.period > 0 && self.period % self.periods_per_year == 0
    }

    /// Year in progress (1-indexed); the closing period of a year still belongs to it
    pub fn year(&self) -> u32 {
        self.period.saturating_sub(1) / self.periods_per_year + 1
    }

    /// Period within the current year (1..=periods_per_year)
    pub fn period_in_year(&self) -> u32 {
        self.period.saturating_sub(1) % self.periods_per_year + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::CompoundingFrequency;
    use approx::assert_relative_eq;

    #[test]
    fn test_per_period_terms() {
        let input = ProjectionInput::new(1_000.0, 1_200.0, 6.0, 2, CompoundingFrequency::Monthly);
        let state = AccumulationState::from_input(&input);

        assert_eq!(state.balance, 1_000.0);
        assert_relative_eq!(state.rate_per_period, 0.005);
        assert_relative_eq!(state.contribution_per_period, 100.0);
    }

    #[test]
    fn test_year_boundaries() {
        let input = ProjectionInput::new(0.0, 0.0, 0.0, 2, CompoundingFrequency::Quarterly);
        let mut state = AccumulationState::from_input(&input);
        assert!(!state.is_year_end());

        let mut ends = Vec::new();
        for _ in 0..8 {
            state.advance_period();
            if state.is_year_end() {
                ends.push(state.period);
            }
        }
        assert_eq!(ends, vec![4, 8]);
    }

    #[test]
    fn test_timing() {
        let input = ProjectionInput::new(0.0, 0.0, 0.0, 3, CompoundingFrequency::Monthly);
        let mut state = AccumulationState::from_input(&input);

        state.advance_period();
        assert_eq!(state.year(), 1);
        assert_eq!(state.period_in_year(), 1);

        for _ in 1..12 {
            state.advance_period();
        }
        assert_eq!(state.year(), 1);
        assert_eq!(state.period_in_year(), 12);

        state.advance_period();
        assert_eq!(state.year(), 2);
        assert_eq!(state.period_in_year(), 1);
    }

    #[test]
    fn test_advance_applies_interest_before_contribution() {
        let input = ProjectionInput::new(100.0, 10.0, 10.0, 1, CompoundingFrequency::Annually);
        let mut state = AccumulationState::from_input(&input);
        assert_relative_eq!(state.advance_period(), 120.0, epsilon = 1e-12);
    }
}
