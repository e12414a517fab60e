//! Output structures for projections

use serde::{Deserialize, Serialize};

use crate::inputs::ProjectionInput;

/// Year-end balances, index 0 being the untouched principal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalanceSeries(Vec<f64>);

impl BalanceSeries {
    pub(crate) fn with_capacity(years: u32) -> Self {
        Self(Vec::with_capacity(years as usize + 1))
    }

    pub(crate) fn push(&mut self, balance: f64) {
        self.0.push(balance);
    }

    /// All balances in year order
    pub fn balances(&self) -> &[f64] {
        &self.0
    }

    /// Balance at the end of `year` (year 0 is the principal)
    pub fn at_year(&self, year: u32) -> Option<f64> {
        self.0.get(year as usize).copied()
    }

    /// The starting principal
    pub fn initial(&self) -> f64 {
        self.0.first().copied().unwrap_or(0.0)
    }

    /// Balance at the end of the final year
    pub fn final_balance(&self) -> f64 {
        self.0.last().copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// True when no year ends below the year before it
    pub fn is_non_decreasing(&self) -> bool {
        self.0.windows(2).all(|w| w[1] >= w[0])
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for BalanceSeries {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// One year of a projection, with contributions and interest to date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    pub year: u32,
    pub balance: f64,
    pub contributions: f64,
    pub interest: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Input the series was projected from
    pub input: ProjectionInput,

    /// Year-end balances
    pub series: BalanceSeries,
}

impl ProjectionResult {
    pub fn new(input: ProjectionInput, series: BalanceSeries) -> Self {
        Self { input, series }
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let final_balance = self.series.final_balance();
        let total_contributions = self.input.total_contributions();

        ProjectionSummary {
            final_balance,
            total_contributions,
            total_interest: final_balance - total_contributions,
        }
    }

    /// Per-year breakdown, year 0 through the final year
    pub fn year_rows(&self) -> Vec<YearRow> {
        self.series
            .iter()
            .enumerate()
            .map(|(year, balance)| {
                let year = year as u32;
                let contributions = self.input.contributions_through(year);
                YearRow {
                    year,
                    balance,
                    contributions,
                    interest: balance - contributions,
                }
            })
            .collect()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub final_balance: f64,
    pub total_contributions: f64,
    pub total_interest: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::CompoundingFrequency;

    fn series(values: &[f64]) -> BalanceSeries {
        BalanceSeries(values.to_vec())
    }

    #[test]
    fn test_series_accessors() {
        let s = series(&[100.0, 110.0, 121.0]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.initial(), 100.0);
        assert_eq!(s.final_balance(), 121.0);
        assert_eq!(s.at_year(1), Some(110.0));
        assert_eq!(s.at_year(3), None);
        assert!(s.is_non_decreasing());
        assert!(!series(&[100.0, 99.0]).is_non_decreasing());
    }

    #[test]
    fn test_summary_and_rows() {
        let input = ProjectionInput::new(100.0, 10.0, 10.0, 2, CompoundingFrequency::Annually);
        let result = ProjectionResult::new(input, series(&[100.0, 120.0, 142.0]));

        let summary = result.summary();
        assert_eq!(summary.final_balance, 142.0);
        assert_eq!(summary.total_contributions, 120.0);
        assert_eq!(summary.total_interest, 22.0);

        let rows = result.year_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], YearRow { year: 0, balance: 100.0, contributions: 100.0, interest: 0.0 });
        assert_eq!(rows[1].contributions, 110.0);
        assert_eq!(rows[1].interest, 10.0);
    }

    #[test]
    fn test_series_serializes_as_array() {
        let json = serde_json::to_string(&series(&[1.0, 2.5])).unwrap();
        assert_eq!(json, "[1.0,2.5]");
    }
}
