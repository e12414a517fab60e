//! Projection input record and the compounding frequencies offered to users

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ProjectionError, Result, UnknownFrequency};

/// Longest supported horizon in years
pub const MAX_YEARS: u32 = 100;

/// Highest supported number of compounding periods per year
pub const MAX_PERIODS_PER_YEAR: u32 = 365;

/// Highest supported annual rate, in percent
pub const MAX_RATE_PERCENT: f64 = 100.0;

/// How often interest is compounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    #[default]
    Annually,
    SemiAnnually,
    Quarterly,
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    pub const ALL: [CompoundingFrequency; 5] = [
        CompoundingFrequency::Annually,
        CompoundingFrequency::SemiAnnually,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Daily,
    ];

    /// Number of compounding periods in one year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::SemiAnnually => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
        }
    }

    /// Look up the frequency with the given period count
    pub fn from_periods(periods: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.periods_per_year() == periods)
    }

    /// Display label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            CompoundingFrequency::Annually => "Annually",
            CompoundingFrequency::SemiAnnually => "Semi-annually",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Daily => "Daily",
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CompoundingFrequency {
    type Err = UnknownFrequency;

    /// Accepts a label ("monthly", "Semi-annually") or a period count ("12")
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(periods) = trimmed.parse::<u32>() {
            return Self::from_periods(periods).ok_or_else(|| UnknownFrequency(s.to_string()));
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "annually" | "annual" | "yearly" => Ok(CompoundingFrequency::Annually),
            "semi-annually" | "semiannually" | "semi-annual" => Ok(CompoundingFrequency::SemiAnnually),
            "quarterly" => Ok(CompoundingFrequency::Quarterly),
            "monthly" => Ok(CompoundingFrequency::Monthly),
            "daily" => Ok(CompoundingFrequency::Daily),
            _ => Err(UnknownFrequency(s.to_string())),
        }
    }
}

/// The five scalar inputs of a projection
///
/// `periods_per_year` is a raw count so that library callers may compound at
/// any whole frequency within bounds; the CLI restricts it to
/// [`CompoundingFrequency`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Starting balance
    pub principal: f64,

    /// Total contributed per year, spread evenly over its periods
    pub annual_contribution: f64,

    /// Nominal annual interest rate in percent (7.0 = 7%)
    pub annual_rate_percent: f64,

    /// Projection horizon in whole years
    pub years: u32,

    /// Compounding periods per year
    pub periods_per_year: u32,
}

impl ProjectionInput {
    pub fn new(
        principal: f64,
        annual_contribution: f64,
        annual_rate_percent: f64,
        years: u32,
        frequency: CompoundingFrequency,
    ) -> Self {
        Self::with_periods(
            principal,
            annual_contribution,
            annual_rate_percent,
            years,
            frequency.periods_per_year(),
        )
    }

    /// Create an input with an arbitrary period count
    pub fn with_periods(
        principal: f64,
        annual_contribution: f64,
        annual_rate_percent: f64,
        years: u32,
        periods_per_year: u32,
    ) -> Self {
        Self {
            principal,
            annual_contribution,
            annual_rate_percent,
            years,
            periods_per_year,
        }
    }

    /// Same input at a different annual rate
    pub fn with_rate(&self, annual_rate_percent: f64) -> Self {
        Self {
            annual_rate_percent,
            ..*self
        }
    }

    /// Check every field against its constraint
    pub fn validate(&self) -> Result<()> {
        check_amount("principal", self.principal)?;
        check_amount("annual_contribution", self.annual_contribution)?;

        if !self.annual_rate_percent.is_finite() {
            return Err(ProjectionError::invalid("annual_rate_percent", "must be a finite number"));
        }
        if !(0.0..=MAX_RATE_PERCENT).contains(&self.annual_rate_percent) {
            return Err(ProjectionError::invalid(
                "annual_rate_percent",
                format!("must be between 0 and {}, got {}", MAX_RATE_PERCENT, self.annual_rate_percent),
            ));
        }

        if !(1..=MAX_YEARS).contains(&self.years) {
            return Err(ProjectionError::invalid(
                "years",
                format!("must be between 1 and {}, got {}", MAX_YEARS, self.years),
            ));
        }

        if !(1..=MAX_PERIODS_PER_YEAR).contains(&self.periods_per_year) {
            return Err(ProjectionError::invalid(
                "periods_per_year",
                format!("must be between 1 and {}, got {}", MAX_PERIODS_PER_YEAR, self.periods_per_year),
            ));
        }

        Ok(())
    }

    /// The named frequency, when the period count is one of the offered set
    pub fn frequency(&self) -> Option<CompoundingFrequency> {
        CompoundingFrequency::from_periods(self.periods_per_year)
    }

    /// Principal plus every contribution over the horizon
    pub fn total_contributions(&self) -> f64 {
        self.contributions_through(self.years)
    }

    /// Principal plus contributions made by the end of `year`
    pub fn contributions_through(&self, year: u32) -> f64 {
        self.principal + self.annual_contribution * year as f64
    }
}

impl Default for ProjectionInput {
    fn default() -> Self {
        Self::new(10_000.0, 1_000.0, 7.0, 30, CompoundingFrequency::Annually)
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ProjectionError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(ProjectionError::invalid(field, format!("must be non-negative, got {}", value)));
    }
    Ok(())
}

/// A projection input tagged with a scenario name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedInput {
    pub name: String,
    pub input: ProjectionInput,
}

impl NamedInput {
    pub fn new(name: impl Into<String>, input: ProjectionInput) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}
