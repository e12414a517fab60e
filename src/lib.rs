//! Compound Growth - projections of an investment under compound interest
//!
//! This library provides:
//! - Yearly-sampled balance projections with periodic contributions
//! - Input validation and scenario loading from CSV
//! - Batch and rate-sweep scenario runs
//! - Text, CSV and JSON reports

pub mod error;
pub mod inputs;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{LoadError, ProjectionError};
pub use inputs::{CompoundingFrequency, NamedInput, ProjectionInput};
pub use projection::{project, BalanceSeries, ProjectionEngine, ProjectionResult, ProjectionSummary};
pub use scenario::{ScenarioOutcome, ScenarioRunner};
