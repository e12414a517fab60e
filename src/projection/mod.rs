//! Projection engine for compound growth

mod state;
mod engine;
mod series;

pub use state::AccumulationState;
pub use engine::{project, ProjectionEngine};
pub use series::{BalanceSeries, ProjectionResult, ProjectionSummary, YearRow};
