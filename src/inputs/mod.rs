//! Projection inputs and scenario loading

mod data;
pub mod loader;

pub use data::{
    CompoundingFrequency, NamedInput, ProjectionInput, MAX_PERIODS_PER_YEAR, MAX_RATE_PERCENT,
    MAX_YEARS,
};
pub use loader::{load_inputs, load_inputs_from_reader};
