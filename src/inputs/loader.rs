//! Load named projection inputs from a scenario CSV
//!
//! Expected header: `Name,Principal,AnnualContribution,RatePercent,Years,Frequency`

use super::{CompoundingFrequency, NamedInput, ProjectionInput};
use crate::error::LoadError;
use csv::Reader;
use std::path::Path;

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "AnnualContribution")]
    annual_contribution: f64,
    #[serde(rename = "RatePercent")]
    rate_percent: f64,
    #[serde(rename = "Years")]
    years: u32,
    #[serde(rename = "Frequency")]
    frequency: String,
}

impl CsvRow {
    fn into_named_input(self, row: usize) -> Result<NamedInput, LoadError> {
        let frequency: CompoundingFrequency = self.frequency.parse().map_err(|_| LoadError::Frequency {
            row,
            value: self.frequency.clone(),
        })?;

        Ok(NamedInput::new(
            self.name,
            ProjectionInput::new(
                self.principal,
                self.annual_contribution,
                self.rate_percent,
                self.years,
                frequency,
            ),
        ))
    }
}

/// Load all scenarios from a CSV file
///
/// Rows are parsed but not validated; out-of-range values are reported per
/// scenario when the batch runs.
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<Vec<NamedInput>, LoadError> {
    let mut reader = Reader::from_path(path)?;
    collect_rows(&mut reader)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_inputs_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<NamedInput>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    collect_rows(&mut csv_reader)
}

fn collect_rows<R: std::io::Read>(reader: &mut Reader<R>) -> Result<Vec<NamedInput>, LoadError> {
    let mut inputs = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        inputs.push(row.into_named_input(index + 1)?);
    }

    log::debug!("Loaded {} scenario rows", inputs.len());
    Ok(inputs)
}
