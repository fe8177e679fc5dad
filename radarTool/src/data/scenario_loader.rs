use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;

use crate::models::scenario::{RawScenario, Scenario, ScenarioValidationError};
use crate::utils::logging::{self, FileIOType, OperationCategory};

#[derive(Debug)]
pub enum ScenarioLoadError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    Invalid(ScenarioValidationError),
}

impl From<std::io::Error> for ScenarioLoadError {
    fn from(err: std::io::Error) -> Self {
        ScenarioLoadError::IoError(err)
    }
}

impl From<serde_json::Error> for ScenarioLoadError {
    fn from(err: serde_json::Error) -> Self {
        ScenarioLoadError::JsonError(err)
    }
}

impl From<ScenarioValidationError> for ScenarioLoadError {
    fn from(err: ScenarioValidationError) -> Self {
        ScenarioLoadError::Invalid(err)
    }
}

impl std::fmt::Display for ScenarioLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioLoadError::IoError(e) => write!(f, "IO error: {}", e),
            ScenarioLoadError::JsonError(e) => write!(f, "JSON error: {}", e),
            ScenarioLoadError::Invalid(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ScenarioLoadError {}

/// Parses a complete scenario, rejecting it if any field is missing or out of bounds.
pub fn parse_scenario(json: &str) -> Result<Scenario, ScenarioLoadError> {
    let raw: RawScenario = serde_json::from_str(json)?;
    Ok(Scenario::try_from_raw(&raw)?)
}

pub fn load_scenario(path: &Path) -> Result<Scenario, ScenarioLoadError> {
    let _timing = logging::start_timing("load_scenario",
        OperationCategory::FileIO { subcategory: FileIOType::ScenarioLoad });

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let raw: RawScenario = serde_json::from_reader(reader)?;
    let scenario = Scenario::try_from_raw(&raw)?;
    info!("Loaded scenario from {}", path.display());
    Ok(scenario)
}
