// Main module declarations for the vibrancy radar tool

// Scenario session and sweeps
pub mod core {
    pub mod session;
    pub mod sweep;
}

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod field_schema;
    pub mod tool_config;
}

// Model definitions
pub mod models {
    pub mod demographics;
    pub mod scenario;
    pub mod baseline;
}

// Data loaders
pub mod data {
    pub mod baseline_loader;
    pub mod scenario_loader;
}

// Metric engine, normalization and presentation data
pub mod analysis {
    pub mod metrics;
    pub mod normalization;
    pub mod kpi;
    pub mod snapshot;
    pub mod reporting;
}

// Utility functions
pub mod utils {
    pub mod logging;
    pub mod csv_export;
    pub mod traits;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used modules
pub use crate::core::session::{Evaluation, ScenarioSession};
pub use crate::models::baseline::Baseline;
pub use crate::models::demographics::DemographicProfile;
pub use crate::models::scenario::{Scenario, ScenarioField};
