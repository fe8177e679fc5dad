use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::constants::*;

/// Static denominators of the radar chart, one per axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceKpis {
    pub parks: f64,
    pub water: f64,
    pub sanitation: f64,
    pub electricity: f64,
    pub transit: f64,
    pub safety: f64,
    pub health: f64,
    pub diversity: f64,
    pub ev: f64,
    pub iv: f64,
    pub sv: f64,
    pub pop_density: f64,
    pub amenity_density: f64,
    pub aas: f64,
}

impl Default for ReferenceKpis {
    fn default() -> Self {
        Self {
            parks: REFERENCE_PARKS,
            water: REFERENCE_WATER,
            sanitation: REFERENCE_SANITATION,
            electricity: REFERENCE_ELECTRICITY,
            transit: REFERENCE_TRANSIT,
            safety: REFERENCE_SAFETY,
            health: REFERENCE_HEALTH,
            diversity: REFERENCE_DIVERSITY,
            ev: REFERENCE_EV,
            iv: REFERENCE_IV,
            sv: REFERENCE_SV,
            pop_density: REFERENCE_POP_DENSITY,
            amenity_density: REFERENCE_AMENITY_DENSITY,
            aas: REFERENCE_AAS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub baseline_path: PathBuf,
    pub output_dir: PathBuf,
    pub sweep_steps: usize,
    pub reference: ReferenceKpis,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            baseline_path: PathBuf::from(DEFAULT_BASELINE_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sweep_steps: DEFAULT_SWEEP_STEPS,
            reference: ReferenceKpis::default(),
        }
    }
}

impl ToolConfig {
    /// Reads a JSON config; absent keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: ToolConfig = serde_json::from_reader(reader)?;
        Ok(config)
    }
}
