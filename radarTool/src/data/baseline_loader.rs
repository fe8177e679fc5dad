use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::config::constants::*;
use crate::models::baseline::{Baseline, InfrastructureMetrics};
use crate::models::demographics::{DemographicGroup, DemographicProfile};
use crate::utils::logging::{self, FileIOType, OperationCategory};

#[derive(Debug)]
pub enum BaselineLoadError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    NotAnObject,
}

impl From<std::io::Error> for BaselineLoadError {
    fn from(err: std::io::Error) -> Self {
        BaselineLoadError::IoError(err)
    }
}

impl From<serde_json::Error> for BaselineLoadError {
    fn from(err: serde_json::Error) -> Self {
        BaselineLoadError::JsonError(err)
    }
}

impl std::fmt::Display for BaselineLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BaselineLoadError::IoError(e) => write!(f, "IO error: {}", e),
            BaselineLoadError::JsonError(e) => write!(f, "JSON error: {}", e),
            BaselineLoadError::NotAnObject => write!(f, "baseline resource is not a JSON object"),
        }
    }
}

impl std::error::Error for BaselineLoadError {}

/// Baseline plus the keys that had to fall back to their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBaseline {
    pub baseline: Baseline,
    pub defaulted_fields: Vec<String>,
}

#[derive(Clone, Copy)]
enum Bound {
    NonNegative,
    Positive,
}

impl Bound {
    fn accepts(&self, value: f64) -> bool {
        value.is_finite()
            && match self {
                Bound::NonNegative => value >= 0.0,
                Bound::Positive => value > 0.0,
            }
    }
}

struct FieldReader<'a> {
    record: &'a Map<String, Value>,
    prefix: &'static str,
    defaulted: Vec<String>,
}

impl<'a> FieldReader<'a> {
    fn new(record: &'a Map<String, Value>, prefix: &'static str) -> Self {
        Self { record, prefix, defaulted: Vec::new() }
    }

    fn number(&mut self, key: &str, bound: Bound, default: f64) -> f64 {
        match self.record.get(key).and_then(Value::as_f64) {
            Some(value) if bound.accepts(value) => value,
            other => {
                let name = format!("{}{}", self.prefix, key);
                warn!("Baseline field {} is {:?}, using default {}", name, other, default);
                self.defaulted.push(name);
                default
            }
        }
    }

    fn text(&mut self, key: &str, default: &str) -> String {
        match self.record.get(key).and_then(Value::as_str) {
            Some(value) => value.to_string(),
            None => {
                let name = format!("{}{}", self.prefix, key);
                warn!("Baseline field {} is missing or not a string, using default {}", name, default);
                self.defaulted.push(name);
                default.to_string()
            }
        }
    }
}

fn demographics_wire_key(group: DemographicGroup) -> &'static str {
    match group {
        DemographicGroup::Students => "students",
        DemographicGroup::Entrepreneurs => "entrepreneurs",
        DemographicGroup::Workers => "workers",
        DemographicGroup::Families => "families",
        DemographicGroup::HighIncome => "highIncome",
    }
}

/// Builds a baseline from a parsed JSON record, defaulting field-by-field.
pub fn baseline_from_record(record: &Map<String, Value>) -> ParsedBaseline {
    let mut reader = FieldReader::new(record, "");
    let infrastructure = InfrastructureMetrics {
        parks_per_1000: reader.number("parks_per_1000", Bound::NonNegative, DEFAULT_PARKS_PER_1000),
        parkland_pct_city_area: reader.number("parkland_pct_city_area", Bound::NonNegative, DEFAULT_PARKLAND_PCT_CITY_AREA),
        park_access_pct: reader.number("park_access_pct", Bound::NonNegative, DEFAULT_PARK_ACCESS_PCT),
        water_pipe_miles_per_capita: reader.number("water_pipe_miles_per_capita", Bound::NonNegative, DEFAULT_WATER_PIPE_MILES_PER_CAPITA),
        water_investment_per_capita: reader.number("water_investment_per_capita", Bound::NonNegative, DEFAULT_WATER_INVESTMENT_PER_CAPITA),
        sewer_miles_per_capita: reader.number("sewer_miles_per_capita", Bound::NonNegative, DEFAULT_SEWER_MILES_PER_CAPITA),
        electricity_per_capita_kwh: reader.number("electricity_per_capita_kwh", Bound::NonNegative, DEFAULT_ELECTRICITY_PER_CAPITA_KWH),
        transit_stops_per_km2: reader.number("transit_stops_per_km2", Bound::NonNegative, DEFAULT_TRANSIT_STOPS_PER_KM2),
        transit_grade: reader.text("transit_grade", DEFAULT_TRANSIT_GRADE),
        safety_staff_per_1000: reader.number("safety_staff_per_1000", Bound::NonNegative, DEFAULT_SAFETY_STAFF_PER_1000),
        safety_cost_per_capita: reader.number("safety_cost_per_capita", Bound::NonNegative, DEFAULT_SAFETY_COST_PER_CAPITA),
        health_facilities_per_1000: reader.number("health_facilities_per_1000", Bound::NonNegative, DEFAULT_HEALTH_FACILITIES_PER_1000),
        health_spending_per_capita: reader.number("health_spending_per_capita", Bound::NonNegative, DEFAULT_HEALTH_SPENDING_PER_CAPITA),
    };
    let population = reader.number("population", Bound::NonNegative, DEFAULT_BASELINE_POPULATION);
    let area_km2 = reader.number("area_km2", Bound::Positive, DEFAULT_BASELINE_AREA_KM2);
    let amenities = reader.number("amenities", Bound::NonNegative, DEFAULT_BASELINE_AMENITIES);
    let mut defaulted = reader.defaulted;

    let empty = Map::new();
    let demographics_record = match record.get("demographics") {
        Some(Value::Object(map)) => map,
        _ => &empty,
    };
    let mut group_reader = FieldReader::new(demographics_record, "demographics.");
    let mut demographics = DemographicProfile::default();
    for group in DemographicGroup::ALL {
        let share = group_reader.number(demographics_wire_key(group), Bound::NonNegative, group.default_share());
        demographics = demographics.with_share(group, share);
    }
    defaulted.extend(group_reader.defaulted);

    ParsedBaseline {
        baseline: Baseline::new(infrastructure, population, area_km2, amenities, demographics),
        defaulted_fields: defaulted,
    }
}

fn baseline_from_value(value: Value) -> Result<ParsedBaseline, BaselineLoadError> {
    match value {
        Value::Object(record) => Ok(baseline_from_record(&record)),
        _ => Err(BaselineLoadError::NotAnObject),
    }
}

pub fn parse_baseline(json: &str) -> Result<ParsedBaseline, BaselineLoadError> {
    baseline_from_value(serde_json::from_str(json)?)
}

pub fn load_baseline(path: &Path) -> Result<ParsedBaseline, BaselineLoadError> {
    let _timing = logging::start_timing("load_baseline",
        OperationCategory::FileIO { subcategory: FileIOType::BaselineLoad });

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    baseline_from_value(serde_json::from_reader(reader)?)
}

/// Loads the baseline resource, never failing: an unreadable resource yields
/// the fully defaulted baseline.
pub fn load_baseline_or_default(path: &Path) -> Baseline {
    match load_baseline(path) {
        Ok(parsed) => {
            if parsed.defaulted_fields.is_empty() {
                info!("Loaded baseline from {}", path.display());
            } else {
                info!(
                    "Loaded baseline from {} ({} fields defaulted)",
                    path.display(),
                    parsed.defaulted_fields.len()
                );
                debug!("Defaulted baseline fields: {}", parsed.defaulted_fields.join(", "));
            }
            parsed.baseline
        }
        Err(e) => {
            warn!("Failed to load baseline from {}: {}. Using fallback baseline.", path.display(), e);
            Baseline::default()
        }
    }
}
