use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::metrics;
use crate::config::field_schema::{FieldError, FieldSpec};
use crate::models::baseline::Baseline;
use crate::models::demographics::{DemographicGroup, DemographicProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioField {
    Students,
    Entrepreneurs,
    Workers,
    Families,
    HighIncome,
    PopulationDensity,
    Amenities,
    AreaKm2,
}

impl ScenarioField {
    pub const ALL: [ScenarioField; 8] = [
        ScenarioField::Students,
        ScenarioField::Entrepreneurs,
        ScenarioField::Workers,
        ScenarioField::Families,
        ScenarioField::HighIncome,
        ScenarioField::PopulationDensity,
        ScenarioField::Amenities,
        ScenarioField::AreaKm2,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        FieldSpec::for_field(*self).name
    }

    pub fn group(&self) -> Option<DemographicGroup> {
        match self {
            ScenarioField::Students => Some(DemographicGroup::Students),
            ScenarioField::Entrepreneurs => Some(DemographicGroup::Entrepreneurs),
            ScenarioField::Workers => Some(DemographicGroup::Workers),
            ScenarioField::Families => Some(DemographicGroup::Families),
            ScenarioField::HighIncome => Some(DemographicGroup::HighIncome),
            ScenarioField::PopulationDensity | ScenarioField::Amenities | ScenarioField::AreaKm2 => None,
        }
    }
}

impl fmt::Display for ScenarioField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldError(pub String);

impl fmt::Display for UnknownFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scenario field: {}", self.0)
    }
}

impl std::error::Error for UnknownFieldError {}

impl FromStr for ScenarioField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldSpec::by_name(s.trim())
            .map(|spec| spec.field)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

/// Unvalidated scenario values as they arrive from a control or a file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScenario {
    pub students: Option<f64>,
    pub entrepreneurs: Option<f64>,
    pub workers: Option<f64>,
    pub families: Option<f64>,
    pub high_income: Option<f64>,
    pub population_density: Option<f64>,
    pub amenities: Option<f64>,
    #[serde(rename = "area_km2")]
    pub area_km2: Option<f64>,
}

impl RawScenario {
    pub fn value(&self, field: ScenarioField) -> Option<f64> {
        match field {
            ScenarioField::Students => self.students,
            ScenarioField::Entrepreneurs => self.entrepreneurs,
            ScenarioField::Workers => self.workers,
            ScenarioField::Families => self.families,
            ScenarioField::HighIncome => self.high_income,
            ScenarioField::PopulationDensity => self.population_density,
            ScenarioField::Amenities => self.amenities,
            ScenarioField::AreaKm2 => self.area_km2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioValidationError {
    pub errors: Vec<FieldError>,
}

impl fmt::Display for ScenarioValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid scenario: ")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ScenarioValidationError {}

/// One revision of the user-adjustable city parameters.
///
/// Every consumer can assume finite, positive physical fields and shares
/// that sum to 1. Edits are held to the field bounds and return a new
/// `Scenario` instead of mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scenario {
    demographics: DemographicProfile,
    population_density: f64,
    area_km2: f64,
    amenities: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::from_raw(&RawScenario::default())
    }
}

impl Scenario {
    /// Substitutes the schema default for every missing or invalid field.
    pub fn from_raw(raw: &RawScenario) -> Self {
        let value = |field: ScenarioField| FieldSpec::for_field(field).sanitize_opt(raw.value(field));
        Self::assemble(value)
    }

    /// Rejects the whole scenario if any field is missing or invalid.
    pub fn try_from_raw(raw: &RawScenario) -> Result<Self, ScenarioValidationError> {
        let errors: Vec<FieldError> = ScenarioField::ALL
            .iter()
            .filter_map(|field| FieldSpec::for_field(*field).check_present(raw.value(*field)).err())
            .collect();
        if !errors.is_empty() {
            return Err(ScenarioValidationError { errors });
        }
        Ok(Self::from_raw(raw))
    }

    /// Initial scenario mirroring the baseline city.
    ///
    /// Baseline values keep their magnitude even outside the edit bounds.
    /// Only non-finite or non-positive values (negative shares) fall back to
    /// the field default.
    pub fn from_baseline(baseline: &Baseline) -> Self {
        let demographics = baseline.demographics();
        let area_km2 = baseline.area_km2();
        let density = if area_km2 > 0.0 { baseline.population() / area_km2 } else { f64::NAN };

        Self::assemble(|field| {
            let (value, accepted) = match field.group() {
                Some(group) => {
                    let share = demographics.share(group);
                    (share, share.is_finite() && share >= 0.0)
                }
                None => {
                    let value = match field {
                        ScenarioField::PopulationDensity => density,
                        ScenarioField::Amenities => baseline.amenities(),
                        _ => area_km2,
                    };
                    (value, value.is_finite() && value > 0.0)
                }
            };
            if accepted {
                value
            } else {
                let default = FieldSpec::for_field(field).default;
                debug!("Baseline {} is {}, starting from default {}", field, value, default);
                default
            }
        })
    }

    fn assemble(value: impl Fn(ScenarioField) -> f64) -> Self {
        let demographics = DemographicProfile::new(
            value(ScenarioField::Students),
            value(ScenarioField::Entrepreneurs),
            value(ScenarioField::Workers),
            value(ScenarioField::Families),
            value(ScenarioField::HighIncome),
        )
        .rescaled();
        Self {
            demographics,
            population_density: value(ScenarioField::PopulationDensity),
            area_km2: value(ScenarioField::AreaKm2),
            amenities: value(ScenarioField::Amenities),
        }
    }

    pub fn demographics(&self) -> &DemographicProfile {
        &self.demographics
    }

    pub fn population_density(&self) -> f64 {
        self.population_density
    }

    pub fn area_km2(&self) -> f64 {
        self.area_km2
    }

    pub fn amenities(&self) -> f64 {
        self.amenities
    }

    pub fn total_population(&self) -> u64 {
        metrics::total_population(self.population_density, self.area_km2)
    }

    pub fn value(&self, field: ScenarioField) -> f64 {
        match field.group() {
            Some(group) => self.demographics.share(group),
            None => match field {
                ScenarioField::PopulationDensity => self.population_density,
                ScenarioField::Amenities => self.amenities,
                _ => self.area_km2,
            },
        }
    }

    /// Applies a single-field edit and returns the next revision.
    ///
    /// Non-finite or out-of-bound values are replaced by the field default.
    /// Share edits rescale the whole profile to sum to 1.
    pub fn with_field(&self, field: ScenarioField, raw_value: f64) -> Scenario {
        let spec = FieldSpec::for_field(field);
        let value = match spec.check(raw_value) {
            Ok(v) => v,
            Err(err) => {
                debug!("Rejected edit ({}), using default {}", err, spec.default);
                spec.default
            }
        };

        let mut next = *self;
        match field.group() {
            Some(group) => {
                next.demographics = self.demographics.with_share(group, value).rescaled();
            }
            None => match field {
                ScenarioField::PopulationDensity => next.population_density = value,
                ScenarioField::Amenities => next.amenities = value,
                _ => next.area_km2 = value,
            },
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::*;
    use crate::models::baseline::InfrastructureMetrics;

    #[test]
    fn default_scenario_uses_schema_defaults() {
        let scenario = Scenario::default();
        assert_eq!(scenario.population_density(), DEFAULT_POPULATION_DENSITY);
        assert_eq!(scenario.amenities(), DEFAULT_AMENITIES);
        assert_eq!(scenario.area_km2(), DEFAULT_AREA_KM2);
        assert_eq!(scenario.total_population(), 70_000);
        assert!((scenario.demographics().sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn share_edit_rescales_profile() {
        let scenario = Scenario::default().with_field(ScenarioField::Students, 0.5);
        let profile = scenario.demographics();
        assert!((profile.sum() - 1.0).abs() < 1e-12);
        // 0.5 / (0.5 + 0.85) before any other share moves
        assert!((profile.students - 0.5 / 1.35).abs() < 1e-9);
        assert!(profile.students > profile.workers);
    }

    #[test]
    fn physical_edit_does_not_touch_shares() {
        let before = Scenario::default();
        let after = before.with_field(ScenarioField::AreaKm2, 42.5);
        assert_eq!(after.area_km2(), 42.5);
        assert_eq!(after.demographics(), before.demographics());
        assert_eq!(after.total_population(), (DEFAULT_POPULATION_DENSITY * 42.5).round() as u64);
    }

    #[test]
    fn invalid_edit_falls_back_to_field_default() {
        let scenario = Scenario::default()
            .with_field(ScenarioField::Amenities, 2500.0)
            .with_field(ScenarioField::Amenities, f64::NAN);
        assert_eq!(scenario.amenities(), DEFAULT_AMENITIES);

        let scenario = Scenario::default().with_field(ScenarioField::PopulationDensity, 50_000.0);
        assert_eq!(scenario.population_density(), DEFAULT_POPULATION_DENSITY);
    }

    #[test]
    fn edit_leaves_previous_revision_unchanged() {
        let first = Scenario::default();
        let second = first.with_field(ScenarioField::Amenities, 900.0);
        assert_eq!(first.amenities(), DEFAULT_AMENITIES);
        assert_eq!(second.amenities(), 900.0);
    }

    #[test]
    fn strict_validation_reports_every_bad_field() {
        let raw = RawScenario {
            students: Some(0.2),
            entrepreneurs: Some(0.2),
            workers: Some(0.2),
            families: Some(0.2),
            high_income: Some(f64::NAN),
            population_density: Some(100.0),
            amenities: None,
            area_km2: Some(20.0),
        };
        let err = Scenario::try_from_raw(&raw).unwrap_err();
        assert_eq!(err.errors.len(), 3);
        assert!(err.to_string().contains("amenities is missing"));
    }

    #[test]
    fn strict_validation_accepts_complete_input() {
        let raw = RawScenario {
            students: Some(0.2),
            entrepreneurs: Some(0.2),
            workers: Some(0.2),
            families: Some(0.2),
            high_income: Some(0.2),
            population_density: Some(9000.0),
            amenities: Some(500.0),
            area_km2: Some(20.0),
        };
        let scenario = Scenario::try_from_raw(&raw).unwrap();
        assert_eq!(scenario.total_population(), 180_000);
        assert_eq!(scenario.value(ScenarioField::Amenities), 500.0);
    }

    #[test]
    fn baseline_outside_edit_bounds_is_kept() {
        let profile = DemographicProfile::new(0.1, 0.05, 0.55, 0.2, 0.1);
        let baseline = Baseline::new(InfrastructureMetrics::default(), 3_900_000.0, 1302.0, 5200.0, profile);
        let scenario = Scenario::from_baseline(&baseline);
        assert_eq!(scenario.area_km2(), 1302.0);
        assert_eq!(scenario.amenities(), 5200.0);
        assert!((scenario.population_density() - 3_900_000.0 / 1302.0).abs() < 1e-9);
        assert!((scenario.demographics().workers - 0.55).abs() < 1e-12);
    }

    #[test]
    fn degenerate_baseline_values_start_from_defaults() {
        let profile = DemographicProfile::new(0.2, -0.1, 0.3, 0.3, 0.2);
        let baseline = Baseline::new(InfrastructureMetrics::default(), 50_000.0, 0.0, 0.0, profile);
        let scenario = Scenario::from_baseline(&baseline);
        assert_eq!(scenario.area_km2(), DEFAULT_AREA_KM2);
        assert_eq!(scenario.amenities(), DEFAULT_AMENITIES);
        assert_eq!(scenario.population_density(), DEFAULT_POPULATION_DENSITY);
        assert!((scenario.demographics().sum() - 1.0).abs() < 1e-12);
        assert!(scenario.demographics().entrepreneurs > 0.0);
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("populationDensity".parse::<ScenarioField>(), Ok(ScenarioField::PopulationDensity));
        assert!("water".parse::<ScenarioField>().is_err());
    }

    #[test]
    fn raw_scenario_reads_wire_names() {
        let raw: RawScenario = serde_json::from_str(r#"{"highIncome":0.3,"populationDensity":8000,"area_km2":12}"#).unwrap();
        assert_eq!(raw.high_income, Some(0.3));
        assert_eq!(raw.population_density, Some(8000.0));
        assert_eq!(raw.area_km2, Some(12.0));
        assert_eq!(raw.students, None);
    }
}
