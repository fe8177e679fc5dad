use std::fmt;

use crate::config::constants::*;
use crate::models::scenario::ScenarioField;

/// Declarative bounds and fallback for one editable scenario field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub field: ScenarioField,
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

pub static FIELD_SCHEMA: [FieldSpec; 8] = [
    FieldSpec { field: ScenarioField::Students, name: "students", min: MIN_SHARE, max: MAX_SHARE, default: DEFAULT_STUDENTS_SHARE, step: SHARE_STEP },
    FieldSpec { field: ScenarioField::Entrepreneurs, name: "entrepreneurs", min: MIN_SHARE, max: MAX_SHARE, default: DEFAULT_ENTREPRENEURS_SHARE, step: SHARE_STEP },
    FieldSpec { field: ScenarioField::Workers, name: "workers", min: MIN_SHARE, max: MAX_SHARE, default: DEFAULT_WORKERS_SHARE, step: SHARE_STEP },
    FieldSpec { field: ScenarioField::Families, name: "families", min: MIN_SHARE, max: MAX_SHARE, default: DEFAULT_FAMILIES_SHARE, step: SHARE_STEP },
    FieldSpec { field: ScenarioField::HighIncome, name: "highIncome", min: MIN_SHARE, max: MAX_SHARE, default: DEFAULT_HIGH_INCOME_SHARE, step: SHARE_STEP },
    FieldSpec { field: ScenarioField::PopulationDensity, name: "populationDensity", min: MIN_POPULATION_DENSITY, max: MAX_POPULATION_DENSITY, default: DEFAULT_POPULATION_DENSITY, step: POPULATION_DENSITY_STEP },
    FieldSpec { field: ScenarioField::Amenities, name: "amenities", min: MIN_AMENITIES, max: MAX_AMENITIES, default: DEFAULT_AMENITIES, step: AMENITIES_STEP },
    FieldSpec { field: ScenarioField::AreaKm2, name: "area_km2", min: MIN_AREA_KM2, max: MAX_AREA_KM2, default: DEFAULT_AREA_KM2, step: AREA_KM2_STEP },
];

#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    Missing(&'static str),
    NonFinite { field: &'static str, value: f64 },
    OutOfRange { field: &'static str, value: f64, min: f64, max: f64 },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Missing(field) => write!(f, "{} is missing", field),
            FieldError::NonFinite { field, value } => write!(f, "{} is not a finite number: {}", field, value),
            FieldError::OutOfRange { field, value, min, max } => {
                write!(f, "{} = {} is outside [{}, {}]", field, value, min, max)
            }
        }
    }
}

impl std::error::Error for FieldError {}

impl FieldSpec {
    pub fn for_field(field: ScenarioField) -> &'static FieldSpec {
        // FIELD_SCHEMA is ordered like ScenarioField::ALL
        &FIELD_SCHEMA[field.index()]
    }

    pub fn by_name(name: &str) -> Option<&'static FieldSpec> {
        FIELD_SCHEMA.iter().find(|spec| spec.name.eq_ignore_ascii_case(name))
    }

    pub fn check(&self, value: f64) -> Result<f64, FieldError> {
        if !value.is_finite() {
            return Err(FieldError::NonFinite { field: self.name, value });
        }
        if value < self.min || value > self.max {
            return Err(FieldError::OutOfRange { field: self.name, value, min: self.min, max: self.max });
        }
        Ok(value)
    }

    pub fn check_present(&self, value: Option<f64>) -> Result<f64, FieldError> {
        match value {
            Some(v) => self.check(v),
            None => Err(FieldError::Missing(self.name)),
        }
    }

    /// Returns `value` when it is finite and in bounds, the field default otherwise.
    pub fn sanitize(&self, value: f64) -> f64 {
        self.check(value).unwrap_or(self.default)
    }

    pub fn sanitize_opt(&self, value: Option<f64>) -> f64 {
        value.map_or(self.default, |v| self.sanitize(v))
    }

    /// Rounds `value` to the nearest control step inside the field bounds.
    pub fn snap(&self, value: f64) -> f64 {
        if self.step <= 0.0 || !value.is_finite() {
            return value;
        }
        let snapped = self.min + ((value - self.min) / self.step).round() * self.step;
        snapped.clamp(self.min, self.max)
    }

    /// Up to `steps` evenly spaced values from `min` to `max` inclusive.
    ///
    /// Interior points are snapped to the control step, so a fine sweep over
    /// a coarse field can collapse duplicate points.
    pub fn range_points(&self, steps: usize) -> Vec<f64> {
        match steps {
            0 => Vec::new(),
            1 => vec![self.min],
            n => {
                let stride = (self.max - self.min) / (n - 1) as f64;
                let mut points: Vec<f64> = (0..n)
                    .map(|i| match i {
                        0 => self.min,
                        i if i == n - 1 => self.max,
                        i => self.snap(self.min + stride * i as f64),
                    })
                    .collect();
                points.dedup();
                points
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_order_matches_field_index() {
        for field in ScenarioField::ALL {
            assert_eq!(FieldSpec::for_field(field).field, field);
        }
    }

    #[test]
    fn sanitize_falls_back_to_default() {
        let spec = FieldSpec::for_field(ScenarioField::PopulationDensity);
        assert_eq!(spec.sanitize(f64::NAN), DEFAULT_POPULATION_DENSITY);
        assert_eq!(spec.sanitize(f64::INFINITY), DEFAULT_POPULATION_DENSITY);
        assert_eq!(spec.sanitize(25_000.0), DEFAULT_POPULATION_DENSITY);
        assert_eq!(spec.sanitize(1_999.0), DEFAULT_POPULATION_DENSITY);
        assert_eq!(spec.sanitize(12_000.0), 12_000.0);
        assert_eq!(spec.sanitize_opt(None), DEFAULT_POPULATION_DENSITY);
    }

    #[test]
    fn bounds_are_inclusive() {
        let spec = FieldSpec::for_field(ScenarioField::Students);
        assert_eq!(spec.check(0.0), Ok(0.0));
        assert_eq!(spec.check(0.5), Ok(0.5));
        assert!(matches!(spec.check(0.51), Err(FieldError::OutOfRange { .. })));
    }

    #[test]
    fn lookup_by_wire_name() {
        assert_eq!(FieldSpec::by_name("highIncome").map(|s| s.field), Some(ScenarioField::HighIncome));
        assert_eq!(FieldSpec::by_name("AREA_KM2").map(|s| s.field), Some(ScenarioField::AreaKm2));
        assert!(FieldSpec::by_name("parks").is_none());
    }

    #[test]
    fn range_points_cover_both_ends() {
        let spec = FieldSpec::for_field(ScenarioField::AreaKm2);
        let points = spec.range_points(5);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], MIN_AREA_KM2);
        assert_eq!(points[4], MAX_AREA_KM2);
        assert!(spec.range_points(0).is_empty());
    }

    #[test]
    fn range_points_land_on_control_steps() {
        let spec = FieldSpec::for_field(ScenarioField::Students);
        let points = spec.range_points(7);
        assert_eq!(points.len(), 7);
        for point in &points {
            let steps = point / SHARE_STEP;
            assert!((steps - steps.round()).abs() < 1e-9, "{} is off the step grid", point);
        }
        assert!((points[1] - 0.08).abs() < 1e-12);

        // 0.01 steps only leave 51 distinct shares in [0, 0.5]
        assert_eq!(spec.range_points(200).len(), 51);
    }

    #[test]
    fn snap_rounds_into_bounds() {
        let spec = FieldSpec::for_field(ScenarioField::PopulationDensity);
        assert_eq!(spec.snap(7_049.0), 7_000.0);
        assert_eq!(spec.snap(7_051.0), 7_100.0);
        assert_eq!(spec.snap(25_000.0), MAX_POPULATION_DENSITY);
    }
}
