use serde::Serialize;

use crate::analysis::metrics;
use crate::config::constants::*;
use crate::models::demographics::DemographicProfile;

/// Static infrastructure statistics of the reference city.
///
/// Display only: nothing in the metric engine recomputes these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfrastructureMetrics {
    pub parks_per_1000: f64,
    pub parkland_pct_city_area: f64,
    pub park_access_pct: f64,
    pub water_pipe_miles_per_capita: f64,
    pub water_investment_per_capita: f64,
    pub sewer_miles_per_capita: f64,
    pub electricity_per_capita_kwh: f64,
    pub transit_stops_per_km2: f64,
    pub transit_grade: String,
    pub safety_staff_per_1000: f64,
    pub safety_cost_per_capita: f64,
    pub health_facilities_per_1000: f64,
    pub health_spending_per_capita: f64,
}

impl Default for InfrastructureMetrics {
    fn default() -> Self {
        Self {
            parks_per_1000: DEFAULT_PARKS_PER_1000,
            parkland_pct_city_area: DEFAULT_PARKLAND_PCT_CITY_AREA,
            park_access_pct: DEFAULT_PARK_ACCESS_PCT,
            water_pipe_miles_per_capita: DEFAULT_WATER_PIPE_MILES_PER_CAPITA,
            water_investment_per_capita: DEFAULT_WATER_INVESTMENT_PER_CAPITA,
            sewer_miles_per_capita: DEFAULT_SEWER_MILES_PER_CAPITA,
            electricity_per_capita_kwh: DEFAULT_ELECTRICITY_PER_CAPITA_KWH,
            transit_stops_per_km2: DEFAULT_TRANSIT_STOPS_PER_KM2,
            transit_grade: DEFAULT_TRANSIT_GRADE.to_string(),
            safety_staff_per_1000: DEFAULT_SAFETY_STAFF_PER_1000,
            safety_cost_per_capita: DEFAULT_SAFETY_COST_PER_CAPITA,
            health_facilities_per_1000: DEFAULT_HEALTH_FACILITIES_PER_1000,
            health_spending_per_capita: DEFAULT_HEALTH_SPENDING_PER_CAPITA,
        }
    }
}

/// Immutable reference snapshot a scenario is compared against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Baseline {
    infrastructure: InfrastructureMetrics,
    population: f64,
    area_km2: f64,
    amenities: f64,
    demographics: DemographicProfile,
}

impl Default for Baseline {
    fn default() -> Self {
        Self::new(
            InfrastructureMetrics::default(),
            DEFAULT_BASELINE_POPULATION,
            DEFAULT_BASELINE_AREA_KM2,
            DEFAULT_BASELINE_AMENITIES,
            DemographicProfile::default(),
        )
    }
}

impl Baseline {
    pub fn new(
        infrastructure: InfrastructureMetrics,
        population: f64,
        area_km2: f64,
        amenities: f64,
        demographics: DemographicProfile,
    ) -> Self {
        Self { infrastructure, population, area_km2, amenities, demographics }
    }

    pub fn infrastructure(&self) -> &InfrastructureMetrics {
        &self.infrastructure
    }

    pub fn population(&self) -> f64 {
        self.population
    }

    pub fn area_km2(&self) -> f64 {
        self.area_km2
    }

    pub fn amenities(&self) -> f64 {
        self.amenities
    }

    pub fn demographics(&self) -> &DemographicProfile {
        &self.demographics
    }

    pub fn population_density(&self) -> f64 {
        if self.area_km2 > 0.0 {
            self.population / self.area_km2
        } else {
            0.0
        }
    }
}

/// Rate-based description of a reference city, as published in planning data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceScenario {
    pub population_density: f64,             // people/km²
    pub demographics: DemographicProfile,
    pub parks_per_thousand: f64,             // acres per 1,000 people
    pub amenities_per_ten_thousand: f64,     // per 10,000 people
    pub area_km2: f64,
}

impl ReferenceScenario {
    pub fn san_francisco() -> Self {
        Self {
            population_density: REFERENCE_POPULATION_DENSITY,
            demographics: DemographicProfile::default(),
            parks_per_thousand: REFERENCE_PARKS_PER_THOUSAND,
            amenities_per_ten_thousand: REFERENCE_AMENITIES_PER_TEN_THOUSAND,
            area_km2: REFERENCE_AREA_KM2,
        }
    }

    pub fn population(&self) -> u64 {
        metrics::total_population(self.population_density, self.area_km2)
    }

    pub fn estimated_amenities(&self) -> f64 {
        metrics::amenities_from_rate(self.population() as f64, self.amenities_per_ten_thousand)
    }

    /// Converts the preset into a baseline with default infrastructure statistics.
    pub fn to_baseline(&self) -> Baseline {
        let infrastructure = InfrastructureMetrics {
            parks_per_1000: self.parks_per_thousand,
            ..InfrastructureMetrics::default()
        };
        Baseline::new(
            infrastructure,
            self.population() as f64,
            self.area_km2,
            self.estimated_amenities(),
            self.demographics,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_baseline_density_matches_default_scenario() {
        let baseline = Baseline::default();
        assert_eq!(baseline.population_density(), DEFAULT_POPULATION_DENSITY);
    }

    #[test]
    fn zero_area_density_is_zero() {
        let baseline = Baseline::new(InfrastructureMetrics::default(), 1000.0, 0.0, 10.0, DemographicProfile::default());
        assert_eq!(baseline.population_density(), 0.0);
    }

    #[test]
    fn san_francisco_preset_estimates_amenities() {
        let preset = ReferenceScenario::san_francisco();
        // 7000 * 121.4 = 849,800 people, 15 amenities per 10,000 people
        assert_eq!(preset.population(), 849_800);
        assert!((preset.estimated_amenities() - 1274.7).abs() < 1e-9);

        let baseline = preset.to_baseline();
        assert_eq!(baseline.infrastructure().parks_per_1000, REFERENCE_PARKS_PER_THOUSAND);
        assert_eq!(baseline.area_km2(), REFERENCE_AREA_KM2);
    }
}
