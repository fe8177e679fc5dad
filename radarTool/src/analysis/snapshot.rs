use serde::Serialize;

use crate::analysis::metrics;
use crate::models::demographics::DemographicGroup;
use crate::models::scenario::Scenario;

/// Live metrics panel for one scenario revision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub population_density: f64,
    pub total_population: u64,
    pub amenity_density_km2: f64,
    pub amenity_density_per_thousand: f64,
    pub diversity_index: f64,
    pub total_amenities: u64,
    pub group_counts: Vec<(DemographicGroup, u64)>,
}

impl MetricsSnapshot {
    pub fn from_scenario(scenario: &Scenario) -> Self {
        let total_population = scenario.total_population();
        let amenities = scenario.amenities();
        Self {
            population_density: scenario.population_density(),
            total_population,
            amenity_density_km2: metrics::amenity_density_per_km2(amenities, scenario.area_km2()),
            amenity_density_per_thousand: metrics::amenity_density_per_thousand(amenities, total_population as f64),
            diversity_index: metrics::diversity_index(scenario.demographics()),
            total_amenities: amenities.round().max(0.0) as u64,
            group_counts: metrics::group_counts(total_population, scenario.demographics()),
        }
    }
}
