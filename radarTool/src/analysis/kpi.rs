use serde::Serialize;

use crate::analysis::metrics::{self, VibrancyMetrics};
use crate::analysis::normalization::{bar_ratio, radar_percent};
use crate::config::constants::{BAR_BASELINE, RADAR_BASELINE};
use crate::config::tool_config::ReferenceKpis;
use crate::models::scenario::Scenario;

/// A labelled baseline/scenario reading on one chart scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiPair {
    pub label: &'static str,
    pub baseline: f64,
    pub scenario: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadarAxis {
    Parks,
    Water,
    Sanitation,
    Electricity,
    Transit,
    Safety,
    Health,
    Diversity,
    EconomicVibrancy,
    InnovationVibrancy,
    SocialVibrancy,
    PopulationDensity,
    AmenityDensity,
    AmenityAccessibility,
}

impl RadarAxis {
    pub const ALL: [RadarAxis; 14] = [
        RadarAxis::Parks,
        RadarAxis::Water,
        RadarAxis::Sanitation,
        RadarAxis::Electricity,
        RadarAxis::Transit,
        RadarAxis::Safety,
        RadarAxis::Health,
        RadarAxis::Diversity,
        RadarAxis::EconomicVibrancy,
        RadarAxis::InnovationVibrancy,
        RadarAxis::SocialVibrancy,
        RadarAxis::PopulationDensity,
        RadarAxis::AmenityDensity,
        RadarAxis::AmenityAccessibility,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RadarAxis::Parks => "Parks",
            RadarAxis::Water => "Water Infrastructure",
            RadarAxis::Sanitation => "Sanitation Infrastructure",
            RadarAxis::Electricity => "Electricity",
            RadarAxis::Transit => "Public Transit",
            RadarAxis::Safety => "Safety",
            RadarAxis::Health => "Health",
            RadarAxis::Diversity => "Diversity Index",
            RadarAxis::EconomicVibrancy => "Economic Vibrancy",
            RadarAxis::InnovationVibrancy => "Innovation Vibrancy",
            RadarAxis::SocialVibrancy => "Social Vibrancy",
            RadarAxis::PopulationDensity => "Population Density",
            RadarAxis::AmenityDensity => "Amenity Density",
            RadarAxis::AmenityAccessibility => "Amenity Accessibility",
        }
    }

    pub fn reference(&self, reference: &ReferenceKpis) -> f64 {
        match self {
            RadarAxis::Parks => reference.parks,
            RadarAxis::Water => reference.water,
            RadarAxis::Sanitation => reference.sanitation,
            RadarAxis::Electricity => reference.electricity,
            RadarAxis::Transit => reference.transit,
            RadarAxis::Safety => reference.safety,
            RadarAxis::Health => reference.health,
            RadarAxis::Diversity => reference.diversity,
            RadarAxis::EconomicVibrancy => reference.ev,
            RadarAxis::InnovationVibrancy => reference.iv,
            RadarAxis::SocialVibrancy => reference.sv,
            RadarAxis::PopulationDensity => reference.pop_density,
            RadarAxis::AmenityDensity => reference.amenity_density,
            RadarAxis::AmenityAccessibility => reference.aas,
        }
    }

    /// Infrastructure axes have no scenario model of their own yet and plot
    /// the parks proxy against their own reference constant.
    // TODO: give water, sanitation, electricity, transit, safety and health
    // their own per-capita formulas once scenario inputs exist for them.
    pub fn uses_parks_proxy(&self) -> bool {
        matches!(
            self,
            RadarAxis::Water
                | RadarAxis::Sanitation
                | RadarAxis::Electricity
                | RadarAxis::Transit
                | RadarAxis::Safety
                | RadarAxis::Health
        )
    }

    pub fn scenario_value(&self, readings: &AxisReadings) -> f64 {
        match self {
            RadarAxis::Diversity => readings.vibrancy.diversity_index,
            RadarAxis::EconomicVibrancy => readings.vibrancy.economic_vibrancy,
            RadarAxis::InnovationVibrancy => readings.vibrancy.innovation_vibrancy,
            RadarAxis::SocialVibrancy => readings.vibrancy.social_vibrancy,
            RadarAxis::PopulationDensity => readings.population_density,
            RadarAxis::AmenityDensity => readings.amenity_density,
            RadarAxis::AmenityAccessibility => readings.vibrancy.amenity_accessibility,
            // Parks and the proxied infrastructure axes
            _ => readings.parks_proxy,
        }
    }
}

/// Raw scenario quantities the radar axes read from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisReadings {
    pub parks_proxy: f64,
    pub population_density: f64,
    pub amenity_density: f64,
    pub vibrancy: VibrancyMetrics,
}

impl AxisReadings {
    pub fn from_scenario(scenario: &Scenario) -> Self {
        let population = scenario.total_population() as f64;
        let area = scenario.area_km2();
        let amenities = scenario.amenities();
        let population_density = if area == 0.0 { 0.0 } else { population / area };
        Self {
            parks_proxy: metrics::parks_proxy_per_thousand(amenities, population),
            population_density,
            amenity_density: metrics::amenity_density_per_km2(amenities, area),
            vibrancy: VibrancyMetrics::compute(scenario.demographics(), amenities, area, population),
        }
    }
}

/// Radar data: baseline is the constant 100 circle, scenario is a clamped percentage.
pub fn radar_kpis(readings: &AxisReadings, reference: &ReferenceKpis) -> Vec<KpiPair> {
    RadarAxis::ALL
        .iter()
        .map(|axis| KpiPair {
            label: axis.label(),
            baseline: RADAR_BASELINE,
            scenario: radar_percent(axis.scenario_value(readings), axis.reference(reference)),
        })
        .collect()
}

/// Bar data: scenario as a clamped ratio to the computed baseline values.
pub fn bar_kpis(scenario: &VibrancyMetrics, baseline: &VibrancyMetrics) -> Vec<KpiPair> {
    [
        ("Economic Vibrancy", scenario.economic_vibrancy, baseline.economic_vibrancy),
        ("Innovation Vibrancy", scenario.innovation_vibrancy, baseline.innovation_vibrancy),
        ("Social Vibrancy", scenario.social_vibrancy, baseline.social_vibrancy),
        ("AAS", scenario.amenity_accessibility, baseline.amenity_accessibility),
    ]
    .into_iter()
    .map(|(label, value, base)| KpiPair {
        label,
        baseline: BAR_BASELINE,
        scenario: bar_ratio(value, base),
    })
    .collect()
}
