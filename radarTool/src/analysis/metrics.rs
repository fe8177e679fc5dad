// Metric engine: pure KPI formulas over a demographic profile and scalar context

use crate::config::constants::{DEMOGRAPHIC_GROUP_COUNT, PER_THOUSAND, PER_TEN_THOUSAND};
use crate::models::demographics::{DemographicGroup, DemographicProfile};

/// Shannon entropy of the positive shares, normalized by `ln 5`.
///
/// Zero (and negative) shares are skipped, so their `p ln p` term counts as 0.
/// For a profile summing to 1 the result lies in `[0, 1]`, reaching 1 only
/// when every share is 0.2.
pub fn diversity_index(profile: &DemographicProfile) -> f64 {
    let entropy = profile
        .shares()
        .iter()
        .filter(|p| **p > 0.0)
        .fold(0.0, |acc, p| acc - p * p.ln());
    let max_entropy = (DEMOGRAPHIC_GROUP_COUNT as f64).ln();
    let index = entropy / max_entropy;
    // Summing five p ln p terms can overshoot ln 5 by an ulp
    if (index - 1.0).abs() <= 4.0 * f64::EPSILON {
        1.0
    } else {
        index
    }
}

/// Amenity Accessibility Score: `(amenities / area) × (population / area)`.
pub fn amenity_accessibility_score(amenities: f64, area_km2: f64, population: f64) -> f64 {
    if area_km2 == 0.0 {
        return 0.0;
    }
    (amenities / area_km2) * (population / area_km2)
}

pub fn economic_vibrancy(profile: &DemographicProfile, diversity_index: f64) -> f64 {
    (profile.entrepreneurs + profile.high_income) * diversity_index
}

pub fn innovation_vibrancy(profile: &DemographicProfile, diversity_index: f64) -> f64 {
    (profile.students + profile.entrepreneurs) * diversity_index
}

pub fn social_vibrancy(profile: &DemographicProfile, diversity_index: f64) -> f64 {
    (profile.workers + profile.families) * diversity_index
}

pub fn amenities_from_rate(population: f64, per_ten_thousand: f64) -> f64 {
    (population / PER_TEN_THOUSAND) * per_ten_thousand
}

pub fn total_population(population_density: f64, area_km2: f64) -> u64 {
    let population = (population_density * area_km2).round();
    if population.is_finite() && population > 0.0 {
        population as u64
    } else {
        0
    }
}

pub fn group_counts(total_population: u64, profile: &DemographicProfile) -> Vec<(DemographicGroup, u64)> {
    DemographicGroup::ALL
        .iter()
        .map(|group| {
            let count = (total_population as f64 * profile.share(*group)).round();
            (*group, if count > 0.0 { count as u64 } else { 0 })
        })
        .collect()
}

pub fn amenity_density_per_km2(amenities: f64, area_km2: f64) -> f64 {
    if area_km2 == 0.0 {
        return 0.0;
    }
    amenities / area_km2
}

pub fn amenity_density_per_thousand(amenities: f64, population: f64) -> f64 {
    if population == 0.0 {
        return 0.0;
    }
    (amenities / population) * PER_THOUSAND
}

/// Stand-in for parkland per 1,000 people; amenities per 1,000 people.
pub fn parks_proxy_per_thousand(amenities: f64, population: f64) -> f64 {
    amenity_density_per_thousand(amenities, population)
}

/// Every KPI the engine derives for one profile and physical context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VibrancyMetrics {
    pub diversity_index: f64,
    pub economic_vibrancy: f64,
    pub innovation_vibrancy: f64,
    pub social_vibrancy: f64,
    pub amenity_accessibility: f64,
}

impl VibrancyMetrics {
    pub fn compute(profile: &DemographicProfile, amenities: f64, area_km2: f64, population: f64) -> Self {
        let diversity = diversity_index(profile);
        Self {
            diversity_index: diversity,
            economic_vibrancy: economic_vibrancy(profile, diversity),
            innovation_vibrancy: innovation_vibrancy(profile, diversity),
            social_vibrancy: social_vibrancy(profile, diversity),
            amenity_accessibility: amenity_accessibility_score(amenities, area_km2, population),
        }
    }
}
