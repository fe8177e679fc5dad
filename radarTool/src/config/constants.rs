// Paths
pub const DEFAULT_BASELINE_PATH: &str = "radarTool/assets/sf_baseline.json";
pub const DEFAULT_OUTPUT_DIR: &str = "results";

// Shannon entropy normalization
pub const DEMOGRAPHIC_GROUP_COUNT: usize = 5;

// Demographic share defaults (San Francisco mix)
pub const DEFAULT_STUDENTS_SHARE: f64 = 0.15;
pub const DEFAULT_ENTREPRENEURS_SHARE: f64 = 0.10;
pub const DEFAULT_WORKERS_SHARE: f64 = 0.35;
pub const DEFAULT_FAMILIES_SHARE: f64 = 0.30;
pub const DEFAULT_HIGH_INCOME_SHARE: f64 = 0.10;

// Demographic share bounds for editing
pub const MIN_SHARE: f64 = 0.0;
pub const MAX_SHARE: f64 = 0.5;
pub const SHARE_STEP: f64 = 0.01;

// Physical field defaults and bounds
pub const DEFAULT_POPULATION_DENSITY: f64 = 7000.0;     // people/km²
pub const MIN_POPULATION_DENSITY: f64 = 2000.0;
pub const MAX_POPULATION_DENSITY: f64 = 20000.0;
pub const POPULATION_DENSITY_STEP: f64 = 100.0;

pub const DEFAULT_AMENITIES: f64 = 100.0;
pub const MIN_AMENITIES: f64 = 100.0;
pub const MAX_AMENITIES: f64 = 3000.0;
pub const AMENITIES_STEP: f64 = 1.0;

pub const DEFAULT_AREA_KM2: f64 = 10.0;
pub const MIN_AREA_KM2: f64 = 10.0;
pub const MAX_AREA_KM2: f64 = 200.0;
pub const AREA_KM2_STEP: f64 = 0.1;

// Baseline fallbacks, used field-by-field when the baseline resource is incomplete
pub const DEFAULT_BASELINE_POPULATION: f64 = DEFAULT_POPULATION_DENSITY * DEFAULT_AREA_KM2;
pub const DEFAULT_BASELINE_AREA_KM2: f64 = DEFAULT_AREA_KM2;
pub const DEFAULT_BASELINE_AMENITIES: f64 = DEFAULT_AMENITIES;
pub const DEFAULT_PARKS_PER_1000: f64 = 4.1;                // acres per 1,000 people
pub const DEFAULT_PARKLAND_PCT_CITY_AREA: f64 = 20.0;
pub const DEFAULT_PARK_ACCESS_PCT: f64 = 100.0;
pub const DEFAULT_WATER_PIPE_MILES_PER_CAPITA: f64 = 0.0014;
pub const DEFAULT_WATER_INVESTMENT_PER_CAPITA: f64 = 540.0;  // USD
pub const DEFAULT_SEWER_MILES_PER_CAPITA: f64 = 0.0011;
pub const DEFAULT_ELECTRICITY_PER_CAPITA_KWH: f64 = 6500.0;
pub const DEFAULT_TRANSIT_STOPS_PER_KM2: f64 = 30.0;
pub const DEFAULT_TRANSIT_GRADE: &str = "A";
pub const DEFAULT_SAFETY_STAFF_PER_1000: f64 = 5.2;
pub const DEFAULT_SAFETY_COST_PER_CAPITA: f64 = 1100.0;     // USD
pub const DEFAULT_HEALTH_FACILITIES_PER_1000: f64 = 0.3;
pub const DEFAULT_HEALTH_SPENDING_PER_CAPITA: f64 = 2800.0; // USD

// Reference city preset
pub const REFERENCE_POPULATION_DENSITY: f64 = 7000.0;
pub const REFERENCE_PARKS_PER_THOUSAND: f64 = 4.1;
pub const REFERENCE_AMENITIES_PER_TEN_THOUSAND: f64 = 15.0;
pub const REFERENCE_AREA_KM2: f64 = 121.4;

// Radar reference constants (authoritative sources, used as radar denominators)
pub const REFERENCE_PARKS: f64 = 77.0;             // Parkland per 1,000 people
pub const REFERENCE_WATER: f64 = 80.0;             // Water pipes per capita
pub const REFERENCE_SANITATION: f64 = 80.0;        // Sewer pipes per capita
pub const REFERENCE_ELECTRICITY: f64 = 75.0;       // Per capita usage
pub const REFERENCE_TRANSIT: f64 = 70.0;           // Transit stop density
pub const REFERENCE_SAFETY: f64 = 86.0;            // Police/fire per capita
pub const REFERENCE_HEALTH: f64 = 91.0;            // Clinics/hospitals per capita
pub const REFERENCE_DIVERSITY: f64 = 0.93;
pub const REFERENCE_EV: f64 = 0.60;
pub const REFERENCE_IV: f64 = 0.62;
pub const REFERENCE_SV: f64 = 0.65;
pub const REFERENCE_POP_DENSITY: f64 = 7194.0;     // People per km²
pub const REFERENCE_AMENITY_DENSITY: f64 = 1.8;    // Amenities per km²
pub const REFERENCE_AAS: f64 = 77.0;

// Display scales
pub const RADAR_BASELINE: f64 = 100.0;
pub const RADAR_LIMIT: f64 = 100.0;
pub const BAR_BASELINE: f64 = 1.0;
pub const BAR_LIMIT: f64 = 1.0;

// Unit conversions
pub const PER_THOUSAND: f64 = 1000.0;
pub const PER_TEN_THOUSAND: f64 = 10000.0;

// Sweeps
pub const DEFAULT_SWEEP_STEPS: usize = 10;
