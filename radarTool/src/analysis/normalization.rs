use crate::config::constants::{BAR_LIMIT, RADAR_BASELINE, RADAR_LIMIT};

fn clamp_symmetric(value: f64, limit: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(-limit, limit)
}

/// Clamps a radar reading to `[-100, 100]`.
pub fn clamp_radar(value: f64) -> f64 {
    clamp_symmetric(value, RADAR_LIMIT)
}

/// Clamps a bar reading to `[-1, 1]`.
pub fn clamp_bar(value: f64) -> f64 {
    clamp_symmetric(value, BAR_LIMIT)
}

/// `value` as a percentage of a static reference constant, clamped to the radar range.
///
/// A zero reference renders the scenario on the baseline circle.
pub fn radar_percent(value: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        return RADAR_BASELINE;
    }
    clamp_radar((value / reference) * 100.0)
}

/// Ratio of a scenario value to its computed baseline; 0 when the baseline is 0.
pub fn norm_to_baseline(value: f64, baseline: f64) -> f64 {
    if baseline == 0.0 {
        return 0.0;
    }
    value / baseline
}

pub fn bar_ratio(value: f64, baseline: f64) -> f64 {
    clamp_bar(norm_to_baseline(value, baseline))
}
