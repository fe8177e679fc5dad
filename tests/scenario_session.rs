use std::path::PathBuf;
use std::sync::Arc;

use vibrancy_radar::analysis::metrics::{self, amenity_accessibility_score, diversity_index};
use vibrancy_radar::config::tool_config::{ReferenceKpis, ToolConfig};
use vibrancy_radar::core::sweep::sweep_field;
use vibrancy_radar::data::{baseline_loader, scenario_loader};
use vibrancy_radar::models::baseline::ReferenceScenario;
use vibrancy_radar::{Baseline, DemographicProfile, Scenario, ScenarioField, ScenarioSession};

fn asset_baseline() -> Baseline {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(ToolConfig::default().baseline_path);
    let parsed = baseline_loader::load_baseline(&path).expect("bundled baseline loads");
    assert!(parsed.defaulted_fields.is_empty(), "bundled baseline is complete: {:?}", parsed.defaulted_fields);
    parsed.baseline
}

#[test]
fn bundled_baseline_starts_at_parity() {
    let session = ScenarioSession::new(Arc::new(asset_baseline()), ReferenceKpis::default());
    let evaluation = session.evaluation();

    assert_eq!(evaluation.revision, 0);
    assert_eq!(evaluation.radar.len(), 14);
    assert_eq!(evaluation.bars.len(), 4);
    // Density is re-rounded into a population, so AAS drifts by a hair
    for bar in &evaluation.bars {
        assert!((bar.scenario - 1.0).abs() < 1e-3, "{} = {}", bar.label, bar.scenario);
    }
}

#[test]
fn slider_session_matches_worked_examples() {
    let mut session = ScenarioSession::with_scenario(
        Arc::new(Baseline::default()),
        ReferenceKpis::default(),
        Scenario::default(),
    );

    // Drag every share to 0.2 one control at a time; rescaling keeps the sum at 1
    for field in [
        ScenarioField::Students,
        ScenarioField::Entrepreneurs,
        ScenarioField::Workers,
        ScenarioField::Families,
        ScenarioField::HighIncome,
    ] {
        session.edit(field, 0.2);
        assert!((session.scenario().demographics().sum() - 1.0).abs() < 1e-12);
    }
    assert_eq!(session.revision(), 5);

    // 100 amenities over 10 km² with 70,000 people
    let snapshot = &session.evaluation().snapshot;
    assert_eq!(snapshot.total_population, 70_000);
    assert_eq!(
        amenity_accessibility_score(session.scenario().amenities(), session.scenario().area_km2(), snapshot.total_population as f64),
        70_000.0
    );
}

#[test]
fn out_of_range_edits_fall_back_to_defaults() {
    let mut session = ScenarioSession::new(Arc::new(Baseline::default()), ReferenceKpis::default());
    session.edit(ScenarioField::AreaKm2, 150.0);
    session.edit(ScenarioField::AreaKm2, 500.0);
    assert_eq!(session.scenario().area_km2(), 10.0);

    session.edit(ScenarioField::PopulationDensity, f64::NEG_INFINITY);
    assert_eq!(session.scenario().population_density(), 7000.0);
}

#[test]
fn radar_and_bars_stay_bounded_across_sweeps() {
    let session = ScenarioSession::new(Arc::new(asset_baseline()), ReferenceKpis::default());
    for field in ScenarioField::ALL {
        for point in sweep_field(&session, field, 7) {
            let evaluation = &point.evaluation;
            assert!(evaluation.radar.iter().all(|k| (-100.0..=100.0).contains(&k.scenario) && k.baseline == 100.0));
            assert!(evaluation.bars.iter().all(|k| (-1.0..=1.0).contains(&k.scenario) && k.baseline == 1.0));
            assert!((0.0..=1.0).contains(&evaluation.snapshot.diversity_index));
        }
    }
}

#[test]
fn doubling_amenities_saturates_aas_bar() {
    let mut session = ScenarioSession::new(Arc::new(asset_baseline()), ReferenceKpis::default());
    let amenities = session.scenario().amenities();
    session.edit(ScenarioField::Amenities, amenities * 2.0);
    let aas = session.evaluation().bars.iter().find(|k| k.label == "AAS").unwrap();
    assert_eq!(aas.scenario, 1.0);
}

#[test]
fn vibrancy_indices_for_example_profile() {
    let profile = DemographicProfile::new(0.3, 0.1, 0.3, 0.2, 0.1);
    let d = diversity_index(&profile);
    assert!(d > 0.0 && d < 1.0);
    assert!((metrics::economic_vibrancy(&profile, d) - 0.2 * d).abs() < 1e-12);
    assert_eq!(diversity_index(&DemographicProfile::uniform()), 1.0);
}

#[test]
fn missing_baseline_file_does_not_abort() {
    let baseline = baseline_loader::load_baseline_or_default(&PathBuf::from("nowhere/sf_baseline.json"));
    let session = ScenarioSession::new(Arc::new(baseline), ReferenceKpis::default());
    assert_eq!(session.scenario().total_population(), 70_000);
}

#[test]
fn scenario_file_against_reference_preset() {
    let path = std::env::temp_dir().join(format!("vibrancy_radar_scenario_{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"students": 0.3, "entrepreneurs": 0.1, "workers": 0.3, "families": 0.2, "highIncome": 0.1,
            "populationDensity": 12000, "amenities": 2000, "area_km2": 50}"#,
    )
    .unwrap();
    let scenario = scenario_loader::load_scenario(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let baseline = ReferenceScenario::san_francisco().to_baseline();
    let session = ScenarioSession::with_scenario(Arc::new(baseline), ReferenceKpis::default(), scenario);
    assert_eq!(session.evaluation().snapshot.total_population, 600_000);
    assert!(session.evaluation().bars.iter().all(|k| (-1.0..=1.0).contains(&k.scenario)));

    std::fs::write(&path, r#"{"students": 0.3}"#).unwrap();
    assert!(scenario_loader::load_scenario(&path).is_err());
    std::fs::remove_file(&path).unwrap();
}
