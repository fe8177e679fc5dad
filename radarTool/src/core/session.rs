use std::error::Error;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::analysis::kpi::{self, AxisReadings, KpiPair};
use crate::analysis::metrics::VibrancyMetrics;
use crate::analysis::snapshot::MetricsSnapshot;
use crate::config::tool_config::ReferenceKpis;
use crate::models::baseline::Baseline;
use crate::models::scenario::{Scenario, ScenarioField};
use crate::utils::logging::{self, OperationCategory, RecomputeType};
use crate::utils::traits::ScenarioView;

/// Everything displayed for one scenario revision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub revision: u64,
    pub snapshot: MetricsSnapshot,
    pub radar: Vec<KpiPair>,
    pub bars: Vec<KpiPair>,
}

pub fn baseline_metrics(baseline: &Baseline) -> VibrancyMetrics {
    VibrancyMetrics::compute(
        baseline.demographics(),
        baseline.amenities(),
        baseline.area_km2(),
        baseline.population(),
    )
}

/// Recomputes every displayed quantity from the full scenario.
pub fn evaluate(
    scenario: &Scenario,
    baseline_metrics: &VibrancyMetrics,
    reference: &ReferenceKpis,
    revision: u64,
) -> Evaluation {
    let readings = {
        let _timing = logging::start_timing("axis_readings",
            OperationCategory::Recompute { subcategory: RecomputeType::Metrics });
        AxisReadings::from_scenario(scenario)
    };

    let (radar, bars) = {
        let _timing = logging::start_timing("normalize_kpis",
            OperationCategory::Recompute { subcategory: RecomputeType::Normalization });
        (
            kpi::radar_kpis(&readings, reference),
            kpi::bar_kpis(&readings.vibrancy, baseline_metrics),
        )
    };

    let snapshot = {
        let _timing = logging::start_timing("metrics_snapshot",
            OperationCategory::Recompute { subcategory: RecomputeType::Snapshot });
        MetricsSnapshot::from_scenario(scenario)
    };

    Evaluation { revision, snapshot, radar, bars }
}

/// Owns the current scenario revision and its evaluation against a shared,
/// immutable baseline.
pub struct ScenarioSession {
    baseline: Arc<Baseline>,
    baseline_metrics: VibrancyMetrics,
    reference: ReferenceKpis,
    scenario: Scenario,
    evaluation: Evaluation,
}

impl ScenarioSession {
    pub fn new(baseline: Arc<Baseline>, reference: ReferenceKpis) -> Self {
        let scenario = Scenario::from_baseline(&baseline);
        Self::with_scenario(baseline, reference, scenario)
    }

    pub fn with_scenario(baseline: Arc<Baseline>, reference: ReferenceKpis, scenario: Scenario) -> Self {
        let baseline_metrics = baseline_metrics(&baseline);
        let evaluation = evaluate(&scenario, &baseline_metrics, &reference, 0);
        Self { baseline, baseline_metrics, reference, scenario, evaluation }
    }

    pub fn baseline(&self) -> &Arc<Baseline> {
        &self.baseline
    }

    pub fn baseline_metrics(&self) -> &VibrancyMetrics {
        &self.baseline_metrics
    }

    pub fn reference(&self) -> &ReferenceKpis {
        &self.reference
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    pub fn revision(&self) -> u64 {
        self.evaluation.revision
    }

    /// The single mutation entry point: replaces the scenario and recomputes.
    pub fn on_change(&mut self, updated: Scenario) -> &Evaluation {
        let revision = self.evaluation.revision + 1;
        self.scenario = updated;
        self.evaluation = evaluate(&self.scenario, &self.baseline_metrics, &self.reference, revision);
        debug!("Scenario revision {} evaluated", revision);
        &self.evaluation
    }

    /// Applies one control's edit through the mutation protocol.
    pub fn edit(&mut self, field: ScenarioField, value: f64) -> &Evaluation {
        let _timing = logging::start_timing("scenario_edit", OperationCategory::ScenarioEdit);
        let updated = self.scenario.with_field(field, value);
        self.on_change(updated)
    }

    pub fn render(&self, view: &mut dyn ScenarioView) -> Result<(), Box<dyn Error + Send + Sync>> {
        view.render(&self.scenario, &self.evaluation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::*;
    use crate::models::baseline::InfrastructureMetrics;
    use crate::models::demographics::DemographicProfile;

    fn session() -> ScenarioSession {
        ScenarioSession::new(Arc::new(Baseline::default()), ReferenceKpis::default())
    }

    #[test]
    fn initial_scenario_mirrors_baseline() {
        let session = session();
        assert_eq!(session.revision(), 0);
        assert_eq!(session.scenario().population_density(), DEFAULT_POPULATION_DENSITY);
        assert_eq!(session.scenario().amenities(), DEFAULT_BASELINE_AMENITIES);
        for bar in &session.evaluation().bars {
            assert!((bar.scenario - 1.0).abs() < 1e-9, "{} = {}", bar.label, bar.scenario);
        }
    }

    #[test]
    fn city_larger_than_edit_range_starts_at_parity() {
        let profile = DemographicProfile::new(0.1, 0.05, 0.55, 0.2, 0.1);
        let baseline = Baseline::new(InfrastructureMetrics::default(), 3_900_000.0, 1302.0, 5200.0, profile);
        let session = ScenarioSession::new(Arc::new(baseline), ReferenceKpis::default());
        assert_eq!(session.scenario().area_km2(), 1302.0);
        assert_eq!(session.scenario().amenities(), 5200.0);
        assert_eq!(session.evaluation().snapshot.total_population, 3_900_000);
        for bar in &session.evaluation().bars {
            assert!((bar.scenario - 1.0).abs() < 1e-6, "{} = {}", bar.label, bar.scenario);
        }
    }

    #[test]
    fn each_change_bumps_revision() {
        let mut session = session();
        session.edit(ScenarioField::Workers, 0.5);
        let evaluation = session.edit(ScenarioField::AreaKm2, 50.0);
        assert_eq!(evaluation.revision, 2);
        assert_eq!(evaluation.snapshot.total_population, 350_000);
    }

    #[test]
    fn on_change_recomputes_from_full_scenario() {
        let mut session = session();
        let updated = session.scenario().with_field(ScenarioField::Amenities, 3000.0);
        let evaluation = session.on_change(updated).clone();
        let fresh = evaluate(&updated, session.baseline_metrics(), session.reference(), evaluation.revision);
        assert_eq!(evaluation, fresh);
    }

    struct Recorder(Vec<u64>);

    impl ScenarioView for Recorder {
        fn render(&mut self, _scenario: &Scenario, evaluation: &Evaluation) -> Result<(), Box<dyn Error + Send + Sync>> {
            self.0.push(evaluation.revision);
            Ok(())
        }
    }

    #[test]
    fn views_receive_current_revision() {
        let mut session = session();
        let mut recorder = Recorder(Vec::new());
        session.render(&mut recorder).unwrap();
        session.edit(ScenarioField::Students, 0.3);
        session.render(&mut recorder).unwrap();
        assert_eq!(recorder.0, vec![0, 1]);
    }
}
