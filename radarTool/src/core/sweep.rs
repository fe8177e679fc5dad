use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::config::field_schema::FieldSpec;
use crate::core::session::{evaluate, Evaluation, ScenarioSession};
use crate::models::scenario::{Scenario, ScenarioField};
use crate::utils::logging::{self, OperationCategory};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPoint {
    pub value: f64,
    pub scenario: Scenario,
    pub evaluation: Evaluation,
}

/// Evaluates `field` at up to `steps` evenly spaced values across its schema
/// range, snapped to the control step and each applied as an edit on top of
/// the session's current scenario.
///
/// The session itself is left untouched.
pub fn sweep_field(session: &ScenarioSession, field: ScenarioField, steps: usize) -> Vec<SweepPoint> {
    let _timing = logging::start_timing("sweep_field", OperationCategory::Sweep);

    let spec = FieldSpec::for_field(field);
    let base = *session.scenario();
    let baseline_metrics = session.baseline_metrics();
    let reference = session.reference();
    let revision = session.revision();

    info!("Sweeping {} over [{}, {}] in {} steps", spec.name, spec.min, spec.max, steps);

    spec.range_points(steps)
        .par_iter()
        .map(|&value| {
            let scenario = base.with_field(field, value);
            let evaluation = evaluate(&scenario, baseline_metrics, reference, revision);
            SweepPoint { value, scenario, evaluation }
        })
        .collect()
}
