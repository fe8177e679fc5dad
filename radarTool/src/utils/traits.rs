// Presentation boundary: anything that displays an evaluated scenario revision

use std::error::Error;

use crate::core::session::Evaluation;
use crate::models::scenario::Scenario;

pub trait ScenarioView {
    fn render(&mut self, scenario: &Scenario, evaluation: &Evaluation) -> Result<(), Box<dyn Error + Send + Sync>>;
}
