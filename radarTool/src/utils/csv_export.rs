use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;
use tracing::info;

use crate::analysis::kpi::KpiPair;
use crate::analysis::snapshot::MetricsSnapshot;
use crate::core::session::Evaluation;
use crate::core::sweep::SweepPoint;
use crate::models::scenario::{Scenario, ScenarioField};
use crate::utils::logging::{self, FileIOType, OperationCategory};
use crate::utils::traits::ScenarioView;

#[derive(Debug, Serialize)]
struct KpiRow<'a> {
    chart: &'a str,
    label: &'a str,
    baseline: Option<f64>,
    scenario: f64,
}

fn kpi_rows<'a>(chart: &'a str, kpis: &'a [KpiPair]) -> impl Iterator<Item = KpiRow<'a>> + 'a {
    kpis.iter().map(move |kpi| KpiRow {
        chart,
        label: kpi.label,
        baseline: Some(kpi.baseline),
        scenario: kpi.scenario,
    })
}

fn metric_rows(snapshot: &MetricsSnapshot) -> Vec<KpiRow<'static>> {
    let mut rows = vec![
        KpiRow { chart: "metrics", label: "Population Density", baseline: None, scenario: snapshot.population_density },
        KpiRow { chart: "metrics", label: "Total Population", baseline: None, scenario: snapshot.total_population as f64 },
        KpiRow { chart: "metrics", label: "Amenity Density (per km²)", baseline: None, scenario: snapshot.amenity_density_km2 },
        KpiRow { chart: "metrics", label: "Amenity Density (per 1,000 people)", baseline: None, scenario: snapshot.amenity_density_per_thousand },
        KpiRow { chart: "metrics", label: "Diversity Index", baseline: None, scenario: snapshot.diversity_index },
        KpiRow { chart: "metrics", label: "Total Amenities", baseline: None, scenario: snapshot.total_amenities as f64 },
    ];
    for (group, count) in &snapshot.group_counts {
        rows.push(KpiRow { chart: "groups", label: group.as_str(), baseline: None, scenario: *count as f64 });
    }
    rows
}

/// Writes radar, bar and metrics rows of one evaluation to `path`.
pub fn export_evaluation(evaluation: &Evaluation, path: &Path) -> Result<(), Box<dyn Error + Send + Sync>> {
    let _timing = logging::start_timing("export_evaluation",
        OperationCategory::FileIO { subcategory: FileIOType::ResultsSave });

    let mut writer = csv::Writer::from_path(path)?;
    for row in kpi_rows("radar", &evaluation.radar) {
        writer.serialize(row)?;
    }
    for row in kpi_rows("bar", &evaluation.bars) {
        writer.serialize(row)?;
    }
    for row in metric_rows(&evaluation.snapshot) {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct SweepRow<'a> {
    field: &'a str,
    value: f64,
    label: &'a str,
    radar: Option<f64>,
    bar: Option<f64>,
}

pub fn export_sweep(field: ScenarioField, points: &[SweepPoint], path: &Path) -> Result<(), Box<dyn Error + Send + Sync>> {
    let _timing = logging::start_timing("export_sweep",
        OperationCategory::FileIO { subcategory: FileIOType::ResultsSave });

    let mut writer = csv::Writer::from_path(path)?;
    for point in points {
        for kpi in &point.evaluation.radar {
            writer.serialize(SweepRow { field: field.name(), value: point.value, label: kpi.label, radar: Some(kpi.scenario), bar: None })?;
        }
        for kpi in &point.evaluation.bars {
            writer.serialize(SweepRow { field: field.name(), value: point.value, label: kpi.label, radar: None, bar: Some(kpi.scenario) })?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn timestamped_path(dir: &Path, stem: &str) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("{}_{}.csv", stem, timestamp))
}

/// View that writes each rendered revision to its own CSV file.
pub struct CsvView {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl CsvView {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into(), written: Vec::new() }
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ScenarioView for CsvView {
    fn render(&mut self, _scenario: &Scenario, evaluation: &Evaluation) -> Result<(), Box<dyn Error + Send + Sync>> {
        fs::create_dir_all(&self.output_dir)?;
        let path = timestamped_path(&self.output_dir, &format!("kpis_rev{}", evaluation.revision));
        export_evaluation(evaluation, &path)?;
        info!("Exported KPIs to {}", path.display());
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::config::tool_config::ReferenceKpis;
    use crate::core::session::ScenarioSession;
    use crate::models::baseline::Baseline;

    #[test]
    fn csv_view_writes_all_rows() {
        let dir = std::env::temp_dir().join(format!("vibrancy_radar_csv_{}", std::process::id()));
        let session = ScenarioSession::new(Arc::new(Baseline::default()), ReferenceKpis::default());
        let mut view = CsvView::new(&dir);
        session.render(&mut view).unwrap();

        let path = &view.written()[0];
        let mut reader = csv::Reader::from_path(path).unwrap();
        let rows = reader.records().count();
        // 14 radar + 4 bar + 6 metrics + 5 groups
        assert_eq!(rows, 29);
        let _ = fs::remove_dir_all(&dir);
    }
}
