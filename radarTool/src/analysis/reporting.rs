use std::error::Error;

use crate::analysis::kpi::KpiPair;
use crate::analysis::snapshot::MetricsSnapshot;
use crate::core::session::Evaluation;
use crate::core::sweep::SweepPoint;
use crate::models::baseline::Baseline;
use crate::models::scenario::{Scenario, ScenarioField};
use crate::utils::traits::ScenarioView;

pub fn print_baseline_summary(baseline: &Baseline) {
    let infra = baseline.infrastructure();
    println!("\nBaseline");
    println!("----------------------------------------");
    println!("Population: {:.0}", baseline.population());
    println!("Area: {:.1} km²", baseline.area_km2());
    println!("Population Density: {:.0} people/km²", baseline.population_density());
    println!("Amenities: {:.0}", baseline.amenities());
    println!("Infrastructure:");
    println!("  Parks: {:.2} acres per 1,000 ({:.1}% of area, {:.0}% access)",
             infra.parks_per_1000, infra.parkland_pct_city_area, infra.park_access_pct);
    println!("  Water: {:.4} pipe miles/capita, ${:.0}/capita", infra.water_pipe_miles_per_capita, infra.water_investment_per_capita);
    println!("  Sewer: {:.4} miles/capita", infra.sewer_miles_per_capita);
    println!("  Electricity: {:.0} kWh/capita", infra.electricity_per_capita_kwh);
    println!("  Transit: {:.1} stops/km² (grade {})", infra.transit_stops_per_km2, infra.transit_grade);
    println!("  Safety: {:.1} staff per 1,000, ${:.0}/capita", infra.safety_staff_per_1000, infra.safety_cost_per_capita);
    println!("  Health: {:.2} facilities per 1,000, ${:.0}/capita", infra.health_facilities_per_1000, infra.health_spending_per_capita);
}

pub fn print_metrics_panel(snapshot: &MetricsSnapshot) {
    println!("\nLive KPI Metrics");
    println!("----------------------------------------");
    println!("Population Density: {:.0} people/km²", snapshot.population_density);
    println!("Total Population: {}", snapshot.total_population);
    println!("Amenity Density (per km²): {:.2}", snapshot.amenity_density_km2);
    println!("Amenity Density (per 1,000 people): {:.2}", snapshot.amenity_density_per_thousand);
    println!("Diversity Index: {:.3}", snapshot.diversity_index);
    println!("Total Amenities: {}", snapshot.total_amenities);
    for (group, count) in &snapshot.group_counts {
        println!("  {}: {}", group.as_str(), count);
    }
}

fn print_kpi_table(title: &str, kpis: &[KpiPair], precision: usize) {
    println!("\n{}", title);
    println!("----------------------------------------");
    println!("{:<28} {:>9} {:>9}", "KPI", "Baseline", "Scenario");
    for kpi in kpis {
        println!("{:<28} {:>9.*} {:>9.*}", kpi.label, precision, kpi.baseline, precision, kpi.scenario);
    }
}

pub fn print_radar(kpis: &[KpiPair]) {
    print_kpi_table("Radar (% of reference, clamped to ±100)", kpis, 1);
}

pub fn print_bars(kpis: &[KpiPair]) {
    print_kpi_table("Vibrancy Bars (ratio to baseline, clamped to ±1)", kpis, 3);
}

pub fn print_scenario(scenario: &Scenario) {
    println!("\nScenario");
    println!("----------------------------------------");
    for field in ScenarioField::ALL {
        println!("  {}: {}", field, scenario.value(field));
    }
}

pub fn print_sweep(field: ScenarioField, points: &[SweepPoint]) {
    println!("\nSweep: {}", field);
    println!("----------------------------------------");
    if let Some(first) = points.first() {
        let labels: Vec<&str> = first.evaluation.bars.iter().map(|k| k.label).collect();
        println!("{:>10} {}", field.name(), labels.iter().map(|l| format!("{:>20}", l)).collect::<String>());
    }
    for point in points {
        let values: String = point.evaluation.bars.iter()
            .map(|k| format!("{:>20.3}", k.scenario))
            .collect();
        println!("{:>10.2} {}", point.value, values);
    }
}

/// Prints every panel to stdout.
pub struct TerminalView;

impl ScenarioView for TerminalView {
    fn render(&mut self, scenario: &Scenario, evaluation: &Evaluation) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("\n=== Revision {} ===", evaluation.revision);
        print_scenario(scenario);
        print_metrics_panel(&evaluation.snapshot);
        print_radar(&evaluation.radar);
        print_bars(&evaluation.bars);
        Ok(())
    }
}
