use clap::Parser;

use crate::models::scenario::ScenarioField;

/// Parses one `field=value` control edit.
pub fn parse_edit(s: &str) -> Result<(ScenarioField, f64), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected <field>=<value>, got '{}'", s))?;
    let field: ScenarioField = field.parse().map_err(|e| format!("{}", e))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value for {}: {}", field, e))?;
    Ok((field, value))
}

#[derive(Parser)]
#[command(author, version, about = "Compare urban vibrancy and accessibility KPIs of a scenario against a baseline city", long_about = None)]
pub struct Args {
    #[arg(short, long, help = "Baseline JSON resource (overrides the config file)")]
    baseline: Option<String>,

    #[arg(long, help = "Use the built-in San Francisco reference preset as the baseline")]
    reference_preset: bool,

    #[arg(long, help = "Start from a complete scenario JSON instead of the baseline city")]
    scenario: Option<String>,

    #[arg(short, long, help = "Tool configuration JSON")]
    config: Option<String>,

    #[arg(short = 's', long = "set", value_parser = parse_edit, help = "Apply an edit, e.g. --set students=0.3 (repeatable, applied in order)")]
    edits: Vec<(ScenarioField, f64)>,

    #[arg(long, help = "Sweep a field across its range after applying edits")]
    sweep: Option<ScenarioField>,

    #[arg(long, help = "Number of sweep points (defaults to the config value)")]
    steps: Option<usize>,

    #[arg(long, default_value_t = false)]
    show_baseline: bool,

    #[arg(long, default_value_t = false)]
    csv_export: bool,

    #[arg(short, long, help = "Directory for CSV exports (overrides the config file)")]
    output_dir: Option<String>,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,
}

// Add getter methods for all fields
impl Args {
    pub fn baseline(&self) -> Option<&str> {
        self.baseline.as_deref()
    }

    pub fn reference_preset(&self) -> bool {
        self.reference_preset
    }

    pub fn scenario(&self) -> Option<&str> {
        self.scenario.as_deref()
    }

    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn edits(&self) -> &[(ScenarioField, f64)] {
        &self.edits
    }

    pub fn sweep(&self) -> Option<ScenarioField> {
        self.sweep
    }

    pub fn steps(&self) -> Option<usize> {
        self.steps
    }

    pub fn show_baseline(&self) -> bool {
        self.show_baseline
    }

    pub fn enable_csv_export(&self) -> bool {
        self.csv_export
    }

    pub fn output_dir(&self) -> Option<&str> {
        self.output_dir.as_deref()
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }
}
