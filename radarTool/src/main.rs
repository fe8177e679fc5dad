use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{info, warn};

use vibrancy_radar::analysis::reporting::{self, TerminalView};
use vibrancy_radar::cli::cli::Args;
use vibrancy_radar::config::tool_config::ToolConfig;
use vibrancy_radar::core::session::ScenarioSession;
use vibrancy_radar::core::sweep::sweep_field;
use vibrancy_radar::data::{baseline_loader, scenario_loader};
use vibrancy_radar::models::baseline::ReferenceScenario;
use vibrancy_radar::utils::csv_export::{self, CsvView};
use vibrancy_radar::utils::logging::{self, FileIOType, OperationCategory};

fn load_config(args: &Args) -> ToolConfig {
    let mut config = match args.config() {
        Some(path) => {
            let _timing = logging::start_timing("load_config",
                OperationCategory::FileIO { subcategory: FileIOType::ConfigLoad });
            match ToolConfig::load(Path::new(path)) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to load config from {}: {}. Using defaults.", path, e);
                    ToolConfig::default()
                }
            }
        }
        None => ToolConfig::default(),
    };

    if let Some(path) = args.baseline() {
        config.baseline_path = PathBuf::from(path);
    }
    if let Some(dir) = args.output_dir() {
        config.output_dir = PathBuf::from(dir);
    }
    if let Some(steps) = args.steps() {
        config.sweep_steps = steps;
    }
    config
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(args.enable_timing(), args.debug_logging());

    println!("Urban Vibrancy & Accessibility Radar");

    let config = load_config(&args);
    let baseline = if args.reference_preset() {
        info!("Using the San Francisco reference preset as baseline");
        ReferenceScenario::san_francisco().to_baseline()
    } else {
        baseline_loader::load_baseline_or_default(&config.baseline_path)
    };
    let baseline = Arc::new(baseline);
    if args.show_baseline() {
        reporting::print_baseline_summary(&baseline);
    }

    let mut session = match args.scenario() {
        Some(path) => {
            let scenario = scenario_loader::load_scenario(Path::new(path))
                .with_context(|| format!("loading scenario {}", path))?;
            ScenarioSession::with_scenario(baseline, config.reference.clone(), scenario)
        }
        None => ScenarioSession::new(baseline, config.reference.clone()),
    };
    for (field, value) in args.edits() {
        info!("Applying edit {}={}", field, value);
        session.edit(*field, *value);
    }

    session
        .render(&mut TerminalView)
        .map_err(|e| anyhow!(e))
        .context("rendering scenario")?;

    if args.enable_csv_export() {
        let mut csv_view = CsvView::new(&config.output_dir);
        session
            .render(&mut csv_view)
            .map_err(|e| anyhow!(e))
            .context("exporting scenario KPIs")?;
    }

    if let Some(field) = args.sweep() {
        let points = sweep_field(&session, field, config.sweep_steps);
        reporting::print_sweep(field, &points);

        if args.enable_csv_export() {
            fs::create_dir_all(&config.output_dir)
                .with_context(|| format!("creating {}", config.output_dir.display()))?;
            let path = csv_export::timestamped_path(&config.output_dir, &format!("sweep_{}", field));
            csv_export::export_sweep(field, &points, &path)
                .map_err(|e| anyhow!(e))
                .context("exporting sweep")?;
            info!("Exported sweep to {}", path.display());
        }
    }

    logging::print_timing_report();

    Ok(())
}
