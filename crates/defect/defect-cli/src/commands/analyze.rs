use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use defect_analysis::{AnalysisPipeline, AnalysisReport};
use defect_core::FlowConfig;
use defect_io::ArtifactPaths;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Weekly measures CSV
    #[arg(long, default_value = "data/base_measures.csv")]
    pub data: PathBuf,

    /// Analysis model (.yaml, .yml or .toml)
    #[arg(long, default_value = "config/analysis_model.yaml")]
    pub config: PathBuf,

    /// Forecast horizon in weeks; overrides the model
    #[arg(long)]
    pub horizon: Option<u32>,

    /// Directory for derived_measures.csv, indicators.csv, forecast_and_plan.json
    #[arg(long, default_value = "outputs")]
    pub outdir: PathBuf,

    /// Print the default analysis model as YAML and exit
    #[arg(long)]
    pub print_default_config: bool,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    if args.print_default_config {
        print!("{}", FlowConfig::default().to_yaml_string()?);
        return Ok(());
    }

    let config = defect_io::load_config(&args.config)
        .with_context(|| format!("loading model {}", args.config.display()))?;
    let records = defect_io::read_series(&args.data)
        .with_context(|| format!("reading series {}", args.data.display()))?;
    tracing::info!(weeks = records.len(), "series loaded");

    let report = AnalysisPipeline::new(config)
        .run(&records, args.horizon)
        .context("analysis failed")?;
    let paths = defect_io::write_report(&args.outdir, &report)
        .with_context(|| format!("writing artifacts to {}", args.outdir.display()))?;

    print_summary(&report, &paths)
}

fn print_summary(report: &AnalysisReport, paths: &ArtifactPaths) -> anyhow::Result<()> {
    let document = report.forecast_document();
    if let Some(event) = &report.selection.event {
        println!("{event}");
    }
    println!("# Forecast ({} week ahead)", document.horizon_weeks);
    println!(
        "Predicted inflow: {} Predicted outflow: {}",
        document.forecast.inflow_total, document.forecast.outflow_total
    );
    println!(
        "Severity mix (inflow): {}",
        serde_json::to_string(&document.forecast.severity_breakdown_inflow)?
    );
    println!("\n# Resource plan");
    println!("{}", serde_json::to_string_pretty(&document.resource_plan)?);
    println!(
        "\nWrote: {} {} {}",
        paths.derived.display(),
        paths.indicators.display(),
        paths.forecast.display()
    );
    Ok(())
}
