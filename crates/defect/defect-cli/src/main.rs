//! defect-flow CLI
//!
//! - `analyze`: derive measures, classify health, forecast, and plan from a
//!   weekly series; writes the three artifacts and prints a summary.
//! - `aggregate`: build the weekly series from an exported issue list.
//!
//! Logging goes to stderr, filtered by `DEFECT_LOG`.

use clap::{Parser, Subcommand};

mod commands;

/// Defect inflow predictor and resource planner
#[derive(Parser)]
#[command(name = "defect-flow")]
#[command(version)]
#[command(about = "Defect flow analytics: health indicators, inflow forecast, resource plan")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a weekly series and write artifacts
    Analyze(commands::analyze::AnalyzeArgs),
    /// Aggregate exported issues into a weekly series
    Aggregate(commands::aggregate::AggregateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    defect_core::tracing::init_tracing();

    match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Aggregate(args) => commands::aggregate::run(args),
    }
}
