use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;

use defect_ingest::{aggregate, parse_issues, AggregationOptions};

#[derive(Args)]
pub struct AggregateArgs {
    /// JSON array of exported issues
    #[arg(long)]
    pub issues: PathBuf,

    /// First day of the range (YYYY-MM-DD)
    #[arg(long)]
    pub since: NaiveDate,

    /// Last day of the range, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub until: NaiveDate,

    /// Output weekly measures CSV
    #[arg(long, default_value = "data/base_measures.csv")]
    pub out: PathBuf,
}

pub fn run(args: AggregateArgs) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&args.issues)
        .with_context(|| format!("reading {}", args.issues.display()))?;
    let issues = parse_issues(&json)?;
    let records = aggregate(&issues, args.since, args.until, AggregationOptions::default())?;

    if records.is_empty() {
        println!("No issues found in range.");
        return Ok(());
    }

    defect_io::write_series(&args.out, &records)?;
    println!("Wrote {}", args.out.display());
    Ok(())
}
