//! Run the second-pillar projection for a profile
//!
//! Projects all three contribution options (and optionally saved plans),
//! writes the rows to CSV and prints a summary.

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;

use pension_projection::profile::{load_profile, PensionProfile};
use pension_projection::projection::{write_projections_csv, Granularity, ProjectionConfig};
use pension_projection::scenario::{ScenarioRunner, CURRENT_SETTINGS};

#[derive(Parser, Debug)]
#[command(about = "Project retirement savings for three contribution options")]
struct Args {
    /// Profile JSON file (built-in defaults when omitted)
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Project month by month instead of yearly
    #[arg(long)]
    monthly: bool,

    /// Reference date for salary growth (defaults to the local date)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// CSV output path
    #[arg(long, default_value = "projection_output.csv")]
    output: PathBuf,

    /// Saved plans to compare against the current settings
    #[arg(long = "plan")]
    plans: Vec<String>,

    /// Report each option's fund value at this date
    #[arg(long)]
    value_at: Option<NaiveDate>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let profile = match &args.profile {
        Some(path) => load_profile(path)
            .with_context(|| format!("Failed to load profile {}", path.display()))?,
        None => PensionProfile::new(today),
    };

    let granularity = if args.monthly { Granularity::Monthly } else { Granularity::Yearly };
    let runner = ScenarioRunner::new(ProjectionConfig { granularity, today });

    let projections = runner.run_options(&profile.inputs);
    if projections.is_empty() {
        println!("No data available for the given inputs.");
        return Ok(());
    }

    let tagged: Vec<(&str, _)> = projections.iter().map(|p| (CURRENT_SETTINGS, p)).collect();
    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_projections_csv(file, &tagged).context("Failed to write projection CSV")?;
    println!("Output written to {}", args.output.display());

    println!("\nFinal values:");
    for projection in &projections {
        if let Some(value) = projection.final_value() {
            println!("  Option {}: {:>14.2}", projection.option + 1, value);
        }
    }

    if let Some(date) = args.value_at {
        println!("\nFund value at {}:", date);
        for (option, value) in runner.fund_values_at(&profile.inputs, date) {
            match value {
                Some(value) => println!("  Option {}: {:>14.2}", option + 1, value),
                None => println!("  Option {}: no data available", option + 1),
            }
        }
    }

    if !args.plans.is_empty() {
        let results = runner
            .compare_profile(&profile, &args.plans, true)
            .context("Failed to compare plans")?;

        println!("\nPlan comparison:");
        println!(
            "{:<20} {:<8} {:>14} {:>14} {:>14} {:>14} {:>6}",
            "Plan", "Option", "Start", "Final", "Growth", "Avg contrib", "Years"
        );
        for result in &results {
            if let Some(m) = result.metrics() {
                println!(
                    "{:<20} {:<8} {:>14.0} {:>14.0} {:>14.0} {:>14.0} {:>6}",
                    result.plan,
                    result.option() + 1,
                    m.starting_value,
                    m.final_value,
                    m.total_growth,
                    m.average_contribution,
                    m.years_to_retirement
                );
            }
        }
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
