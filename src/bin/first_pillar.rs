//! Estimate the first-pillar pension
//!
//! Income history comes from a CSV of `year_from,year_to,amount` ranges, or
//! is synthesized from the salary parameters of a profile.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;

use pension_projection::first_pillar::FirstPillarProfile;
use pension_projection::profile::{first_pillar_from_inputs, load_income_overrides, load_profile, PensionProfile};

#[derive(Parser, Debug)]
#[command(about = "Estimate the first-pillar pension")]
struct Args {
    /// Profile JSON file providing birth date, retirement age and salary
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Overrides the profile's birth date
    #[arg(long)]
    birth_date: Option<NaiveDate>,

    /// Overrides the profile's retirement age
    #[arg(long)]
    retirement_age: Option<u32>,

    /// Early (negative) or deferred (positive) retirement in years, -5..=5
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    offset: i32,

    /// Contribution years needed for a full pension
    #[arg(long, default_value_t = 45)]
    required_years: u32,

    /// CSV with yearly income ranges (synthesized from salary when omitted)
    #[arg(long)]
    income_csv: Option<PathBuf>,

    /// Reference date for salary growth (defaults to the local date)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Print every contribution year
    #[arg(long)]
    detailed: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let mut inputs = match &args.profile {
        Some(path) => load_profile(path)
            .with_context(|| format!("Failed to load profile {}", path.display()))?
            .inputs,
        None => PensionProfile::new(today).inputs,
    };
    if let Some(birth_date) = args.birth_date {
        inputs.birth_date = birth_date;
    }
    if let Some(retirement_age) = args.retirement_age {
        inputs.retirement_age = retirement_age;
    }

    let mut profile: FirstPillarProfile = match &args.income_csv {
        Some(path) => FirstPillarProfile {
            birth_date: inputs.birth_date,
            retirement_age: inputs.retirement_age,
            income_overrides: load_income_overrides(path)
                .with_context(|| format!("Failed to load income history {}", path.display()))?,
            ..FirstPillarProfile::default()
        },
        None => first_pillar_from_inputs(&inputs, today).context("Failed to synthesize income history")?,
    };
    profile.retirement_offset = args.offset;
    profile.required_years = args.required_years;

    let result = profile.calculate()?;

    if args.detailed {
        println!("{:<6} {:>12} {:>10} {:<8}", "Year", "Income", "Minimum", "Counted");
        for year in &result.years {
            println!(
                "{:<6} {:>12.0} {:>10.0} {:<8}",
                year.year,
                year.income,
                year.threshold,
                if year.is_penalty { "No" } else { "Yes" }
            );
        }
        println!();
    }

    println!("First pillar estimate (retirement in {})", result.retirement_year);
    println!("  Valid contribution years: {} ({} penalty years)", result.valid_years, result.penalty_years);
    println!("  Contribution percentage:  {:.1}%", result.contribution_percentage * 100.0);
    println!("  Average income:           {:.0} (capped {:.0})", result.average_income, result.capped_average_income);
    println!("  Retirement factor:        {:.3}", result.retirement_factor);
    println!("  Monthly pension:          {:.2}", result.monthly_pension);
    println!("  Yearly pension:           {:.2}", result.yearly_pension);
    println!("  Range:                    {:.2} - {:.2}", result.min_monthly_pension, result.max_monthly_pension);
    println!("  Percent of maximum:       {:.1}%", result.percent_of_max);

    Ok(())
}
