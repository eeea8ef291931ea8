//! First-pillar (flat government pension) estimate
//!
//! A single pass over the contribution years from age 21 to the retirement
//! year. Years whose income falls below the minimum contribution threshold
//! are penalty years and count for nothing.

mod engine;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::assumptions::first_pillar::{
    default_average_income_references, default_minimum_contributions, default_payout_bands,
};
use crate::assumptions::schedule::Band;
use crate::assumptions::{PayoutRateBand, YearAmount, DEFAULT_REQUIRED_YEARS};
use crate::error::FirstPillarError;

pub use engine::{calculate_first_pillar, retirement_factor};

/// Largest early or late retirement offset in years
pub const MAX_RETIREMENT_OFFSET: i32 = 5;

/// Reduction per year of early retirement
pub const EARLY_RETIREMENT_REDUCTION: f64 = 0.068;

/// Increase per year of deferred retirement
pub const LATE_RETIREMENT_INCREASE: f64 = 0.052;

/// Yearly income for every year in `[year_from, year_to]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeOverride {
    pub year_from: i32,
    pub year_to: i32,
    pub amount: f64,
}

impl IncomeOverride {
    pub fn new(year_from: i32, year_to: i32, amount: f64) -> Self {
        Self { year_from, year_to, amount }
    }
}

impl Band for IncomeOverride {
    type Key = i32;
    fn bounds(&self) -> (i32, i32) {
        (self.year_from, self.year_to)
    }
}

/// Inputs of a first-pillar estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstPillarProfile {
    pub birth_date: NaiveDate,

    pub retirement_age: u32,

    /// Years of early (negative) or deferred (positive) retirement, -5..=5
    #[serde(default)]
    pub retirement_offset: i32,

    #[serde(default = "default_required_years")]
    pub required_years: u32,

    #[serde(default = "default_minimum_contributions")]
    pub minimum_contributions: Vec<YearAmount>,

    #[serde(default = "default_average_income_references")]
    pub average_incomes: Vec<YearAmount>,

    #[serde(default = "default_payout_bands")]
    pub payout_bands: Vec<PayoutRateBand>,

    /// Income per year; years outside every range have no income
    #[serde(default)]
    pub income_overrides: Vec<IncomeOverride>,
}

fn default_required_years() -> u32 { DEFAULT_REQUIRED_YEARS }

impl Default for FirstPillarProfile {
    fn default() -> Self {
        Self {
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default(),
            retirement_age: 65,
            retirement_offset: 0,
            required_years: DEFAULT_REQUIRED_YEARS,
            minimum_contributions: default_minimum_contributions(),
            average_incomes: default_average_income_references(),
            payout_bands: default_payout_bands(),
            income_overrides: Vec::new(),
        }
    }
}

impl FirstPillarProfile {
    pub fn calculate(&self) -> Result<FirstPillarResult, FirstPillarError> {
        calculate_first_pillar(
            self.birth_date,
            self.retirement_age,
            self.retirement_offset,
            &self.income_overrides,
            &self.minimum_contributions,
            &self.average_incomes,
            &self.payout_bands,
            self.required_years,
        )
    }
}

/// One calendar year of the contribution history
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContributionYear {
    pub year: i32,
    pub income: f64,
    /// Minimum income for the year to count
    pub threshold: f64,
    pub is_penalty: bool,
}

/// Result of a first-pillar estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FirstPillarResult {
    /// Effective retirement year (birth year + age + offset)
    pub retirement_year: i32,

    pub years: Vec<ContributionYear>,

    /// Years counted towards the pension
    pub valid_years: u32,

    pub penalty_years: u32,

    /// Mean income over valid years
    pub average_income: f64,

    /// Average income capped at the reference for the retirement year
    pub capped_average_income: f64,

    /// `valid_years / required_years`, at most 1
    pub contribution_percentage: f64,

    /// Payout-band amount for the capped average income
    pub base_monthly_pension: f64,

    /// Early/late retirement factor applied to the pension
    pub retirement_factor: f64,

    pub monthly_pension: f64,

    pub yearly_pension: f64,

    /// Band amount at zero income
    pub min_monthly_pension: f64,

    /// Band amount at the reference income
    pub max_monthly_pension: f64,

    pub percent_of_max: f64,
}
