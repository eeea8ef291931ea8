//! Profile data structures matching the saved settings format

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::assumptions::contributions::{
    default_coordination_fees, default_employer_ranges, default_occupation_levels,
    default_personal_ranges,
};
use crate::assumptions::{ContributionRange, EmployerRange, YearAmount, YearPercentage};
use crate::projection::{add_years, BonusConfig, BonusMode, DEFAULT_START_AGE};

use super::plans::PlanBook;

fn default_maximum_salary() -> f64 { 120_000.0 }
fn default_years_to_max() -> u32 { 15 }
fn default_expected_yield() -> f64 { 5.0 }
fn default_language() -> String { "en".to_string() }

/// Everything a second-pillar projection needs
///
/// This is also the shape of a saved plan: a plan is a frozen copy of these
/// fields taken from the live profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInputs {
    pub birth_date: NaiveDate,

    pub retirement_age: u32,

    /// Current yearly base salary
    pub current_salary: f64,

    /// Yearly base salary reached after `years_to_max_salary` years
    #[serde(default = "default_maximum_salary")]
    pub maximum_salary: f64,

    #[serde(default = "default_years_to_max")]
    pub years_to_max_salary: u32,

    /// Expected annual yield in percent (5.0 = 5%)
    #[serde(default = "default_expected_yield")]
    pub expected_yield: f64,

    pub personal_contribution_ranges: Vec<ContributionRange>,

    pub employer_contributions: Vec<EmployerRange>,

    /// Account value at `current_value_date`
    #[serde(default)]
    pub current_pension_value: f64,

    /// Date the account value refers to; projection starts here
    #[serde(default)]
    pub current_value_date: Option<NaiveDate>,

    /// Whether an extra ("13th") monthly salary is paid each year
    #[serde(rename = "has_13th_salary", default)]
    pub has_extra_period: bool,

    #[serde(default)]
    pub bonus_type: BonusMode,

    #[serde(default)]
    pub bonus_percentage: f64,

    #[serde(default)]
    pub bonus_fixed: f64,

    #[serde(default = "default_coordination_fees")]
    pub coordination_fees: Vec<YearAmount>,

    #[serde(default = "default_occupation_levels")]
    pub occupation_levels: Vec<YearPercentage>,
}

impl Default for ProjectionInputs {
    fn default() -> Self {
        Self {
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default(),
            retirement_age: 65,
            current_salary: 60_000.0,
            maximum_salary: default_maximum_salary(),
            years_to_max_salary: default_years_to_max(),
            expected_yield: default_expected_yield(),
            personal_contribution_ranges: default_personal_ranges(),
            employer_contributions: default_employer_ranges(),
            current_pension_value: 0.0,
            current_value_date: None,
            has_extra_period: false,
            bonus_type: BonusMode::Percentage,
            bonus_percentage: 0.0,
            bonus_fixed: 0.0,
            coordination_fees: default_coordination_fees(),
            occupation_levels: default_occupation_levels(),
        }
    }
}

impl ProjectionInputs {
    /// First projected date: the as-of date, or the default start age
    pub fn start_date(&self) -> Option<NaiveDate> {
        match self.current_value_date {
            Some(date) => Some(date),
            None => add_years(self.birth_date, DEFAULT_START_AGE),
        }
    }

    /// Date the configured retirement age is reached
    pub fn retirement_date(&self) -> Option<NaiveDate> {
        add_years(self.birth_date, self.retirement_age)
    }

    pub fn bonus(&self) -> BonusConfig {
        BonusConfig {
            has_extra_period: self.has_extra_period,
            mode: self.bonus_type,
            percentage: self.bonus_percentage,
            fixed: self.bonus_fixed,
        }
    }
}

/// The live session profile: current inputs plus saved plans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PensionProfile {
    #[serde(flatten)]
    pub inputs: ProjectionInputs,

    #[serde(default)]
    pub pension_plans: PlanBook,

    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for PensionProfile {
    fn default() -> Self {
        Self {
            inputs: ProjectionInputs::default(),
            pension_plans: PlanBook::default(),
            language: default_language(),
        }
    }
}

impl PensionProfile {
    /// Default profile with the account value dated `today`
    pub fn new(today: NaiveDate) -> Self {
        let mut profile = Self::default();
        profile.inputs.current_value_date = Some(today);
        profile
    }
}
