//! Second-pillar contribution tables: personal and employer rates by age,
//! coordination fees and occupation levels by year

use serde::{Deserialize, Serialize};

use super::schedule::{first_match, resolve_by_year, Band, YearKeyed, AGE_RANGE_UPPER};

/// Number of parallel personal contribution options
pub const OPTION_COUNT: usize = 3;

/// Personal contribution percentages for an age range, one per option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionRange {
    pub age_from: u32,
    pub age_to: u32,
    /// Percentages for option 0, 1 and 2 (missing entries resolve to 0)
    pub options: Vec<f64>,
}

impl ContributionRange {
    pub fn new(age_from: u32, age_to: u32, options: [f64; OPTION_COUNT]) -> Self {
        Self { age_from, age_to, options: options.to_vec() }
    }
}

impl Band for ContributionRange {
    type Key = u32;
    fn bounds(&self) -> (u32, u32) {
        (self.age_from, self.age_to)
    }
}

/// Employer contribution percentage for an age range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployerRange {
    pub age_from: u32,
    pub age_to: u32,
    pub percentage: f64,
}

impl EmployerRange {
    pub fn new(age_from: u32, age_to: u32, percentage: f64) -> Self {
        Self { age_from, age_to, percentage }
    }
}

impl Band for EmployerRange {
    type Key = u32;
    fn bounds(&self) -> (u32, u32) {
        (self.age_from, self.age_to)
    }
}

/// An amount applying from `from_year` onward (coordination fees, minimum
/// contributions, average income references)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearAmount {
    pub from_year: i32,
    pub amount: f64,
}

impl YearAmount {
    pub fn new(from_year: i32, amount: f64) -> Self {
        Self { from_year, amount }
    }
}

impl YearKeyed for YearAmount {
    fn from_year(&self) -> i32 { self.from_year }
    fn value(&self) -> f64 { self.amount }
}

/// A percentage applying from `from_year` onward (occupation level)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearPercentage {
    pub from_year: i32,
    pub percentage: f64,
}

impl YearPercentage {
    pub fn new(from_year: i32, percentage: f64) -> Self {
        Self { from_year, percentage }
    }
}

impl YearKeyed for YearPercentage {
    fn from_year(&self) -> i32 { self.from_year }
    fn value(&self) -> f64 { self.percentage }
}

/// Personal contribution percentage for an attained age and option
///
/// Returns 0 when no range covers the age or the matching range has no entry
/// for the option. Only the first matching range is consulted.
pub fn personal_rate(age: u32, ranges: &[ContributionRange], option: usize) -> f64 {
    first_match(ranges, age, AGE_RANGE_UPPER)
        .and_then(|range| range.options.get(option).copied())
        .unwrap_or(0.0)
}

/// Employer contribution percentage for an attained age (0 if uncovered)
pub fn employer_rate(age: u32, ranges: &[EmployerRange]) -> f64 {
    first_match(ranges, age, AGE_RANGE_UPPER)
        .map(|range| range.percentage)
        .unwrap_or(0.0)
}

/// Annual coordination fee for a calendar year (0 before the first entry)
pub fn coordination_fee(year: i32, fees: &[YearAmount]) -> f64 {
    resolve_by_year(fees, year, 0.0)
}

/// Occupation level for a calendar year as a fraction (1.0 = full-time)
pub fn occupation_level(year: i32, levels: &[YearPercentage]) -> f64 {
    resolve_by_year(levels, year, 100.0) / 100.0
}

/// Default personal contribution ranges (low / mid / high)
pub fn default_personal_ranges() -> Vec<ContributionRange> {
    vec![
        ContributionRange::new(18, 25, [4.0, 6.0, 8.0]),
        ContributionRange::new(25, 35, [6.0, 7.0, 9.0]),
        ContributionRange::new(35, 50, [7.0, 9.0, 11.0]),
        ContributionRange::new(50, 65, [8.0, 10.0, 12.0]),
    ]
}

/// Default employer contribution ranges
pub fn default_employer_ranges() -> Vec<EmployerRange> {
    vec![
        EmployerRange::new(18, 25, 6.0),
        EmployerRange::new(25, 35, 9.0),
        EmployerRange::new(35, 45, 14.0),
        EmployerRange::new(45, 55, 18.0),
        EmployerRange::new(55, 65, 20.0),
    ]
}

/// Default coordination fee schedule
pub fn default_coordination_fees() -> Vec<YearAmount> {
    vec![YearAmount::new(2000, 25_725.0)]
}

/// Default occupation level schedule (full-time)
pub fn default_occupation_levels() -> Vec<YearPercentage> {
    vec![YearPercentage::new(2000, 100.0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_rate_by_option() {
        let ranges = default_personal_ranges();

        assert_eq!(personal_rate(18, &ranges, 0), 4.0);
        assert_eq!(personal_rate(24, &ranges, 2), 8.0);
        assert_eq!(personal_rate(25, &ranges, 1), 7.0);  // upper bound exclusive
        assert_eq!(personal_rate(64, &ranges, 2), 12.0);
        assert_eq!(personal_rate(65, &ranges, 0), 0.0);  // outside every range
        assert_eq!(personal_rate(17, &ranges, 0), 0.0);
    }

    #[test]
    fn test_personal_rate_missing_option() {
        let ranges = vec![ContributionRange { age_from: 18, age_to: 65, options: vec![5.0] }];
        assert_eq!(personal_rate(30, &ranges, 0), 5.0);
        assert_eq!(personal_rate(30, &ranges, 1), 0.0);
        assert_eq!(personal_rate(30, &ranges, 7), 0.0);
    }

    #[test]
    fn test_employer_rate() {
        let ranges = default_employer_ranges();
        assert_eq!(employer_rate(30, &ranges), 9.0);
        assert_eq!(employer_rate(45, &ranges), 18.0);
        assert_eq!(employer_rate(70, &ranges), 0.0);
    }

    #[test]
    fn test_occupation_level_defaults_to_full_time() {
        assert_eq!(occupation_level(2020, &[]), 1.0);

        let levels = vec![YearPercentage::new(2000, 100.0), YearPercentage::new(2030, 80.0)];
        assert_eq!(occupation_level(2029, &levels), 1.0);
        assert_eq!(occupation_level(2030, &levels), 0.8);
    }

    #[test]
    fn test_coordination_fee() {
        let fees = vec![YearAmount::new(2000, 25_725.0), YearAmount::new(2025, 26_460.0)];
        assert_eq!(coordination_fee(1999, &fees), 0.0);
        assert_eq!(coordination_fee(2024, &fees), 25_725.0);
        assert_eq!(coordination_fee(2040, &fees), 26_460.0);
    }
}
