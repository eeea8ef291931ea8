//! First-pillar tables: minimum contribution thresholds, average income
//! references and payout-rate bands

use serde::{Deserialize, Serialize};

use super::contributions::YearAmount;
use super::schedule::{first_match, Band, PAYOUT_BAND_UPPER};

/// Contribution years needed for a full first-pillar pension
pub const DEFAULT_REQUIRED_YEARS: u32 = 45;

/// First calendar year counted, relative to the birth year
pub const FIRST_CONTRIBUTION_AGE: i32 = 21;

/// Monthly pension for an average income falling in `[income_from, income_to]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoutRateBand {
    pub income_from: f64,
    pub income_to: f64,
    pub monthly_amount: f64,
}

impl PayoutRateBand {
    pub fn new(income_from: f64, income_to: f64, monthly_amount: f64) -> Self {
        Self { income_from, income_to, monthly_amount }
    }
}

impl Band for PayoutRateBand {
    type Key = f64;
    fn bounds(&self) -> (f64, f64) {
        (self.income_from, self.income_to)
    }
}

/// Monthly pension for an average income (first matching band, 0 if none)
pub fn payout_for_income(income: f64, bands: &[PayoutRateBand]) -> f64 {
    first_match(bands, income, PAYOUT_BAND_UPPER)
        .map(|band| band.monthly_amount)
        .unwrap_or(0.0)
}

/// Minimum yearly income for a year to count as a contribution year
pub fn default_minimum_contributions() -> Vec<YearAmount> {
    vec![
        YearAmount::new(1970, 1_500.0),
        YearAmount::new(2000, 2_300.0),
        YearAmount::new(2020, 2_390.0),
        YearAmount::new(2025, 2_520.0),
    ]
}

/// Average income at which the maximum pension is reached
pub fn default_average_income_references() -> Vec<YearAmount> {
    vec![
        YearAmount::new(2000, 74_160.0),
        YearAmount::new(2020, 85_320.0),
        YearAmount::new(2023, 88_200.0),
        YearAmount::new(2025, 90_720.0),
    ]
}

/// Default payout table
///
/// The top band is listed first: bands share their endpoints and the first
/// match wins, so the reference income itself resolves to the maximum.
pub fn default_payout_bands() -> Vec<PayoutRateBand> {
    vec![
        PayoutRateBand::new(90_720.0, f64::MAX, 2_520.0),
        PayoutRateBand::new(0.0, 15_120.0, 1_260.0),
        PayoutRateBand::new(15_120.0, 27_720.0, 1_470.0),
        PayoutRateBand::new(27_720.0, 40_320.0, 1_680.0),
        PayoutRateBand::new(40_320.0, 52_920.0, 1_890.0),
        PayoutRateBand::new(52_920.0, 65_520.0, 2_100.0),
        PayoutRateBand::new(65_520.0, 78_120.0, 2_310.0),
        PayoutRateBand::new(78_120.0, 90_720.0, 2_415.0),
    ]
}
