//! First-pillar pension calculation

use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::assumptions::first_pillar::FIRST_CONTRIBUTION_AGE;
use crate::assumptions::schedule::{first_match, resolve_by_year, resolve_by_year_opt, INCOME_RANGE_UPPER};
use crate::assumptions::{payout_for_income, PayoutRateBand, YearAmount};
use crate::error::FirstPillarError;

use super::{
    ContributionYear, FirstPillarResult, IncomeOverride, EARLY_RETIREMENT_REDUCTION,
    LATE_RETIREMENT_INCREASE, MAX_RETIREMENT_OFFSET,
};

/// Pension factor for retiring `offset` years early (negative) or late
pub fn retirement_factor(offset: i32) -> f64 {
    if offset < 0 {
        1.0 - EARLY_RETIREMENT_REDUCTION * offset.unsigned_abs() as f64
    } else if offset > 0 {
        1.0 + LATE_RETIREMENT_INCREASE * offset as f64
    } else {
        1.0
    }
}

/// Estimate the monthly first-pillar pension
///
/// A history with no valid contribution years is not an error: it gives a
/// contribution percentage of 0 and a pension of 0.
#[allow(clippy::too_many_arguments)]
pub fn calculate_first_pillar(
    birth_date: NaiveDate,
    retirement_age: u32,
    offset: i32,
    income_overrides: &[IncomeOverride],
    minimum_contributions: &[YearAmount],
    average_incomes: &[YearAmount],
    payout_bands: &[PayoutRateBand],
    required_years: u32,
) -> Result<FirstPillarResult, FirstPillarError> {
    if offset.abs() > MAX_RETIREMENT_OFFSET {
        return Err(FirstPillarError::OffsetOutOfRange(offset));
    }

    let birth_year = birth_date.year();
    let first_year = birth_year + FIRST_CONTRIBUTION_AGE;
    let retirement_year = birth_year + retirement_age as i32 + offset;

    let mut years = Vec::new();
    let mut income_sum = 0.0;
    let mut valid_years = 0u32;

    for year in first_year..=retirement_year {
        let income = first_match(income_overrides, year, INCOME_RANGE_UPPER)
            .map(|range| range.amount)
            .unwrap_or(0.0);
        let threshold = resolve_by_year(minimum_contributions, year, 0.0);
        let is_penalty = income < threshold;

        if !is_penalty {
            income_sum += income;
            valid_years += 1;
        }
        years.push(ContributionYear { year, income, threshold, is_penalty });
    }

    let penalty_years = years.iter().filter(|y| y.is_penalty).count() as u32;
    let average_income = income_sum / valid_years.max(1) as f64;

    let reference_income = resolve_by_year_opt(average_incomes, retirement_year);
    let capped_average_income = match reference_income {
        Some(reference) => average_income.min(reference),
        None => average_income,
    };

    let contribution_percentage = (valid_years as f64 / required_years.max(1) as f64).min(1.0);

    let base_monthly_pension = payout_for_income(capped_average_income, payout_bands);
    let factor = retirement_factor(offset);
    let monthly_pension = base_monthly_pension * contribution_percentage * factor;

    let min_monthly_pension = payout_for_income(0.0, payout_bands);
    let max_monthly_pension = match reference_income {
        Some(reference) => payout_for_income(reference, payout_bands),
        None => payout_bands.iter().map(|band| band.monthly_amount).fold(0.0, f64::max),
    };
    let percent_of_max = if max_monthly_pension > 0.0 {
        monthly_pension / max_monthly_pension * 100.0
    } else {
        0.0
    };

    debug!(
        "First pillar {}-{}: {} valid / {} penalty years, average income {:.2}, pension {:.2}",
        first_year, retirement_year, valid_years, penalty_years, average_income, monthly_pension
    );

    Ok(FirstPillarResult {
        retirement_year,
        years,
        valid_years,
        penalty_years,
        average_income,
        capped_average_income,
        contribution_percentage,
        base_monthly_pension,
        retirement_factor: factor,
        monthly_pension,
        yearly_pension: monthly_pension * 12.0,
        min_monthly_pension,
        max_monthly_pension,
        percent_of_max,
    })
}
