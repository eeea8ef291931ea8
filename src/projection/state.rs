//! Projection state tracking and calendar arithmetic

use chrono::{Datelike, Months, NaiveDate};

use super::Granularity;

/// Whole years elapsed from `from` to `to`, truncated toward zero
///
/// Negative when `to` precedes `from`.
pub fn whole_years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    if to < from {
        return -whole_years_between(to, from);
    }
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}

/// Add whole years, clamping Feb 29 to Feb 28 in non-leap years
pub fn add_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(years.checked_mul(12)?))
}

/// State of the account at a point in time during projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Date of the current step
    pub current_date: NaiveDate,

    /// Steps taken so far (0 at the first step)
    pub step: u32,

    /// Account value after the most recent compounding
    pub fund_value: f64,
}

impl ProjectionState {
    /// Initialize state at the projection start
    pub fn new(start_date: NaiveDate, start_value: f64) -> Self {
        Self {
            current_date: start_date,
            step: 0,
            fund_value: start_value,
        }
    }

    /// Whole years of age at the current date
    pub fn attained_age(&self, birth_date: NaiveDate) -> u32 {
        whole_years_between(birth_date, self.current_date).max(0) as u32
    }

    /// Whole years from `today` to the current date, never negative
    pub fn years_from(&self, today: NaiveDate) -> u32 {
        whole_years_between(today, self.current_date).max(0) as u32
    }

    /// Compound one period and add the period's contribution
    pub fn compound(&mut self, period_yield: f64, contribution: f64) -> f64 {
        self.fund_value = self.fund_value * (1.0 + period_yield) + contribution;
        self.fund_value
    }

    /// Advance to the next step. Returns false once the calendar overflows.
    ///
    /// Steps accumulate from the previous date, so a start on the 31st
    /// drifts to the 28th after February, as repeated month addition does.
    pub fn advance(&mut self, granularity: Granularity) -> bool {
        match self.current_date.checked_add_months(Months::new(granularity.months_per_step())) {
            Some(next) => {
                self.current_date = next;
                self.step += 1;
                true
            }
            None => false,
        }
    }
}
