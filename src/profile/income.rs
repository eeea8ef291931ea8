//! Synthesized first-pillar income history
//!
//! When no income history is supplied, yearly incomes are derived from the
//! second-pillar salary parameters: projected salary from `today`, scaled by
//! the occupation level and including extra period and bonus.

use chrono::{Datelike, NaiveDate};

use crate::assumptions::first_pillar::FIRST_CONTRIBUTION_AGE;
use crate::assumptions::occupation_level;
use crate::error::ProjectionError;
use crate::first_pillar::{FirstPillarProfile, IncomeOverride};
use crate::projection::project_salary;

use super::data::ProjectionInputs;

/// One income override per year from `first_year` to the retirement year
///
/// Years before `today` use the current salary.
pub fn synthesize_income_history(
    inputs: &ProjectionInputs,
    first_year: i32,
    today: NaiveDate,
) -> Result<Vec<IncomeOverride>, ProjectionError> {
    let retirement_year = inputs.birth_date.year() + inputs.retirement_age as i32;
    let bonus = inputs.bonus();

    (first_year..=retirement_year)
        .map(|year| {
            let years_elapsed = (year - today.year()).max(0) as u32;
            let base = project_salary(
                inputs.current_salary,
                inputs.maximum_salary,
                inputs.years_to_max_salary,
                years_elapsed,
            )?;
            let income = bonus.yearly_salary(base * occupation_level(year, &inputs.occupation_levels));
            Ok::<_, ProjectionError>(IncomeOverride::new(year, year, income))
        })
        .collect()
}

/// First-pillar profile built from second-pillar inputs
///
/// Uses the default first-pillar tables and a synthesized income history
/// starting at age 21.
pub fn first_pillar_from_inputs(
    inputs: &ProjectionInputs,
    today: NaiveDate,
) -> Result<FirstPillarProfile, ProjectionError> {
    let first_year = inputs.birth_date.year() + FIRST_CONTRIBUTION_AGE;
    Ok(FirstPillarProfile {
        birth_date: inputs.birth_date,
        retirement_age: inputs.retirement_age,
        income_overrides: synthesize_income_history(inputs, first_year, today)?,
        ..FirstPillarProfile::default()
    })
}
