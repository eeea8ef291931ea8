//! Second-pillar growth engine
//!
//! Walks from the start date to the retirement date (inclusive) in yearly or
//! monthly steps. Each step resolves the salary, occupation level,
//! coordination fee and contribution rates that apply at that date, then
//! compounds the account:
//!
//! `fund = fund * (1 + period_yield) + personal + employer`
//!
//! Salary growth is measured from `today`, not from the start date, so the
//! same inputs projected on a different day give a shifted salary curve.

use chrono::{Datelike, Local, NaiveDate};
use log::debug;

use crate::assumptions::{
    coordination_fee, employer_rate, occupation_level, personal_rate, OPTION_COUNT,
};
use crate::error::ProjectionError;
use crate::profile::ProjectionInputs;

use super::cashflows::{Projection, SimulationRow};
use super::salary::{project_salary, BonusConfig};
use super::state::ProjectionState;
use super::Granularity;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Yearly or monthly steps
    pub granularity: Granularity,

    /// Reference date salary growth is measured from
    pub today: NaiveDate,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            granularity: Granularity::Yearly,
            today: Local::now().date_naive(),
        }
    }
}

impl ProjectionConfig {
    pub fn yearly(today: NaiveDate) -> Self {
        Self { granularity: Granularity::Yearly, today }
    }

    pub fn monthly(today: NaiveDate) -> Self {
        Self { granularity: Granularity::Monthly, today }
    }
}

/// Salary and contribution figures for one period
struct PeriodFlows {
    salary: f64,
    insurable_salary: f64,
    personal: f64,
    employer: f64,
}

impl PeriodFlows {
    fn compute(salary: f64, fee: f64, personal_pct: f64, employer_pct: f64) -> Self {
        let insurable_salary = (salary - fee).max(0.0);
        Self {
            salary,
            insurable_salary,
            personal: insurable_salary * personal_pct / 100.0,
            employer: insurable_salary * employer_pct / 100.0,
        }
    }

    fn total(&self) -> f64 {
        self.personal + self.employer
    }
}

/// Engine projecting one contribution option at a time
#[derive(Debug, Clone)]
pub struct GrowthEngine {
    config: ProjectionConfig,
}

impl GrowthEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Same engine with a different step size
    pub fn with_granularity(&self, granularity: Granularity) -> Self {
        Self {
            config: ProjectionConfig { granularity, ..self.config.clone() },
        }
    }

    /// Project the account for personal contribution option `option` (0, 1 or 2)
    ///
    /// A start date at or after the retirement date gives an empty projection.
    pub fn project(
        &self,
        inputs: &ProjectionInputs,
        option: usize,
    ) -> Result<Projection, ProjectionError> {
        if option >= OPTION_COUNT {
            return Err(ProjectionError::InvalidOption(option));
        }

        let granularity = self.config.granularity;
        let mut projection = Projection::empty(option, granularity);

        let (Some(start_date), Some(retirement_date)) =
            (inputs.start_date(), inputs.retirement_date())
        else {
            return Ok(projection);
        };
        if start_date >= retirement_date {
            debug!("Option {}: start {} is not before retirement {}", option, start_date, retirement_date);
            return Ok(projection);
        }

        let bonus = inputs.bonus();
        let period_yield = granularity.period_yield(inputs.expected_yield);
        let mut state = ProjectionState::new(start_date, inputs.current_pension_value);

        while state.current_date <= retirement_date {
            self.project_step(inputs, option, &bonus, period_yield, &mut state, &mut projection.rows)?;
            if !state.advance(granularity) {
                break;
            }
        }

        debug!(
            "Option {}: {} rows, final value {:.2}",
            option,
            projection.rows.len(),
            state.fund_value
        );

        Ok(projection)
    }

    /// Compute the row(s) for the current step and compound the account
    fn project_step(
        &self,
        inputs: &ProjectionInputs,
        option: usize,
        bonus: &BonusConfig,
        period_yield: f64,
        state: &mut ProjectionState,
        rows: &mut Vec<SimulationRow>,
    ) -> Result<(), ProjectionError> {
        let date = state.current_date;
        let year = date.year();
        let age = state.attained_age(inputs.birth_date);

        let base_salary = project_salary(
            inputs.current_salary,
            inputs.maximum_salary,
            inputs.years_to_max_salary,
            state.years_from(self.config.today),
        )?;
        let adjusted_base = base_salary * occupation_level(year, &inputs.occupation_levels);

        let personal_pct = personal_rate(age, &inputs.personal_contribution_ranges, option);
        let employer_pct = employer_rate(age, &inputs.employer_contributions);
        let yearly_fee = coordination_fee(year, &inputs.coordination_fees);

        let row = |flows: &PeriodFlows, fund_value: f64, is_extra_period: bool| SimulationRow {
            date,
            year,
            age,
            salary: flows.salary,
            insurable_salary: flows.insurable_salary,
            personal_contribution: flows.personal,
            employer_contribution: flows.employer,
            total_contribution: flows.total(),
            fund_value,
            is_extra_period,
        };

        match self.config.granularity {
            Granularity::Yearly => {
                let salary = bonus.yearly_salary(adjusted_base);
                let flows = PeriodFlows::compute(salary, yearly_fee, personal_pct, employer_pct);
                let fund_value = state.compound(period_yield, flows.total());
                rows.push(row(&flows, fund_value, false));
            }
            Granularity::Monthly => {
                // Bonus is spread evenly over the twelve regular months
                let monthly_base = adjusted_base / 12.0;
                let monthly_salary = monthly_base + bonus.bonus_amount(adjusted_base) / 12.0;
                let monthly_fee = yearly_fee / 12.0;

                let flows = PeriodFlows::compute(monthly_salary, monthly_fee, personal_pct, employer_pct);
                let fund_value = state.compound(period_yield, flows.total());
                rows.push(row(&flows, fund_value, false));

                // The extra period carries the base monthly salary only
                if bonus.has_extra_period && date.month() == 12 {
                    let extra = PeriodFlows::compute(monthly_base, monthly_fee, personal_pct, employer_pct);
                    let fund_value = state.compound(period_yield, extra.total());
                    rows.push(row(&extra, fund_value, true));
                }
            }
        }

        Ok(())
    }
}
