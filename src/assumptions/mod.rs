//! Assumption tables and the schedule resolver shared by both pillars

pub mod schedule;
pub mod contributions;
pub mod first_pillar;

pub use schedule::{UpperBound, Band, YearKeyed, first_match, resolve_by_year, resolve_by_year_opt};
pub use contributions::{
    ContributionRange, EmployerRange, YearAmount, YearPercentage, OPTION_COUNT,
    personal_rate, employer_rate, coordination_fee, occupation_level,
};
pub use first_pillar::{PayoutRateBand, payout_for_income, DEFAULT_REQUIRED_YEARS};
