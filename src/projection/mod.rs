//! Second-pillar growth projection for a single contribution option

mod state;
mod engine;
mod cashflows;
pub mod salary;

pub use state::{ProjectionState, whole_years_between, add_years};
pub use engine::{GrowthEngine, ProjectionConfig};
pub use cashflows::{SimulationRow, Projection, ProjectionMetrics, write_projections_csv};
pub use salary::{BonusMode, BonusConfig, project_salary, apply_bonus};

// ============================================================================
// Projection Defaults
// ============================================================================
// When the profile has no as-of date for its account value, the projection
// starts at this age.

/// Age at which a projection starts when no as-of date is given
pub const DEFAULT_START_AGE: u32 = 18;

/// Step size of a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    /// One step per year, yield compounded yearly
    #[default]
    Yearly,
    /// One step per month, yield compounded monthly
    Monthly,
}

impl Granularity {
    pub fn months_per_step(&self) -> u32 {
        match self {
            Granularity::Yearly => 12,
            Granularity::Monthly => 1,
        }
    }

    /// Yield per step for an annual yield given in percent
    pub fn period_yield(&self, annual_yield_pct: f64) -> f64 {
        let annual = annual_yield_pct / 100.0;
        match self {
            Granularity::Yearly => annual,
            Granularity::Monthly => (1.0 + annual).powf(1.0 / 12.0) - 1.0,
        }
    }
}
