//! Pension projection - retirement savings projections for a funded account
//! (second pillar) and a flat government pension (first pillar)
//!
//! This library provides:
//! - Piecewise schedule resolution by year and by age range
//! - Salary projection with occupation level, extra period and bonus
//! - Yearly and monthly fund growth projections per contribution option
//! - First-pillar pension estimates from an income history
//! - Profile persistence and named plan snapshots
//! - Side-by-side comparison of options and plans

pub mod error;
pub mod assumptions;
pub mod profile;
pub mod projection;
pub mod first_pillar;
pub mod scenario;

// Re-export commonly used types
pub use error::{ProjectionError, ProfileError, PlanError, FirstPillarError};
pub use assumptions::{ContributionRange, EmployerRange, YearAmount, YearPercentage, PayoutRateBand};
pub use profile::{PensionProfile, ProjectionInputs, BonusMode, Session};
pub use projection::{GrowthEngine, ProjectionConfig, Granularity, Projection, SimulationRow};
pub use first_pillar::{FirstPillarProfile, FirstPillarResult, calculate_first_pillar};
pub use scenario::ScenarioRunner;
