//! Profile data structures, session state and persistence

mod data;
mod session;
pub mod plans;
pub mod loader;
pub mod income;

pub use data::{ProjectionInputs, PensionProfile};
pub use session::Session;
pub use plans::PlanBook;
pub use loader::{parse_profile, profile_to_json, load_profile, save_profile, load_income_overrides, REQUIRED_KEYS};
pub use income::{synthesize_income_history, first_pillar_from_inputs};
pub use crate::projection::BonusMode;
