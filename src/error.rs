//! Error types for projections, profile persistence and plan management

use thiserror::Error;

/// Errors raised while projecting a second-pillar account
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("current salary must be positive when projecting growth toward a maximum (got {current})")]
    NonPositiveSalary { current: f64 },

    #[error("contribution option {0} is out of range (expected 0, 1 or 2)")]
    InvalidOption(usize),
}

/// Errors raised while importing or exporting a profile
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile is missing required keys: {}", .0.join(", "))]
    MissingKeys(Vec<String>),

    #[error("profile must be a JSON object")]
    NotAnObject,

    #[error("invalid profile JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors raised by plan management
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("plan name must not be empty")]
    EmptyName,

    #[error("a plan named '{0}' already exists")]
    AlreadyExists(String),

    #[error("no plan named '{0}'")]
    NotFound(String),
}

/// Errors raised by the first-pillar calculation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FirstPillarError {
    #[error("retirement offset {0} is outside -5..=5")]
    OffsetOutOfRange(i32),
}
