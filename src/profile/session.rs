//! In-memory session state owned by a single caller

use chrono::NaiveDate;
use log::{info, warn};

use crate::error::{PlanError, ProfileError};

use super::data::PensionProfile;
use super::loader::{parse_profile, profile_to_json};

/// The live profile of one session
///
/// Mutated serially between projection runs. Imports replace the whole
/// profile, or leave it untouched when rejected.
#[derive(Debug, Clone, Default)]
pub struct Session {
    profile: PensionProfile,
}

impl Session {
    /// Start a session with the default profile, valued as of `today`
    pub fn new(today: NaiveDate) -> Self {
        Self { profile: PensionProfile::new(today) }
    }

    pub fn with_profile(profile: PensionProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &PensionProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut PensionProfile {
        &mut self.profile
    }

    /// Replace the profile with an imported one
    pub fn import_json(&mut self, json: &str) -> Result<(), ProfileError> {
        match parse_profile(json) {
            Ok(profile) => {
                info!("Imported profile with {} plans", profile.pension_plans.len());
                self.profile = profile;
                Ok(())
            }
            Err(err) => {
                warn!("Profile import rejected: {}", err);
                Err(err)
            }
        }
    }

    pub fn export_json(&self) -> Result<String, ProfileError> {
        profile_to_json(&self.profile)
    }

    /// Save the current inputs as a named plan
    pub fn save_plan(&mut self, name: &str) -> Result<(), PlanError> {
        self.profile.pension_plans.create(name, &self.profile.inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_rejected_import_leaves_state_unchanged() {
        let mut session = Session::new(today());
        session.profile_mut().inputs.current_salary = 75_000.0;
        let before = session.profile().clone();

        let json = r#"{
            "birth_date": "1980-01-01",
            "retirement_age": 60,
            "current_salary": 1,
            "personal_contribution_ranges": []
        }"#;
        assert!(matches!(session.import_json(json), Err(ProfileError::MissingKeys(_))));
        assert_eq!(session.profile(), &before);

        assert!(session.import_json("not json").is_err());
        assert_eq!(session.profile(), &before);
    }

    #[test]
    fn test_import_replaces_profile() {
        let mut session = Session::new(today());
        session.save_plan("Old").unwrap();

        let json = r#"{
            "birth_date": "1980-01-01",
            "retirement_age": 60,
            "current_salary": 95000,
            "personal_contribution_ranges": [],
            "employer_contributions": []
        }"#;
        session.import_json(json).unwrap();

        assert_eq!(session.profile().inputs.current_salary, 95_000.0);
        assert!(session.profile().pension_plans.is_empty());
    }

    #[test]
    fn test_export_then_import_round_trip() {
        let mut session = Session::new(today());
        session.save_plan("Base").unwrap();
        let json = session.export_json().unwrap();

        let mut other = Session::default();
        other.import_json(&json).unwrap();
        assert_eq!(other.profile(), session.profile());
    }
}
