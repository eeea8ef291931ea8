//! Profile import/export and income history loading

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::ProfileError;
use crate::first_pillar::IncomeOverride;

use super::data::PensionProfile;

/// Keys an imported profile must contain
pub const REQUIRED_KEYS: [&str; 5] = [
    "birth_date",
    "retirement_age",
    "current_salary",
    "personal_contribution_ranges",
    "employer_contributions",
];

/// Parse a profile from JSON, rejecting it if any required key is missing
pub fn parse_profile(json: &str) -> Result<PensionProfile, ProfileError> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    let missing: Vec<String> = {
        let object = value.as_object().ok_or(ProfileError::NotAnObject)?;
        REQUIRED_KEYS
            .iter()
            .filter(|key| !object.contains_key(**key))
            .map(|key| key.to_string())
            .collect()
    };
    if !missing.is_empty() {
        return Err(ProfileError::MissingKeys(missing));
    }

    Ok(serde_json::from_value(value)?)
}

/// Serialize the full profile, dates as `YYYY-MM-DD`
pub fn profile_to_json(profile: &PensionProfile) -> Result<String, ProfileError> {
    Ok(serde_json::to_string_pretty(profile)?)
}

/// Load a profile from a JSON file
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<PensionProfile, ProfileError> {
    let text = fs::read_to_string(path)?;
    parse_profile(&text)
}

/// Write a profile to a JSON file
pub fn save_profile<P: AsRef<Path>>(path: P, profile: &PensionProfile) -> Result<(), ProfileError> {
    fs::write(path, profile_to_json(profile)?)?;
    Ok(())
}

/// Load income override ranges from CSV (`year_from,year_to,amount`)
pub fn load_income_overrides<P: AsRef<Path>>(path: P) -> Result<Vec<IncomeOverride>, ProfileError> {
    let file = fs::File::open(path)?;
    load_income_overrides_from_reader(file)
}

/// Load income override ranges from any reader
pub fn load_income_overrides_from_reader<R: Read>(reader: R) -> Result<Vec<IncomeOverride>, ProfileError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut overrides = Vec::new();
    for record in csv_reader.deserialize() {
        let entry: IncomeOverride = record?;
        overrides.push(entry);
    }
    Ok(overrides)
}
