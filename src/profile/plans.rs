//! Named plan snapshots

use std::collections::BTreeMap;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

use super::data::ProjectionInputs;

/// Saved plans keyed by name
///
/// A plan is a deep copy of the projection inputs at the time it was saved.
/// It never follows later edits of the live profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanBook {
    plans: BTreeMap<String, ProjectionInputs>,
}

impl PlanBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a snapshot of `inputs` under `name`
    pub fn create(&mut self, name: &str, inputs: &ProjectionInputs) -> Result<(), PlanError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlanError::EmptyName);
        }
        if self.plans.contains_key(name) {
            return Err(PlanError::AlreadyExists(name.to_string()));
        }

        self.plans.insert(name.to_string(), inputs.clone());
        info!("Plan '{}' created", name);
        Ok(())
    }

    /// Copy a plan to `"<name> (copy)"`, returning the new name
    pub fn duplicate(&mut self, name: &str) -> Result<String, PlanError> {
        let plan = self
            .plans
            .get(name)
            .cloned()
            .ok_or_else(|| PlanError::NotFound(name.to_string()))?;

        let copy_name = format!("{} (copy)", name);
        if self.plans.contains_key(&copy_name) {
            return Err(PlanError::AlreadyExists(copy_name));
        }

        self.plans.insert(copy_name.clone(), plan);
        info!("Plan '{}' duplicated as '{}'", name, copy_name);
        Ok(copy_name)
    }

    /// Remove a plan, returning its snapshot
    pub fn delete(&mut self, name: &str) -> Result<ProjectionInputs, PlanError> {
        let plan = self
            .plans
            .remove(name)
            .ok_or_else(|| PlanError::NotFound(name.to_string()))?;
        info!("Plan '{}' deleted", name);
        Ok(plan)
    }

    pub fn get(&self, name: &str) -> Option<&ProjectionInputs> {
        self.plans.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plans.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProjectionInputs)> {
        self.plans.iter().map(|(name, plan)| (name.as_str(), plan))
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_reject_duplicates() {
        let mut book = PlanBook::new();
        let inputs = ProjectionInputs::default();

        book.create("Base", &inputs).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.create("Base", &inputs), Err(PlanError::AlreadyExists("Base".to_string())));
        assert_eq!(book.create("   ", &inputs), Err(PlanError::EmptyName));
    }

    #[test]
    fn test_snapshot_is_independent_of_live_inputs() {
        let mut book = PlanBook::new();
        let mut inputs = ProjectionInputs::default();
        book.create("Before raise", &inputs).unwrap();

        inputs.current_salary = 90_000.0;
        assert_eq!(book.get("Before raise").unwrap().current_salary, 60_000.0);
    }

    #[test]
    fn test_duplicate_and_delete() {
        let mut book = PlanBook::new();
        book.create("Base", &ProjectionInputs::default()).unwrap();

        let copy = book.duplicate("Base").unwrap();
        assert_eq!(copy, "Base (copy)");
        assert_eq!(book.get("Base"), book.get("Base (copy)"));
        assert_eq!(book.duplicate("Base"), Err(PlanError::AlreadyExists("Base (copy)".to_string())));

        book.delete("Base").unwrap();
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["Base (copy)"]);
        assert_eq!(book.delete("Base"), Err(PlanError::NotFound("Base".to_string())));
        assert_eq!(book.duplicate("Missing"), Err(PlanError::NotFound("Missing".to_string())));
    }
}
