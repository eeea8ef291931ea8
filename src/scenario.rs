//! Scenario aggregation: the three contribution options side by side, for the
//! live profile and for saved plans

use chrono::NaiveDate;
use log::warn;
use rayon::prelude::*;

use crate::assumptions::OPTION_COUNT;
use crate::error::PlanError;
use crate::profile::{PensionProfile, ProjectionInputs};
use crate::projection::{Granularity, GrowthEngine, Projection, ProjectionConfig, ProjectionMetrics};

/// Label used for the live profile in comparisons
pub const CURRENT_SETTINGS: &str = "Current settings";

/// One (plan, option) projection
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub plan: String,
    pub projection: Projection,
}

impl ScenarioResult {
    pub fn option(&self) -> usize {
        self.projection.option
    }

    pub fn metrics(&self) -> Option<ProjectionMetrics> {
        self.projection.metrics()
    }
}

/// Runs the growth engine across options and plans
pub struct ScenarioRunner {
    engine: GrowthEngine,
}

impl ScenarioRunner {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { engine: GrowthEngine::new(config) }
    }

    pub fn engine(&self) -> &GrowthEngine {
        &self.engine
    }

    /// Project all three options, dropping empty or failed ones
    ///
    /// A failing option is logged and skipped; it never aborts the others.
    pub fn run_options(&self, inputs: &ProjectionInputs) -> Vec<Projection> {
        run_all_options(&self.engine, inputs, "")
    }

    /// Project every option of every named plan, in the order given
    pub fn compare_plans(&self, plans: &[(String, &ProjectionInputs)]) -> Vec<ScenarioResult> {
        // Plan comparisons always use yearly steps
        let engine = self.engine.with_granularity(Granularity::Yearly);

        plans
            .par_iter()
            .map(|(name, inputs)| {
                run_all_options(&engine, inputs, name)
                    .into_iter()
                    .map(|projection| ScenarioResult { plan: name.clone(), projection })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    /// Compare saved plans of a profile, optionally with the live settings last
    pub fn compare_profile(
        &self,
        profile: &PensionProfile,
        plan_names: &[String],
        include_current: bool,
    ) -> Result<Vec<ScenarioResult>, PlanError> {
        let mut plans = Vec::with_capacity(plan_names.len() + 1);
        for name in plan_names {
            let inputs = profile
                .pension_plans
                .get(name)
                .ok_or_else(|| PlanError::NotFound(name.clone()))?;
            plans.push((name.clone(), inputs));
        }
        if include_current {
            plans.push((CURRENT_SETTINGS.to_string(), &profile.inputs));
        }

        Ok(self.compare_plans(&plans))
    }

    /// Fund value at `date` for each option, from monthly projections
    ///
    /// Options that cannot be projected report `None`.
    pub fn fund_values_at(&self, inputs: &ProjectionInputs, date: NaiveDate) -> Vec<(usize, Option<f64>)> {
        let engine = self.engine.with_granularity(Granularity::Monthly);

        (0..OPTION_COUNT)
            .map(|option| {
                let value = engine
                    .project(inputs, option)
                    .ok()
                    .and_then(|projection| projection.value_at(date));
                (option, value)
            })
            .collect()
    }
}

fn run_all_options(engine: &GrowthEngine, inputs: &ProjectionInputs, plan: &str) -> Vec<Projection> {
    let results: Vec<_> = (0..OPTION_COUNT)
        .into_par_iter()
        .map(|option| (option, engine.project(inputs, option)))
        .collect();

    results
        .into_iter()
        .filter_map(|(option, result)| match result {
            Ok(projection) if projection.is_empty() => {
                warn!("Plan '{}' option {}: nothing to project", plan, option + 1);
                None
            }
            Ok(projection) => Some(projection),
            Err(err) => {
                warn!("Plan '{}' option {} failed: {}", plan, option + 1, err);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn runner() -> ScenarioRunner {
        ScenarioRunner::new(ProjectionConfig::yearly(date(2025, 1, 1)))
    }

    fn profile() -> PensionProfile {
        PensionProfile::new(date(2025, 1, 1))
    }

    #[test]
    fn test_three_options_in_order() {
        let projections = runner().run_options(&profile().inputs);

        assert_eq!(projections.len(), 3);
        let options: Vec<usize> = projections.iter().map(|p| p.option).collect();
        assert_eq!(options, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_scenarios_dropped() {
        let mut inputs = profile().inputs;
        inputs.current_value_date = Some(date(2060, 1, 1));
        assert!(runner().run_options(&inputs).is_empty());
    }

    #[test]
    fn test_failed_scenarios_dropped() {
        let mut inputs = profile().inputs;
        inputs.current_salary = 0.0;
        assert!(runner().run_options(&inputs).is_empty());
    }

    #[test]
    fn test_compare_profile_with_current_settings() {
        let mut profile = profile();
        profile.pension_plans.create("Base", &profile.inputs.clone()).unwrap();

        let mut richer = profile.inputs.clone();
        richer.current_salary = 90_000.0;
        richer.maximum_salary = 150_000.0;
        profile.pension_plans.create("Richer", &richer).unwrap();

        let names = vec!["Richer".to_string(), "Base".to_string()];
        let results = runner().compare_profile(&profile, &names, true).unwrap();

        assert_eq!(results.len(), 9);
        let plans: Vec<&str> = results.iter().step_by(3).map(|r| r.plan.as_str()).collect();
        assert_eq!(plans, vec!["Richer", "Base", CURRENT_SETTINGS]);

        let final_of = |plan: &str, option: usize| {
            results
                .iter()
                .find(|r| r.plan == plan && r.option() == option)
                .and_then(|r| r.metrics())
                .map(|m| m.final_value)
                .unwrap()
        };
        assert!(final_of("Richer", 1) > final_of("Base", 1));
        assert_eq!(final_of("Base", 2), final_of(CURRENT_SETTINGS, 2));
    }

    #[test]
    fn test_compare_profile_unknown_plan() {
        let names = vec!["Missing".to_string()];
        let err = runner().compare_profile(&profile(), &names, false).unwrap_err();
        assert_eq!(err, PlanError::NotFound("Missing".to_string()));
    }

    #[test]
    fn test_plan_comparison_is_yearly() {
        let runner = ScenarioRunner::new(ProjectionConfig::monthly(date(2025, 1, 1)));
        let profile = profile();
        let results = runner.compare_plans(&[("Live".to_string(), &profile.inputs)]);
        assert!(results.iter().all(|r| r.projection.granularity == Granularity::Yearly));
    }

    #[test]
    fn test_fund_values_at() {
        let profile = profile();
        let values = runner().fund_values_at(&profile.inputs, date(2030, 6, 1));

        assert_eq!(values.len(), 3);
        let amounts: Vec<f64> = values.iter().map(|(_, v)| v.unwrap()).collect();
        assert!(amounts[0] > 0.0);
        assert!(amounts[0] < amounts[1] && amounts[1] < amounts[2]);
    }
}
