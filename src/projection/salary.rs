//! Salary projection and bonus model

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// Periods per year when an extra ("13th") payment is made
const EXTRA_PERIOD_FACTOR: f64 = 13.0 / 12.0;

/// How the yearly bonus is determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusMode {
    /// No bonus
    #[serde(rename = "no_bonus", alias = "none")]
    None,
    /// Percentage of the base salary
    #[default]
    Percentage,
    /// Fixed yearly amount
    Fixed,
}

/// Bonus configuration applied on top of the (occupation-scaled) base salary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonusConfig {
    pub has_extra_period: bool,
    pub mode: BonusMode,
    pub percentage: f64,
    pub fixed: f64,
}

impl BonusConfig {
    /// Yearly bonus amount for a base salary (excludes the extra period)
    pub fn bonus_amount(&self, base: f64) -> f64 {
        match self.mode {
            BonusMode::Percentage if self.percentage > 0.0 => base * self.percentage / 100.0,
            BonusMode::Fixed if self.fixed > 0.0 => self.fixed,
            _ => 0.0,
        }
    }

    /// Total yearly salary: base, scaled by 13/12 with an extra period, plus bonus
    pub fn yearly_salary(&self, base: f64) -> f64 {
        apply_bonus(base, self.has_extra_period, self.mode, self.percentage, self.fixed)
    }
}

/// Project the base salary `years_elapsed` years from now
///
/// Growth is geometric from `current` to `max`, reached after `years_to_max`
/// years and held flat afterwards. With `years_to_max == 0` the salary stays
/// at `current`.
pub fn project_salary(
    current: f64,
    max: f64,
    years_to_max: u32,
    years_elapsed: u32,
) -> Result<f64, ProjectionError> {
    if years_to_max == 0 {
        return Ok(current);
    }
    if years_elapsed >= years_to_max {
        return Ok(max);
    }
    if current <= 0.0 {
        return Err(ProjectionError::NonPositiveSalary { current });
    }

    let growth_rate = (max / current).powf(1.0 / years_to_max as f64) - 1.0;
    Ok(current * (1.0 + growth_rate).powi(years_elapsed as i32))
}

/// Yearly salary including the extra period and bonus
///
/// The bonus is computed on the unscaled `base`; percentage and fixed bonuses
/// are mutually exclusive by `mode`.
pub fn apply_bonus(base: f64, has_extra_period: bool, mode: BonusMode, pct: f64, fixed: f64) -> f64 {
    let mut yearly = base;
    if has_extra_period {
        yearly = base * EXTRA_PERIOD_FACTOR;
    }

    match mode {
        BonusMode::Percentage if pct > 0.0 => yearly + base * pct / 100.0,
        BonusMode::Fixed if fixed > 0.0 => yearly + fixed,
        _ => yearly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_salary_clamps_at_max() {
        assert_eq!(project_salary(60_000.0, 120_000.0, 15, 15).unwrap(), 120_000.0);
        assert_eq!(project_salary(60_000.0, 120_000.0, 15, 20).unwrap(), 120_000.0);
    }

    #[test]
    fn test_salary_without_growth_period() {
        assert_eq!(project_salary(60_000.0, 120_000.0, 0, 5).unwrap(), 60_000.0);
        assert_eq!(project_salary(0.0, 120_000.0, 0, 5).unwrap(), 0.0);
    }

    #[test]
    fn test_salary_geometric_growth() {
        assert_relative_eq!(project_salary(60_000.0, 120_000.0, 15, 0).unwrap(), 60_000.0);

        // Doubling over 10 years: halfway is sqrt(2)
        let mid = project_salary(50_000.0, 100_000.0, 10, 5).unwrap();
        assert_relative_eq!(mid, 50_000.0 * 2f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn test_salary_rejects_non_positive_current() {
        let err = project_salary(0.0, 120_000.0, 15, 3).unwrap_err();
        assert!(matches!(err, ProjectionError::NonPositiveSalary { .. }));
        assert!(err.to_string().contains("current salary must be positive"));

        // Past the growth period the maximum applies without dividing by zero
        assert_eq!(project_salary(0.0, 120_000.0, 15, 15).unwrap(), 120_000.0);
    }

    #[test]
    fn test_bonus_modes() {
        assert_eq!(apply_bonus(60_000.0, false, BonusMode::None, 10.0, 5_000.0), 60_000.0);
        assert_eq!(apply_bonus(60_000.0, false, BonusMode::Percentage, 10.0, 5_000.0), 66_000.0);
        assert_eq!(apply_bonus(60_000.0, false, BonusMode::Fixed, 10.0, 5_000.0), 65_000.0);
    }

    #[test]
    fn test_extra_period_scales_before_bonus() {
        assert_relative_eq!(apply_bonus(60_000.0, true, BonusMode::None, 0.0, 0.0), 65_000.0);
        // Percentage bonus uses the unscaled base
        assert_relative_eq!(apply_bonus(60_000.0, true, BonusMode::Percentage, 10.0, 0.0), 71_000.0);
    }

    #[test]
    fn test_bonus_mode_serde_names() {
        assert_eq!(serde_json::to_string(&BonusMode::None).unwrap(), "\"no_bonus\"");
        assert_eq!(serde_json::to_string(&BonusMode::Fixed).unwrap(), "\"fixed\"");
        let mode: BonusMode = serde_json::from_str("\"percentage\"").unwrap();
        assert_eq!(mode, BonusMode::Percentage);
        let mode: BonusMode = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(mode, BonusMode::None);
    }
}
