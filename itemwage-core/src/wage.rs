//! Wage prediction
//!
//! `wage = base_salary + max(0, years) * increment`, with the constants
//! fixed for the lifetime of the process.

use serde::{Deserialize, Serialize};

/// Default salary for zero years of experience
pub const DEFAULT_BASE_SALARY: i64 = 30_000;

/// Default raise per year of experience
pub const DEFAULT_INCREMENT: i64 = 2_000;

/// How non-positive experience is treated at the request boundary.
///
/// The formula itself always clamps; `Reject` makes the HTTP layer refuse
/// `years_of_experience <= 0` before the formula runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperiencePolicy {
    /// Negative years count as zero
    #[default]
    Clamp,
    /// Years must be strictly positive
    Reject,
}

impl ExperiencePolicy {
    /// Whether `years` is acceptable input under this policy.
    pub fn accepts(self, years: i64) -> bool {
        match self {
            Self::Clamp => true,
            Self::Reject => years > 0,
        }
    }
}

/// Wage formula with its startup constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WageModel {
    base_salary: i64,
    increment: i64,
}

impl WageModel {
    /// Both constants are expected to be non-negative; config validation
    /// enforces that before a model is built.
    pub const fn new(base_salary: i64, increment: i64) -> Self {
        Self {
            base_salary,
            increment,
        }
    }

    pub fn base_salary(&self) -> i64 {
        self.base_salary
    }

    pub fn increment(&self) -> i64 {
        self.increment
    }

    /// Predict a wage. Total over `i64`; saturates instead of overflowing.
    pub fn predict(&self, years: i64) -> i64 {
        let effective = clamp_experience(years);
        self.base_salary
            .saturating_add(effective.saturating_mul(self.increment))
    }
}

impl Default for WageModel {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_SALARY, DEFAULT_INCREMENT)
    }
}

/// Negative experience counts as zero.
pub fn clamp_experience(years: i64) -> i64 {
    years.max(0)
}
