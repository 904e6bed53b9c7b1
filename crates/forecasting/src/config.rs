use serde::{Deserialize, Serialize};

use restock_core::{DomainError, DomainResult};

/// Alert threshold for low stock, in weeks of coverage.
pub const DEFAULT_WEEKS_THRESHOLD: f64 = 2.0;

/// Weeks of stock an auto-filled shopping list aims to restore.
pub const DEFAULT_TARGET_WEEKS: f64 = 4.0;

/// Planning knobs shared by alerts and shopping-list auto-population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// A product needs purchase when its coverage drops strictly below this.
    pub weeks_threshold: f64,
    /// Coverage auto-fill quantities are computed against.
    pub target_weeks: f64,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            weeks_threshold: DEFAULT_WEEKS_THRESHOLD,
            target_weeks: DEFAULT_TARGET_WEEKS,
        }
    }
}

impl PlanningConfig {
    pub fn with_weeks_threshold(mut self, weeks_threshold: f64) -> Self {
        self.weeks_threshold = weeks_threshold;
        self
    }

    pub fn with_target_weeks(mut self, target_weeks: f64) -> Self {
        self.target_weeks = target_weeks;
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !(self.weeks_threshold.is_finite() && self.weeks_threshold >= 0.0) {
            return Err(DomainError::validation(
                "weeks_threshold must be a finite non-negative number",
            ));
        }
        if !(self.target_weeks.is_finite() && self.target_weeks > 0.0) {
            return Err(DomainError::validation(
                "target_weeks must be a finite positive number",
            ));
        }
        Ok(())
    }
}
