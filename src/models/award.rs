//! Persisted monthly award model.
//!
//! This module contains the [`Award`] record owned by the scoring engine:
//! one row per period, overwritten in place when a period is re-scored.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::scoring::Period;

/// Snapshot of the winning employee's metrics at the time of scoring.
///
/// Persisted alongside the award so the ranking can be explained later
/// even after the underlying records change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardDetails {
    /// Distinct dates with a check-in.
    pub present_days: u32,
    /// Number of business days in the scored period.
    pub workdays: u32,
    /// `present_days / workdays`, zero when the period had no business days.
    pub presence_rate: Decimal,
    /// Total worked hours over the period.
    pub total_hours: Decimal,
    /// Approved overtime hours over the period.
    pub overtime_hours: Decimal,
    /// Approved leave business-days over the period.
    pub leave_days: Decimal,
}

/// The employee-of-the-month record for one period.
///
/// Unique per period. Re-running the scoring job for a period overwrites
/// the employee reference, score and details in place; `created_at`
/// records the first run and is preserved across overwrites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    /// The scored period.
    pub period: Period,
    /// The winning employee.
    pub employee_id: String,
    /// The final weighted score.
    pub score: Decimal,
    /// Metric snapshot backing the score.
    pub details: AwardDetails,
    /// When the award was first created.
    pub created_at: DateTime<Utc>,
}
