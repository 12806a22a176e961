//! Winner registry.
//!
//! Persists the top-ranked employee of a scored month as the period's
//! award, overwriting any previous award for the same period so re-runs
//! stay idempotent.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Award, Employee};
use crate::store::AwardStore;

use super::Period;
use super::score::ScoreRow;

/// A rendered view of the most recent winner, for dashboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerSummary {
    /// The winner's display name, or their id when they have left the
    /// active population.
    pub name: String,
    /// The winner's department, when known.
    pub department: Option<String>,
    /// The period the award covers.
    pub period: Period,
}

impl WinnerSummary {
    /// Builds a summary for an award, resolving the employee through the
    /// active population.
    pub fn for_award(award: &Award, population: &[Employee]) -> Self {
        let employee = population.iter().find(|e| e.id == award.employee_id);
        Self {
            name: employee
                .map(|e| e.full_name.clone())
                .unwrap_or_else(|| award.employee_id.clone()),
            department: employee.and_then(|e| e.department.clone()),
            period: award.period,
        }
    }
}

/// Builds the award record for a period's top row.
///
/// `created_at` is stamped here; the store preserves the original
/// timestamp when the period already has an award.
pub fn award_for_row(period: Period, top: &ScoreRow) -> Award {
    Award {
        period,
        employee_id: top.employee_id.clone(),
        score: top.score,
        details: top.to_details(),
        created_at: Utc::now(),
    }
}

/// Upserts the award for a period from its top-ranked row.
///
/// The store's upsert contract makes this atomic: on failure the
/// previous award (if any) is untouched and the error is surfaced
/// unchanged to the caller. No retry happens here.
pub fn record_winner(awards: &dyn AwardStore, period: Period, top: &ScoreRow) -> EngineResult<Award> {
    awards.upsert(award_for_row(period, top))
}
