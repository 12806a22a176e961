//! The scoring engine facade.
//!
//! Wires the period resolver, metric aggregator, scorer and winner
//! registry together over injected storage collaborators.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::Award;
use crate::store::{
    AttendanceStore, AwardStore, EmployeeDirectory, LeaveStore, OvertimeStore, SettingsStore,
};

use super::metrics::MonthlyMetrics;
use super::score::{ScoreRow, rank_employees};
use super::weights::{WEIGHTS_SETTINGS_KEY, WeightVector};
use super::winner::{WinnerSummary, award_for_row, record_winner};
use super::Period;

/// The monthly scoring engine.
///
/// All collaborators are injected at construction; the engine keeps no
/// ambient global state, so tests can substitute in-memory doubles for
/// every seam.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use merit_engine::scoring::ScoringEngine;
/// use merit_engine::store::{
///     MemoryAttendanceStore, MemoryAwardStore, MemoryEmployeeDirectory,
///     MemoryLeaveStore, MemoryOvertimeStore, MemorySettingsStore,
/// };
///
/// let engine = ScoringEngine::new(
///     Arc::new(MemoryEmployeeDirectory::new()),
///     Arc::new(MemoryAttendanceStore::new()),
///     Arc::new(MemoryOvertimeStore::new()),
///     Arc::new(MemoryLeaveStore::new()),
///     Arc::new(MemorySettingsStore::new()),
///     Arc::new(MemoryAwardStore::new()),
/// );
///
/// // Nobody to score yet: empty rows, no winner, nothing persisted.
/// assert!(engine.compute_month_scores("2025-08").unwrap().is_empty());
/// assert!(engine.pick_winner("2025-08").unwrap().is_none());
/// ```
#[derive(Clone)]
pub struct ScoringEngine {
    employees: Arc<dyn EmployeeDirectory>,
    attendance: Arc<dyn AttendanceStore>,
    overtime: Arc<dyn OvertimeStore>,
    leaves: Arc<dyn LeaveStore>,
    settings: Arc<dyn SettingsStore>,
    awards: Arc<dyn AwardStore>,
}

impl ScoringEngine {
    /// Creates an engine over the given collaborators.
    pub fn new(
        employees: Arc<dyn EmployeeDirectory>,
        attendance: Arc<dyn AttendanceStore>,
        overtime: Arc<dyn OvertimeStore>,
        leaves: Arc<dyn LeaveStore>,
        settings: Arc<dyn SettingsStore>,
        awards: Arc<dyn AwardStore>,
    ) -> Self {
        Self {
            employees,
            attendance,
            overtime,
            leaves,
            settings,
            awards,
        }
    }

    /// Computes the ordered score rows for a month. Pure read, no side
    /// effects.
    ///
    /// Returns an empty list when the period has no business days or the
    /// active population is empty. A malformed token is an error.
    pub fn compute_month_scores(&self, token: &str) -> EngineResult<Vec<ScoreRow>> {
        let period: Period = token.parse()?;
        self.scores_for(period)
    }

    /// Returns the configured weight vector, falling back to the
    /// defaults when the settings key is missing or unreadable.
    pub fn get_weights(&self) -> EngineResult<WeightVector> {
        let stored = self.settings.get(WEIGHTS_SETTINGS_KEY)?;
        Ok(WeightVector::from_settings(stored.as_ref()))
    }

    /// Merges recognized keys of `updates` into the current weight
    /// vector, persists the whole merged vector, and returns it.
    ///
    /// Unknown keys are ignored silently. The write is last-writer-wins.
    pub fn set_weights(&self, updates: &HashMap<String, Decimal>) -> EngineResult<WeightVector> {
        let mut weights = self.get_weights()?;
        weights.merge(updates);
        self.settings
            .set(WEIGHTS_SETTINGS_KEY, weights.to_settings())?;
        info!(key = WEIGHTS_SETTINGS_KEY, "scoring weights updated");
        Ok(weights)
    }

    /// Scores a month and upserts its award.
    ///
    /// Returns `Ok(None)` without writing anything when there is nobody
    /// to score. Re-running for the same period overwrites the existing
    /// award in place rather than accumulating duplicates.
    pub fn pick_winner(&self, token: &str) -> EngineResult<Option<Award>> {
        let period: Period = token.parse()?;
        let run_id = Uuid::new_v4();
        info!(run_id = %run_id, period = %period, "scoring run started");

        let rows = self.scores_for(period)?;
        let Some(top) = rows.first() else {
            warn!(run_id = %run_id, period = %period, "no scorable population, no winner");
            return Ok(None);
        };

        let award = record_winner(self.awards.as_ref(), period, top)?;
        info!(
            run_id = %run_id,
            period = %period,
            winner = %award.employee_id,
            score = %award.score,
            "winner recorded"
        );
        Ok(Some(award))
    }

    /// Returns the award to display for a month: the stored award when
    /// one exists, otherwise the current top candidate computed on the
    /// fly. Never persists anything.
    pub fn current_award(&self, token: &str) -> EngineResult<Option<Award>> {
        let period: Period = token.parse()?;
        if let Some(stored) = self.awards.find(period)? {
            return Ok(Some(stored));
        }
        let rows = self.scores_for(period)?;
        Ok(rows.first().map(|top| award_for_row(period, top)))
    }

    /// Summarizes the most recent award on record for dashboards.
    pub fn latest_winner(&self) -> EngineResult<Option<WinnerSummary>> {
        let Some(award) = self.awards.latest()? else {
            return Ok(None);
        };
        let population = self.employees.active_employees()?;
        Ok(Some(WinnerSummary::for_award(&award, &population)))
    }

    fn scores_for(&self, period: Period) -> EngineResult<Vec<ScoreRow>> {
        let workdays = period.business_days();
        if workdays.is_empty() {
            return Ok(Vec::new());
        }
        let population = self.employees.active_employees()?;
        if population.is_empty() {
            return Ok(Vec::new());
        }

        let metrics = MonthlyMetrics::collect(
            self.attendance.as_ref(),
            self.overtime.as_ref(),
            self.leaves.as_ref(),
            period,
        )?;
        let weights = self.get_weights()?;
        Ok(rank_employees(
            &population,
            &metrics,
            &weights,
            workdays.len() as u32,
        ))
    }
}
