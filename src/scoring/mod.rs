//! Monthly scoring logic.
//!
//! This module contains the period resolver, the metric aggregations,
//! the weight configuration, the normalizing scorer and the winner
//! registry, tied together by [`ScoringEngine`].

mod engine;
mod metrics;
mod period;
mod score;
mod weights;
mod winner;

pub use engine::ScoringEngine;
pub use metrics::{
    MonthlyMetrics, approved_overtime_by_employee, hours_by_employee, leave_days_by_employee,
    present_days_by_employee,
};
pub use period::Period;
pub use score::{ScoreRow, rank_employees};
pub use weights::{WEIGHTS_SETTINGS_KEY, WeightVector};
pub use winner::{WinnerSummary, award_for_row, record_winner};
