//! Score computation and ranking.
//!
//! Combines the per-employee monthly metrics with the configured weight
//! vector into a single scalar score per employee, normalizing hours and
//! overtime against the population maxima, and orders the result
//! deterministically.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{AwardDetails, Employee};

use super::metrics::MonthlyMetrics;
use super::weights::WeightVector;

/// One employee's computed metrics and final score for a month.
///
/// Constructed fresh on every scoring run and never persisted; the
/// winner registry snapshots the top row into an award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRow {
    /// The scored employee.
    pub employee_id: String,
    /// The employee's display name.
    pub full_name: String,
    /// Distinct dates with a check-in.
    pub present_days: u32,
    /// Number of business days in the period.
    pub workdays: u32,
    /// `present_days / workdays`, zero when the period has no business days.
    pub presence_rate: Decimal,
    /// Total worked hours over the period.
    pub total_hours: Decimal,
    /// Approved overtime hours over the period.
    pub overtime_hours: Decimal,
    /// Approved leave business-days over the period.
    pub leave_days: Decimal,
    /// The final weighted score.
    pub score: Decimal,
}

impl ScoreRow {
    /// Snapshots this row's metrics into award details.
    pub fn to_details(&self) -> AwardDetails {
        AwardDetails {
            present_days: self.present_days,
            workdays: self.workdays,
            presence_rate: self.presence_rate,
            total_hours: self.total_hours,
            overtime_hours: self.overtime_hours,
            leave_days: self.leave_days,
        }
    }
}

/// Scores and ranks the active population for one month.
///
/// Normalization denominators are the maxima over `employees`, floored at
/// 1 so an all-zero month divides cleanly. Rows come back sorted by score
/// descending, ties broken by presence rate descending, then total hours
/// descending, then employee id ascending, which makes the ordering
/// deterministic for any input order.
pub fn rank_employees(
    employees: &[Employee],
    metrics: &MonthlyMetrics,
    weights: &WeightVector,
    workday_count: u32,
) -> Vec<ScoreRow> {
    let max_hours = population_max(employees, &metrics.total_hours);
    let max_overtime = population_max(employees, &metrics.overtime_hours);
    let workdays = Decimal::from(workday_count);
    let leave_denominator = workdays.max(Decimal::ONE);

    let mut rows: Vec<ScoreRow> = employees
        .iter()
        .map(|employee| {
            let present_days = metrics
                .present_days
                .get(&employee.id)
                .copied()
                .unwrap_or(0);
            let total_hours = metric_or_zero(&metrics.total_hours, &employee.id);
            let overtime_hours = metric_or_zero(&metrics.overtime_hours, &employee.id);
            let leave_days = metric_or_zero(&metrics.leave_days, &employee.id);

            let presence_rate = if workday_count == 0 {
                Decimal::ZERO
            } else {
                Decimal::from(present_days) / workdays
            };
            let normalized_hours = total_hours / max_hours;
            let normalized_overtime = overtime_hours / max_overtime;
            let normalized_leave = leave_days / leave_denominator;

            let score = presence_rate * weights.presence
                + normalized_hours * weights.hours
                + normalized_overtime * weights.overtime
                + normalized_leave * weights.leaves;

            ScoreRow {
                employee_id: employee.id.clone(),
                full_name: employee.full_name.clone(),
                present_days,
                workdays: workday_count,
                presence_rate,
                total_hours,
                overtime_hours,
                leave_days,
                score,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.presence_rate.cmp(&a.presence_rate))
            .then_with(|| b.total_hours.cmp(&a.total_hours))
            .then_with(|| a.employee_id.cmp(&b.employee_id))
    });
    rows
}

/// The population maximum of a metric, floored at 1.
fn population_max(employees: &[Employee], metric: &HashMap<String, Decimal>) -> Decimal {
    employees
        .iter()
        .map(|employee| metric_or_zero(metric, &employee.id))
        .fold(Decimal::ONE, Decimal::max)
}

fn metric_or_zero(metric: &HashMap<String, Decimal>, employee_id: &str) -> Decimal {
    metric.get(employee_id).copied().unwrap_or(Decimal::ZERO)
}
