//! Monthly metric aggregation.
//!
//! Four independent read-only aggregations over the period range, each
//! grouped by employee id: distinct presence days, total worked hours,
//! approved overtime hours, and approved leave business-days. The
//! aggregations run over every employee the rows mention; restricting the
//! result to the active population happens downstream in the scorer.

use std::collections::{HashMap, HashSet};

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, LeaveRequest, LeaveStatus, OvertimeRequest, RequestStatus};
use crate::store::{AttendanceStore, LeaveStore, OvertimeStore};

use super::Period;

/// The per-employee metric maps for one scored month.
#[derive(Debug, Clone, Default)]
pub struct MonthlyMetrics {
    /// Distinct dates with a check-in, per employee.
    pub present_days: HashMap<String, u32>,
    /// Sum of recorded worked hours, per employee.
    pub total_hours: HashMap<String, Decimal>,
    /// Sum of approved overtime hours, per employee.
    pub overtime_hours: HashMap<String, Decimal>,
    /// Approved leave business-days, per employee.
    pub leave_days: HashMap<String, Decimal>,
}

impl MonthlyMetrics {
    /// Runs the four aggregations against the stores for one period.
    ///
    /// The four reads are independent; they are issued sequentially here
    /// but have no ordering dependency between them.
    pub fn collect(
        attendance: &dyn AttendanceStore,
        overtime: &dyn OvertimeStore,
        leaves: &dyn LeaveStore,
        period: Period,
    ) -> EngineResult<Self> {
        let start = period.first_day();
        let end = period.last_day();
        let business_days: HashSet<NaiveDate> = period.business_days().into_iter().collect();

        let attendance_rows = attendance.in_range(start, end)?;
        let overtime_rows = overtime.in_range(start, end)?;
        let leave_rows = leaves.overlapping(start, end)?;

        Ok(Self {
            present_days: present_days_by_employee(&attendance_rows),
            total_hours: hours_by_employee(&attendance_rows),
            overtime_hours: approved_overtime_by_employee(&overtime_rows),
            leave_days: leave_days_by_employee(&leave_rows, start, end, &business_days),
        })
    }
}

/// Counts distinct dates with a non-null check-in per employee.
///
/// Multiple rows for the same (employee, date) count once: the count is
/// distinct on date, not a raw row count.
pub fn present_days_by_employee(rows: &[AttendanceRecord]) -> HashMap<String, u32> {
    let mut dates: HashMap<&str, HashSet<NaiveDate>> = HashMap::new();
    for row in rows {
        if row.check_in.is_some() {
            dates
                .entry(row.employee_id.as_str())
                .or_default()
                .insert(row.work_date);
        }
    }
    dates
        .into_iter()
        .map(|(id, days)| (id.to_string(), days.len() as u32))
        .collect()
}

/// Sums recorded worked hours per employee across all rows.
pub fn hours_by_employee(rows: &[AttendanceRecord]) -> HashMap<String, Decimal> {
    let mut totals: HashMap<String, Decimal> = HashMap::new();
    for row in rows {
        *totals.entry(row.employee_id.clone()).or_insert(Decimal::ZERO) += row.total_hours;
    }
    totals
}

/// Sums overtime hours per employee over approved requests only.
pub fn approved_overtime_by_employee(rows: &[OvertimeRequest]) -> HashMap<String, Decimal> {
    let mut totals: HashMap<String, Decimal> = HashMap::new();
    for row in rows {
        if row.status == RequestStatus::Approved {
            *totals.entry(row.employee_id.clone()).or_insert(Decimal::ZERO) += row.hours;
        }
    }
    totals
}

/// Counts approved leave business-days per employee.
///
/// For every approved request the intersection of its span with
/// `[start, end]` is walked day by day, counting only days present in
/// `business_days`. The walk is what keeps weekends inside a leave span
/// from counting; a plain date difference would include them.
pub fn leave_days_by_employee(
    rows: &[LeaveRequest],
    start: NaiveDate,
    end: NaiveDate,
    business_days: &HashSet<NaiveDate>,
) -> HashMap<String, Decimal> {
    let mut totals: HashMap<String, Decimal> = HashMap::new();
    for row in rows {
        if row.status != LeaveStatus::Approved {
            continue;
        }
        let mut day = row.start_date.max(start);
        let last = row.end_date.min(end);
        while day <= last {
            if business_days.contains(&day) {
                *totals.entry(row.employee_id.clone()).or_insert(Decimal::ZERO) += Decimal::ONE;
            }
            day += Duration::days(1);
        }
    }
    totals
}
