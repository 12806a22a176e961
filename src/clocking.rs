//! Punch-in/punch-out attendance capture.
//!
//! Maintains the one-record-per-employee-per-day invariant the scoring
//! aggregations rely on: a punch updates the day's record in place
//! rather than inserting a second row.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use tracing::info;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, AttendanceSource};
use crate::store::AttendanceStore;

/// The scheduled start of a working day, used to compute lateness.
pub fn scheduled_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(8, 0, 0).expect("Valid shift start"))
}

/// Minutes checked in past the scheduled start, floored at zero and
/// rounded to two decimal places.
///
/// # Example
///
/// ```
/// use merit_engine::clocking::late_minutes;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let check_in = NaiveDate::from_ymd_opt(2025, 8, 4)
///     .unwrap()
///     .and_hms_opt(8, 12, 30)
///     .unwrap();
/// assert_eq!(late_minutes(check_in), Decimal::new(125, 1)); // 12.5
/// ```
pub fn late_minutes(check_in: NaiveDateTime) -> Decimal {
    let delta_seconds = (check_in - scheduled_start(check_in.date())).num_seconds();
    let minutes = Decimal::from(delta_seconds) / Decimal::from(60);
    minutes.round_dp(2).max(Decimal::ZERO)
}

/// Worked hours between two punches, rounded to two decimal places.
///
/// Zero unless the check-out is strictly after the check-in.
pub fn worked_hours(check_in: NaiveDateTime, check_out: NaiveDateTime) -> Decimal {
    if check_out <= check_in {
        return Decimal::ZERO;
    }
    let seconds = (check_out - check_in).num_seconds();
    (Decimal::from(seconds) / Decimal::from(3600)).round_dp(2)
}

/// Records a check-in for the employee's day, creating the day's record
/// if it does not exist yet.
///
/// Re-punching overwrites the previous check-in and recomputes the late
/// minutes from the new punch time.
pub fn punch_in(
    store: &dyn AttendanceStore,
    employee_id: &str,
    now: NaiveDateTime,
    source: AttendanceSource,
) -> EngineResult<AttendanceRecord> {
    let today = now.date();
    let mut record = store
        .find_day(employee_id, today)?
        .unwrap_or_else(|| AttendanceRecord::new(employee_id, today));

    record.check_in = Some(now);
    record.late_minutes = late_minutes(now);
    record.source = Some(source);
    info!(employee = employee_id, date = %today, "check-in recorded");
    store.save(record)
}

/// Records a check-out for the employee's day and recomputes the total
/// worked hours.
///
/// A check-out without a prior check-in opens the day's record with the
/// punch time as check-in, leaving zero worked hours.
pub fn punch_out(
    store: &dyn AttendanceStore,
    employee_id: &str,
    now: NaiveDateTime,
    source: AttendanceSource,
) -> EngineResult<AttendanceRecord> {
    let today = now.date();
    let mut record = match store.find_day(employee_id, today)? {
        Some(record) => record,
        None => {
            let mut opened = AttendanceRecord::new(employee_id, today);
            opened.check_in = Some(now);
            opened.late_minutes = late_minutes(now);
            opened
        }
    };

    record.check_out = Some(now);
    record.total_hours = record
        .check_in
        .map(|check_in| worked_hours(check_in, now))
        .unwrap_or(Decimal::ZERO);
    record.source = Some(source);
    info!(
        employee = employee_id,
        date = %today,
        hours = %record.total_hours,
        "check-out recorded"
    );
    store.save(record)
}
