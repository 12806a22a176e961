//! Attendance record model.
//!
//! This module defines the AttendanceRecord struct and AttendanceSource
//! enum for daily check-in/check-out records.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an attendance record was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceSource {
    /// Captured by scanning a QR code.
    Qr,
    /// Entered manually.
    Manual,
}

/// A single day of attendance for one employee.
///
/// One record per (employee, date) is assumed upstream; the scoring
/// aggregations do not deduplicate rows beyond the distinct-date
/// presence count.
///
/// # Example
///
/// ```
/// use merit_engine::models::AttendanceRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord::new(
///     "emp_001",
///     NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
/// );
/// assert!(record.check_in.is_none());
/// assert_eq!(record.total_hours, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar date the record covers.
    pub work_date: NaiveDate,
    /// When the employee checked in, if they did.
    pub check_in: Option<NaiveDateTime>,
    /// When the employee checked out, if they did.
    pub check_out: Option<NaiveDateTime>,
    /// Minutes the employee checked in past the scheduled start.
    pub late_minutes: Decimal,
    /// Total worked hours recorded for the date.
    pub total_hours: Decimal,
    /// How the record was captured, when known.
    #[serde(default)]
    pub source: Option<AttendanceSource>,
}

impl AttendanceRecord {
    /// Creates an empty record for an employee and date, with no punches
    /// and zero hours.
    pub fn new(employee_id: impl Into<String>, work_date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.into(),
            work_date,
            check_in: None,
            check_out: None,
            late_minutes: Decimal::ZERO,
            total_hours: Decimal::ZERO,
            source: None,
        }
    }
}
