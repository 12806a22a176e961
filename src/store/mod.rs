//! Storage seams for the scoring engine's external collaborators.
//!
//! The engine consumes employee, attendance, overtime, leave and settings
//! data through these traits and owns award persistence through
//! [`AwardStore`]. Injecting the traits at construction keeps the engine
//! free of ambient global state and lets tests substitute doubles.
//!
//! Implementations are responsible for mapping whatever schema the
//! backing store actually has onto the canonical record shapes in
//! [`crate::models`]; no schema probing happens inside the engine.

mod memory;

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, Award, Employee, LeaveRequest, OvertimeRequest};
use crate::scoring::Period;

pub use memory::{
    MemoryAttendanceStore, MemoryAwardStore, MemoryEmployeeDirectory, MemoryLeaveStore,
    MemoryOvertimeStore, MemorySettingsStore,
};

/// Read-only access to the employee population.
pub trait EmployeeDirectory: Send + Sync {
    /// Returns every employee flagged active.
    fn active_employees(&self) -> EngineResult<Vec<Employee>>;
}

/// Read and write access to daily attendance records.
pub trait AttendanceStore: Send + Sync {
    /// Returns all records with a work date inside `[start, end]`.
    fn in_range(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<Vec<AttendanceRecord>>;

    /// Returns the record for one employee on one date, if any.
    fn find_day(&self, employee_id: &str, date: NaiveDate)
    -> EngineResult<Option<AttendanceRecord>>;

    /// Inserts or replaces the record keyed by (employee, work date).
    fn save(&self, record: AttendanceRecord) -> EngineResult<AttendanceRecord>;
}

/// Read-only access to overtime requests.
pub trait OvertimeStore: Send + Sync {
    /// Returns all requests with a work date inside `[start, end]`,
    /// regardless of status.
    fn in_range(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<Vec<OvertimeRequest>>;
}

/// Read-only access to leave requests.
pub trait LeaveStore: Send + Sync {
    /// Returns all requests whose `[start_date, end_date]` span overlaps
    /// `[start, end]`, regardless of status.
    fn overlapping(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<Vec<LeaveRequest>>;
}

/// Process-wide key-value configuration store.
///
/// Reads may race with administrative writes; read-committed consistency
/// is the only guarantee callers can rely on.
pub trait SettingsStore: Send + Sync {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> EngineResult<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous value.
    /// Last writer wins.
    fn set(&self, key: &str, value: Value) -> EngineResult<()>;
}

/// Persistence for monthly awards, keyed uniquely by period.
pub trait AwardStore: Send + Sync {
    /// Returns the award for a period, if one was recorded.
    fn find(&self, period: Period) -> EngineResult<Option<Award>>;

    /// Inserts the award, or overwrites the existing award for the same
    /// period in place, preserving the original `created_at`.
    ///
    /// The read-then-write must be atomic: on failure no partial award
    /// may remain, and the previous state (if any) must be intact.
    fn upsert(&self, award: Award) -> EngineResult<Award>;

    /// Returns the award for the most recent period on record.
    fn latest(&self) -> EngineResult<Option<Award>>;
}
