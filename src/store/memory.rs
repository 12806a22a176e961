//! In-memory store implementations.
//!
//! These back the test suites and benchmarks, and serve as the reference
//! for the locking discipline real adapters must provide: the award
//! upsert holds one lock across its read-modify-write so re-runs for the
//! same period serialize and never leave a partial record.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, Award, Employee, LeaveRequest, OvertimeRequest};
use crate::scoring::Period;

use super::{
    AttendanceStore, AwardStore, EmployeeDirectory, LeaveStore, OvertimeStore, SettingsStore,
};

/// In-memory employee directory.
#[derive(Debug, Default)]
pub struct MemoryEmployeeDirectory {
    employees: RwLock<Vec<Employee>>,
}

impl MemoryEmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee to the directory.
    pub fn insert(&self, employee: Employee) {
        self.employees
            .write()
            .expect("Directory lock poisoned")
            .push(employee);
    }
}

impl EmployeeDirectory for MemoryEmployeeDirectory {
    fn active_employees(&self) -> EngineResult<Vec<Employee>> {
        let employees = self.employees.read().expect("Directory lock poisoned");
        Ok(employees.iter().filter(|e| e.is_active).cloned().collect())
    }
}

/// In-memory attendance store keyed by (employee, work date).
#[derive(Debug, Default)]
pub struct MemoryAttendanceStore {
    records: RwLock<HashMap<(String, NaiveDate), AttendanceRecord>>,
}

impl MemoryAttendanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a record, replacing any existing record for the same
    /// employee and date.
    pub fn insert(&self, record: AttendanceRecord) {
        self.records
            .write()
            .expect("Attendance lock poisoned")
            .insert((record.employee_id.clone(), record.work_date), record);
    }
}

impl AttendanceStore for MemoryAttendanceStore {
    fn in_range(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<Vec<AttendanceRecord>> {
        let records = self.records.read().expect("Attendance lock poisoned");
        Ok(records
            .values()
            .filter(|r| r.work_date >= start && r.work_date <= end)
            .cloned()
            .collect())
    }

    fn find_day(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<AttendanceRecord>> {
        let records = self.records.read().expect("Attendance lock poisoned");
        Ok(records.get(&(employee_id.to_string(), date)).cloned())
    }

    fn save(&self, record: AttendanceRecord) -> EngineResult<AttendanceRecord> {
        self.insert(record.clone());
        Ok(record)
    }
}

/// In-memory overtime store.
#[derive(Debug, Default)]
pub struct MemoryOvertimeStore {
    requests: RwLock<Vec<OvertimeRequest>>,
}

impl MemoryOvertimeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an overtime request.
    pub fn insert(&self, request: OvertimeRequest) {
        self.requests
            .write()
            .expect("Overtime lock poisoned")
            .push(request);
    }
}

impl OvertimeStore for MemoryOvertimeStore {
    fn in_range(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<Vec<OvertimeRequest>> {
        let requests = self.requests.read().expect("Overtime lock poisoned");
        Ok(requests
            .iter()
            .filter(|r| r.work_date >= start && r.work_date <= end)
            .cloned()
            .collect())
    }
}

/// In-memory leave store.
#[derive(Debug, Default)]
pub struct MemoryLeaveStore {
    requests: RwLock<Vec<LeaveRequest>>,
}

impl MemoryLeaveStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a leave request.
    pub fn insert(&self, request: LeaveRequest) {
        self.requests
            .write()
            .expect("Leave lock poisoned")
            .push(request);
    }
}

impl LeaveStore for MemoryLeaveStore {
    fn overlapping(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<Vec<LeaveRequest>> {
        let requests = self.requests.read().expect("Leave lock poisoned");
        Ok(requests
            .iter()
            .filter(|r| r.start_date <= end && r.end_date >= start)
            .cloned()
            .collect())
    }
}

/// In-memory settings store.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<String, Value>>,
}

impl MemorySettingsStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> EngineResult<Option<Value>> {
        let values = self.values.read().expect("Settings lock poisoned");
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> EngineResult<()> {
        self.values
            .write()
            .expect("Settings lock poisoned")
            .insert(key.to_string(), value);
        Ok(())
    }
}

/// In-memory award store keyed by period.
#[derive(Debug, Default)]
pub struct MemoryAwardStore {
    awards: RwLock<BTreeMap<Period, Award>>,
}

impl MemoryAwardStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored awards.
    pub fn len(&self) -> usize {
        self.awards.read().expect("Award lock poisoned").len()
    }

    /// Returns true when no award has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AwardStore for MemoryAwardStore {
    fn find(&self, period: Period) -> EngineResult<Option<Award>> {
        let awards = self.awards.read().expect("Award lock poisoned");
        Ok(awards.get(&period).cloned())
    }

    fn upsert(&self, award: Award) -> EngineResult<Award> {
        // One write lock across the read-modify-write keeps the upsert
        // atomic and serializes concurrent runs for the same period.
        let mut awards = self.awards.write().expect("Award lock poisoned");
        let stored = match awards.get(&award.period) {
            Some(existing) => Award {
                created_at: existing.created_at,
                ..award
            },
            None => award,
        };
        awards.insert(stored.period, stored.clone());
        Ok(stored)
    }

    fn latest(&self) -> EngineResult<Option<Award>> {
        let awards = self.awards.read().expect("Award lock poisoned");
        Ok(awards.last_key_value().map(|(_, award)| award.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AwardDetails, LeaveStatus, LeaveType, RequestStatus};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_award(token: &str, employee_id: &str, score: i64) -> Award {
        Award {
            period: token.parse().unwrap(),
            employee_id: employee_id.to_string(),
            score: Decimal::new(score, 2),
            details: AwardDetails {
                present_days: 0,
                workdays: 21,
                presence_rate: Decimal::ZERO,
                total_hours: Decimal::ZERO,
                overtime_hours: Decimal::ZERO,
                leave_days: Decimal::ZERO,
            },
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_directory_filters_inactive_employees() {
        let directory = MemoryEmployeeDirectory::new();
        directory.insert(Employee {
            id: "emp_001".to_string(),
            full_name: "Active".to_string(),
            is_active: true,
            department: None,
            hourly_rate: Decimal::new(80, 1),
        });
        directory.insert(Employee {
            id: "emp_002".to_string(),
            full_name: "Gone".to_string(),
            is_active: false,
            department: None,
            hourly_rate: Decimal::new(80, 1),
        });

        let active = directory.active_employees().unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "emp_001");
    }

    #[test]
    fn test_attendance_save_replaces_same_day() {
        let store = MemoryAttendanceStore::new();
        let day = date(2025, 8, 4);
        store.save(AttendanceRecord::new("emp_001", day)).unwrap();

        let mut updated = AttendanceRecord::new("emp_001", day);
        updated.total_hours = Decimal::new(90, 1);
        store.save(updated).unwrap();

        let found = store.find_day("emp_001", day).unwrap().unwrap();
        assert_eq!(found.total_hours, Decimal::new(90, 1));
        assert_eq!(store.in_range(day, day).unwrap().len(), 1);
    }

    #[test]
    fn test_attendance_in_range_is_inclusive() {
        let store = MemoryAttendanceStore::new();
        store.insert(AttendanceRecord::new("emp_001", date(2025, 8, 1)));
        store.insert(AttendanceRecord::new("emp_001", date(2025, 8, 31)));
        store.insert(AttendanceRecord::new("emp_001", date(2025, 9, 1)));

        let rows = store.in_range(date(2025, 8, 1), date(2025, 8, 31)).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_leave_overlap_query() {
        let store = MemoryLeaveStore::new();
        store.insert(LeaveRequest {
            employee_id: "emp_001".to_string(),
            start_date: date(2025, 7, 28),
            end_date: date(2025, 8, 1),
            leave_type: LeaveType::Annual,
            status: LeaveStatus::Approved,
            reason: None,
        });
        store.insert(LeaveRequest {
            employee_id: "emp_001".to_string(),
            start_date: date(2025, 7, 1),
            end_date: date(2025, 7, 31),
            leave_type: LeaveType::Annual,
            status: LeaveStatus::Approved,
            reason: None,
        });

        let rows = store
            .overlapping(date(2025, 8, 1), date(2025, 8, 31))
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].end_date, date(2025, 8, 1));
    }

    #[test]
    fn test_overtime_range_keeps_all_statuses() {
        let store = MemoryOvertimeStore::new();
        for status in [
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Rejected,
        ] {
            store.insert(OvertimeRequest {
                employee_id: "emp_001".to_string(),
                work_date: date(2025, 8, 5),
                hours: Decimal::ONE,
                status,
                note: None,
            });
        }
        let rows = store.in_range(date(2025, 8, 1), date(2025, 8, 31)).unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_settings_get_set() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.get("missing").unwrap(), None);

        store
            .set("award_weights", serde_json::json!({"presence": "0.5"}))
            .unwrap();
        let value = store.get("award_weights").unwrap().unwrap();
        assert_eq!(value["presence"], "0.5");

        store.set("award_weights", serde_json::json!({})).unwrap();
        let value = store.get("award_weights").unwrap().unwrap();
        assert!(value.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_award_upsert_inserts_then_overwrites() {
        let store = MemoryAwardStore::new();
        let first = store.upsert(sample_award("2025-08", "emp_001", 50)).unwrap();
        assert_eq!(store.len(), 1);

        let second = store.upsert(sample_award("2025-08", "emp_002", 75)).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(second.employee_id, "emp_002");
        assert_eq!(second.score, Decimal::new(75, 2));
        // created_at of the first insert survives the overwrite.
        assert_eq!(second.created_at, first.created_at);

        let found = store.find("2025-08".parse().unwrap()).unwrap().unwrap();
        assert_eq!(found, second);
    }

    #[test]
    fn test_award_latest_returns_most_recent_period() {
        let store = MemoryAwardStore::new();
        store.upsert(sample_award("2025-03", "emp_001", 10)).unwrap();
        store.upsert(sample_award("2024-12", "emp_002", 20)).unwrap();
        store.upsert(sample_award("2025-01", "emp_003", 30)).unwrap();

        let latest = store.latest().unwrap().unwrap();
        assert_eq!(latest.period, "2025-03".parse().unwrap());
        assert_eq!(latest.employee_id, "emp_001");
    }

    #[test]
    fn test_award_latest_on_empty_store() {
        let store = MemoryAwardStore::new();
        assert!(store.latest().unwrap().is_none());
        assert!(store.is_empty());
    }
}
