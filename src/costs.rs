//! Departmental cost aggregation.
//!
//! Sums `total_hours * hourly_rate` per department over one month of
//! attendance, for the payroll cost report.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::scoring::{Period, hours_by_employee};
use crate::store::{AttendanceStore, EmployeeDirectory};

/// One department's attendance cost for a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCost {
    /// The department name.
    pub department: String,
    /// The summed cost: worked hours times each member's hourly rate.
    pub cost: Decimal,
}

/// Computes per-department attendance costs for a month.
///
/// Employees without a department are skipped, and a department only
/// appears when at least one of its members has attendance in the month.
/// Results are sorted by department name so the report is stable.
///
/// # Example
///
/// ```
/// use merit_engine::costs::department_costs;
/// use merit_engine::models::{AttendanceRecord, Employee};
/// use merit_engine::store::{MemoryAttendanceStore, MemoryEmployeeDirectory};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let directory = MemoryEmployeeDirectory::new();
/// directory.insert(Employee {
///     id: "emp_001".to_string(),
///     full_name: "Ada Laurent".to_string(),
///     is_active: true,
///     department: Some("IT".to_string()),
///     hourly_rate: Decimal::new(100, 1), // 10.0
/// });
///
/// let attendance = MemoryAttendanceStore::new();
/// let mut record = AttendanceRecord::new(
///     "emp_001",
///     NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
/// );
/// record.total_hours = Decimal::new(80, 1); // 8.0
/// attendance.insert(record);
///
/// let costs = department_costs(&directory, &attendance, "2025-08").unwrap();
/// assert_eq!(costs.len(), 1);
/// assert_eq!(costs[0].department, "IT");
/// assert_eq!(costs[0].cost, Decimal::new(800, 1)); // 80.0
/// ```
pub fn department_costs(
    directory: &dyn EmployeeDirectory,
    attendance: &dyn AttendanceStore,
    token: &str,
) -> EngineResult<Vec<DepartmentCost>> {
    let period: Period = token.parse()?;
    let employees = directory.active_employees()?;
    let rows = attendance.in_range(period.first_day(), period.last_day())?;
    let hours = hours_by_employee(&rows);

    let mut by_department: BTreeMap<String, Decimal> = BTreeMap::new();
    for employee in &employees {
        let Some(department) = &employee.department else {
            continue;
        };
        let Some(worked) = hours.get(&employee.id) else {
            continue;
        };
        *by_department
            .entry(department.clone())
            .or_insert(Decimal::ZERO) += *worked * employee.hourly_rate;
    }

    Ok(by_department
        .into_iter()
        .map(|(department, cost)| DepartmentCost { department, cost })
        .collect())
}
