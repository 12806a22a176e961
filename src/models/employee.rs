//! Employee and department models.
//!
//! This module defines the Employee and Department structs consumed
//! read-only by the scoring engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A department employees belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department.
    pub id: String,
    /// The human-readable department name (e.g., "IT").
    pub name: String,
}

/// Represents an employee subject to monthly scoring.
///
/// Employees are provided by an external directory; the engine never
/// creates or mutates them. Only active employees participate in scoring.
///
/// # Example
///
/// ```
/// use merit_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     full_name: "Ada Laurent".to_string(),
///     is_active: true,
///     department: Some("IT".to_string()),
///     hourly_rate: Decimal::new(80, 1), // 8.0
/// };
/// assert!(employee.is_active);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub full_name: String,
    /// Whether the employee is active. Inactive employees are excluded
    /// from the scoring population.
    pub is_active: bool,
    /// The name of the department the employee belongs to, if any.
    #[serde(default)]
    pub department: Option<String>,
    /// The employee's hourly rate, used for departmental cost aggregation.
    pub hourly_rate: Decimal,
}
