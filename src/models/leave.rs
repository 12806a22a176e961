//! Leave request model and related enums.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The category of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Paid annual leave.
    Annual,
    /// Sick leave.
    Sick,
    /// Maternity leave.
    Maternity,
    /// Paternity leave.
    Paternity,
    /// Unpaid leave.
    Unpaid,
    /// Any other kind of leave.
    Other,
}

/// Approval workflow status of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Submitted but not yet reviewed.
    Pending,
    /// Approved; counts toward the leave-days metric.
    Approved,
    /// Rejected.
    Rejected,
    /// Withdrawn by the employee.
    Cancelled,
}

/// A request for a span of days off, end date inclusive.
///
/// Only approved requests contribute to scoring, and only the business
/// days of the overlap between the leave span and the scoring period
/// are counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The employee requesting leave.
    pub employee_id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// The approval status of the request.
    pub status: LeaveStatus,
    /// Optional free-form reason from the requester.
    #[serde(default)]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_leave_request() {
        let json = r#"{
            "employee_id": "emp_001",
            "start_date": "2025-08-11",
            "end_date": "2025-08-17",
            "leave_type": "annual",
            "status": "approved"
        }"#;

        let request: LeaveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2025, 8, 11).unwrap());
        assert_eq!(request.end_date, NaiveDate::from_ymd_opt(2025, 8, 17).unwrap());
        assert_eq!(request.leave_type, LeaveType::Annual);
        assert_eq!(request.status, LeaveStatus::Approved);
    }

    #[test]
    fn test_leave_type_serialization() {
        assert_eq!(serde_json::to_string(&LeaveType::Sick).unwrap(), "\"sick\"");
        assert_eq!(
            serde_json::to_string(&LeaveType::Maternity).unwrap(),
            "\"maternity\""
        );
    }

    #[test]
    fn test_leave_status_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }

    #[test]
    fn test_serialize_round_trip() {
        let request = LeaveRequest {
            employee_id: "emp_002".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 8, 22).unwrap(),
            leave_type: LeaveType::Sick,
            status: LeaveStatus::Pending,
            reason: Some("flu".to_string()),
        };

        let json = serde_json::to_string(&request).unwrap();
        let deserialized: LeaveRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, deserialized);
    }
}
