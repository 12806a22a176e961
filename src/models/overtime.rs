//! Overtime request model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Approval workflow status of an overtime request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Submitted but not yet reviewed.
    Pending,
    /// Approved by a manager; counts toward scoring.
    Approved,
    /// Rejected by a manager.
    Rejected,
}

/// A request to have extra worked hours recognized.
///
/// Only requests with [`RequestStatus::Approved`] contribute to the
/// monthly overtime metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRequest {
    /// The employee who worked the overtime.
    pub employee_id: String,
    /// The date the overtime was worked.
    pub work_date: NaiveDate,
    /// The number of overtime hours requested.
    pub hours: Decimal,
    /// The approval status of the request.
    pub status: RequestStatus,
    /// Optional free-form note from the requester.
    #[serde(default)]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_overtime_request() {
        let json = r#"{
            "employee_id": "emp_001",
            "work_date": "2025-08-06",
            "hours": "2.0",
            "status": "approved"
        }"#;

        let request: OvertimeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id, "emp_001");
        assert_eq!(request.hours, Decimal::new(20, 1));
        assert_eq!(request.status, RequestStatus::Approved);
        assert_eq!(request.note, None);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&RequestStatus::Approved).unwrap(),
            "\"approved\""
        );
        assert_eq!(
            serde_json::to_string(&RequestStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }

    #[test]
    fn test_serialize_round_trip() {
        let request = OvertimeRequest {
            employee_id: "emp_002".to_string(),
            work_date: NaiveDate::from_ymd_opt(2025, 8, 7).unwrap(),
            hours: Decimal::new(15, 1),
            status: RequestStatus::Pending,
            note: Some("release night".to_string()),
        };

        let json = serde_json::to_string(&request).unwrap();
        let deserialized: OvertimeRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, deserialized);
    }
}
