//! Core data models for the scoring engine.
//!
//! This module contains all the domain records consumed or owned by the
//! engine: employees, attendance, overtime and leave requests, and the
//! persisted monthly award.

mod attendance;
mod award;
mod employee;
mod leave;
mod overtime;

pub use attendance::{AttendanceRecord, AttendanceSource};
pub use award::{Award, AwardDetails};
pub use employee::{Department, Employee};
pub use leave::{LeaveRequest, LeaveStatus, LeaveType};
pub use overtime::{OvertimeRequest, RequestStatus};
