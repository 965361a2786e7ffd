use serde::{Deserialize, Serialize};
use std::fmt;

use super::attendance::AttendanceRecord;

/// Append-order position of an employee in the roster.
///
/// Positions are never reused because employees cannot be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeRef(pub usize);

impl EmployeeRef {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EmployeeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    #[serde(default)]
    pub photo: String,
    #[serde(rename = "attendance", default)]
    pub attendance_history: Vec<AttendanceRecord>,
}

impl Employee {
    pub fn new(name: String, photo: String) -> Self {
        Self {
            name,
            photo,
            attendance_history: Vec::new(),
        }
    }

    pub fn record_for(&self, date: &str) -> Option<&AttendanceRecord> {
        self.attendance_history.iter().find(|r| r.date == date)
    }

    pub fn has_record_for(&self, date: &str) -> bool {
        self.record_for(date).is_some()
    }
}
