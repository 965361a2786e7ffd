use serde::{Deserialize, Serialize};

use super::status::AttendanceStatus;

/// One mark: the status of an employee on one calendar day.
///
/// `date` is the host-formatted day key (e.g. `1/1/2024`). It is compared
/// as an opaque string and never parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub date: String,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn new(date: impl Into<String>, status: AttendanceStatus) -> Self {
        Self {
            date: date.into(),
            status,
        }
    }
}

/// Flattened row of the summary log ("<name> was <status> on <date>").
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SummaryLine {
    pub name: String,
    pub date: String,
    pub status: AttendanceStatus,
}

impl SummaryLine {
    pub fn sentence(&self) -> String {
        format!("{} was {} on {}", self.name, self.status, self.date)
    }
}
