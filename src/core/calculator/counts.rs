use crate::core::roster::Roster;
use crate::models::{AttendanceCounts, AttendanceRecord, AttendanceStatus, Employee};

fn tally(records: &[AttendanceRecord]) -> AttendanceCounts {
    records
        .iter()
        .fold(AttendanceCounts::default(), |mut acc, r| {
            match r.status {
                AttendanceStatus::Present => acc.present += 1,
                AttendanceStatus::Absent => acc.absent += 1,
            }
            acc
        })
}

/// Present / absent marks of a single employee.
pub fn employee_counts(employee: &Employee) -> AttendanceCounts {
    tally(&employee.attendance_history)
}

/// Present / absent marks across the whole roster.
/// Recomputed from the stored histories on every call.
pub fn global_counts(roster: &Roster) -> AttendanceCounts {
    roster
        .list_employees()
        .iter()
        .map(employee_counts)
        .fold(AttendanceCounts::default(), |acc, c| acc + c)
}
