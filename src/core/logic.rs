use crate::core::calculator::{employee_counts, global_counts};
use crate::core::roster::Roster;
use crate::models::{AttendanceCounts, EmployeeRef};

/// One row of the employee list: who, and how often present/absent.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeOverview {
    pub employee: EmployeeRef,
    pub name: String,
    pub photo: String,
    pub counts: AttendanceCounts,
}

/// Everything the list and summary views render, computed in one pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterOverview {
    pub rows: Vec<EmployeeOverview>,
    pub totals: AttendanceCounts,
}

pub struct Core;

impl Core {
    pub fn build_overview(roster: &Roster) -> RosterOverview {
        let rows = roster
            .iter()
            .map(|(r, e)| EmployeeOverview {
                employee: r,
                name: e.name.clone(),
                photo: e.photo.clone(),
                counts: employee_counts(e),
            })
            .collect();

        RosterOverview {
            rows,
            totals: global_counts(roster),
        }
    }
}
