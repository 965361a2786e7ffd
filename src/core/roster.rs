//! In-memory roster: the single source of truth for employees and their
//! attendance histories.

use std::collections::HashSet;

use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, AttendanceStatus, Employee, EmployeeRef, SummaryLine};

/// Invariant violation found in a roster that was not built through
/// `add_employee` / `mark_attendance` (e.g. a hand-edited slot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// Same name at two positions; `first` is the one that is kept on repair.
    DuplicateName {
        name: String,
        first: EmployeeRef,
        duplicate: EmployeeRef,
    },
    /// Two records with the same day key in one history.
    DuplicateDate { employee: EmployeeRef, date: String },
    /// Name empty after trimming.
    BlankName { employee: EmployeeRef },
}

impl IntegrityIssue {
    pub fn describe(&self) -> String {
        match self {
            IntegrityIssue::DuplicateName {
                name,
                first,
                duplicate,
            } => format!("name '{}' used by {} and {}", name, first, duplicate),
            IntegrityIssue::DuplicateDate { employee, date } => {
                format!("{} has more than one mark on {}", employee, date)
            }
            IntegrityIssue::BlankName { employee } => format!("{} has a blank name", employee),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a roster from already-stored employees. No validation.
    pub fn from_employees(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Append a new employee with an empty history.
    ///
    /// The name is trimmed before the uniqueness check (exact, case-sensitive).
    /// A missing or blank photo falls back to `default_photo`.
    pub fn add_employee(
        &mut self,
        name: &str,
        photo: Option<&str>,
        default_photo: &str,
    ) -> AppResult<EmployeeRef> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BlankName);
        }
        if self.find_by_name(name).is_some() {
            return Err(AppError::DuplicateEmployee(name.to_string()));
        }

        let photo = photo
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(default_photo);

        self.employees
            .push(Employee::new(name.to_string(), photo.to_string()));
        Ok(EmployeeRef(self.employees.len() - 1))
    }

    /// Record `status` for the selected employee on `date`.
    ///
    /// Selection is checked before the duplicate-day rule.
    pub fn mark_attendance(
        &mut self,
        employee: Option<EmployeeRef>,
        status: AttendanceStatus,
        date: &str,
    ) -> AppResult<()> {
        let emp = employee
            .and_then(|r| self.employees.get_mut(r.index()))
            .ok_or(AppError::NoEmployeeSelected)?;

        if emp.has_record_for(date) {
            return Err(AppError::DuplicateMark {
                name: emp.name.clone(),
                date: date.to_string(),
            });
        }

        emp.attendance_history
            .push(AttendanceRecord::new(date, status));
        Ok(())
    }

    pub fn get_employee(&self, employee: EmployeeRef) -> AppResult<&Employee> {
        self.employees
            .get(employee.index())
            .ok_or(AppError::NotFound(employee.index()))
    }

    /// Read-only view in append order.
    pub fn list_employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmployeeRef, &Employee)> {
        self.employees
            .iter()
            .enumerate()
            .map(|(i, e)| (EmployeeRef(i), e))
    }

    pub fn find_by_name(&self, name: &str) -> Option<EmployeeRef> {
        let name = name.trim();
        self.employees
            .iter()
            .position(|e| e.name == name)
            .map(EmployeeRef)
    }

    /// Turn a user token into a reference: a position if the token is all
    /// digits and in range, otherwise an exact name.
    pub fn resolve(&self, selector: &str) -> Option<EmployeeRef> {
        let selector = selector.trim();
        if selector.is_empty() {
            return None;
        }

        if let Ok(idx) = selector.parse::<usize>()
            && idx < self.employees.len()
        {
            return Some(EmployeeRef(idx));
        }

        self.find_by_name(selector)
    }

    /// Every (name, date, status) triple, in roster order then marking order.
    pub fn summary_log(&self) -> Vec<SummaryLine> {
        self.employees
            .iter()
            .flat_map(|e| {
                e.attendance_history.iter().map(move |r| SummaryLine {
                    name: e.name.clone(),
                    date: r.date.clone(),
                    status: r.status,
                })
            })
            .collect()
    }

    pub fn check_integrity(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();

        for (i, emp) in self.employees.iter().enumerate() {
            if emp.name.trim().is_empty() {
                issues.push(IntegrityIssue::BlankName {
                    employee: EmployeeRef(i),
                });
            }

            if let Some(first) = self.employees[..i].iter().position(|e| e.name == emp.name) {
                issues.push(IntegrityIssue::DuplicateName {
                    name: emp.name.clone(),
                    first: EmployeeRef(first),
                    duplicate: EmployeeRef(i),
                });
            }

            let mut seen = HashSet::new();
            let mut reported = HashSet::new();
            for rec in &emp.attendance_history {
                if !seen.insert(rec.date.as_str()) && reported.insert(rec.date.as_str()) {
                    issues.push(IntegrityIssue::DuplicateDate {
                        employee: EmployeeRef(i),
                        date: rec.date.clone(),
                    });
                }
            }
        }

        issues
    }

    /// Drop blank-named employees, later employees sharing an earlier name,
    /// and later records sharing an earlier day key. Returns the number of
    /// employees and records removed.
    ///
    /// Positions shift after a repair; callers must not hold references
    /// across it.
    pub fn repair(&mut self) -> (usize, usize) {
        let before_emps = self.employees.len();
        let mut dropped_records = 0;

        let mut names = HashSet::new();
        self.employees
            .retain(|e| !e.name.trim().is_empty() && names.insert(e.name.clone()));

        for emp in &mut self.employees {
            let mut days = HashSet::new();
            let before = emp.attendance_history.len();
            emp.attendance_history.retain(|r| days.insert(r.date.clone()));
            dropped_records += before - emp.attendance_history.len();
        }

        (before_emps - self.employees.len(), dropped_records)
    }
}
