//! Persistence adapter: whole-roster snapshots in a single durable slot.
//!
//! The roster is written as one JSON array under the `users` key after every
//! mutation and read back at start-up. There is no version field; the
//! layout is
//!
//! ```text
//! [ { "name": "...", "photo": "...", "attendance": [ { "date": "...", "status": "present" } ] } ]
//! ```

mod memory;
mod sqlite;

pub use memory::MemorySlotStore;

use serde::{Deserialize, Serialize};

use crate::core::roster::{IntegrityIssue, Roster};
use crate::errors::{AppError, AppResult};
use crate::models::Employee;

/// Key of the slot holding the roster.
pub const USERS_SLOT: &str = "users";

/// A named key-value location that survives the process.
pub trait SlotStore {
    /// `Ok(None)` when the slot was never written.
    fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the whole value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// What to do when the stored blob cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptPolicy {
    /// Warn and start from an empty roster.
    #[default]
    Empty,
    /// Refuse to continue.
    Halt,
}

/// What to do when the stored roster parses but breaks uniqueness rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidPolicy {
    /// Keep the data as written.
    #[default]
    Trust,
    /// Drop the later duplicates.
    Repair,
    /// Fail with `CorruptPersistentState`.
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistenceOptions {
    pub on_corrupt: CorruptPolicy,
    pub on_invalid: InvalidPolicy,
}

/// Result of a policy-driven load, with everything the caller may want to
/// report or audit.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub roster: Roster,
    /// Parse error of a corrupt slot that was replaced by an empty roster.
    pub discarded_corrupt: Option<String>,
    /// Violations found in the stored data (before any repair).
    pub issues: Vec<IntegrityIssue>,
    /// `(employees, records)` removed by a repair.
    pub repaired: Option<(usize, usize)>,
}

pub fn encode(roster: &Roster) -> AppResult<String> {
    Ok(serde_json::to_string(roster.list_employees())?)
}

pub fn decode(blob: &str) -> AppResult<Roster> {
    let employees: Vec<Employee> = serde_json::from_str(blob)
        .map_err(|e| AppError::CorruptPersistentState(e.to_string()))?;
    Ok(Roster::from_employees(employees))
}

/// Overwrite the slot with a snapshot of the whole roster.
pub fn save<S: SlotStore + ?Sized>(store: &mut S, roster: &Roster) -> AppResult<()> {
    let blob = encode(roster)?;
    store.write(USERS_SLOT, &blob).map_err(|e| match e {
        AppError::PersistenceWriteFailed(_) => e,
        other => AppError::PersistenceWriteFailed(other.to_string()),
    })
}

/// Read the roster back. An absent slot is a first run and yields an empty
/// roster; stored data is trusted as written.
pub fn load<S: SlotStore + ?Sized>(store: &S) -> AppResult<Roster> {
    match store.read(USERS_SLOT)? {
        None => Ok(Roster::new()),
        Some(blob) => decode(&blob),
    }
}

pub fn load_with_policy<S: SlotStore + ?Sized>(
    store: &S,
    opts: &PersistenceOptions,
) -> AppResult<LoadOutcome> {
    let mut roster = match load(store) {
        Ok(r) => r,
        Err(AppError::CorruptPersistentState(reason)) if opts.on_corrupt == CorruptPolicy::Empty => {
            return Ok(LoadOutcome {
                discarded_corrupt: Some(reason),
                ..LoadOutcome::default()
            });
        }
        Err(e) => return Err(e),
    };

    let issues = roster.check_integrity();
    let mut repaired = None;

    if !issues.is_empty() {
        match opts.on_invalid {
            InvalidPolicy::Trust => {}
            InvalidPolicy::Repair => repaired = Some(roster.repair()),
            InvalidPolicy::Reject => {
                let first = issues
                    .first()
                    .map(IntegrityIssue::describe)
                    .unwrap_or_default();
                return Err(AppError::CorruptPersistentState(format!(
                    "{} integrity issue(s), first: {}",
                    issues.len(),
                    first
                )));
            }
        }
    }

    Ok(LoadOutcome {
        roster,
        discarded_corrupt: None,
        issues,
        repaired,
    })
}
