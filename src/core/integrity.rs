use crate::core::roster::{IntegrityIssue, Roster};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::persistence::{self, USERS_SLOT};
use crate::ui::messages::{info, success, warning};

/// Uniqueness checks on the stored roster, independent of the configured
/// load policy.
pub struct IntegrityLogic;

impl IntegrityLogic {
    /// Load the slot as written (no repair) and list every violation.
    pub fn check(pool: &mut DbPool) -> AppResult<Vec<IntegrityIssue>> {
        let roster = persistence::load(&*pool)?;
        let issues = roster.check_integrity();

        if issues.is_empty() {
            success(format!(
                "Roster integrity check passed ({} employees).",
                roster.len()
            ));
        } else {
            warning(format!("{} integrity issue(s) found:", issues.len()));
            for issue in &issues {
                println!("  - {}", issue.describe());
            }
        }

        Ok(issues)
    }

    /// Drop later duplicates and save the result.
    pub fn repair(pool: &mut DbPool) -> AppResult<Roster> {
        let mut roster = persistence::load(&*pool)?;

        if roster.check_integrity().is_empty() {
            info("Nothing to repair.");
            return Ok(roster);
        }

        let (emps, recs) = roster.repair();
        persistence::save(pool, &roster)?;

        let msg = format!(
            "Removed {} employee(s) and {} mark(s) violating uniqueness",
            emps, recs
        );
        audit(&pool.conn, "repair", USERS_SLOT, &msg);
        success(msg);

        Ok(roster)
    }
}
