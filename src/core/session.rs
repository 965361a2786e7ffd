//! Start-of-command plumbing: open the database, rehydrate the roster,
//! and flush it back after a mutation.

use crate::config::Config;
use crate::core::roster::Roster;
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::persistence::{self, SlotStore, USERS_SLOT};
use crate::ui::messages::warning;

/// Slot receiving a copy of an unparsable roster before it is replaced.
pub const CORRUPT_BACKUP_SLOT: &str = "users.corrupt";

/// Open the configured database and bring its schema up to date.
pub fn open(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// Load the roster according to the configured policies, reporting and
/// auditing anything unusual found on the way.
pub fn load_roster(pool: &mut DbPool, cfg: &Config) -> AppResult<Roster> {
    let outcome = persistence::load_with_policy(&*pool, &cfg.persistence_options())?;

    if let Some(reason) = &outcome.discarded_corrupt {
        if let Some(raw) = pool.read(USERS_SLOT)? {
            pool.write(CORRUPT_BACKUP_SLOT, &raw)?;
        }
        warning(format!(
            "Stored roster could not be read ({}). Starting from an empty roster; \
             the unreadable data was copied to slot '{}'.",
            reason, CORRUPT_BACKUP_SLOT
        ));
        audit(&pool.conn, "load", USERS_SLOT, &format!("Corrupt roster discarded: {}", reason));
    }

    if !outcome.issues.is_empty() {
        match outcome.repaired {
            Some((emps, recs)) => {
                persistence::save(pool, &outcome.roster)?;
                let msg = format!(
                    "Repaired stored roster: removed {} employee(s) and {} mark(s)",
                    emps, recs
                );
                warning(&msg);
                audit(&pool.conn, "repair", USERS_SLOT, &msg);
            }
            None => warning(format!(
                "Stored roster has {} integrity issue(s); run `rattendance db --check` for details.",
                outcome.issues.len()
            )),
        }
    }

    Ok(outcome.roster)
}

/// Persist the roster after a successful mutation.
pub fn flush(pool: &mut DbPool, roster: &Roster) -> AppResult<()> {
    persistence::save(pool, roster)
}
