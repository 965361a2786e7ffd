use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `slots` table exists.
fn slots_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='slots'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `slots` table has an `updated_at` column.
fn slots_has_updated_at(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('slots')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "updated_at" {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the key-value `slots` table.
fn create_slots_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS slots (
            key        TEXT PRIMARY KEY NOT NULL,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// Databases created by 0.1.x have a two-column `slots` table.
fn migrate_add_updated_at(conn: &Connection) -> Result<(), Error> {
    let version = "20260301_0002_slots_updated_at";

    if migration_applied(conn, version)? || slots_has_updated_at(conn)? {
        return Ok(());
    }

    conn.execute(
        "ALTER TABLE slots ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';",
        [],
    )
    .map_err(|e| {
        Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some(format!("Failed to add 'updated_at' column: {}", e)),
        )
    })?;

    mark_applied(conn, version, "Added updated_at to slots")?;

    success(format!(
        "Migration applied: {} → added 'updated_at' to slots table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) log table first, migrations are recorded there
    ensure_log_table(conn)?;

    // 2) slots table
    if !slots_table_exists(conn)? {
        create_slots_table(conn)?;
        mark_applied(conn, "20260101_0001_create_slots", "Created slots table")?;
        success("Created slots table.");
    } else {
        migrate_add_updated_at(conn)?;
    }

    Ok(())
}
