//! Key-value slot table backing the roster snapshot.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// Read the value stored under `key`, `None` if never written.
pub fn read_slot(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM slots WHERE key = ?1", [key], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(value)
}

/// Insert or fully overwrite the value stored under `key`.
pub fn write_slot(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, now],
    )?;
    Ok(())
}

/// Size in bytes and last write time of a slot.
pub fn slot_info(conn: &Connection, key: &str) -> AppResult<Option<(usize, String)>> {
    let info = conn
        .query_row(
            "SELECT length(value), updated_at FROM slots WHERE key = ?1",
            [key],
            |row| Ok((row.get::<_, i64>(0)? as usize, row.get::<_, String>(1)?)),
        )
        .optional()?;
    Ok(info)
}
