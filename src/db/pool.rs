//! SQLite connection wrapper (lightweight for CLI usage).

use rusqlite::{Connection, Result};
use std::fs;

use crate::utils::path::expand_tilde;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file, creating its parent directory
    /// when missing.
    pub fn new(path: &str) -> Result<Self> {
        let path = expand_tilde(path);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            // a failure here surfaces as a CannotOpen error from sqlite
            let _ = fs::create_dir_all(parent);
        }
        let conn = Connection::open(&path)?;
        Ok(Self { conn })
    }

    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }
}
