//! Unified application error type.
//! Roster, persistence, db and cli code all return AppError so the binary
//! has a single place where failures are reported.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Roster errors
    // ---------------------------
    #[error("Please enter a valid name.")]
    BlankName,

    #[error("Employee already exists: {0}")]
    DuplicateEmployee(String),

    #[error("Please select an employee.")]
    NoEmployeeSelected,

    #[error("Attendance already marked for {name} on {date}")]
    DuplicateMark { name: String, date: String },

    #[error("No employee at position {0}")]
    NotFound(usize),

    #[error("Invalid attendance status: {0} (expected 'present' or 'absent')")]
    InvalidStatus(String),

    // ---------------------------
    // Persistence errors
    // ---------------------------
    #[error("Stored roster is corrupt: {0}")]
    CorruptPersistentState(String),

    #[error("Failed to persist roster: {0}")]
    PersistenceWriteFailed(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
