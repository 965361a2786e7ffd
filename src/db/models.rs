//! Database row models.
//! These are thin wrappers around SQLite rows.

#[derive(Debug, Clone)]
pub struct DbLogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}
