// src/export/logic.rs

use crate::core::roster::Roster;
use crate::errors::{AppError, AppResult};
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::roster_to_rows;
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the roster.
    ///
    /// - `csv`: one row per mark (position, name, date, status)
    /// - `json`: the whole roster, importable as a slot value
    ///
    /// `file` must be an absolute path.
    pub fn export(roster: &Roster, format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        if roster.is_empty() {
            warning("Roster is empty, exporting an empty file.");
        }

        match format {
            ExportFormat::Csv => {
                let rows = roster_to_rows(roster);
                export_csv(&rows, path)?;
                notify_export_success("CSV", rows.len(), path);
            }
            ExportFormat::Json => {
                export_json(roster, path)?;
                notify_export_success("JSON", roster.len(), path);
            }
        }

        Ok(())
    }
}
