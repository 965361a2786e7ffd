use crate::core::roster::Roster;
use crate::errors::AppResult;
use std::path::Path;

/// Write the roster as pretty JSON, in the same layout as the stored slot.
pub fn export_json(roster: &Roster, path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(roster.list_employees())?;
    std::fs::write(path, json)?;
    Ok(())
}
