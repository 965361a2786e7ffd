use crate::errors::AppResult;
use crate::export::model::{MarkExport, get_headers};
use csv::Writer;
use std::path::Path;

/// Write one CSV row per mark.
pub fn export_csv(rows: &[MarkExport], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for r in rows {
        wtr.write_record([
            r.position.to_string(),
            r.name.clone(),
            r.date.clone(),
            r.status.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
