// src/export/model.rs

use serde::Serialize;

use crate::core::roster::Roster;

/// Flat row exported for every mark.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct MarkExport {
    pub position: usize,
    pub name: String,
    pub date: String,
    pub status: String,
}

/// CSV header, same order as the struct fields.
pub(crate) fn get_headers() -> [&'static str; 4] {
    ["position", "name", "date", "status"]
}

/// Flatten the roster: roster order, then marking order.
pub(crate) fn roster_to_rows(roster: &Roster) -> Vec<MarkExport> {
    roster
        .iter()
        .flat_map(|(r, e)| {
            e.attendance_history.iter().map(move |rec| MarkExport {
                position: r.index(),
                name: e.name.clone(),
                date: rec.date.clone(),
                status: rec.status.as_str().to_string(),
            })
        })
        .collect()
}
