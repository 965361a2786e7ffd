//! Formatting utilities used for CLI and export outputs.

use crate::models::AttendanceCounts;

/// `75.0%`, or `--` when nothing was marked.
pub fn presence_rate(counts: &AttendanceCounts) -> String {
    match counts.presence_rate() {
        Some(rate) => format!("{:.1}%", rate),
        None => "--".to_string(),
    }
}

/// Text stand-in for the doughnut chart: `[present, absent]` plus a bar of
/// `width` cells split proportionally.
pub fn chart_bar(counts: &AttendanceCounts, width: usize) -> String {
    let [present, absent] = counts.chart_data();
    let total = present + absent;
    if total == 0 || width == 0 {
        return format!("[{}, {}]", present, absent);
    }

    let filled = (present * width + total / 2) / total;
    format!(
        "[{}, {}] {}{}",
        present,
        absent,
        "#".repeat(filled),
        ".".repeat(width - filled)
    )
}
