use chrono::Local;
use std::fmt::Write;

use crate::errors::{AppError, AppResult};

/// Today's day key in the host's local calendar, formatted with `format`
/// (strftime syntax). An invalid format is reported instead of panicking.
pub fn today_key(format: &str) -> AppResult<String> {
    let mut out = String::new();
    write!(out, "{}", Local::now().format(format))
        .map_err(|_| AppError::Config(format!("Invalid date_format: {}", format)))?;
    Ok(out)
}

/// Caller-supplied key wins over today's; blank keys are ignored.
pub fn resolve_day_key(explicit: Option<&str>, format: &str) -> AppResult<String> {
    match explicit.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => Ok(d.to_string()),
        None => today_key(format),
    }
}
