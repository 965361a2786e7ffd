//! ANSI color helper utilities for terminal output.

use crate::models::AttendanceStatus;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// present → green, absent → red
pub fn color_for_status(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => GREEN,
        AttendanceStatus::Absent => RED,
    }
}

pub fn colorize_status(status: AttendanceStatus) -> String {
    format!("{}{}{}", color_for_status(status), status, RESET)
}
