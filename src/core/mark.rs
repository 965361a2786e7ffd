use crate::config::Config;
use crate::core::session;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{AttendanceRecord, AttendanceStatus};
use crate::ui::messages::success;
use crate::utils::colors::colorize_status;
use crate::utils::date::resolve_day_key;

/// High-level business logic for the `mark` command.
pub struct MarkLogic;

impl MarkLogic {
    /// Mark `status` for the employee matched by `selector` (position or
    /// exact name). The day key defaults to today in `cfg.date_format`.
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        selector: &str,
        status: AttendanceStatus,
        date: Option<&str>,
    ) -> AppResult<AttendanceRecord> {
        let mut roster = session::load_roster(pool, cfg)?;

        let day = resolve_day_key(date, &cfg.date_format)?;
        let emp_ref = roster.resolve(selector);

        roster.mark_attendance(emp_ref, status, &day)?;
        session::flush(pool, &roster)?;

        // mark_attendance only succeeds on a resolved reference
        let name = match emp_ref {
            Some(r) => roster.get_employee(r)?.name.clone(),
            None => selector.to_string(),
        };

        audit(
            &pool.conn,
            "mark",
            &name,
            &format!("{} was {} on {}", name, status, day),
        );
        success(format!("{} was {} on {}", name, colorize_status(status), day));

        Ok(AttendanceRecord::new(day, status))
    }
}
