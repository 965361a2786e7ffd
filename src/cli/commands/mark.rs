use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::mark::MarkLogic;
use crate::core::session;
use crate::errors::{AppError, AppResult};
use crate::models::AttendanceStatus;

/// Record today's (or `--date`) status for one employee.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark {
        employee,
        status,
        date,
    } = cmd
    {
        let status = AttendanceStatus::from_token(status)
            .ok_or_else(|| AppError::InvalidStatus(status.to_string()))?;

        let mut pool = session::open(cfg)?;
        MarkLogic::apply(&mut pool, cfg, employee, status, date.as_deref())?;
    }

    Ok(())
}
