use crate::config::Config;
use crate::core::session;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::EmployeeRef;
use crate::ui::messages::success;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Add an employee, flush the roster and audit the change.
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        name: &str,
        photo: Option<&str>,
    ) -> AppResult<EmployeeRef> {
        let mut roster = session::load_roster(pool, cfg)?;

        let emp_ref = roster.add_employee(name, photo, &cfg.default_photo)?;
        session::flush(pool, &roster)?;

        let emp = roster.get_employee(emp_ref)?;
        audit(
            &pool.conn,
            "add",
            &emp.name,
            &format!("Employee added at position {}", emp_ref.index()),
        );
        success(format!("Employee '{}' added ({})", emp.name, emp_ref));

        Ok(emp_ref)
    }
}
