use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::employee_counts;
use crate::core::roster::Roster;
use crate::core::session;
use crate::errors::{AppError, AppResult};
use crate::models::EmployeeRef;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET, colorize_status};
use crate::utils::formatting::{chart_bar, presence_rate};

/// A numeric selector that is out of range is a bad reference; an unknown
/// name means nobody was selected.
fn select(roster: &Roster, selector: &str) -> AppResult<EmployeeRef> {
    if let Some(r) = roster.resolve(selector) {
        return Ok(r);
    }
    match selector.trim().parse::<usize>() {
        Ok(idx) => Err(AppError::NotFound(idx)),
        Err(_) => Err(AppError::NoEmployeeSelected),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { employee } = cmd {
        let mut pool = session::open(cfg)?;
        let roster = session::load_roster(&mut pool, cfg)?;

        let emp_ref = select(&roster, employee)?;
        let emp = roster.get_employee(emp_ref)?;
        let counts = employee_counts(emp);

        header(format!("Employee {}: {}", emp_ref, emp.name), &cfg.separator_char);
        println!("Photo: {}", emp.photo);
        println!("Present: {}", counts.present);
        println!("Absent: {}", counts.absent);
        println!("Presence rate: {}", presence_rate(&counts));
        println!("Chart data: {}", chart_bar(&counts, 20));
        println!();

        if emp.attendance_history.is_empty() {
            println!("{GREY}No attendance marked yet.{RESET}");
        } else {
            println!("History:");
            for rec in &emp.attendance_history {
                println!("  {:<12} {}", rec.date, colorize_status(rec.status));
            }
        }
    }

    Ok(())
}
