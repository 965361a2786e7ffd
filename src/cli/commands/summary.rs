use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::session;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::formatting::{chart_bar, presence_rate};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { log } = cmd {
        let mut pool = session::open(cfg)?;
        let roster = session::load_roster(&mut pool, cfg)?;
        let overview = Core::build_overview(&roster);
        let totals = overview.totals;

        header("Attendance summary", &cfg.separator_char);
        println!("Employees: {}", overview.rows.len());
        println!("Present: {}", totals.present);
        println!("Absent: {}", totals.absent);
        println!("Presence rate: {}", presence_rate(&totals));
        println!("Chart data: {}", chart_bar(&totals, 20));

        if *log {
            println!();
            println!("Summary log:");
            for line in roster.summary_log() {
                println!(
                    "  {}{}{}",
                    color_for_status(line.status),
                    line.sentence(),
                    RESET
                );
            }
        }
    }

    Ok(())
}
