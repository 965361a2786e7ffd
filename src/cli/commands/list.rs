use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::session;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::presence_rate;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::List) {
        let mut pool = session::open(cfg)?;
        let roster = session::load_roster(&mut pool, cfg)?;

        if roster.is_empty() {
            info("No employees yet. Use `rattendance add <name>` to add one.");
            return Ok(());
        }

        let overview = Core::build_overview(&roster);

        header(format!("Employees ({})", overview.rows.len()), &cfg.separator_char);

        let mut table = Table::new(vec![
            Column::right("#"),
            Column::left("Name"),
            Column::right("Present"),
            Column::right("Absent"),
            Column::right("Rate"),
        ]);

        for row in &overview.rows {
            table.add_row(vec![
                row.employee.index().to_string(),
                row.name.clone(),
                row.counts.present.to_string(),
                row.counts.absent.to_string(),
                presence_rate(&row.counts),
            ]);
        }

        print!("{}", table.render(&cfg.separator_char));
    }

    Ok(())
}
