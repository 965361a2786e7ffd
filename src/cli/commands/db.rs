use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::integrity::IntegrityLogic;
use crate::core::session;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        info,
        check,
        repair,
    } = cmd
    {
        let mut pool = session::open(cfg)?;

        //
        // 1) INFO
        //
        if *info {
            let roster = session::load_roster(&mut pool, cfg)?;
            stats::print_db_info(&mut pool, &cfg.database, &roster)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running roster integrity check…{}", CYAN, RESET);
            IntegrityLogic::check(&mut pool)?;
        }

        //
        // 3) REPAIR
        //
        if *repair {
            println!("{}▶ Repairing stored roster…{}", CYAN, RESET);
            IntegrityLogic::repair(&mut pool)?;
        }
    }

    Ok(())
}
