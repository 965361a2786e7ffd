use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::session;
use crate::errors::AppResult;

/// Add an employee to the roster.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name, photo } = cmd {
        let mut pool = session::open(cfg)?;
        AddLogic::apply(&mut pool, cfg, name, photo.as_deref())?;
    }

    Ok(())
}
