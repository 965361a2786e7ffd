use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut pool = session::open(cfg)?;
        let roster = session::load_roster(&mut pool, cfg)?;
        ExportLogic::export(&roster, *format, file, *force)?;
    }
    Ok(())
}
