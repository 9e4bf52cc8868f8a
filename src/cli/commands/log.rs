use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if *print {
            let mut pool = DbPool::new(&cfg.database)?;
            LogLogic::print_log(&mut pool, cfg)?;
        } else {
            info("Nothing to do: use `log --print` to show the internal log.");
        }
    }
    Ok(())
}
