use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    AddLogic::run(&mut pool)
}
