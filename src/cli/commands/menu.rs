use crate::config::Config;
use crate::core::menu::MenuLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    MenuLogic::run(&mut pool, cfg)
}
