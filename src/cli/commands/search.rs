use crate::config::Config;
use crate::core::search::SearchLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    SearchLogic::run(&mut pool, cfg)
}
