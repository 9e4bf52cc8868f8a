//! Top-level interactive session: the original work-log main menu.

use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::search::SearchLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, menu_title, warning};
use crate::ui::prompt;

#[derive(Debug, Clone, Copy)]
enum MenuChoice {
    Add,
    Search,
    Quit,
}

impl MenuChoice {
    fn from_input(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "a" => Some(Self::Add),
            "s" => Some(Self::Search),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

pub struct MenuLogic;

impl MenuLogic {
    pub fn run(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
        loop {
            menu_title("Main Menu");
            println!("a) Add a new work entry");
            println!("s) Search existing entries");
            println!("q) Quit");

            let Some(choice) = prompt::read_line("\nEnter a choice: ")? else {
                return Ok(());
            };

            match MenuChoice::from_input(&choice) {
                None => warning("Invalid choice."),
                Some(MenuChoice::Add) => AddLogic::run(pool)?,
                Some(MenuChoice::Search) => SearchLogic::run(pool, cfg)?,
                Some(MenuChoice::Quit) => {
                    info("Thank you for using rWorklog!");
                    return Ok(());
                }
            }
        }
    }
}
