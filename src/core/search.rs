//! Search menu: pick a mode, collect its parameters, run the query engine
//! and hand any hits to the navigator.

use crate::config::Config;
use crate::core::navigate::NavigateLogic;
use crate::core::{disambiguate, query};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::query::SearchQuery;
use crate::ui::messages::{info, menu_title, warning};
use crate::ui::prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    Employee,
    Date,
    Range,
    Keyword,
    Back,
}

impl SearchMode {
    fn from_input(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "e" => Some(Self::Employee),
            "d" => Some(Self::Date),
            "r" => Some(Self::Range),
            "k" => Some(Self::Keyword),
            "q" => Some(Self::Back),
            _ => None,
        }
    }
}

/// What to do once a search mode finishes.
enum AfterSearch {
    /// Show the search menu again.
    Menu,
    /// Leave the search menu (back to the caller, or EOF).
    Exit,
}

pub struct SearchLogic;

impl SearchLogic {
    pub fn run(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
        loop {
            menu_title("Search Menu");
            println!("e) Find by employee name");
            println!("d) Find by exact date");
            println!("r) Find by date range");
            println!("k) Find by keyword");
            println!("q) Return");

            let Some(choice) = prompt::read_line("\nEnter a choice: ")? else {
                return Ok(());
            };

            let Some(mode) = SearchMode::from_input(&choice) else {
                warning("Invalid choice.");
                continue;
            };

            if mode == SearchMode::Back {
                return Ok(());
            }

            match Self::run_mode(pool, cfg, mode)? {
                AfterSearch::Menu => continue,
                AfterSearch::Exit => return Ok(()),
            }
        }
    }

    fn run_mode(pool: &mut DbPool, cfg: &Config, mode: SearchMode) -> AppResult<AfterSearch> {
        let found = match mode {
            SearchMode::Employee => {
                let Some(text) = prompt::read_nonempty(
                    "Enter an employee name to search for: ",
                    "You must enter a name!",
                )?
                else {
                    return Ok(AfterSearch::Exit);
                };

                let found = query::execute(&pool.conn, &SearchQuery::NameContains(text))?;
                if found.is_empty() {
                    return Self::no_matches();
                }

                // A substring hitting several employees needs an exact pick
                // before anything is shown.
                match disambiguate::resolve(pool, found)? {
                    Some(resolved) => resolved,
                    None => return Ok(AfterSearch::Exit),
                }
            }
            SearchMode::Date => {
                let Some(d) = prompt::read_date("Enter a date (MM/DD/YYYY): ")? else {
                    return Ok(AfterSearch::Exit);
                };
                query::execute(&pool.conn, &SearchQuery::ExactDate(d))?
            }
            SearchMode::Range => match Self::read_range(pool)? {
                Some(found) => found,
                None => return Ok(AfterSearch::Exit),
            },
            SearchMode::Keyword => {
                let Some(text) = prompt::read_nonempty(
                    "Enter a keyword to search task names and notes: ",
                    "You must enter a keyword!",
                )?
                else {
                    return Ok(AfterSearch::Exit);
                };
                query::execute(&pool.conn, &SearchQuery::Keyword(text))?
            }
            SearchMode::Back => unreachable!("handled by the menu loop"),
        };

        if found.is_empty() {
            return Self::no_matches();
        }

        NavigateLogic::run(pool, cfg, found)?;
        Ok(AfterSearch::Menu)
    }

    /// Prompt both bounds, re-prompting the pair whenever the engine
    /// rejects the range (end earlier than start).
    fn read_range(pool: &mut DbPool) -> AppResult<Option<Vec<Entry>>> {
        loop {
            let Some(start) = prompt::read_date("Enter a start date (MM/DD/YYYY): ")? else {
                return Ok(None);
            };
            let Some(end) = prompt::read_date("Enter an end date (MM/DD/YYYY): ")? else {
                return Ok(None);
            };

            match query::execute(&pool.conn, &SearchQuery::DateRange { start, end }) {
                Ok(found) => return Ok(Some(found)),
                Err(AppError::InvalidRange { .. }) => {
                    warning("The end date is earlier than the start date. Enter both again.");
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Uniform empty-result policy for every search mode.
    fn no_matches() -> AppResult<AfterSearch> {
        info("No entries matched your search.");
        loop {
            let Some(answer) = prompt::read_line("[S]earch again or [R]eturn: ")? else {
                return Ok(AfterSearch::Exit);
            };
            match answer.to_lowercase().as_str() {
                "s" => return Ok(AfterSearch::Menu),
                "r" => return Ok(AfterSearch::Exit),
                _ => warning("Invalid command."),
            }
        }
    }
}
