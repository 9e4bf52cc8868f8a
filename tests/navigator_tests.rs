use chrono::NaiveDate;
use rworklog::core::navigate::{NavCommand, Navigator};
use rworklog::models::entry::Entry;
use rworklog::models::field::FieldEdit;

fn entry(id: i64, iso: &str) -> Entry {
    Entry {
        id,
        employee_name: "Brian Weber".to_string(),
        task_name: "Surfing".to_string(),
        minutes: 120,
        notes: None,
        date: NaiveDate::parse_from_str(iso, "%Y-%m-%d").expect("iso date"),
        created_at: String::new(),
    }
}

fn three_results() -> Navigator {
    Navigator::new(vec![
        entry(1, "2016-12-25"),
        entry(2, "2016-12-24"),
        entry(3, "2016-12-23"),
    ])
    .expect("non-empty")
}

#[test]
fn empty_result_set_has_no_navigator() {
    assert!(Navigator::new(Vec::new()).is_none());
}

#[test]
fn single_result_never_offers_paging() {
    let nav = Navigator::new(vec![entry(1, "2016-12-25")]).expect("non-empty");

    let options = nav.options();
    assert!(!options.contains(&NavCommand::Previous));
    assert!(!options.contains(&NavCommand::Next));
    assert_eq!(
        options,
        vec![NavCommand::Edit, NavCommand::Delete, NavCommand::Quit]
    );
}

#[test]
fn paging_is_boundary_aware() {
    let mut nav = three_results();

    // Front of the set: no previous.
    assert!(!nav.is_legal(NavCommand::Previous));
    assert!(nav.is_legal(NavCommand::Next));
    assert!(!nav.move_back());
    assert_eq!(nav.cursor(), 0);

    // Middle: both directions.
    assert!(nav.move_forward());
    assert!(nav.is_legal(NavCommand::Previous));
    assert!(nav.is_legal(NavCommand::Next));

    // End of the set: no next.
    assert!(nav.move_forward());
    assert_eq!(nav.cursor(), 2);
    assert!(!nav.is_legal(NavCommand::Next));
    assert!(!nav.move_forward());

    // Edit, delete and quit stay legal everywhere.
    assert!(nav.is_legal(NavCommand::Edit));
    assert!(nav.is_legal(NavCommand::Delete));
    assert!(nav.is_legal(NavCommand::Quit));
}

#[test]
fn displayed_entry_follows_the_cursor() {
    let mut nav = three_results();
    assert_eq!(nav.current().id, 1);
    nav.move_forward();
    assert_eq!(nav.current().id, 2);
    nav.move_back();
    assert_eq!(nav.current().id, 1);
}

#[test]
fn removing_the_last_position_clamps_the_cursor() {
    let mut nav = three_results();
    nav.move_forward();
    nav.move_forward();
    assert_eq!(nav.cursor(), 2);

    let removed = nav.remove_current();
    assert_eq!(removed.id, 3);
    assert_eq!(nav.len(), 2);
    assert_eq!(nav.cursor(), 1);
    assert_eq!(nav.current().id, 2);
}

#[test]
fn removing_in_the_middle_keeps_the_cursor_position() {
    let mut nav = three_results();
    nav.move_forward();

    let removed = nav.remove_current();
    assert_eq!(removed.id, 2);
    assert_eq!(nav.len(), 2);
    assert_eq!(nav.cursor(), 1);
    assert_eq!(nav.current().id, 3);
}

#[test]
fn removing_every_entry_empties_the_set() {
    let mut nav = three_results();
    nav.remove_current();
    nav.remove_current();
    assert!(!nav.is_empty());
    nav.remove_current();
    assert!(nav.is_empty());
}

#[test]
fn edits_are_mirrored_in_place() {
    let mut nav = three_results();
    nav.move_forward();
    nav.apply_current(&FieldEdit::TaskName("Snowboarding".to_string()));

    assert_eq!(nav.current().task_name, "Snowboarding");
    assert_eq!(nav.len(), 3);
    assert_eq!(nav.cursor(), 1);
}

#[test]
fn command_parsing_accepts_keys_and_words() {
    assert_eq!(NavCommand::from_input("p"), Some(NavCommand::Previous));
    assert_eq!(NavCommand::from_input("NEXT"), Some(NavCommand::Next));
    assert_eq!(NavCommand::from_input("e"), Some(NavCommand::Edit));
    assert_eq!(NavCommand::from_input("delete"), Some(NavCommand::Delete));
    assert_eq!(NavCommand::from_input("Q"), Some(NavCommand::Quit));
    assert_eq!(NavCommand::from_input("x"), None);
    assert_eq!(NavCommand::from_input(""), None);
}
