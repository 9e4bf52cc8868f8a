use chrono::NaiveDate;
use rusqlite::Connection;
use rworklog::core::disambiguate::distinct_names;
use rworklog::core::query;
use rworklog::db::initialize::init_db;
use rworklog::db::queries;
use rworklog::errors::AppError;
use rworklog::models::entry::NewEntry;
use rworklog::models::field::FieldEdit;
use rworklog::models::query::SearchQuery;

fn date(iso: &str) -> NaiveDate {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").expect("iso date")
}

fn test_conn() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    init_db(&conn).expect("init db");
    conn
}

fn seed(conn: &Connection, employee: &str, task: &str, notes: Option<&str>, iso: &str) -> i64 {
    queries::insert_entry(
        conn,
        &NewEntry::new(
            employee.to_string(),
            task.to_string(),
            60,
            notes.map(str::to_string),
            date(iso),
        ),
    )
    .expect("insert entry")
}

#[test]
fn results_are_date_descending_with_stable_ties() {
    let conn = test_conn();
    let a = seed(&conn, "Brian Weber", "Surfing", None, "2016-12-23");
    let b = seed(&conn, "Brian Weber", "Waxing", None, "2016-12-25");
    let c = seed(&conn, "Brian Weber", "Paddling", None, "2016-12-25");

    let found = query::execute(&conn, &SearchQuery::NameContains("Weber".into())).unwrap();
    let ids: Vec<i64> = found.iter().map(|e| e.id).collect();

    // Newest date first; same-date entries keep insertion order.
    assert_eq!(ids, vec![b, c, a]);
}

#[test]
fn exact_name_does_not_match_substrings() {
    let conn = test_conn();
    seed(&conn, "Brian Weber", "Surfing", None, "2016-12-25");

    let found = query::execute(&conn, &SearchQuery::ExactName("Weber".into())).unwrap();
    assert!(found.is_empty());

    let found = query::execute(&conn, &SearchQuery::ExactName("Brian Weber".into())).unwrap();
    assert_eq!(found.len(), 1);
}

#[test]
fn substring_name_match_is_case_sensitive() {
    let conn = test_conn();
    seed(&conn, "Brian Weber", "Surfing", None, "2016-12-25");

    assert!(
        query::execute(&conn, &SearchQuery::NameContains("weber".into()))
            .unwrap()
            .is_empty()
    );
    assert_eq!(
        query::execute(&conn, &SearchQuery::NameContains("Weber".into()))
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn exact_date_matches_only_that_day() {
    let conn = test_conn();
    seed(&conn, "Brian Weber", "Surfing", None, "2016-12-25");
    seed(&conn, "Brian Weber", "Waxing", None, "2016-12-24");

    let found = query::execute(&conn, &SearchQuery::ExactDate(date("2016-12-25"))).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].task_name, "Surfing");
}

#[test]
fn date_range_is_inclusive_on_both_bounds() {
    let conn = test_conn();
    seed(&conn, "Brian Weber", "Surfing", None, "2016-12-25");

    let q = SearchQuery::DateRange {
        start: date("2016-12-25"),
        end: date("2016-12-25"),
    };
    assert_eq!(query::execute(&conn, &q).unwrap().len(), 1);
}

#[test]
fn date_range_before_the_entry_is_empty() {
    let conn = test_conn();
    seed(&conn, "Brian Weber", "Surfing", None, "2016-12-25");

    let q = SearchQuery::DateRange {
        start: date("2016-12-01"),
        end: date("2016-12-24"),
    };
    assert!(query::execute(&conn, &q).unwrap().is_empty());
}

#[test]
fn inverted_date_range_is_rejected() {
    let conn = test_conn();
    let q = SearchQuery::DateRange {
        start: date("2016-12-24"),
        end: date("2016-12-01"),
    };
    assert!(matches!(
        query::execute(&conn, &q),
        Err(AppError::InvalidRange { .. })
    ));
}

#[test]
fn keyword_searches_task_names_and_notes() {
    let conn = test_conn();
    seed(&conn, "Brian Weber", "Surfing", None, "2016-12-25");
    seed(
        &conn,
        "Bobby Weber",
        "Waxing",
        Some("Hang ten dude!"),
        "2016-12-24",
    );

    let found = query::execute(&conn, &SearchQuery::Keyword("Surf".into())).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].task_name, "Surfing");

    let found = query::execute(&conn, &SearchQuery::Keyword("ten dude".into())).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].task_name, "Waxing");

    // Case matters, and entries without notes must not trip the filter.
    assert!(
        query::execute(&conn, &SearchQuery::Keyword("surfing".into()))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn distinct_names_keep_first_seen_order() {
    let conn = test_conn();
    seed(&conn, "Brian Weber", "Surfing", None, "2016-12-25");
    seed(&conn, "Bobby Weber", "Waxing", None, "2016-12-24");
    seed(&conn, "Brian Weber", "Paddling", None, "2016-12-23");

    let found = query::execute(&conn, &SearchQuery::NameContains("Weber".into())).unwrap();
    assert_eq!(
        distinct_names(&found),
        vec!["Brian Weber".to_string(), "Bobby Weber".to_string()]
    );
}

#[test]
fn field_edit_touches_exactly_one_column() {
    let conn = test_conn();
    let id = seed(
        &conn,
        "Brian Weber",
        "Surfing",
        Some("These are my notes."),
        "2016-12-25",
    );

    queries::apply_field_edit(&conn, id, &FieldEdit::Minutes(45)).unwrap();

    let e = queries::load_entry(&conn, id).unwrap().unwrap();
    assert_eq!(e.minutes, 45);
    assert_eq!(e.employee_name, "Brian Weber");
    assert_eq!(e.task_name, "Surfing");
    assert_eq!(e.notes.as_deref(), Some("These are my notes."));
    assert_eq!(e.date, date("2016-12-25"));
}

#[test]
fn mutations_on_missing_ids_report_not_found() {
    let conn = test_conn();
    assert!(matches!(
        queries::apply_field_edit(&conn, 999, &FieldEdit::Minutes(1)),
        Err(AppError::NotFound(999))
    ));
    assert!(matches!(
        queries::delete_entry(&conn, 999),
        Err(AppError::NotFound(999))
    ));
}
