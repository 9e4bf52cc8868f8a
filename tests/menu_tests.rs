use predicates::str::contains;

mod common;
use common::{count_entries, init_test_db, rwl, setup_test_db};

#[test]
fn test_menu_quits_cleanly() {
    let db_path = setup_test_db("menu_quit");
    init_test_db(&db_path);

    rwl()
        .args(["--db", &db_path, "menu"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(contains("Main Menu"))
        .stdout(contains("Thank you for using rWorklog!"));
}

#[test]
fn test_menu_add_then_quit() {
    let db_path = setup_test_db("menu_add");
    init_test_db(&db_path);

    rwl()
        .args(["--db", &db_path, "menu"])
        .write_stdin("a\n12/25/2016\nBrian Weber\nSurfing\n120\n\ny\nq\n")
        .assert()
        .success()
        .stdout(contains("Add New Entry"))
        .stdout(contains("Entry saved successfully!"))
        .stdout(contains("Thank you for using rWorklog!"));

    assert_eq!(count_entries(&db_path), 1);
}

#[test]
fn test_menu_reaches_search_menu_and_back() {
    let db_path = setup_test_db("menu_search_back");
    init_test_db(&db_path);

    rwl()
        .args(["--db", &db_path, "menu"])
        .write_stdin("s\nq\nq\n")
        .assert()
        .success()
        .stdout(contains("Search Menu"))
        .stdout(contains("Thank you for using rWorklog!"));
}

#[test]
fn test_menu_rejects_unknown_choice() {
    let db_path = setup_test_db("menu_bad_choice");
    init_test_db(&db_path);

    rwl()
        .args(["--db", &db_path, "menu"])
        .write_stdin("z\nq\n")
        .assert()
        .success()
        .stdout(contains("Invalid choice."));
}
