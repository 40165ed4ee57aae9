use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{open_db, sample_report, sd, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    sd().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_init_is_idempotent() {
    let db_path = setup_test_db("cli_init_twice");

    sd().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    sd().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
}

#[test]
fn test_list_empty_database() {
    let db_path = setup_test_db("cli_list_empty");

    sd().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sd().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("No submissions found."));
}

#[test]
fn test_list_shows_stored_submissions() {
    let db_path = setup_test_db("cli_list_filled");

    {
        let mut conn = open_db(&db_path);
        let report = sample_report("12 - 03-06-26", "2026-06-03");
        shiftdocket::db::queries::upsert_submission(&mut conn, &report).unwrap();
    }

    sd().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("12 - 03-06-26"))
        .stdout(contains("Dana Reeve"))
        .stdout(contains("1 submission(s)"));
}

#[test]
fn test_list_filters_by_date() {
    let db_path = setup_test_db("cli_list_by_date");

    {
        let mut conn = open_db(&db_path);
        let first = sample_report("12 - 03-06-26", "2026-06-03");
        let second = sample_report("12 - 04-06-26", "2026-06-04");
        shiftdocket::db::queries::upsert_submission(&mut conn, &first).unwrap();
        shiftdocket::db::queries::upsert_submission(&mut conn, &second).unwrap();
    }

    sd().args(["--db", &db_path, "--test", "list", "--date", "2026-06-04"])
        .assert()
        .success()
        .stdout(contains("12 - 04-06-26"))
        .stdout(contains("12 - 03-06-26").not());
}

#[test]
fn test_list_rejects_malformed_date() {
    let db_path = setup_test_db("cli_list_bad_date");

    sd().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sd().args(["--db", &db_path, "--test", "list", "--date", "04-06-2026"])
        .assert()
        .failure();
}

#[test]
fn test_db_migrate_and_check() {
    let db_path = setup_test_db("cli_db_maintenance");

    sd().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sd().args(["--db", &db_path, "--test", "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed."));

    sd().args(["--db", &db_path, "--test", "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed."));

    sd().args(["--db", &db_path, "--test", "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Vacuum completed."));

    sd().args(["--db", &db_path, "--test", "db", "--info"])
        .assert()
        .success();
}

#[test]
fn test_config_check_reports_fields() {
    let db_path = setup_test_db("cli_config_check");

    sd().args(["--db", &db_path, "--test", "config", "--check"])
        .assert()
        .success()
        .stdout(contains("bind_addr"))
        .stdout(contains("inventory_api_base"));
}
