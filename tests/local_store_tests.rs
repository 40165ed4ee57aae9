use shiftdocket::core::session::SessionState;
use shiftdocket::errors::AppError;
use shiftdocket::local::store::{LocalStore, OperatorLock};
use shiftdocket::models::reference::Operator;

mod common;
use common::sample_report;

fn store_in(dir: &tempfile::TempDir) -> LocalStore {
    LocalStore::open(&dir.path().join("local_store.json"))
}

fn operators() -> Vec<Operator> {
    vec![
        Operator {
            opkey: 12,
            initial: "DR".to_string(),
            first: "Dana".to_string(),
            last: "Reeve".to_string(),
        },
        Operator {
            opkey: 27,
            initial: "MK".to_string(),
            first: "Mio".to_string(),
            last: "Kato".to_string(),
        },
    ]
}

#[test]
fn test_lock_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    store
        .set_operator_lock(&OperatorLock {
            opkey: 12,
            locked: true,
        })
        .unwrap();

    let reopened = store_in(&dir);
    assert_eq!(
        reopened.operator_lock(),
        Some(OperatorLock {
            opkey: 12,
            locked: true,
        })
    );
}

#[test]
fn test_clear_lock_empties_slot() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    store
        .set_operator_lock(&OperatorLock {
            opkey: 12,
            locked: true,
        })
        .unwrap();
    store.clear_operator_lock().unwrap();
    assert_eq!(store.operator_lock(), None);
    assert_eq!(store_in(&dir).operator_lock(), None);
}

#[test]
fn test_draft_save_restore_delete() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    let report = sample_report("12 - 03-06-26", "2026-06-03");

    store.save_draft(&report).unwrap();
    assert_eq!(store.draft("12 - 03-06-26"), Some(report.clone()));
    // unrelated docket untouched
    assert_eq!(store.draft("27 - 03-06-26"), None);

    store.delete_draft("12 - 03-06-26").unwrap();
    assert_eq!(store.draft("12 - 03-06-26"), None);
}

#[test]
fn test_draft_overwrites_by_docket() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    let mut report = sample_report("12 - 03-06-26", "2026-06-03");
    store.save_draft(&report).unwrap();

    report.works_description = "Stockpile pushup".to_string();
    store.save_draft(&report).unwrap();

    let loaded = store.draft("12 - 03-06-26").unwrap();
    assert_eq!(loaded.works_description, "Stockpile pushup");
}

#[test]
fn test_mark_submitted_appends_log_and_drops_draft() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    let report = sample_report("12 - 03-06-26", "2026-06-03");
    store.save_draft(&report).unwrap();

    store.mark_submitted(&report).unwrap();
    assert_eq!(store.draft("12 - 03-06-26"), None);
    assert_eq!(store.submitted_forms(), vec![report.clone()]);

    // the log is append-only, resubmission logs again
    store.mark_submitted(&report).unwrap();
    assert_eq!(store.submitted_forms().len(), 2);
}

#[test]
fn test_malformed_store_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local_store.json");
    std::fs::write(&path, "{not json at all").unwrap();

    let store = LocalStore::open(&path);
    assert_eq!(store.operator_lock(), None);
    assert!(store.submitted_forms().is_empty());
}

#[test]
fn test_session_lock_persists_and_restores() {
    let dir = tempfile::tempdir().unwrap();

    let mut session = SessionState::init(operators(), store_in(&dir));
    assert!(!session.is_locked());
    session.lock(12).unwrap();
    assert!(session.is_locked());
    assert_eq!(session.current().unwrap().full_name(), "Dana Reeve");

    // new process picks the lock back up
    let restored = SessionState::init(operators(), store_in(&dir));
    assert!(restored.is_locked());
    assert_eq!(restored.current().unwrap().opkey, 12);
}

#[test]
fn test_session_unlock_keeps_selection() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = SessionState::init(operators(), store_in(&dir));
    session.lock(27).unwrap();
    session.unlock().unwrap();

    assert!(!session.is_locked());
    assert_eq!(session.current().unwrap().opkey, 27);
    // but nothing is persisted anymore
    let restored = SessionState::init(operators(), store_in(&dir));
    assert_eq!(restored.current(), None);
}

#[test]
fn test_session_rejects_unknown_operator() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = SessionState::init(operators(), store_in(&dir));
    assert!(matches!(session.lock(99), Err(AppError::UnknownOperator(99))));
    assert!(matches!(session.docket(), Err(AppError::OperatorNotLocked)));
}

#[test]
fn test_stale_lock_for_unknown_operator_is_discarded() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_in(&dir);
    store
        .set_operator_lock(&OperatorLock {
            opkey: 99,
            locked: true,
        })
        .unwrap();

    let session = SessionState::init(operators(), store_in(&dir));
    assert!(!session.is_locked());
    assert_eq!(session.current(), None);
}

#[test]
fn test_docket_uses_locked_operator_and_today() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = SessionState::init(operators(), store_in(&dir));
    session.lock(12).unwrap();
    let docket = session.docket().unwrap();
    let expected =
        shiftdocket::core::docket::generate(12, chrono::Local::now().date_naive());
    assert_eq!(docket, expected);
}
