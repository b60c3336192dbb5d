use crate::tests::mint_token;
use crate::SessionStore;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

fn store_in(dir: &TempDir) -> (SessionStore, PathBuf) {
    let path = dir.path().join("session.json");
    (SessionStore::new(path.clone()), path)
}

#[test]
fn given_valid_token_when_logged_in_then_session_holds_subject_and_roles() {
    let dir = TempDir::new().unwrap();
    let (mut store, _path) = store_in(&dir);
    let token = mint_token("alice", &["ROLE_ADMIN"]);

    let session = store.login(&token).unwrap();

    assert_eq!(session.subject, "alice");
    assert!(session.roles.contains("ROLE_ADMIN"));
    assert_eq!(session.raw_token, token);
}

#[test]
fn given_login_when_it_succeeds_then_session_file_is_already_on_disk() {
    let dir = TempDir::new().unwrap();
    let (mut store, path) = store_in(&dir);

    store.login(&mint_token("alice", &["ROLE_ADMIN"])).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"subject\": \"alice\""));
}

#[test]
fn given_malformed_tokens_when_logged_in_then_session_stays_absent() {
    let dir = TempDir::new().unwrap();
    let (mut store, path) = store_in(&dir);

    for token in ["", "a.b", "header.!!!.sig", "a.b.c.d"] {
        assert!(store.login(token).is_err(), "token {token:?} should fail");
        assert!(store.session().is_none());
    }
    assert!(!path.exists());
}

#[test]
fn given_existing_session_when_bad_login_then_prior_session_unchanged() {
    let dir = TempDir::new().unwrap();
    let (mut store, _path) = store_in(&dir);
    store.login(&mint_token("alice", &["ROLE_ADMIN"])).unwrap();

    let result = store.login("not.a.token!!!");

    assert!(result.is_err());
    let session = store.session().unwrap();
    assert_eq!(session.subject, "alice");
}

#[test]
fn given_logged_in_store_when_restored_from_disk_then_session_round_trips() {
    let dir = TempDir::new().unwrap();
    let (mut store, path) = store_in(&dir);
    store
        .login(&mint_token("alice", &["ROLE_ADMIN", "ROLE_USER"]))
        .unwrap();

    let mut fresh = SessionStore::new(path);
    let session = fresh.restore().unwrap();

    assert_eq!(session.subject, "alice");
    assert!(session.roles.contains("ROLE_USER"));
}

#[test]
fn given_logout_then_restore_yields_absent_session() {
    let dir = TempDir::new().unwrap();
    let (mut store, path) = store_in(&dir);
    store.login(&mint_token("alice", &["ROLE_ADMIN"])).unwrap();

    store.logout();

    assert!(store.session().is_none());
    assert!(!path.exists());
    let mut fresh = SessionStore::new(path);
    assert!(fresh.restore().is_none());
}

#[test]
fn given_anonymous_store_when_logged_out_twice_then_nothing_happens() {
    let dir = TempDir::new().unwrap();
    let (mut store, _path) = store_in(&dir);

    store.logout();
    store.logout();

    assert!(store.session().is_none());
}

#[test]
fn given_corrupt_session_file_when_restored_then_absent_and_file_cleared() {
    let dir = TempDir::new().unwrap();
    let (mut store, path) = store_in(&dir);
    fs::write(&path, "{ this is not json").unwrap();

    assert!(store.restore().is_none());
    assert!(!path.exists());
}

#[test]
fn given_stored_token_that_no_longer_decodes_when_restored_then_absent_and_cleared() {
    let dir = TempDir::new().unwrap();
    let (mut store, path) = store_in(&dir);
    fs::write(
        &path,
        r#"{"subject": "alice", "roles": ["ROLE_ADMIN"], "raw_token": "garbage"}"#,
    )
    .unwrap();

    assert!(store.restore().is_none());
    assert!(!path.exists());
}

#[test]
fn given_missing_file_when_restored_then_absent_without_error() {
    let dir = TempDir::new().unwrap();
    let (mut store, _path) = store_in(&dir);

    assert!(store.restore().is_none());
    assert!(!store.is_authenticated());
}
