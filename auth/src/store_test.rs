use super::*;
use crate::role::Role;
use crate::user::User;

fn sample_session() -> Session {
    Session::new(
        User {
            id: "7".to_owned(),
            name: "Store Owner".to_owned(),
            email: "owner@example.com".to_owned(),
            role: Role::StoreOwner,
            address: Some("12 Market St".to_owned()),
        },
        "tok-7",
    )
}

fn temp_session_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("store-rating-test-{}", uuid::Uuid::new_v4()))
        .join("session.json")
}

// =============================================================================
// decode_session
// =============================================================================

#[test]
fn decode_rejects_garbage() {
    assert!(decode_session("not json").is_none());
    assert!(decode_session("").is_none());
    assert!(decode_session("{\"token\":\"t\"}").is_none());
}

#[test]
fn decode_rejects_empty_token() {
    let mut session = sample_session();
    session.token = "   ".to_owned();
    let raw = serde_json::to_string(&session).unwrap();
    assert!(decode_session(&raw).is_none());
}

#[test]
fn decode_keeps_unknown_role() {
    let raw = r#"{"token":"t","user":{"id":1,"name":"n","email":"e@x.io","role":"auditor"}}"#;
    let session = decode_session(raw).expect("session");
    assert_eq!(session.user.role, Role::Unknown("auditor".to_owned()));
}

// =============================================================================
// MemorySessionStore
// =============================================================================

#[test]
fn memory_store_round_trips() {
    let store = MemorySessionStore::new();
    let session = sample_session();
    store.save(&session).unwrap();
    assert_eq!(store.load(), Some(session));
}

#[test]
fn memory_store_clear_removes_record() {
    let store = MemorySessionStore::new();
    store.save(&sample_session()).unwrap();
    store.clear().unwrap();
    assert!(store.load().is_none());
    assert!(store.raw().is_none());
}

#[test]
fn memory_store_malformed_seed_loads_none() {
    let store = MemorySessionStore::with_raw("{ broken");
    assert!(store.load().is_none());
}

#[test]
fn memory_store_save_replaces_previous() {
    let store = MemorySessionStore::new();
    store.save(&sample_session()).unwrap();
    let mut next = sample_session();
    next.token = "tok-8".to_owned();
    store.save(&next).unwrap();
    assert_eq!(store.load().map(|s| s.token), Some("tok-8".to_owned()));
}

// =============================================================================
// FileSessionStore
// =============================================================================

#[test]
fn file_store_round_trips_and_creates_parent() {
    let path = temp_session_path();
    let store = FileSessionStore::new(&path);
    let session = sample_session();

    store.save(&session).unwrap();
    assert!(path.exists());
    assert!(!store.temp_path().exists());
    assert_eq!(store.load(), Some(session));

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn file_store_missing_file_loads_none() {
    let store = FileSessionStore::new(temp_session_path());
    assert!(store.load().is_none());
}

#[test]
fn file_store_corrupt_file_loads_none() {
    let path = temp_session_path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "\u{0}\u{1}garbage").unwrap();

    let store = FileSessionStore::new(&path);
    assert!(store.load().is_none());

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn file_store_clear_is_idempotent() {
    let path = temp_session_path();
    let store = FileSessionStore::new(&path);
    store.save(&sample_session()).unwrap();

    store.clear().unwrap();
    assert!(!path.exists());
    store.clear().unwrap();

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn temp_path_is_per_process_sibling_of_target() {
    let store = FileSessionStore::new("/var/lib/app/session.json");
    let expected = format!("/var/lib/app/session.json.{}.tmp", std::process::id());
    assert_eq!(store.temp_path(), PathBuf::from(expected));
}

#[test]
fn file_store_save_under_regular_file_fails_and_leaves_nothing() {
    let blocker = temp_session_path();
    fs::create_dir_all(blocker.parent().unwrap()).unwrap();
    fs::write(&blocker, "not a directory").unwrap();

    let store = FileSessionStore::new(blocker.join("session.json"));
    assert!(matches!(store.save(&sample_session()), Err(StoreError::Io(_))));
    assert!(store.load().is_none());

    let _ = fs::remove_dir_all(blocker.parent().unwrap());
}

#[cfg(unix)]
#[test]
fn file_store_writes_owner_only_file() {
    use std::os::unix::fs::PermissionsExt;

    let path = temp_session_path();
    let store = FileSessionStore::new(&path);
    store.save(&sample_session()).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);

    let _ = fs::remove_dir_all(path.parent().unwrap());
}
