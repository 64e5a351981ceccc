use std::fs;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use session_store::{
    storage_file, FileStore, JsonSlot, KeyValueStore, MemoryStore, Persistence, SessionStoreError,
    SharedStore, TokenStore, TokenTier, TOKEN_KEY, USER_META_KEY,
};

fn token_store() -> (TokenStore, SharedStore, SharedStore) {
    let session = MemoryStore::shared();
    let persistent = MemoryStore::shared();
    (
        TokenStore::new(session.clone(), persistent.clone()),
        session,
        persistent,
    )
}

#[test]
fn memory_token_beats_session_and_persistent() {
    let (tokens, session, persistent) = token_store();
    persistent.set(TOKEN_KEY, "persistent").expect("seed persistent");
    session.set(TOKEN_KEY, "session").expect("seed session");
    tokens
        .set_in_memory(Some("memory".to_owned()))
        .expect("set memory");

    assert_eq!(
        tokens.resolve_with_tier().expect("resolve"),
        Some(("memory".to_owned(), TokenTier::Memory))
    );
}

#[test]
fn session_token_beats_persistent() {
    let (tokens, session, persistent) = token_store();
    persistent.set(TOKEN_KEY, "persistent").expect("seed persistent");
    session.set(TOKEN_KEY, "session").expect("seed session");

    assert_eq!(
        tokens.resolve_with_tier().expect("resolve"),
        Some(("session".to_owned(), TokenTier::Session))
    );
}

#[test]
fn persistent_token_is_the_last_resort() {
    let (tokens, _session, persistent) = token_store();
    persistent.set(TOKEN_KEY, "persistent").expect("seed persistent");

    assert_eq!(
        tokens.resolve().expect("resolve").as_deref(),
        Some("persistent")
    );
}

#[test]
fn empty_tokens_are_treated_as_absent() {
    let (tokens, session, persistent) = token_store();
    session.set(TOKEN_KEY, "").expect("seed session");
    persistent.set(TOKEN_KEY, "persistent").expect("seed persistent");
    tokens.set_in_memory(Some("  ".to_owned())).expect("set memory");

    assert_eq!(
        tokens.resolve().expect("resolve").as_deref(),
        Some("persistent")
    );
}

#[test]
fn remember_writes_only_the_requested_tier() {
    let (tokens, session, persistent) = token_store();
    tokens
        .remember("abc", Persistence::Session)
        .expect("remember");

    assert_eq!(session.get(TOKEN_KEY).expect("get").as_deref(), Some("abc"));
    assert!(persistent.get(TOKEN_KEY).expect("get").is_none());
}

#[test]
fn remembered_token_replaces_tokens_in_other_tiers() {
    let (tokens, session, persistent) = token_store();
    tokens
        .remember("old-session", Persistence::Session)
        .expect("remember session");
    tokens
        .set_in_memory(Some("old-memory".to_owned()))
        .expect("set memory");

    tokens
        .remember("fresh-login", Persistence::Persistent)
        .expect("remember persistent");

    assert_eq!(
        tokens.resolve_with_tier().expect("resolve"),
        Some(("fresh-login".to_owned(), TokenTier::Persistent))
    );
    assert!(session.get(TOKEN_KEY).expect("get").is_none());

    tokens
        .remember("session-login", Persistence::Session)
        .expect("remember session");
    assert!(persistent.get(TOKEN_KEY).expect("get").is_none());
    assert_eq!(
        tokens.resolve().expect("resolve").as_deref(),
        Some("session-login")
    );
}

#[test]
fn clear_removes_all_three_tiers() {
    let (tokens, session, persistent) = token_store();
    tokens
        .remember("p", Persistence::Persistent)
        .expect("remember persistent");
    tokens
        .remember("s", Persistence::Session)
        .expect("remember session");
    tokens.set_in_memory(Some("m".to_owned())).expect("memory");

    tokens.clear().expect("clear");

    assert!(tokens.resolve().expect("resolve").is_none());
    assert!(session.get(TOKEN_KEY).expect("get").is_none());
    assert!(persistent.get(TOKEN_KEY).expect("get").is_none());
}

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = storage_file(dir.path());

    let store = FileStore::new(&path);
    store.set(TOKEN_KEY, "abc").expect("set");
    store.set("other", "1").expect("set other");
    drop(store);

    let reopened = FileStore::new(&path);
    assert_eq!(reopened.get(TOKEN_KEY).expect("get").as_deref(), Some("abc"));
    reopened.remove(TOKEN_KEY).expect("remove");

    let again = FileStore::new(&path);
    assert!(again.get(TOKEN_KEY).expect("get").is_none());
    assert_eq!(again.get("other").expect("get").as_deref(), Some("1"));
}

#[test]
fn failed_write_leaves_cached_values_unchanged() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("local.json");
    fs::write(&path, r#"{"other":"1"}"#).expect("seed file");
    fs::create_dir(dir.path().join("local.json.tmp")).expect("block staging path");

    let store = FileStore::new(&path);
    assert_eq!(store.get("other").expect("get").as_deref(), Some("1"));

    let error = store.set(TOKEN_KEY, "t").expect_err("staging path is a directory");
    assert!(matches!(error, SessionStoreError::Io { .. }));
    assert!(store.get(TOKEN_KEY).expect("get").is_none());

    let error = store.remove("other").expect_err("staging path is a directory");
    assert!(matches!(error, SessionStoreError::Io { .. }));
    assert_eq!(store.get("other").expect("get").as_deref(), Some("1"));

    let reopened = FileStore::new(&path);
    assert!(reopened.get(TOKEN_KEY).expect("get").is_none());
    assert_eq!(reopened.get("other").expect("get").as_deref(), Some("1"));
}

#[test]
fn file_store_reads_missing_file_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let store = FileStore::new(dir.path().join("absent.json"));
    assert!(store.get(TOKEN_KEY).expect("get").is_none());
}

#[test]
fn file_store_rejects_non_object_file() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("local.json");
    fs::write(&path, "[1, 2, 3]").expect("seed file");

    let error = FileStore::new(&path)
        .get(TOKEN_KEY)
        .expect_err("array file must fail");
    assert!(matches!(error, SessionStoreError::NotAnObject { .. }));
}

#[test]
fn file_store_reports_malformed_json() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("local.json");
    fs::write(&path, "{ nope").expect("seed file");

    let error = FileStore::new(&path)
        .get(TOKEN_KEY)
        .expect_err("malformed file must fail");
    assert!(matches!(error, SessionStoreError::Parse { .. }));
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Meta {
    nick: String,
    mail: String,
    link: String,
}

#[test]
fn json_slot_round_trips_through_file_store() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let store: SharedStore = Arc::new(FileStore::new(dir.path().join("local.json")));
    let slot = JsonSlot::<Meta>::new(store.clone(), USER_META_KEY);

    let meta = Meta {
        nick: "ferris".to_owned(),
        mail: "ferris@example.com".to_owned(),
        link: String::new(),
    };
    slot.save(&meta).expect("save");

    let reread = JsonSlot::<Meta>::new(store, USER_META_KEY);
    assert_eq!(reread.load().expect("load"), meta);
    reread.clear().expect("clear");
    assert_eq!(reread.load().expect("load"), Meta::default());
}
