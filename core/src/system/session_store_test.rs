use super::*;
use crate::types::Role;
use fake::faker::lorem::raw::Word;
use fake::faker::name::raw::Name;
use fake::locales::EN;
use fake::Fake;

#[test]
fn set_session_then_get_session_should_round_trip() {
    let store = SessionStore::new(MemoryStorage::new());
    store
        .set_session("t", Role::Admin, "X")
        .expect("could not set session");

    let session = store.get_session();
    assert_eq!(Some("t"), session.token());
    assert_eq!(Some(Role::Admin), session.role());
    assert_eq!(Some("X"), session.display_name());
}

#[test]
fn clear_session_should_remove_all_fields() {
    let store = SessionStore::new(MemoryStorage::new());
    store
        .set_session("t", Role::Alumni, "X")
        .expect("could not set session");

    store.clear_session();
    assert_eq!(Session::anonymous(), store.get_session());
    assert_eq!(None, store.storage().raw(), "nothing should remain stored");
}

#[test]
fn session_should_never_be_partial() {
    let store = SessionStore::new(MemoryStorage::new());
    for step in 0..50_usize {
        if step % 3 == 2 {
            store.clear_session();
        } else {
            let token: String = Word(EN).fake();
            let name: String = Name(EN).fake();
            let role = if step % 2 == 0 { Role::Admin } else { Role::Alumni };
            store
                .set_session(token, role, name)
                .expect("could not set session");
        }

        let session = store.get_session();
        let present = [
            session.token().is_some(),
            session.role().is_some(),
            session.display_name().is_some(),
        ];

        assert!(
            present.iter().all(|p| *p) || present.iter().all(|p| !*p),
            "session fields should be all present or all absent"
        );
    }
}

#[test]
fn get_session_should_treat_corrupt_storage_as_anonymous() {
    let store = SessionStore::new(MemoryStorage::with_raw(r#"{"token":"t"}"#));
    assert!(
        !store.get_session().is_authenticated(),
        "a token without role should not authenticate"
    );
}

#[test]
fn clones_should_observe_writes_immediately() {
    let storage = MemoryStorage::new();
    let writer = SessionStore::new(storage.clone());
    let reader = SessionStore::new(storage);

    writer
        .set_session("t", Role::Alumni, "X")
        .expect("could not set session");

    assert!(reader.get_session().is_authenticated());
}

#[test]
fn reject_should_clear_only_on_unauthenticated() {
    let store = SessionStore::new(MemoryStorage::new());
    store
        .set_session("t", Role::Alumni, "X")
        .expect("could not set session");

    assert!(!store.reject(&Error::Forbidden("nope".to_string())));
    assert!(store.get_session().is_authenticated(), "403 should keep session");

    assert!(store.reject(&Error::Unauthenticated));
    assert!(!store.get_session().is_authenticated(), "401 should clear session");
}

#[test]
fn admin_credentials_should_require_admin_session() {
    let store = SessionStore::new(MemoryStorage::new());
    assert!(matches!(store.admin_credentials(), Err(Error::NoSession)));

    store
        .set_session("t", Role::Alumni, "X")
        .expect("could not set session");
    assert!(matches!(
        store.admin_credentials(),
        Err(Error::AdminRequired)
    ));

    store
        .set_session("a", Role::Admin, "Y")
        .expect("could not set session");
    let admin = store
        .admin_credentials()
        .expect("admin session should verify");
    assert_eq!("a", admin.token());

    store.clear_session();
    assert!(
        matches!(store.admin_credentials(), Err(Error::NoSession)),
        "a cleared session should not stay admin"
    );
}
