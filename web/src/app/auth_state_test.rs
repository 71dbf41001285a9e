use super::*;
use alumni_core::system::MemoryStorage;
use alumni_core::types::Role;
use fake::faker::name::raw::Name;
use fake::locales::EN;
use fake::Fake;

fn state() -> (Rc<AuthState>, MemoryStorage) {
    let storage = MemoryStorage::new();
    let state = AuthState::new(Rc::new(storage.clone()));
    (Rc::new(state), storage)
}

#[test]
fn set_credentials_should_write_through_store() {
    let (state, storage) = state();
    assert!(!state.is_authenticated());

    let name: String = Name(EN).fake();
    let credentials = Credentials::new("token", Role::Admin, name);
    let state = state.reduce(AuthStateAction::SetCredentials(credentials.clone()));

    assert!(state.is_authenticated());
    assert!(state.session().is_admin());
    assert_eq!(Some(credentials), storage.read());
}

#[test]
fn reject_should_only_clear_on_unauthenticated() {
    let storage = MemoryStorage::new();
    storage
        .write(&Credentials::new("token", Role::Alumni, "Ada"))
        .expect("could not write session");

    let state = Rc::new(AuthState::new(Rc::new(storage.clone())));
    assert!(state.is_authenticated(), "stored session should be loaded");

    let state = state.reduce(AuthStateAction::Reject(Error::Forbidden("no".to_string())));
    assert!(state.is_authenticated(), "forbidden should keep the session");

    let state = state.reduce(AuthStateAction::Reject(Error::Unauthenticated));
    assert!(!state.is_authenticated());
    assert_eq!(None, storage.raw());
}

#[test]
fn reload_should_pick_up_external_changes() {
    let (state, storage) = state();
    storage
        .write(&Credentials::new("other-tab", Role::Alumni, "Ada"))
        .expect("could not write session");

    assert!(!state.is_authenticated(), "state is a snapshot");
    let state = state.reduce(AuthStateAction::Reload);
    assert_eq!(Some("other-tab"), state.session().token());
}
