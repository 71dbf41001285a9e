//! Session hooks.
use crate::app::AuthStateReducer;
use alumni_core::system::Session;
use yew::prelude::*;

#[hook]
pub fn use_auth_state() -> AuthStateReducer {
    use_context::<AuthStateReducer>().expect("`AuthStateReducer` context not found")
}

/// Gets the current session.
#[hook]
pub fn use_session() -> Session {
    let auth_state = use_auth_state();
    auth_state.session().clone()
}
