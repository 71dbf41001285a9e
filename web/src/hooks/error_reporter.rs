//! Surface failed requests to the user.
use crate::app::{AppStateAction, AppStateReducer, AuthStateAction, AuthStateReducer};
use alumni_core::Error;
use alumni_ui::types::Message;
use yew::prelude::*;

/// Reports errors through the app messages.
#[derive(Clone, PartialEq)]
pub struct ErrorReporter {
    app_state: AppStateReducer,
    auth_state: AuthStateReducer,
}

impl ErrorReporter {
    /// Reports a failed request.
    ///
    /// A rejected credential clears the session,
    /// after which the access gate redirects protected views to login.
    pub fn report(&self, title: &str, err: Error) {
        tracing::debug!(title, ?err);
        if err.is_unauthenticated() {
            self.auth_state.dispatch(AuthStateAction::Reject(err));
            self.app_state.dispatch(AppStateAction::AddMessage(Message::warning(
                "Your session has expired. Please log in again.",
            )));

            return;
        }

        let message = Message::error(title).with_details(err.to_string());
        self.app_state.dispatch(AppStateAction::AddMessage(message));
    }

    pub fn success(&self, message: &str) {
        self.app_state
            .dispatch(AppStateAction::AddMessage(Message::success(message)));
    }
}

#[hook]
pub fn use_error_reporter() -> ErrorReporter {
    let app_state = use_context::<AppStateReducer>().expect("`AppStateReducer` context not found");
    let auth_state =
        use_context::<AuthStateReducer>().expect("`AuthStateReducer` context not found");

    ErrorReporter {
        app_state,
        auth_state,
    }
}
