//! Displays messages to the user.
use crate::app::{AppStateAction, AppStateReducer};
use crate::constants::MESSAGE_TIMEOUT;
use alumni_ui::components::Messages as MessagesUi;
use alumni_ui::types::MessageType;
use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

/// Shows the app messages.
/// Messages other than errors are dismissed after [`MESSAGE_TIMEOUT`].
#[function_component(Messages)]
pub fn messages() -> Html {
    let app_state =
        use_context::<AppStateReducer>().expect("could not find `AppStateReducer` context");

    {
        let app_state = app_state.clone();
        use_effect_with(app_state.messages.clone(), move |messages| {
            let timeouts = messages
                .iter()
                .filter(|message| message.kind != MessageType::Error)
                .map(|message| {
                    let id = *message.id();
                    let app_state = app_state.clone();
                    Timeout::new(MESSAGE_TIMEOUT, move || {
                        app_state.dispatch(AppStateAction::RemoveMessage(id));
                    })
                })
                .collect::<Vec<_>>();

            // pending timeouts are canceled when dropped
            move || drop(timeouts)
        });
    }

    let onclose = {
        let app_state = app_state.clone();
        Callback::from(move |id: Uuid| {
            app_state.dispatch(AppStateAction::RemoveMessage(id));
        })
    };

    html! {
        <MessagesUi messages={app_state.messages.clone()} {onclose} />
    }
}
