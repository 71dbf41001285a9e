//! Main application state.
use alumni_ui::types::Message;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

/// Actions available to modify the [`AppState`].
pub enum AppStateAction {
    /// Add a message to display.
    AddMessage(Message),

    /// Removes a message.
    RemoveMessage(Uuid),

    /// Clears all messages.
    ClearMessages,
}

/// Application state.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct AppState {
    /// Messages for the user.
    pub messages: Vec<Rc<Message>>,
}

impl Reducible for AppState {
    type Action = AppStateAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut current = (*self).clone();
        match action {
            AppStateAction::AddMessage(message) => {
                current.messages.push(Rc::new(message));
            }
            AppStateAction::RemoveMessage(id) => {
                current.messages.retain(|m| m.id() != &id);
            }
            AppStateAction::ClearMessages => {
                current.messages = Vec::new();
            }
        };

        current.into()
    }
}

pub type AppStateReducer = UseReducerHandle<AppState>;

#[cfg(test)]
#[path = "./app_state_test.rs"]
mod app_state_test;
