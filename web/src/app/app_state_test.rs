use super::*;
use fake::faker::lorem::raw::Sentence;
use fake::locales::EN;
use fake::Fake;

#[test]
fn remove_message_should_only_remove_matching_message() {
    let first = Message::error(Sentence(EN, 2..5).fake::<String>());
    let second = Message::success(Sentence(EN, 2..5).fake::<String>());
    let first_id = *first.id();

    let state = Rc::new(AppState::default())
        .reduce(AppStateAction::AddMessage(first))
        .reduce(AppStateAction::AddMessage(second.clone()));
    assert_eq!(2, state.messages.len());

    let state = state.reduce(AppStateAction::RemoveMessage(first_id));
    assert_eq!(1, state.messages.len());
    assert_eq!(second.id(), state.messages[0].id());

    let state = state.reduce(AppStateAction::ClearMessages);
    assert!(state.messages.is_empty());
}
