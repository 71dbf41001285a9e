use super::*;
use fake::faker::lorem::raw::Sentence;
use fake::locales::EN;
use fake::Fake;

#[test]
fn messages_should_have_unique_ids() {
    let text: String = Sentence(EN, 3..6).fake();
    let first = Message::error(text.clone());
    let second = Message::error(text);
    assert_ne!(first.id(), second.id());
    assert_eq!(first.message, second.message);
}

#[test]
fn with_details_should_set_details() {
    let message = Message::warning("Session expired").with_details("Please log in again.");
    assert_eq!(MessageType::Warning, message.kind);
    assert_eq!(Some("Please log in again."), message.details());
    assert_eq!(None, Message::info("hello").details());
}
