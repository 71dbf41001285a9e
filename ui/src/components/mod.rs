//! UI Components
pub mod card;
pub mod card_deck;
pub mod file_input;
pub mod form;
pub mod messages;
pub mod permitted;
pub mod route_guard;

// Re-exports
pub use card::{Card, CardUi};
pub use card_deck::CardDeck;
pub use file_input::FileInput;
pub use form::SubmitButton;
pub use messages::{Message, Messages};
pub use permitted::Permitted;
pub use route_guard::RouteGuard;
