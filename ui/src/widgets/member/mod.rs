//! Member widgets.
pub mod member_card;
pub mod member_deck;

// Re-exports
pub use member_card::MemberCard;
pub use member_deck::MemberDeck;
