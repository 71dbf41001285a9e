use crate::components::card_deck::{CardDeck, CardDeckProps};
use alumni_core::records::Member;

pub type MemberDeckProps = CardDeckProps<Member>;
pub type MemberDeck = CardDeck<Member>;
