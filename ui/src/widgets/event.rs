//! Event cards.
use crate::components::card::CardUi;
use alumni_core::records::{date, Event};
use yew::prelude::*;

impl CardUi for Event {
    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> Html {
        html! {
            <>
            <p class={"event-when"}>
                { date::display(self.date) }
                if !self.location.is_empty() {
                    { format!(" · {}", self.location) }
                }
            </p>
            <p>{ &self.description }</p>
            </>
        }
    }
}
