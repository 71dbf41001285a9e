//! Gallery cards.
use crate::components::card::CardUi;
use alumni_core::records::{date, GalleryImage};
use yew::prelude::*;

impl CardUi for GalleryImage {
    fn title(&self) -> &str {
        self.caption.as_deref().unwrap_or("A moment to remember")
    }

    fn image(&self) -> Option<&str> {
        Some(&self.url)
    }

    fn body(&self) -> Html {
        let uploader = self
            .uploader
            .as_ref()
            .and_then(|uploader| uploader.name.as_deref())
            .unwrap_or("A member");

        html! {
            <p class={"shared-by"}>{ format!("Shared by {uploader}") }</p>
        }
    }

    fn footer(&self) -> Option<Html> {
        self.date.map(|_| html! { { date::display(self.date) } })
    }
}
