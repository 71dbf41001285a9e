use alumni_core::records::{
    BoardMinutes, Donation, Event, ForumThread, GalleryImage, Member, NewsPost,
};
use yew::virtual_dom::Key;

/// Functionality for an object to provide a key for iteration.
pub trait ToKey {
    fn key(&self) -> Key;
}

macro_rules! impl_to_key_by_id {
    ($($record:ty),*) => {
        $(
            impl ToKey for $record {
                fn key(&self) -> Key {
                    self.id.as_str().into()
                }
            }
        )*
    };
}

impl_to_key_by_id!(BoardMinutes, Donation, Event, ForumThread, GalleryImage, Member, NewsPost);
