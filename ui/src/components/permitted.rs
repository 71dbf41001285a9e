//! Action gated content.
use alumni_core::access::{permits, Action};
use alumni_core::system::Session;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PermittedProps {
    pub session: Session,
    pub action: Action,

    #[prop_or_default]
    pub children: Children,

    /// Rendered in place of the children when the action is not permitted.
    #[prop_or_default]
    pub fallback: Html,
}

/// Renders its children only if the session may perform the action.
#[function_component(Permitted)]
pub fn permitted(props: &PermittedProps) -> Html {
    if !permits(&props.session, props.action) {
        return props.fallback.clone();
    }

    html! {
        { for props.children.iter() }
    }
}
