//! Access gate.
//! Route guard that renders a page only if the session may view it.
use super::Route;
use crate::app::AuthStateReducer;
use alumni_core::access::{authorize, Decision, View};
use alumni_ui::components::RouteGuard;
use alumni_ui::widgets::Loading;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AccessGateProps {
    /// View being rendered.
    pub view: View,

    /// Page to render if access is granted.
    #[prop_or_default]
    pub children: Children,
}

/// Decides on every render whether the page may mount.
/// Pages are never mounted while redirecting, so none of their requests are made.
#[function_component(AccessGate)]
pub fn access_gate(props: &AccessGateProps) -> Html {
    let auth_state =
        use_context::<AuthStateReducer>().expect("`AuthStateReducer` context not found");

    let redirect = match authorize(auth_state.session(), props.view.requirement()) {
        Decision::Render => None,
        Decision::Redirect(view) => {
            tracing::debug!(from = ?props.view, to = ?view, "access denied");
            Some(Route::from(&view))
        }
    };

    html! {
        <RouteGuard<Route> {redirect} fallback={html! { <Loading /> }}>
            { for props.children.iter() }
        </RouteGuard<Route>>
    }
}
