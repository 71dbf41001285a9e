//! Route guard.
//! Used to protect route access, redirecting when a redirect is requested.
use yew::prelude::*;
use yew_router::prelude::*;

/// Properties to setup the route guard.
#[derive(Properties, PartialEq)]
pub struct RouteGuardProps<R>
where
    R: Routable,
{
    /// Route to redirect to.
    /// Renders children if `None`.
    pub redirect: Option<R>,

    /// Children to render if no redirect is requested.
    #[prop_or_default]
    pub children: Children,

    /// Rendered in place of the children while redirecting.
    #[prop_or_default]
    pub fallback: Html,
}

/// Route guard for children.
///
/// Children are never rendered while a redirect is requested,
/// so nothing they would fetch is requested either.
/// Navigation happens after render, replacing the current history entry.
#[function_component(RouteGuard)]
pub fn route_guard<R>(props: &RouteGuardProps<R>) -> Html
where
    R: Routable + 'static,
{
    let navigator = use_navigator().expect("navigator not found");

    {
        let navigator = navigator.clone();
        use_effect_with(props.redirect.clone(), move |redirect| {
            if let Some(route) = redirect {
                tracing::debug!(to = %route.to_path(), "redirecting");
                navigator.replace(route);
            }
        });
    }

    if props.redirect.is_some() {
        return props.fallback.clone();
    }

    html! {
        { for props.children.iter() }
    }
}
