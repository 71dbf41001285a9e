//! Main navigation.
use crate::app::AuthStateAction;
use crate::hooks::use_auth_state;
use crate::routes::Route;
use alumni_core::access::visible_links;
use yew::prelude::*;
use yew_router::prelude::*;

/// Links exposed to the current session, and login or logout controls.
/// Links are derived from the session on every render.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let auth_state = use_auth_state();
    let navigator = use_navigator().expect("navigator not found");
    let session = auth_state.session();

    let logout = {
        let auth_state = auth_state.clone();
        let navigator = navigator.clone();

        Callback::from(move |_: MouseEvent| {
            auth_state.dispatch(AuthStateAction::ClearSession);
            navigator.push(&Route::Home);
        })
    };

    let links = visible_links(session)
        .into_iter()
        .map(|link| {
            let route = Route::from(&link.view);
            html! {
                <li key={link.label}>
                    <Link<Route> to={route}>{ link.label }</Link<Route>>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <nav id={"main-navigation"}>
            <Link<Route> to={Route::Home} classes={classes!("brand")}>
                { "KGHS Alumni" }
            </Link<Route>>

            <ul class={"nav-links"}>
                { links }
            </ul>

            <div class={"nav-account"}>
                if let Some(name) = session.display_name() {
                    <span class={"display-name"}>{ name }</span>
                    <button type={"button"} onclick={logout}>{ "Logout" }</button>
                } else {
                    <Link<Route> to={Route::Login}>{ "Login" }</Link<Route>>
                    <Link<Route> to={Route::Signup}>{ "Join" }</Link<Route>>
                }
            </div>
        </nav>
    }
}
