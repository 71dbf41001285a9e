//! Main application.
use super::app_state::AppState;
use super::auth_state::AuthState;
use super::{AppStateReducer, AuthStateAction, AuthStateReducer};
use crate::components::messages::Messages;
use crate::constants::client_config;
use crate::hooks::Api;
use crate::navigation::Navbar;
use crate::routes::{routes::switch, Route};
use crate::storage::LocalSessionStorage;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

// *********************
// *** App Component ***
// *********************

#[cfg_attr(doc, aquamarine::aquamarine)]
/// App initialization
///
/// ```mermaid
/// flowchart TD
///      start(Initialize app) --> read_session(Read stored session)
///      read_session -- Set --> member(Render as member)
///      read_session -- Not set or unreadable --> anonymous(Render as anonymous)
///      member --> route(Route)
///      anonymous --> route
///      route --> gate{Access gate}
///      gate -- Allowed --> page(Mount page)
///      gate -- Denied --> redirect(Redirect)
/// ```
#[function_component(App)]
pub fn app() -> Html {
    let auth_state = use_reducer(|| AuthState::new(Rc::new(LocalSessionStorage)));
    let app_state = use_reducer(AppState::default);
    let api = use_memo((), |_| Api::new(client_config()));

    {
        // session changed in another tab
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            let reload: Closure<dyn Fn(web_sys::Event)> = Closure::new(move |_: web_sys::Event| {
                auth_state.dispatch(AuthStateAction::Reload);
            });

            let window = web_sys::window();
            if let Some(window) = window.as_ref() {
                if let Err(err) = window
                    .add_event_listener_with_callback("storage", reload.as_ref().unchecked_ref())
                {
                    tracing::warn!(?err, "could not listen for storage changes");
                }
            }

            // clean up
            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "storage",
                        reload.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    html! {
        <BrowserRouter>
        <ContextProvider<Api> context={(*api).clone()}>
        <ContextProvider<AuthStateReducer> context={auth_state}>
        <ContextProvider<AppStateReducer> context={app_state}>
            <div id={"content"}>
                <Navbar />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Messages />
            </div>
        </ContextProvider<AppStateReducer>>
        </ContextProvider<AuthStateReducer>>
        </ContextProvider<Api>>
        </BrowserRouter>
    }
}
