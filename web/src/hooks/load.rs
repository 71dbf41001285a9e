//! Load data for a view.
use super::error_reporter::use_error_reporter;
use super::session::use_session;
use alumni_core::system::{Credentials, Session};
use alumni_core::{Error, Result};
use alumni_ui::hooks::use_view_scope;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// State of a load.
#[derive(Clone, Debug, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Loaded(T),

    /// The load failed and was reported.
    Failed,
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Loading | Self::Failed => None,
        }
    }
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Runs `load` when the component mounts and whenever `deps` change.
///
/// Results only apply while the component is mounted and `deps` are unchanged.
///
/// ```mermaid
/// flowchart TD
///     mount(Mount or deps change) --> ticket(Take scope ticket)
///     ticket --> load(Await load)
///     load --> current{Ticket current?}
///     current -- No --> discard(Discard result)
///     current -- Yes --> ok{Ok?}
///     ok -- Yes --> loaded(Set loaded)
///     ok -- No --> failed(Set failed and report)
/// ```
#[hook]
pub fn use_load<T, D, F, Fut>(title: &'static str, deps: D, load: F) -> UseStateHandle<Loadable<T>>
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T>> + 'static,
{
    let state = use_state(|| Loadable::Loading);
    let scope = use_view_scope(deps.clone());
    let reporter = use_error_reporter();

    {
        let state = state.clone();
        use_effect_with(deps, move |deps| {
            let ticket = scope.ticket();
            let deps = deps.clone();
            state.set(Loadable::Loading);

            spawn_local(async move {
                let result = load(deps).await;
                ticket.apply(move || match result {
                    Ok(value) => state.set(Loadable::Loaded(value)),
                    Err(err) => {
                        state.set(Loadable::Failed);
                        reporter.report(title, err);
                    }
                });
            });
        });
    }

    state
}

/// Deps of a load made for the session's member.
/// A change of member, or logging out, changes the deps.
pub fn member_deps<D>(deps: D, session: &Session) -> (D, Option<Credentials>) {
    (deps, session.credentials().cloned())
}

/// [`use_load`] on behalf of the logged in member.
/// Reloads when `deps` or the member change.
///
/// # Errors
/// The load fails with [`Error::NoSession`] without calling `load`
/// if no one is logged in.
#[hook]
pub fn use_member_load<T, D, F, Fut>(
    title: &'static str,
    deps: D,
    load: F,
) -> UseStateHandle<Loadable<T>>
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(D, Credentials) -> Fut + 'static,
    Fut: Future<Output = Result<T>> + 'static,
{
    let session = use_session();
    use_load(
        title,
        member_deps(deps, &session),
        move |(deps, credentials)| async move {
            let credentials = credentials.ok_or(Error::NoSession)?;
            load(deps, credentials).await
        },
    )
}

#[cfg(test)]
#[path = "./load_test.rs"]
mod load_test;
