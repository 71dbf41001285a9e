//! Scope results to the lifetime of a view.
use alumni_core::scope::ViewScope;
use yew::prelude::*;

/// Gets a [`ViewScope`] for the component.
///
/// The scope is invalidated when the component unmounts
/// and whenever `deps` change, so results of fetches started
/// for previous dependencies are discarded.
#[hook]
pub fn use_view_scope<D>(deps: D) -> ViewScope
where
    D: PartialEq + 'static,
{
    let scope = use_memo((), |_| ViewScope::new());

    {
        let scope = (*scope).clone();
        use_effect_with(deps, move |_| {
            // destructor
            move || {
                scope.invalidate();
            }
        });
    }

    (*scope).clone()
}
