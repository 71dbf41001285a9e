//! Member directory.
use crate::common::bind;
use crate::hooks::{use_api, use_member_load, Loadable};
use alumni_core::api::directory::DirectoryFilter;
use alumni_ui::widgets::{Loading, MemberDeck};
use yew::prelude::*;

#[function_component(Directory)]
pub fn directory() -> Html {
    let api = use_api();
    let year = use_state(String::new);
    let location = use_state(String::new);
    let filter = use_state(DirectoryFilter::default);

    // a new filter discards results of the previous search
    let members = use_member_load(
        "Could not load the directory",
        (*filter).clone(),
        move |filter, credentials| async move { api.directory(&credentials, &filter).await },
    );

    let onsubmit = {
        let year = year.clone();
        let location = location.clone();
        let filter = filter.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            filter.set(DirectoryFilter {
                year: (*year).clone(),
                location: (*location).clone(),
            });
        })
    };

    html! {
        <div class={"page directory"}>
            <h1>{ "Alumni directory" }</h1>
            <form class={"directory-filter"} {onsubmit}>
                <input type={"number"}
                    placeholder={"Graduation year"}
                    value={(*year).clone()}
                    oninput={bind(&year)} />

                <input placeholder={"Location"}
                    value={(*location).clone()}
                    oninput={bind(&location)} />

                <button type={"submit"}>{ "Search" }</button>
            </form>

            { match &*members {
                Loadable::Loading => html! { <Loading /> },
                Loadable::Failed => html! {},
                Loadable::Loaded(members) => html! {
                    <MemberDeck
                        items={members.clone()}
                        empty={html! { <p>{ "No members match your search." }</p> }} />
                },
            } }
        </div>
    }
}
