//! Event calendar.
use crate::common::bind;
use crate::hooks::{use_api, use_error_reporter, use_load, use_session, Loadable};
use crate::routes::Route;
use alumni_core::access::Action;
use alumni_core::api::events::NewEvent;
use alumni_core::records;
use alumni_core::Error;
use alumni_ui::components::{CardDeck, Permitted, SubmitButton};
use alumni_ui::hooks::use_view_scope;
use alumni_ui::widgets::Loading;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Events)]
pub fn events() -> Html {
    let api = use_api();
    let session = use_session();
    let refresh = use_state(|| 0_u32);

    let events = use_load("Could not load events", *refresh, move |_| async move {
        api.events().await
    });

    let oncreated = {
        let refresh = refresh.clone();
        Callback::from(move |_: ()| refresh.set(*refresh + 1))
    };

    html! {
        <div class={"page events"}>
            <h1>{ "Events" }</h1>
            { match &*events {
                Loadable::Loading => html! { <Loading /> },
                Loadable::Failed => html! {},
                Loadable::Loaded(events) => html! {
                    <CardDeck<records::Event>
                        items={events.clone()}
                        empty={html! { <p>{ "No events scheduled yet." }</p> }} />
                },
            } }

            <Permitted
                session={session.clone()}
                action={Action::CreateEvent}
                fallback={html! {
                    <p class={"login-prompt"}>
                        <Link<Route> to={Route::Login}>{ "Log in" }</Link<Route>>
                        { " to organize a gathering." }
                    </p>
                }}>
                <CreateEvent {oncreated} />
            </Permitted>
        </div>
    }
}

// ********************
// *** Create Event ***
// ********************

#[derive(Properties, PartialEq)]
struct CreateEventProps {
    oncreated: Callback<()>,
}

#[function_component(CreateEvent)]
fn create_event(props: &CreateEventProps) -> Html {
    let api = use_api();
    let session = use_session();
    let reporter = use_error_reporter();
    let scope = use_view_scope(());
    let title = use_state(String::new);
    let description = use_state(String::new);
    let date = use_state(String::new);
    let location = use_state(String::new);
    let busy = use_state(|| false);

    let onsubmit = {
        let title = title.clone();
        let description = description.clone();
        let date = date.clone();
        let location = location.clone();
        let busy = busy.clone();
        let oncreated = props.oncreated.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let Some(credentials) = session.credentials().cloned() else {
                reporter.report("Could not create event", Error::NoSession);
                return;
            };

            let event = NewEvent {
                title: title.trim().to_string(),
                description: description.trim().to_string(),
                date: (*date).clone(),
                location: location.trim().to_string(),
            };

            busy.set(true);
            let api = api.clone();
            let reporter = reporter.clone();
            let title = title.clone();
            let description = description.clone();
            let date = date.clone();
            let location = location.clone();
            let busy = busy.clone();
            let oncreated = oncreated.clone();
            let ticket = scope.ticket();

            spawn_local(async move {
                let result = api.create_event(&credentials, &event).await;
                ticket.apply(|| busy.set(false));
                match result {
                    Ok(()) => {
                        reporter.success("Event created");
                        ticket.apply(|| {
                            for field in [&title, &description, &date, &location] {
                                field.set(String::new());
                            }
                            oncreated.emit(());
                        });
                    }
                    Err(err) => reporter.report("Could not create event", err),
                }
            });
        })
    };

    html! {
        <form class={"create-event"} {onsubmit}>
            <h2>{ "Organize a gathering" }</h2>

            <label for={"event-title"}>{ "Title" }</label>
            <input id={"event-title"} required={true} value={(*title).clone()} oninput={bind(&title)} />

            <label for={"event-date"}>{ "Date" }</label>
            <input id={"event-date"}
                type={"date"}
                required={true}
                value={(*date).clone()}
                oninput={bind(&date)} />

            <label for={"event-location"}>{ "Location" }</label>
            <input id={"event-location"} value={(*location).clone()} oninput={bind(&location)} />

            <label for={"event-description"}>{ "Description" }</label>
            <textarea id={"event-description"}
                value={(*description).clone()}
                oninput={bind(&description)} />

            <SubmitButton busy={*busy} busy_label={"Creating..."}>{ "Create event" }</SubmitButton>
        </form>
    }
}
