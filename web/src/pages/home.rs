//! Landing page.
use crate::constants::HOME_PREVIEW_COUNT;
use crate::hooks::{use_api, use_load, use_session, Loadable};
use crate::routes::Route;
use alumni_core::records::{self, date, DonationSummary};
use alumni_ui::components::CardDeck;
use alumni_ui::widgets::{DonationProgress, Loading};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    let api = use_api();
    let session = use_session();

    // independent loads, each with its own slot
    let news = {
        let api = api.clone();
        use_load("Could not load news", (), move |_| async move {
            api.news().await.map(|mut news| {
                news.truncate(HOME_PREVIEW_COUNT);
                news
            })
        })
    };

    let events = {
        let api = api.clone();
        use_load("Could not load events", (), move |_| async move {
            api.events().await.map(|mut events| {
                events.truncate(HOME_PREVIEW_COUNT);
                events
            })
        })
    };

    let donations = use_load("Could not load donations", (), move |_| async move {
        api.public_donations()
            .await
            .map(|donations| DonationSummary::from_donations(&donations))
    });

    html! {
        <div class={"page home"}>
            <section class={"hero"}>
                <h1>{ "Kalabari Girls' High School Alumni Association" }</h1>
                <p>{ "Reconnect with classmates, stay informed, and support the next generation." }</p>
                if !session.is_authenticated() {
                    <div class={"hero-actions"}>
                        <Link<Route> to={Route::Signup}>{ "Join the association" }</Link<Route>>
                        <Link<Route> to={Route::Login}>{ "Log in" }</Link<Route>>
                    </div>
                }
            </section>

            <section class={"latest-news"}>
                <h2>{ "Latest news" }</h2>
                { match &*news {
                    Loadable::Loading => html! { <Loading /> },
                    Loadable::Failed => html! {},
                    Loadable::Loaded(news) if news.is_empty() => html! { <p>{ "No news yet." }</p> },
                    Loadable::Loaded(news) => news.iter().map(|post| html! {
                        <article key={post.id.as_str()}>
                            <h3>{ &post.title }</h3>
                            <p class={"date"}>{ date::display(post.date) }</p>
                            <p>{ &post.content }</p>
                        </article>
                    }).collect::<Html>(),
                } }
                <Link<Route> to={Route::News}>{ "All news" }</Link<Route>>
            </section>

            <section class={"upcoming-events"}>
                <h2>{ "Events" }</h2>
                { match &*events {
                    Loadable::Loading => html! { <Loading /> },
                    Loadable::Failed => html! {},
                    Loadable::Loaded(events) => html! {
                        <CardDeck<records::Event>
                            items={events.clone()}
                            empty={html! { <p>{ "No upcoming events." }</p> }} />
                    },
                } }
                <Link<Route> to={Route::Events}>{ "All events" }</Link<Route>>
            </section>

            <section class={"donation-summary"}>
                <h2>{ "Support our mission" }</h2>
                { match &*donations {
                    Loadable::Loading => html! { <Loading /> },
                    Loadable::Failed => html! {},
                    Loadable::Loaded(summary) => html! {
                        <DonationProgress summary={summary.clone()} />
                    },
                } }
                <Link<Route> to={Route::Donations}>{ "Donate" }</Link<Route>>
            </section>
        </div>
    }
}
