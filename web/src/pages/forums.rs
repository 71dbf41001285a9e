//! Discussion forums.
use crate::common::bind;
use crate::hooks::{use_api, use_error_reporter, use_load, use_session, Loadable};
use crate::routes::Route;
use alumni_core::access::{permits, Action};
use alumni_core::api::news::NewPost;
use alumni_core::records::{date, Author, ForumThread};
use alumni_core::types::RecordId;
use alumni_core::Error;
use alumni_ui::components::{Permitted, SubmitButton};
use alumni_ui::hooks::{use_pending, use_view_scope};
use alumni_ui::widgets::Loading;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

fn author_name(author: &Option<Author>) -> String {
    author
        .as_ref()
        .and_then(|author| author.name.clone())
        .unwrap_or_else(|| "Anonymous".to_string())
}

#[function_component(Forums)]
pub fn forums() -> Html {
    let api = use_api();
    let session = use_session();
    let refresh = use_state(|| 0_u32);

    let threads = use_load("Could not load discussions", *refresh, move |_| async move {
        api.threads().await
    });

    let onchanged = {
        let refresh = refresh.clone();
        Callback::from(move |_: ()| refresh.set(*refresh + 1))
    };

    html! {
        <div class={"page forums"}>
            <h1>{ "Forums" }</h1>

            <Permitted
                session={session.clone()}
                action={Action::CreateThread}
                fallback={html! {
                    <p class={"login-prompt"}>
                        <Link<Route> to={Route::Login}>{ "Log in" }</Link<Route>>
                        { " to join the conversation." }
                    </p>
                }}>
                <CreateThread onchanged={onchanged.clone()} />
            </Permitted>

            { match &*threads {
                Loadable::Loading => html! { <Loading /> },
                Loadable::Failed => html! {},
                Loadable::Loaded(threads) if threads.is_empty() => html! {
                    <p>{ "No discussions yet. Start one!" }</p>
                },
                Loadable::Loaded(threads) => html! {
                    <Threads threads={threads.clone()} {onchanged} />
                },
            } }
        </div>
    }
}

// ***************
// *** Threads ***
// ***************

#[derive(Properties, PartialEq)]
struct ThreadsProps {
    threads: Vec<ForumThread>,
    onchanged: Callback<()>,
}

#[function_component(Threads)]
fn threads(props: &ThreadsProps) -> Html {
    let api = use_api();
    let session = use_session();
    let reporter = use_error_reporter();
    let scope = use_view_scope(());
    let pending = use_pending::<RecordId>();
    let can_reply = permits(&session, Action::ReplyToThread);

    let onreply = {
        let pending = pending.clone();
        let onchanged = props.onchanged.clone();

        Callback::from(move |(thread, content): (RecordId, String)| {
            let Some(credentials) = session.credentials().cloned() else {
                reporter.report("Could not reply", Error::NoSession);
                return;
            };

            // one reply in flight per thread
            let Some(guard) = pending.begin(thread.clone()) else {
                return;
            };

            let api = api.clone();
            let reporter = reporter.clone();
            let pending = pending.clone();
            let onchanged = onchanged.clone();
            let ticket = scope.ticket();

            spawn_local(async move {
                let result = api.reply(&credentials, &thread, &content).await;
                pending.finish(guard);
                match result {
                    Ok(()) => {
                        ticket.apply(|| onchanged.emit(()));
                    }
                    Err(err) => reporter.report("Could not reply", err),
                }
            });
        })
    };

    html! {
        <div class={"threads"}>
            { props.threads.iter().map(|thread| html! {
                <Thread key={thread.id.as_str()}
                    thread={thread.clone()}
                    busy={pending.is_pending(&thread.id)}
                    onreply={if can_reply { Some(onreply.clone()) } else { None }} />
            }).collect::<Html>() }
        </div>
    }
}

// **************
// *** Thread ***
// **************

#[derive(Properties, PartialEq)]
struct ThreadProps {
    thread: ForumThread,

    #[prop_or_default]
    busy: bool,

    /// Replying is offered only if set.
    #[prop_or_default]
    onreply: Option<Callback<(RecordId, String)>>,
}

#[function_component(Thread)]
fn thread(props: &ThreadProps) -> Html {
    let content = use_state(String::new);
    let thread = &props.thread;

    // reply box is cleared once the reply reloads the threads
    {
        let content = content.clone();
        use_effect_with(thread.replies.len(), move |_| {
            content.set(String::new());
        });
    }

    let onsubmit = props.onreply.clone().map(|onreply| {
        let id = thread.id.clone();
        let content = content.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            onreply.emit((id.clone(), content.trim().to_string()));
        })
    });

    html! {
        <article class={"thread"}>
            <h2>{ &thread.title }</h2>
            <p class={"byline"}>
                { format!("{} · {}", author_name(&thread.author), date::display(thread.date)) }
            </p>
            <p>{ &thread.content }</p>

            <ul class={"replies"}>
                { thread.replies.iter().enumerate().map(|(index, reply)| html! {
                    <li key={index}>
                        <span class={"author"}>{ author_name(&reply.author) }</span>
                        <p>{ &reply.content }</p>
                    </li>
                }).collect::<Html>() }
            </ul>

            if let Some(onsubmit) = onsubmit {
                <form class={"reply"} {onsubmit}>
                    <input placeholder={"Write a reply..."}
                        required={true}
                        value={(*content).clone()}
                        oninput={bind(&content)} />

                    <SubmitButton busy={props.busy} busy_label={"Replying..."}>
                        { "Reply" }
                    </SubmitButton>
                </form>
            }
        </article>
    }
}

// *********************
// *** Create Thread ***
// *********************

#[derive(Properties, PartialEq)]
struct CreateThreadProps {
    onchanged: Callback<()>,
}

#[function_component(CreateThread)]
fn create_thread(props: &CreateThreadProps) -> Html {
    let api = use_api();
    let session = use_session();
    let reporter = use_error_reporter();
    let scope = use_view_scope(());
    let title = use_state(String::new);
    let content = use_state(String::new);
    let busy = use_state(|| false);

    let onsubmit = {
        let title = title.clone();
        let content = content.clone();
        let busy = busy.clone();
        let onchanged = props.onchanged.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let Some(credentials) = session.credentials().cloned() else {
                reporter.report("Could not start discussion", Error::NoSession);
                return;
            };

            let thread = NewPost {
                title: title.trim().to_string(),
                content: content.trim().to_string(),
            };

            busy.set(true);
            let api = api.clone();
            let reporter = reporter.clone();
            let title = title.clone();
            let content = content.clone();
            let busy = busy.clone();
            let onchanged = onchanged.clone();
            let ticket = scope.ticket();

            spawn_local(async move {
                let result = api.create_thread(&credentials, &thread).await;
                ticket.apply(|| busy.set(false));
                match result {
                    Ok(()) => {
                        ticket.apply(|| {
                            title.set(String::new());
                            content.set(String::new());
                            onchanged.emit(());
                        });
                    }
                    Err(err) => reporter.report("Could not start discussion", err),
                }
            });
        })
    };

    html! {
        <form class={"create-thread"} {onsubmit}>
            <h2>{ "Start a discussion" }</h2>
            <input placeholder={"Topic"} required={true} value={(*title).clone()} oninput={bind(&title)} />
            <textarea placeholder={"Share your thoughts"}
                required={true}
                value={(*content).clone()}
                oninput={bind(&content)} />

            <SubmitButton busy={*busy} busy_label={"Posting..."}>{ "Post" }</SubmitButton>
        </form>
    }
}
