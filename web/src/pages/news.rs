//! News and board minutes.
use crate::common::bind;
use crate::hooks::{use_api, use_auth_state, use_error_reporter, use_load, use_session, Loadable};
use alumni_core::access::Action;
use alumni_core::api::news::NewPost;
use alumni_core::api::FilePart;
use alumni_core::records::date;
use alumni_core::Error;
use alumni_ui::components::{FileInput, Permitted, SubmitButton};
use alumni_ui::hooks::use_view_scope;
use alumni_ui::widgets::Loading;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(News)]
pub fn news() -> Html {
    let api = use_api();
    let session = use_session();
    let refresh = use_state(|| 0_u32);

    // loaded concurrently, either may arrive first
    let news = {
        let api = api.clone();
        use_load("Could not load news", *refresh, move |_| async move {
            api.news().await
        })
    };

    let minutes = use_load("Could not load board minutes", *refresh, move |_| async move {
        api.board_minutes().await
    });

    let onposted = {
        let refresh = refresh.clone();
        Callback::from(move |_: ()| refresh.set(*refresh + 1))
    };

    html! {
        <div class={"page news"}>
            <h1>{ "News & updates" }</h1>

            <Permitted session={session.clone()} action={Action::PostNews}>
                <PostNews onposted={onposted.clone()} />
            </Permitted>

            <section class={"news-list"}>
                { match &*news {
                    Loadable::Loading => html! { <Loading /> },
                    Loadable::Failed => html! {},
                    Loadable::Loaded(news) if news.is_empty() => html! { <p>{ "No news yet." }</p> },
                    Loadable::Loaded(news) => news.iter().map(|post| {
                        let author = post
                            .author
                            .as_ref()
                            .and_then(|author| author.name.clone())
                            .unwrap_or_else(|| "Admin".to_string());

                        html! {
                            <article key={post.id.as_str()}>
                                <h2>{ &post.title }</h2>
                                <p class={"byline"}>
                                    { format!("{author} · {}", date::display(post.date)) }
                                </p>
                                <p>{ &post.content }</p>
                            </article>
                        }
                    }).collect::<Html>(),
                } }
            </section>

            <section class={"board-minutes"}>
                <h2>{ "Board minutes" }</h2>
                <Permitted session={session.clone()} action={Action::UploadMinutes}>
                    <UploadMinutes onuploaded={onposted} />
                </Permitted>

                { match &*minutes {
                    Loadable::Loading => html! { <Loading /> },
                    Loadable::Failed => html! {},
                    Loadable::Loaded(minutes) if minutes.is_empty() => html! {
                        <p>{ "No minutes published yet." }</p>
                    },
                    Loadable::Loaded(minutes) => html! {
                        <ul>
                            { minutes.iter().map(|minutes| html! {
                                <li key={minutes.id.as_str()}>
                                    <a href={minutes.file_url.clone()} target={"_blank"} rel={"noopener"}>
                                        { &minutes.title }
                                    </a>
                                    <span class={"date"}>{ date::display(minutes.date) }</span>
                                </li>
                            }).collect::<Html>() }
                        </ul>
                    },
                } }
            </section>
        </div>
    }
}

// *****************
// *** Post News ***
// *****************

#[derive(Properties, PartialEq)]
struct PostNewsProps {
    onposted: Callback<()>,
}

#[function_component(PostNews)]
fn post_news(props: &PostNewsProps) -> Html {
    let api = use_api();
    let auth_state = use_auth_state();
    let reporter = use_error_reporter();
    let scope = use_view_scope(());
    let title = use_state(String::new);
    let content = use_state(String::new);
    let busy = use_state(|| false);

    let onsubmit = {
        let title = title.clone();
        let content = content.clone();
        let busy = busy.clone();
        let onposted = props.onposted.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let post = NewPost {
                title: title.trim().to_string(),
                content: content.trim().to_string(),
            };

            busy.set(true);
            let api = api.clone();
            let auth_state = auth_state.clone();
            let reporter = reporter.clone();
            let title = title.clone();
            let content = content.clone();
            let busy = busy.clone();
            let onposted = onposted.clone();
            let ticket = scope.ticket();

            spawn_local(async move {
                let result = match auth_state.store().admin_credentials() {
                    Ok(admin) => api.post_news(&admin, &post).await,
                    Err(err) => Err(err),
                };

                ticket.apply(|| busy.set(false));
                match result {
                    Ok(()) => {
                        reporter.success("News posted");
                        ticket.apply(|| {
                            title.set(String::new());
                            content.set(String::new());
                            onposted.emit(());
                        });
                    }
                    Err(err) => reporter.report("Could not post news", err),
                }
            });
        })
    };

    html! {
        <form class={"post-news"} {onsubmit}>
            <h2>{ "Post an update" }</h2>
            <input placeholder={"Title"} required={true} value={(*title).clone()} oninput={bind(&title)} />
            <textarea placeholder={"What's new?"}
                required={true}
                value={(*content).clone()}
                oninput={bind(&content)} />

            <SubmitButton busy={*busy} busy_label={"Posting..."}>{ "Post" }</SubmitButton>
        </form>
    }
}

// **********************
// *** Upload Minutes ***
// **********************

#[derive(Properties, PartialEq)]
struct UploadMinutesProps {
    onuploaded: Callback<()>,
}

#[function_component(UploadMinutes)]
fn upload_minutes(props: &UploadMinutesProps) -> Html {
    let api = use_api();
    let auth_state = use_auth_state();
    let reporter = use_error_reporter();
    let scope = use_view_scope(());
    let title = use_state(String::new);
    let file = use_state(|| None::<FilePart>);
    let busy = use_state(|| false);

    let onfile = {
        let file = file.clone();
        Callback::from(move |selected: Option<FilePart>| file.set(selected))
    };

    let onsubmit = {
        let title = title.clone();
        let file = file.clone();
        let busy = busy.clone();
        let onuploaded = props.onuploaded.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let Some(selected) = (*file).clone() else {
                reporter.report(
                    "Could not upload minutes",
                    Error::Validation("Select a PDF to upload".to_string()),
                );
                return;
            };

            busy.set(true);
            let api = api.clone();
            let auth_state = auth_state.clone();
            let reporter = reporter.clone();
            let title = title.clone();
            let busy = busy.clone();
            let onuploaded = onuploaded.clone();
            let ticket = scope.ticket();

            spawn_local(async move {
                let result = match auth_state.store().admin_credentials() {
                    Ok(admin) => api.upload_minutes(&admin, &title, selected).await,
                    Err(err) => Err(err),
                };

                ticket.apply(|| busy.set(false));
                match result {
                    Ok(()) => {
                        reporter.success("Minutes uploaded");
                        ticket.apply(|| {
                            title.set(String::new());
                            onuploaded.emit(());
                        });
                    }
                    Err(err) => reporter.report("Could not upload minutes", err),
                }
            });
        })
    };

    html! {
        <form class={"upload-minutes"} {onsubmit}>
            <input placeholder={"Meeting title"}
                required={true}
                value={(*title).clone()}
                oninput={bind(&title)} />

            <FileInput accept={"application/pdf"} required={true} onchange={onfile} />
            <SubmitButton busy={*busy} busy_label={"Uploading..."}>{ "Upload minutes" }</SubmitButton>
        </form>
    }
}
