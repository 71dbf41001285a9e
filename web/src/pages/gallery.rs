//! Photo gallery.
use crate::common::bind;
use crate::hooks::{use_api, use_error_reporter, use_load, use_session, Loadable};
use crate::routes::Route;
use alumni_core::access::Action;
use alumni_core::api::FilePart;
use alumni_core::records::GalleryImage;
use alumni_core::Error;
use alumni_ui::components::{CardDeck, FileInput, Permitted, SubmitButton};
use alumni_ui::hooks::use_view_scope;
use alumni_ui::widgets::Loading;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let api = use_api();
    let session = use_session();
    let refresh = use_state(|| 0_u32);

    let images = use_load("Could not load gallery", *refresh, move |_| async move {
        api.gallery().await
    });

    let onuploaded = {
        let refresh = refresh.clone();
        Callback::from(move |_: ()| refresh.set(*refresh + 1))
    };

    html! {
        <div class={"page gallery"}>
            <h1>{ "Gallery" }</h1>

            <Permitted
                session={session.clone()}
                action={Action::UploadImage}
                fallback={html! {
                    <p class={"login-prompt"}>
                        <Link<Route> to={Route::Login}>{ "Log in" }</Link<Route>>
                        { " to share your photos." }
                    </p>
                }}>
                <UploadImage {onuploaded} />
            </Permitted>

            { match &*images {
                Loadable::Loading => html! { <Loading /> },
                Loadable::Failed => html! {},
                Loadable::Loaded(images) => html! {
                    <CardDeck<GalleryImage>
                        items={images.clone()}
                        empty={html! { <p>{ "No photos yet." }</p> }} />
                },
            } }
        </div>
    }
}

// ********************
// *** Upload Image ***
// ********************

#[derive(Properties, PartialEq)]
struct UploadImageProps {
    onuploaded: Callback<()>,
}

#[function_component(UploadImage)]
fn upload_image(props: &UploadImageProps) -> Html {
    let api = use_api();
    let session = use_session();
    let reporter = use_error_reporter();
    let scope = use_view_scope(());
    let caption = use_state(String::new);
    let image = use_state(|| None::<FilePart>);
    let busy = use_state(|| false);

    // remounts the file input to clear its selection
    let uploads = use_state(|| 0_u32);

    let onimage = {
        let image = image.clone();
        Callback::from(move |selected: Option<FilePart>| image.set(selected))
    };

    let onerror = {
        let reporter = reporter.clone();
        Callback::from(move |err: alumni_ui::Error| {
            reporter.report("Could not read image", Error::Validation(err.to_string()));
        })
    };

    let onsubmit = {
        let caption = caption.clone();
        let image = image.clone();
        let busy = busy.clone();
        let uploads = uploads.clone();
        let onuploaded = props.onuploaded.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let Some(credentials) = session.credentials().cloned() else {
                reporter.report("Could not upload image", Error::NoSession);
                return;
            };

            let Some(selected) = (*image).clone() else {
                reporter.report(
                    "Could not upload image",
                    Error::Validation("Select an image to upload".to_string()),
                );
                return;
            };

            busy.set(true);
            let api = api.clone();
            let reporter = reporter.clone();
            let caption = caption.clone();
            let image = image.clone();
            let busy = busy.clone();
            let uploads = uploads.clone();
            let onuploaded = onuploaded.clone();
            let ticket = scope.ticket();

            spawn_local(async move {
                let result = api
                    .upload_image(&credentials, caption.trim(), selected)
                    .await;

                ticket.apply(|| busy.set(false));
                match result {
                    Ok(()) => {
                        reporter.success("Photo shared");
                        ticket.apply(|| {
                            caption.set(String::new());
                            image.set(None);
                            uploads.set(*uploads + 1);
                            onuploaded.emit(());
                        });
                    }
                    Err(err) => reporter.report("Could not upload image", err),
                }
            });
        })
    };

    html! {
        <form class={"upload-image"} {onsubmit}>
            <h2>{ "Share a photo" }</h2>
            <FileInput key={*uploads}
                accept={"image/*"}
                required={true}
                onchange={onimage}
                {onerror} />

            <input placeholder={"Caption"} value={(*caption).clone()} oninput={bind(&caption)} />
            <SubmitButton busy={*busy} busy_label={"Uploading..."}>{ "Upload" }</SubmitButton>
        </form>
    }
}
