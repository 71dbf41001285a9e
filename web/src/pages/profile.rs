//! The member's own profile.
use crate::common::bind;
use crate::hooks::{use_api, use_error_reporter, use_member_load, use_session, Loadable};
use alumni_core::api::profile::ProfileUpdate;
use alumni_core::api::FilePart;
use alumni_core::records::Member;
use alumni_core::Error;
use alumni_ui::components::{FileInput, SubmitButton};
use alumni_ui::hooks::use_view_scope;
use alumni_ui::widgets::Loading;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(Profile)]
pub fn profile() -> Html {
    let api = use_api();
    let refresh = use_state(|| 0_u32);

    let member = use_member_load(
        "Could not load your profile",
        *refresh,
        move |_, credentials| async move { api.profile(&credentials).await },
    );

    let onsaved = {
        let refresh = refresh.clone();
        Callback::from(move |_: ()| refresh.set(*refresh + 1))
    };

    html! {
        <div class={"page profile"}>
            <h1>{ "My profile" }</h1>
            { match &*member {
                Loadable::Loading => html! { <Loading /> },
                Loadable::Failed => html! { <p>{ "Your profile could not be loaded." }</p> },
                Loadable::Loaded(member) => html! {
                    <ProfileEditor member={member.clone()} {onsaved} />
                },
            } }
        </div>
    }
}

// **********************
// *** Profile Editor ***
// **********************

#[derive(Properties, PartialEq)]
struct ProfileEditorProps {
    member: Member,
    onsaved: Callback<()>,
}

#[function_component(ProfileEditor)]
fn profile_editor(props: &ProfileEditorProps) -> Html {
    let api = use_api();
    let session = use_session();
    let reporter = use_error_reporter();
    let scope = use_view_scope(());
    let initial = ProfileUpdate::from_member(&props.member);
    let name = use_state(|| initial.name.clone());
    let graduation_year = use_state(|| initial.graduation_year.clone());
    let bio = use_state(|| initial.bio.clone());
    let location = use_state(|| initial.location.clone());
    let profile_pic = use_state(|| None::<FilePart>);
    let busy = use_state(|| false);

    let onpicture = {
        let profile_pic = profile_pic.clone();
        Callback::from(move |file: Option<FilePart>| profile_pic.set(file))
    };

    let onsubmit = {
        let name = name.clone();
        let graduation_year = graduation_year.clone();
        let bio = bio.clone();
        let location = location.clone();
        let profile_pic = profile_pic.clone();
        let busy = busy.clone();
        let onsaved = props.onsaved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let Some(credentials) = session.credentials().cloned() else {
                reporter.report("Could not save your profile", Error::NoSession);
                return;
            };

            let update = ProfileUpdate {
                name: name.trim().to_string(),
                graduation_year: graduation_year.trim().to_string(),
                bio: (*bio).clone(),
                location: location.trim().to_string(),
                profile_pic: (*profile_pic).clone(),
            };

            busy.set(true);
            let api = api.clone();
            let reporter = reporter.clone();
            let busy = busy.clone();
            let onsaved = onsaved.clone();
            let ticket = scope.ticket();

            spawn_local(async move {
                let result = api.update_profile(&credentials, update).await;
                ticket.apply(|| busy.set(false));
                match result {
                    Ok(()) => {
                        reporter.success("Profile updated");
                        ticket.apply(|| onsaved.emit(()));
                    }
                    Err(err) => reporter.report("Could not save your profile", err),
                }
            });
        })
    };

    html! {
        <form class={"profile-editor"} {onsubmit}>
            if let Some(src) = props.member.profile_pic.clone() {
                <img class={"profile-picture"} {src} alt={props.member.name.clone()} />
            }

            <label for={"profile-picture"}>{ "Profile picture" }</label>
            <FileInput id={"profile-picture"} accept={"image/*"} onchange={onpicture} />

            <label for={"profile-name"}>{ "Full name" }</label>
            <input id={"profile-name"} value={(*name).clone()} oninput={bind(&name)} />

            <label for={"profile-email"}>{ "Email" }</label>
            <input id={"profile-email"} value={props.member.email.clone()} disabled={true} />

            <label for={"profile-year"}>{ "Graduation year" }</label>
            <input id={"profile-year"}
                type={"number"}
                value={(*graduation_year).clone()}
                oninput={bind(&graduation_year)} />

            <label for={"profile-location"}>{ "Location" }</label>
            <input id={"profile-location"} value={(*location).clone()} oninput={bind(&location)} />

            <label for={"profile-bio"}>{ "Bio" }</label>
            <textarea id={"profile-bio"} value={(*bio).clone()} oninput={bind(&bio)} />

            <SubmitButton busy={*busy} busy_label={"Saving..."}>{ "Save profile" }</SubmitButton>
        </form>
    }
}
