//! Request membership.
use crate::common::bind;
use crate::hooks::use_api;
use crate::routes::Route;
use alumni_core::api::auth::{describe_signup_error, SignupArgs};
use alumni_ui::components::{Message as MessageUi, SubmitButton};
use alumni_ui::hooks::use_view_scope;
use alumni_ui::types::MessageType;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Signup)]
pub fn signup() -> Html {
    let api = use_api();
    let scope = use_view_scope(());
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let graduation_year = use_state(String::new);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);
    let submitted = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let graduation_year = graduation_year.clone();
        let busy = busy.clone();
        let error = error.clone();
        let submitted = submitted.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            busy.set(true);
            error.set(None);

            let args = SignupArgs {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                password: (*password).clone(),
                graduation_year: graduation_year.trim().to_string(),
            };

            let api = api.clone();
            let busy = busy.clone();
            let error = error.clone();
            let submitted = submitted.clone();
            let ticket = scope.ticket();

            spawn_local(async move {
                let result = api.signup(&args).await;
                ticket.apply(|| {
                    busy.set(false);
                    match result {
                        Ok(()) => submitted.set(true),
                        Err(err) => error.set(Some(describe_signup_error(&err))),
                    }
                });
            });
        })
    };

    if *submitted {
        return html! {
            <div class={"page auth signup"}>
                <h1>{ "Registration received" }</h1>
                <MessageUi
                    kind={MessageType::Success}
                    message={"Your account is pending approval."}
                    details={"You will receive an email once an administrator approves your membership."} />
                <Link<Route> to={Route::Home}>{ "Back to home" }</Link<Route>>
            </div>
        };
    }

    html! {
        <div class={"page auth signup"}>
            <h1>{ "Join the association" }</h1>
            <form {onsubmit}>
                if let Some(error) = (*error).clone() {
                    <MessageUi kind={MessageType::Error} message={error} />
                }

                <label for={"signup-name"}>{ "Full name" }</label>
                <input id={"signup-name"}
                    required={true}
                    value={(*name).clone()}
                    oninput={bind(&name)} />

                <label for={"signup-email"}>{ "Email" }</label>
                <input id={"signup-email"}
                    type={"email"}
                    required={true}
                    value={(*email).clone()}
                    oninput={bind(&email)} />

                <label for={"signup-password"}>{ "Password" }</label>
                <input id={"signup-password"}
                    type={"password"}
                    required={true}
                    value={(*password).clone()}
                    oninput={bind(&password)} />

                <label for={"signup-year"}>{ "Graduation year" }</label>
                <input id={"signup-year"}
                    type={"number"}
                    min={"1950"}
                    max={"2030"}
                    required={true}
                    value={(*graduation_year).clone()}
                    oninput={bind(&graduation_year)} />

                <SubmitButton busy={*busy} busy_label={"Submitting..."}>{ "Sign up" }</SubmitButton>
            </form>

            <Link<Route> to={Route::Login}>{ "Already a member? Log in" }</Link<Route>>
        </div>
    }
}
