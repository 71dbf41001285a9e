//! Complete a password reset from an emailed link.
use crate::common::bind;
use crate::hooks::{use_api, use_error_reporter};
use crate::routes::Route;
use alumni_core::api::auth::PasswordReset;
use alumni_core::Error;
use alumni_ui::components::{Message as MessageUi, SubmitButton};
use alumni_ui::hooks::use_view_scope;
use alumni_ui::types::MessageType;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResetPasswordProps {
    /// One time reset token from the link.
    pub token: String,
}

#[function_component(ResetPassword)]
pub fn reset_password(props: &ResetPasswordProps) -> Html {
    let api = use_api();
    let reporter = use_error_reporter();
    let navigator = use_navigator().expect("navigator not found");
    let scope = use_view_scope(props.token.clone());
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let token = props.token.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let busy = busy.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let reset = PasswordReset {
                password: (*password).clone(),
                confirm: (*confirm).clone(),
            };

            // checked before anything is sent
            if let Err(err) = reset.validate() {
                error.set(Some(err.to_string()));
                return;
            }

            busy.set(true);
            error.set(None);

            let api = api.clone();
            let token = token.clone();
            let reporter = reporter.clone();
            let navigator = navigator.clone();
            let busy = busy.clone();
            let error = error.clone();
            let ticket = scope.ticket();

            spawn_local(async move {
                let result = api.reset_password(&token, &reset).await;
                ticket.apply(|| match result {
                    Ok(msg) => {
                        reporter.success(&msg);
                        navigator.push(&Route::Login);
                    }
                    Err(err) => {
                        busy.set(false);
                        let msg = match err {
                            Error::Validation(msg) => msg,
                            err => err.to_string(),
                        };
                        error.set(Some(msg));
                    }
                });
            });
        })
    };

    html! {
        <div class={"page auth reset-password"}>
            <h1>{ "Choose a new password" }</h1>
            <form {onsubmit}>
                if let Some(error) = (*error).clone() {
                    <MessageUi kind={MessageType::Error} message={error} />
                }

                <label for={"reset-password"}>{ "New password" }</label>
                <input id={"reset-password"}
                    type={"password"}
                    required={true}
                    value={(*password).clone()}
                    oninput={bind(&password)} />

                <label for={"reset-confirm"}>{ "Confirm password" }</label>
                <input id={"reset-confirm"}
                    type={"password"}
                    required={true}
                    value={(*confirm).clone()}
                    oninput={bind(&confirm)} />

                <SubmitButton busy={*busy} busy_label={"Saving..."}>{ "Reset password" }</SubmitButton>
            </form>

            <Link<Route> to={Route::Login}>{ "Back to login" }</Link<Route>>
        </div>
    }
}
