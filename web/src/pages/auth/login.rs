//! Log in, or request a password reset link.
use crate::app::AuthStateAction;
use crate::common::bind;
use crate::hooks::{use_api, use_auth_state};
use crate::routes::Route;
use alumni_core::access::LoginReturn;
use alumni_core::api::auth::{describe_login_error, LoginArgs};
use alumni_ui::components::{Message as MessageUi, SubmitButton};
use alumni_ui::hooks::use_view_scope;
use alumni_ui::types::MessageType;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::history::{BrowserHistory, History};
use yew_router::prelude::*;

/// Delay before returning to login after a reset link was sent, in milliseconds.
const FORGOT_RETURN_DELAY: u32 = 4_000;

#[function_component(Login)]
pub fn login() -> Html {
    let forgot_mode = use_state(|| false);
    let show_login = {
        let forgot_mode = forgot_mode.clone();
        Callback::from(move |_: ()| forgot_mode.set(false))
    };

    let show_forgot = {
        let forgot_mode = forgot_mode.clone();
        Callback::from(move |_: MouseEvent| forgot_mode.set(true))
    };

    html! {
        <div class={"page auth login"}>
            if *forgot_mode {
                <ForgotPassword ondone={show_login} />
            } else {
                <LoginForm onforgot={show_forgot} />
            }
        </div>
    }
}

// ******************
// *** Login Form ***
// ******************

#[derive(Properties, PartialEq)]
struct LoginFormProps {
    onforgot: Callback<MouseEvent>,
}

#[function_component(LoginForm)]
fn login_form(props: &LoginFormProps) -> Html {
    let api = use_api();
    let auth_state = use_auth_state();
    let navigator = use_navigator().expect("navigator not found");
    let login_return = use_location()
        .and_then(|location| location.query::<LoginReturn>().ok())
        .unwrap_or_default();

    let scope = use_view_scope(());
    let email = use_state(String::new);
    let password = use_state(String::new);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let busy = busy.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            busy.set(true);
            error.set(None);

            let args = LoginArgs {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };

            let api = api.clone();
            let auth_state = auth_state.clone();
            let navigator = navigator.clone();
            let next = login_return.target().map(ToString::to_string);
            let busy = busy.clone();
            let error = error.clone();
            let ticket = scope.ticket();

            spawn_local(async move {
                match api.login(&args).await {
                    Ok(credentials) => {
                        auth_state.dispatch(AuthStateAction::SetCredentials(credentials));
                        ticket.apply(|| match next {
                            Some(next) => BrowserHistory::new().push(next),
                            None => navigator.push(&Route::Profile),
                        });
                    }
                    Err(err) => {
                        ticket.apply(|| {
                            busy.set(false);
                            error.set(Some(describe_login_error(&err)));
                        });
                    }
                }
            });
        })
    };

    html! {
        <>
        <h1>{ "Welcome back" }</h1>
        <form {onsubmit}>
            if let Some(error) = (*error).clone() {
                <MessageUi kind={MessageType::Error} message={error} />
            }

            <label for={"login-email"}>{ "Email" }</label>
            <input id={"login-email"}
                type={"email"}
                required={true}
                value={(*email).clone()}
                oninput={bind(&email)} />

            <label for={"login-password"}>{ "Password" }</label>
            <input id={"login-password"}
                type={"password"}
                required={true}
                value={(*password).clone()}
                oninput={bind(&password)} />

            <SubmitButton busy={*busy} busy_label={"Logging in..."}>{ "Log in" }</SubmitButton>
        </form>

        <div class={"auth-links"}>
            <button type={"button"} class={"link"} onclick={props.onforgot.clone()}>
                { "Forgot password?" }
            </button>
            <Link<Route> to={Route::Signup}>{ "Not a member yet? Sign up" }</Link<Route>>
        </div>
        </>
    }
}

// ***********************
// *** Forgot Password ***
// ***********************

#[derive(Properties, PartialEq)]
struct ForgotPasswordProps {
    /// Return to the login form.
    ondone: Callback<()>,
}

#[function_component(ForgotPassword)]
fn forgot_password(props: &ForgotPasswordProps) -> Html {
    let api = use_api();
    let scope = use_view_scope(());
    let email = use_state(String::new);
    let busy = use_state(|| false);
    let result = use_state(|| None::<(MessageType, String)>);

    let onsubmit = {
        let email = email.clone();
        let busy = busy.clone();
        let result = result.clone();
        let ondone = props.ondone.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            busy.set(true);
            result.set(None);

            let api = api.clone();
            let email = email.trim().to_string();
            let busy = busy.clone();
            let result = result.clone();
            let ondone = ondone.clone();
            let ticket = scope.ticket();

            spawn_local(async move {
                let outcome = api.forgot_password(&email).await;
                ticket.apply(|| {
                    busy.set(false);
                    match outcome {
                        Ok(msg) => {
                            result.set(Some((MessageType::Success, msg)));
                            let ticket = ticket.clone();
                            Timeout::new(FORGOT_RETURN_DELAY, move || {
                                ticket.apply(|| ondone.emit(()));
                            })
                            .forget();
                        }
                        Err(err) => {
                            result.set(Some((MessageType::Error, err.to_string())));
                        }
                    }
                });
            });
        })
    };

    let onback = {
        let ondone = props.ondone.clone();
        Callback::from(move |_: MouseEvent| ondone.emit(()))
    };

    html! {
        <>
        <h1>{ "Reset your password" }</h1>
        <p>{ "Enter your email and we will send you a link to reset your password." }</p>
        <form {onsubmit}>
            if let Some((kind, message)) = (*result).clone() {
                <MessageUi {kind} {message} />
            }

            <label for={"forgot-email"}>{ "Email" }</label>
            <input id={"forgot-email"}
                type={"email"}
                required={true}
                value={(*email).clone()}
                oninput={bind(&email)} />

            <SubmitButton busy={*busy} busy_label={"Sending..."}>{ "Send reset link" }</SubmitButton>
        </form>

        <button type={"button"} class={"link"} onclick={onback}>{ "Back to login" }</button>
        </>
    }
}
