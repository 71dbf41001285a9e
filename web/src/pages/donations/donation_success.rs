use crate::hooks::{member_deps, use_api, use_load, use_session, Loadable};
use crate::routes::Route;
use alumni_core::access::{permits, Action, LoginReturn};
use alumni_ui::widgets::Loading;
use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;

/// Query the payment provider returns with.
#[derive(Deserialize, Default)]
struct PaymentReturn {
    reference: Option<String>,
}

#[function_component(DonationSuccess)]
pub fn donation_success() -> Html {
    let api = use_api();
    let session = use_session();
    let location = use_location();
    let reference = location
        .as_ref()
        .and_then(|location| location.query::<PaymentReturn>().ok())
        .and_then(|query| query.reference)
        .filter(|reference| !reference.trim().is_empty());

    // verification needs a member, the reference is kept for after login
    let verification = use_load(
        "Could not verify your payment",
        member_deps(reference, &session),
        move |(reference, credentials)| async move {
            let (Some(reference), Some(credentials)) = (reference, credentials) else {
                return Ok(None);
            };

            api.verify_donation(&credentials, &reference)
                .await
                .map(Some)
        },
    );

    let status = match &*verification {
        _ if !permits(&session, Action::VerifyDonation) => {
            let login_return = location
                .as_ref()
                .map(|location| LoginReturn::from_location(location.path(), location.query_str()))
                .unwrap_or_default();

            html! {
                <p class={"login-prompt"}>
                    <Link<Route, LoginReturn> to={Route::Login} query={Some(login_return)}>
                        { "Log in" }
                    </Link<Route, LoginReturn>>
                    { " to confirm your payment and receive a receipt." }
                </p>
            }
        }
        Loadable::Loading => html! { <Loading text={"Verifying your payment..."} /> },
        Loadable::Loaded(Some(verification)) if !verification.success => html! {
            <p class={"warning"}>
                { "Your payment could not be verified. Please contact us if you were charged." }
            </p>
        },
        Loadable::Loaded(_) => html! {
            <p>{ "A receipt has been sent to your email." }</p>
        },
        Loadable::Failed => html! {
            <p class={"warning"}>
                { "We could not verify your payment. Please contact us if you were charged." }
            </p>
        },
    };

    html! {
        <div class={"page donation-success"}>
            <h1>{ "Thank you for your generous donation!" }</h1>
            <p>
                { "Your support brings us one step closer to empowering the next generation of KGHS girls." }
            </p>

            { status }

            <nav class={"actions"}>
                <Link<Route> to={Route::Home}>{ "Back to home" }</Link<Route>>
                <Link<Route> to={Route::Donations}>{ "Donate again" }</Link<Route>>
            </nav>
        </div>
    }
}
