use crate::common::{bind, parse_amount};
use crate::constants::{BANK_ACCOUNT_NAME, BANK_ACCOUNT_NUMBER, BANK_NAME};
use crate::hooks::{use_api, use_error_reporter, use_load, use_session, Loadable};
use crate::routes::Route;
use alumni_core::access::Action;
use alumni_core::records::DonationSummary;
use alumni_core::Error;
use alumni_ui::components::{Permitted, SubmitButton};
use alumni_ui::hooks::use_view_scope;
use alumni_ui::widgets::{DonationProgress, Loading};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Donations)]
pub fn donations() -> Html {
    let api = use_api();
    let session = use_session();
    let show_details = use_state(|| false);

    let summary = use_load("Could not load donations", (), move |_| async move {
        api.public_donations()
            .await
            .map(|donations| DonationSummary::from_donations(&donations))
    });

    let toggle_details = {
        let show_details = show_details.clone();
        Callback::from(move |_: MouseEvent| show_details.set(!*show_details))
    };

    html! {
        <div class={"page donations"}>
            <h1>{ "Support our mission" }</h1>
            <p class={"lead"}>
                { "Your contribution funds scholarships, school restoration and mentorship for KGHS girls." }
            </p>

            { match &*summary {
                Loadable::Loading => html! { <Loading /> },
                Loadable::Failed => html! {},
                Loadable::Loaded(summary) => html! {
                    <DonationProgress summary={summary.clone()} />
                },
            } }

            <Permitted
                session={session.clone()}
                action={Action::Donate}
                fallback={html! {
                    <p class={"login-prompt"}>
                        <Link<Route> to={Route::Login}>{ "Log in" }</Link<Route>>
                        { " to donate online." }
                    </p>
                }}>
                <DonateForm />
            </Permitted>

            <section class={"bank-transfer"}>
                <p>{ "We gratefully accept bank transfers from anywhere in the world." }</p>
                <button type={"button"} onclick={toggle_details}>
                    { if *show_details { "Hide details" } else { "Show bank details" } }
                </button>

                if *show_details {
                    <dl class={"bank-details"}>
                        <dt>{ "Bank name" }</dt>
                        <dd>{ BANK_NAME }</dd>
                        <dt>{ "Account name" }</dt>
                        <dd>{ BANK_ACCOUNT_NAME }</dd>
                        <dt>{ "Account number" }</dt>
                        <dd>{ BANK_ACCOUNT_NUMBER }</dd>
                    </dl>
                }
            </section>
        </div>
    }
}

// *******************
// *** Donate Form ***
// *******************

#[function_component(DonateForm)]
fn donate_form() -> Html {
    let api = use_api();
    let session = use_session();
    let reporter = use_error_reporter();
    let scope = use_view_scope(());
    let amount = use_state(String::new);
    let busy = use_state(|| false);

    let onsubmit = {
        let amount = amount.clone();
        let busy = busy.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let Some(credentials) = session.credentials().cloned() else {
                reporter.report("Could not start donation", Error::NoSession);
                return;
            };

            let Some(amount) = parse_amount(&amount) else {
                reporter.report(
                    "Could not start donation",
                    Error::Validation("Enter an amount in naira".to_string()),
                );
                return;
            };

            busy.set(true);
            let api = api.clone();
            let reporter = reporter.clone();
            let busy = busy.clone();
            let ticket = scope.ticket();

            spawn_local(async move {
                let result = api.donate(&credentials, amount).await;
                ticket.apply(|| busy.set(false));
                match result {
                    Ok(checkout) => match checkout.authorization_url {
                        Some(url) => {
                            // leave for the payment provider,
                            // which returns to the donation success view
                            let redirected = web_sys::window()
                                .map(|window| window.location().set_href(&url).is_ok())
                                .unwrap_or(false);

                            if !redirected {
                                reporter.report(
                                    "Could not open payment page",
                                    Error::Network(url),
                                );
                            }
                        }
                        None => reporter.success("Thank you! Your pledge was recorded."),
                    },
                    Err(err) => reporter.report("Could not start donation", err),
                }
            });
        })
    };

    html! {
        <form class={"donate"} {onsubmit}>
            <h2>{ "Donate online" }</h2>
            <label for={"donation-amount"}>{ "Amount (₦)" }</label>
            <input id={"donation-amount"}
                inputmode={"numeric"}
                placeholder={"10,000"}
                required={true}
                value={(*amount).clone()}
                oninput={bind(&amount)} />

            <SubmitButton busy={*busy} busy_label={"Redirecting..."}>{ "Donate" }</SubmitButton>
        </form>
    }
}
