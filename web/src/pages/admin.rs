//! Admin dashboard.
use crate::hooks::{use_api, use_auth_state, use_error_reporter, use_member_load, Loadable};
use alumni_core::admin::{self, AdminAction, MemberUpdate};
use alumni_core::records::member::partition_by_approval;
use alumni_core::records::{date, Donation, Member};
use alumni_core::types::{RecordId, Role};
use alumni_ui::hooks::{use_pending, use_view_scope, UsePendingHandle};
use alumni_ui::widgets::donation::group_thousands;
use alumni_ui::widgets::Loading;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

// *******************
// *** Member List ***
// *******************

enum MemberListAction {
    Set(Vec<Member>),
    Failed,

    /// Apply a confirmed update to its member only.
    Apply(MemberUpdate),
}

#[derive(PartialEq)]
enum MemberList {
    Loading,
    Loaded(Vec<Member>),
    Failed,
}

impl Reducible for MemberList {
    type Action = MemberListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            MemberListAction::Set(members) => Self::Loaded(members).into(),
            MemberListAction::Failed => Self::Failed.into(),
            MemberListAction::Apply(update) => {
                let Self::Loaded(members) = self.as_ref() else {
                    return self;
                };

                let mut members = members.clone();
                if !update.apply(&mut members) {
                    tracing::debug!(?update, "member no longer listed");
                    return self;
                }

                Self::Loaded(members).into()
            }
        }
    }
}

// *************
// *** Admin ***
// *************

#[function_component(Admin)]
pub fn admin() -> Html {
    let api = use_api();
    let auth_state = use_auth_state();
    let reporter = use_error_reporter();
    let scope = use_view_scope(());
    let pending = use_pending::<RecordId>();
    let members = use_reducer(|| MemberList::Loading);

    // members and donations load concurrently
    {
        let api = api.clone();
        let auth_state = auth_state.clone();
        let reporter = reporter.clone();
        let members = members.dispatcher();
        let scope = scope.clone();

        use_effect_with((), move |_| {
            let ticket = scope.ticket();
            spawn_local(async move {
                let result = match auth_state.store().admin_credentials() {
                    Ok(admin) => api.admin_users(&admin).await,
                    Err(err) => Err(err),
                };

                ticket.apply(|| match result {
                    Ok(list) => members.dispatch(MemberListAction::Set(list)),
                    Err(err) => {
                        members.dispatch(MemberListAction::Failed);
                        reporter.report("Could not load members", err);
                    }
                });
            });
        });
    }

    let donations = {
        let api = api.clone();
        use_member_load("Could not load donations", (), move |_, credentials| async move {
            api.donations(&credentials).await
        })
    };

    let onaction = {
        let pending = pending.clone();
        let members = members.dispatcher();

        Callback::from(move |action: AdminAction| {
            // a member has at most one action in flight
            let Some(guard) = pending.begin(action.member().clone()) else {
                return;
            };

            let api = api.clone();
            let auth_state = auth_state.clone();
            let reporter = reporter.clone();
            let pending = pending.clone();
            let members = members.clone();
            let ticket = scope.ticket();

            spawn_local(async move {
                let result = admin::dispatch(auth_state.store(), &*api, action).await;
                pending.finish(guard);
                match result {
                    Ok(update) => {
                        ticket.apply(|| members.dispatch(MemberListAction::Apply(update)));
                    }
                    Err(err) => reporter.report("Could not update member", err),
                }
            });
        })
    };

    html! {
        <div class={"page admin"}>
            <h1>{ "Admin dashboard" }</h1>
            { match &*members {
                MemberList::Loading => html! { <Loading /> },
                MemberList::Failed => html! { <p>{ "Members could not be loaded." }</p> },
                MemberList::Loaded(members) => {
                    let (waiting, approved) = partition_by_approval(members);
                    html! {
                        <>
                        <section class={"pending-members"}>
                            <h2>{ format!("Pending approval ({})", waiting.len()) }</h2>
                            <MemberTable
                                members={waiting.into_iter().cloned().collect::<Vec<_>>()}
                                pending={pending.clone()}
                                onaction={onaction.clone()}
                                empty={"No members are awaiting approval."} />
                        </section>

                        <section class={"approved-members"}>
                            <h2>{ format!("Members ({})", approved.len()) }</h2>
                            <MemberTable
                                members={approved.into_iter().cloned().collect::<Vec<_>>()}
                                pending={pending.clone()}
                                onaction={onaction.clone()}
                                empty={"No approved members yet."} />
                        </section>
                        </>
                    }
                }
            } }

            <section class={"donations"}>
                <h2>{ "Donations" }</h2>
                { match &*donations {
                    Loadable::Loading => html! { <Loading /> },
                    Loadable::Failed => html! {},
                    Loadable::Loaded(donations) => html! {
                        <DonationTable donations={donations.clone()} />
                    },
                } }
            </section>
        </div>
    }
}

// ********************
// *** Member Table ***
// ********************

#[derive(Properties, PartialEq)]
struct MemberTableProps {
    members: Vec<Member>,
    pending: UsePendingHandle<RecordId>,
    onaction: Callback<AdminAction>,
    empty: AttrValue,
}

#[function_component(MemberTable)]
fn member_table(props: &MemberTableProps) -> Html {
    if props.members.is_empty() {
        return html! { <p>{ props.empty.clone() }</p> };
    }

    let rows = props.members.iter().map(|member| {
        let busy = props.pending.is_pending(&member.id);

        let approve = member.is_pending().then(|| {
            let onaction = props.onaction.clone();
            let id = member.id.clone();
            let onclick = Callback::from(move |_: MouseEvent| {
                onaction.emit(AdminAction::Approve(id.clone()));
            });

            html! { <button disabled={busy} {onclick}>{ "Approve" }</button> }
        });

        let toggle_role = {
            let onaction = props.onaction.clone();
            let id = member.id.clone();
            let current = member.role;
            Callback::from(move |_: MouseEvent| {
                onaction.emit(AdminAction::ToggleRole {
                    member: id.clone(),
                    current,
                });
            })
        };

        let toggle_label = match member.role {
            Role::Admin => "Make alumni",
            Role::Alumni => "Make admin",
        };

        html! {
            <tr key={member.id.as_str()}>
                <td>{ &member.name }</td>
                <td>{ &member.email }</td>
                <td>{ member.graduation_year.map(|year| year.to_string()).unwrap_or_default() }</td>
                <td>{ member.role.to_string() }</td>
                <td class={"actions"}>
                    { approve }
                    <button disabled={busy} onclick={toggle_role}>{ toggle_label }</button>
                </td>
            </tr>
        }
    });

    html! {
        <table class={"members"}>
            <thead>
                <tr>
                    <th>{ "Name" }</th>
                    <th>{ "Email" }</th>
                    <th>{ "Class of" }</th>
                    <th>{ "Role" }</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{ for rows }</tbody>
        </table>
    }
}

// **********************
// *** Donation Table ***
// **********************

#[derive(Properties, PartialEq)]
struct DonationTableProps {
    donations: Vec<Donation>,
}

#[function_component(DonationTable)]
fn donation_table(props: &DonationTableProps) -> Html {
    if props.donations.is_empty() {
        return html! { <p>{ "No donations recorded yet." }</p> };
    }

    html! {
        <table class={"donations"}>
            <thead>
                <tr>
                    <th>{ "Donor" }</th>
                    <th>{ "Amount" }</th>
                    <th>{ "Reference" }</th>
                    <th>{ "Date" }</th>
                </tr>
            </thead>
            <tbody>
                { for props.donations.iter().map(|donation| {
                    let donor = donation
                        .donor
                        .as_ref()
                        .and_then(|donor| donor.name.clone())
                        .unwrap_or_else(|| "Anonymous".to_string());

                    let amount = donation
                        .amount
                        .map(|amount| format!("₦{}", group_thousands(amount.round() as u64)))
                        .unwrap_or_default();

                    html! {
                        <tr key={donation.id.as_str()}>
                            <td>{ donor }</td>
                            <td>{ amount }</td>
                            <td>{ donation.reference.clone().unwrap_or_default() }</td>
                            <td>{ date::display(donation.date) }</td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}
