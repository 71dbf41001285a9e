use super::*;
use alumni_core::access::{authorize, Decision, Requirement};
use alumni_core::system::{Credentials, Session};
use alumni_core::types::Role;

fn all_routes() -> Vec<Route> {
    vec![
        Route::Home,
        Route::Login,
        Route::Signup,
        Route::ResetPassword {
            token: "abc".to_string(),
        },
        Route::Profile,
        Route::Directory,
        Route::Events,
        Route::News,
        Route::Forums,
        Route::Gallery,
        Route::Donations,
        Route::DonationSuccess,
        Route::Admin,
        Route::NotFound,
    ]
}

#[test]
fn routes_should_map_to_views_and_back() {
    for route in all_routes() {
        let view = View::from(&route);
        assert_eq!(route, Route::from(&view));
    }
}

#[test]
fn routes_should_parse_from_paths() {
    assert_eq!(Some(Route::Admin), Route::recognize("/admin"));
    assert_eq!(
        Some(Route::DonationSuccess),
        Route::recognize("/donations/success")
    );
    assert_eq!(
        Some(Route::ResetPassword {
            token: "one-time".to_string()
        }),
        Route::recognize("/reset-password/one-time")
    );
}

#[test]
fn protected_routes_should_redirect_anonymous_visitors() {
    let anonymous = Session::anonymous();
    let alumni = Session::authenticated(Credentials::new("t", Role::Alumni, "Ada"));

    for route in all_routes() {
        let view = View::from(&route);
        let decision = authorize(&anonymous, view.requirement());
        match view.requirement() {
            Requirement::Public => assert_eq!(Decision::Render, decision),
            Requirement::MemberOnly => assert_eq!(Decision::Redirect(View::Login), decision),
            Requirement::AdminOnly => assert_eq!(Decision::Redirect(View::Home), decision),
        }
    }

    assert_eq!(
        Decision::Redirect(View::Home),
        authorize(&alumni, View::from(&Route::Admin).requirement()),
        "alumni should not reach the admin dashboard"
    );
}

#[test]
fn payment_return_should_render_for_anonymous_visitors() {
    let route = Route::recognize("/donations/success").expect("route should parse");
    assert_eq!(
        Decision::Render,
        authorize(&Session::anonymous(), View::from(&route).requirement()),
        "the payment reference should not be lost to a login redirect"
    );
}
