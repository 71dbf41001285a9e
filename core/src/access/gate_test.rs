use super::*;
use crate::system::Credentials;
use crate::types::Role;

#[test]
fn authorize_should_follow_requirement_table() {
    let anonymous = Session::anonymous();
    let alumni = Session::authenticated(Credentials::new("a", Role::Alumni, "A"));
    let admin = Session::authenticated(Credentials::new("b", Role::Admin, "B"));

    // public
    for session in [&anonymous, &alumni, &admin] {
        assert_eq!(Decision::Render, authorize(session, Requirement::Public));
    }

    // member only
    assert_eq!(
        Decision::Redirect(View::Login),
        authorize(&anonymous, Requirement::MemberOnly),
        "anonymous should be sent to login"
    );
    assert_eq!(Decision::Render, authorize(&alumni, Requirement::MemberOnly));
    assert_eq!(Decision::Render, authorize(&admin, Requirement::MemberOnly));

    // admin only
    assert_eq!(
        Decision::Redirect(View::Home),
        authorize(&anonymous, Requirement::AdminOnly),
        "anonymous should be sent home"
    );
    assert_eq!(
        Decision::Redirect(View::Home),
        authorize(&alumni, Requirement::AdminOnly),
        "alumni should be sent home"
    );
    assert_eq!(Decision::Render, authorize(&admin, Requirement::AdminOnly));
}

#[test]
fn view_requirements_should_match_access_levels() {
    assert_eq!(Requirement::Public, View::Home.requirement());
    assert_eq!(Requirement::Public, View::ResetPassword("x".into()).requirement());
    assert_eq!(Requirement::MemberOnly, View::Profile.requirement());
    assert_eq!(Requirement::MemberOnly, View::Directory.requirement());
    assert_eq!(Requirement::Public, View::DonationSuccess.requirement());
    assert_eq!(Requirement::AdminOnly, View::Admin.requirement());
}
