use super::*;
use alumni_core::types::Role;

fn member(token: &str, name: &str) -> Session {
    Session::authenticated(Credentials::new(token, Role::Alumni, name))
}

#[test]
fn member_deps_should_change_when_member_changes() {
    let ada = member("ada-token", "Ada");
    let grace = member("grace-token", "Grace");

    assert_eq!(member_deps(0, &ada), member_deps(0, &ada));
    assert_ne!(
        member_deps(0, &ada),
        member_deps(0, &grace),
        "another member should reload"
    );
    assert_ne!(
        member_deps(0, &ada),
        member_deps(0, &Session::anonymous()),
        "logging out should reload"
    );
    assert_ne!(member_deps(0, &ada), member_deps(1, &ada));
}

#[test]
fn member_deps_should_carry_current_credentials() {
    let ada = member("ada-token", "Ada");
    let (_, credentials) = member_deps((), &ada);
    assert_eq!(Some("ada-token"), credentials.as_ref().map(Credentials::token));

    let (_, credentials) = member_deps((), &Session::anonymous());
    assert_eq!(None, credentials);
}
