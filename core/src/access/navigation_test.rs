use super::*;
use crate::system::Credentials;
use crate::types::Role;

#[test]
fn visible_links_should_be_empty_when_anonymous() {
    assert!(visible_links(&Session::anonymous()).is_empty());
}

#[test]
fn visible_links_should_add_admin_link_only_for_admins() {
    let alumni = Session::authenticated(Credentials::new("a", Role::Alumni, "A"));
    let admin = Session::authenticated(Credentials::new("b", Role::Admin, "B"));

    let member = visible_links(&alumni);
    assert_eq!(7, member.len(), "member links should be shown");
    assert!(member.iter().all(|link| link.view != View::Admin));

    let all = visible_links(&admin);
    assert_eq!(member.len() + 1, all.len());
    assert_eq!(&member[..], &all[..member.len()], "member links should come first");
    assert_eq!(Some(&View::Admin), all.last().map(|link| &link.view));
}

#[test]
fn visible_links_should_not_mutate_session() {
    let session = Session::authenticated(Credentials::new("a", Role::Admin, "A"));
    let before = session.clone();
    let _ = visible_links(&session);
    assert_eq!(before, session);
}
