use super::*;
use crate::Error;
use crate::api::Body;
use crate::dev_utils::{credentials, RecordingTransport};
use crate::system::MemoryStorage;
use futures::executor::block_on;

fn members() -> Vec<Member> {
    vec![
        Member {
            id: "pending-1".into(),
            ..Default::default()
        },
        Member {
            id: "pending-2".into(),
            ..Default::default()
        },
        Member {
            id: "approved".into(),
            is_approved: true,
            ..Default::default()
        },
    ]
}

fn admin_store() -> (SessionStore<MemoryStorage>, crate::system::Credentials) {
    let store = SessionStore::new(MemoryStorage::new());
    let admin = credentials(Role::Admin);
    store
        .set_credentials(&admin)
        .expect("could not store session");

    (store, admin)
}

#[test]
fn approve_should_update_only_that_member() {
    let (store, admin) = admin_store();
    let transport = RecordingTransport::new();
    transport.respond(200, "{}");
    let client = ApiClient::new(transport.clone());

    let mut list = members();
    let update = block_on(dispatch(
        &store,
        &client,
        AdminAction::Approve("pending-1".into()),
    ))
    .expect("approve should succeed");

    assert!(update.apply(&mut list));
    assert!(list[0].is_approved, "approved member should transition");
    assert!(list[1].is_pending(), "other members should be unchanged");
    assert!(list[2].is_approved);

    let request = &transport.requests()[0];
    assert_eq!("/api/admin/users/pending-1", request.path);
    assert_eq!(
        Some(admin.token().to_string()),
        request.bearer,
        "stored token should be attached"
    );
    assert_eq!(
        Body::Json(serde_json::json!({ "isApproved": true })),
        request.body
    );
}

#[test]
fn failed_approve_should_leave_list_unchanged() {
    let (store, _admin) = admin_store();
    let transport = RecordingTransport::new();
    transport.respond(500, r#"{"msg":"Server error"}"#);
    let client = ApiClient::new(transport);

    let list = members();
    let result = block_on(dispatch(
        &store,
        &client,
        AdminAction::Approve("pending-1".into()),
    ));

    assert!(matches!(result, Err(Error::Server { status: 500, .. })));
    assert_eq!(members(), list, "nothing should be applied");
    assert!(list[0].is_pending());
}

#[test]
fn toggle_role_should_send_new_role() {
    let (store, _admin) = admin_store();
    let transport = RecordingTransport::new();
    let client = ApiClient::new(transport.clone());

    let mut list = members();
    let update = block_on(dispatch(
        &store,
        &client,
        AdminAction::ToggleRole {
            member: "approved".into(),
            current: Role::Alumni,
        },
    ))
    .expect("toggle should succeed");

    assert_eq!(
        MemberUpdate::RoleChanged {
            member: "approved".into(),
            role: Role::Admin
        },
        update
    );

    assert!(update.apply(&mut list));
    assert_eq!(Role::Admin, list[2].role);
    assert_eq!(Role::Alumni, list[0].role);
    assert_eq!(
        Body::Json(serde_json::json!({ "role": "admin" })),
        transport.requests()[0].body
    );
}

#[test]
fn dispatch_should_recheck_session_before_sending() {
    let transport = RecordingTransport::new();
    let client = ApiClient::new(transport.clone());

    // logged out in another tab
    let (store, _admin) = admin_store();
    store.clear_session();
    let result = block_on(dispatch(
        &store,
        &client,
        AdminAction::Approve("pending-1".into()),
    ));
    assert_eq!(Err(Error::NoSession), result);

    // role changed to alumni
    store
        .set_credentials(&credentials(Role::Alumni))
        .expect("could not store session");

    let result = block_on(dispatch(
        &store,
        &client,
        AdminAction::Approve("pending-1".into()),
    ));
    assert_eq!(Err(Error::AdminRequired), result);

    assert!(transport.requests().is_empty(), "no request should be made");
}

#[test]
fn apply_should_ignore_unknown_members() {
    let mut list = members();
    let update = MemberUpdate::Approved("missing".into());
    assert!(!update.apply(&mut list));
    assert_eq!(members(), list);
}
