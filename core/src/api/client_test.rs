use super::auth::{LoginArgs, PasswordReset, SignupArgs};
use super::directory::DirectoryFilter;
use super::events::NewEvent;
use super::news::NewPost;
use super::*;
use crate::access::{visible_links, View};
use crate::dev_utils::{credentials, RecordingTransport};
use crate::system::{MemoryStorage, Session, SessionStore};
use crate::types::{RecordId, Role};
use crate::Error;
use fake::faker::internet::raw::FreeEmail;
use fake::locales::EN;
use fake::Fake;
use futures::executor::block_on;

fn login_args() -> LoginArgs {
    LoginArgs {
        email: FreeEmail(EN).fake(),
        password: "secret-password".to_string(),
    }
}

#[test]
fn login_should_create_session_with_role() {
    let transport = RecordingTransport::new();
    transport.respond(
        200,
        r#"{"token":"tok-1","user":{"name":"Ada","role":"admin"}}"#,
    );

    let client = ApiClient::new(transport.clone());
    let store = SessionStore::new(MemoryStorage::new());

    let credentials = block_on(client.login(&login_args())).expect("login should succeed");
    store
        .set_credentials(&credentials)
        .expect("could not store session");

    let session = store.get_session();
    assert_eq!(Some("tok-1"), session.token());
    assert_eq!(Some(Role::Admin), session.role());
    assert_eq!(Some("Ada"), session.display_name());
    assert!(
        visible_links(&session).iter().any(|link| link.view == View::Admin),
        "admin link should be shown"
    );

    let requests = transport.requests();
    assert_eq!(1, requests.len());
    assert_eq!("/api/auth/login", requests[0].path);
    assert_eq!(None, requests[0].bearer, "login should not carry a credential");
}

#[test]
fn login_should_default_missing_role_to_alumni() {
    let transport = RecordingTransport::new();
    transport.respond(200, r#"{"token":"tok-2","user":{}}"#);
    let client = ApiClient::new(transport);

    let credentials = block_on(client.login(&login_args())).expect("login should succeed");
    assert_eq!(Role::Alumni, credentials.role());
    assert_eq!("", credentials.display_name());

    let session = Session::authenticated(credentials);
    assert!(
        visible_links(&session).iter().all(|link| link.view != View::Admin),
        "admin link should be hidden"
    );
}

#[test]
fn login_should_distinguish_failures() {
    let transport = RecordingTransport::new();
    transport
        .respond(400, r#"{"msg":"Invalid credentials"}"#)
        .respond(403, r#"{"msg":"Pending approval"}"#)
        .fail();

    let client = ApiClient::new(transport);
    assert_eq!(
        Err(Error::InvalidCredentials),
        block_on(client.login(&login_args()))
    );

    assert_eq!(
        Err(Error::PendingApproval),
        block_on(client.login(&login_args()))
    );

    assert!(matches!(
        block_on(client.login(&login_args())),
        Err(Error::Network(_))
    ));
}

#[test]
fn protected_calls_should_attach_bearer() {
    let transport = RecordingTransport::new();
    transport.respond(200, "[]");
    let client = ApiClient::new(transport.clone());
    let member = credentials(Role::Alumni);

    let filter = DirectoryFilter {
        year: " 2006 ".to_string(),
        location: "Lagos".to_string(),
    };

    let members = block_on(client.directory(&member, &filter)).expect("directory should load");
    assert!(members.is_empty());

    let request = &transport.requests()[0];
    assert_eq!(Some(member.token().to_string()), request.bearer);
    assert_eq!(
        vec![
            ("year".to_string(), "2006".to_string()),
            ("location".to_string(), "Lagos".to_string())
        ],
        request.query
    );
}

#[test]
fn public_reads_should_not_attach_bearer() {
    let transport = RecordingTransport::new();
    transport.respond(
        200,
        r#"[{"_id":"a","title":"Old","date":"2023-01-01"},{"_id":"b","title":"New","date":"2025-01-01"}]"#,
    );

    let client = ApiClient::new(transport.clone());
    let news = block_on(client.news()).expect("news should load");
    assert_eq!("b", news[0].id.as_str(), "news should be newest first");
    assert!(transport.protected_requests().is_empty());
}

#[test]
fn unauthenticated_response_should_clear_session() {
    let transport = RecordingTransport::new();
    transport.respond(401, r#"{"msg":"Token is not valid"}"#);
    let client = ApiClient::new(transport);
    let store = SessionStore::new(MemoryStorage::new());
    let member = credentials(Role::Alumni);
    store
        .set_credentials(&member)
        .expect("could not store session");

    let err = block_on(client.profile(&member)).expect_err("profile should fail");
    assert_eq!(Error::Unauthenticated, err);
    assert!(store.reject(&err));
    assert!(!store.get_session().is_authenticated());
}

#[test]
fn upload_image_should_send_multipart() {
    let transport = RecordingTransport::new();
    let client = ApiClient::new(transport.clone());
    let member = credentials(Role::Alumni);
    let image = FilePart {
        file_name: "reunion.jpg".to_string(),
        mime: "image/jpeg".to_string(),
        bytes: vec![0xff, 0xd8, 0xff],
    };

    block_on(client.upload_image(&member, "Reunion", image.clone()))
        .expect("upload should succeed");

    let request = &transport.requests()[0];
    assert_eq!(Method::Post, request.method);
    assert_eq!("/api/gallery", request.path);
    let Body::Multipart(fields) = &request.body else {
        panic!("body should be multipart");
    };

    assert!(fields.contains(&FormField::Text {
        name: "caption".to_string(),
        value: "Reunion".to_string()
    }));
    assert!(fields.contains(&FormField::File {
        name: "image".to_string(),
        file: image
    }));
}

#[test]
fn validation_failures_should_not_reach_backend() {
    let transport = RecordingTransport::new();
    let client = ApiClient::new(transport.clone());
    let member = credentials(Role::Alumni);

    let reset = PasswordReset {
        password: "abcdef".to_string(),
        confirm: "abcdeg".to_string(),
    };
    assert!(matches!(
        block_on(client.reset_password("reset-token", &reset)),
        Err(Error::Validation(_))
    ));

    let short = PasswordReset {
        password: "abc".to_string(),
        confirm: "abc".to_string(),
    };
    assert!(short.validate().is_err(), "short password should be rejected");

    assert!(matches!(
        block_on(client.create_thread(&member, &NewPost::default())),
        Err(Error::Validation(_))
    ));

    assert!(transport.requests().is_empty(), "nothing should be sent");
}

#[test]
fn reset_password_should_use_reset_token_in_path() {
    let transport = RecordingTransport::new();
    transport.respond(200, r#"{"msg":"Password updated"}"#);
    let client = ApiClient::new(transport.clone());

    let reset = PasswordReset {
        password: "abcdef".to_string(),
        confirm: "abcdef".to_string(),
    };

    let msg = block_on(client.reset_password("one-time", &reset)).expect("reset should succeed");
    assert_eq!("Password updated", msg);

    let request = &transport.requests()[0];
    assert_eq!("/api/auth/reset-password/one-time", request.path);
    assert_eq!(None, request.bearer, "reset token is not a session credential");
}

#[test]
fn signup_errors_should_be_described() {
    let transport = RecordingTransport::new();
    transport.respond(400, r#"{"msg":"User already exists"}"#);
    let client = ApiClient::new(transport.clone());

    let args = SignupArgs {
        name: "Ada".to_string(),
        email: FreeEmail(EN).fake(),
        password: "secret".to_string(),
        graduation_year: "2006".to_string(),
    };

    let err = block_on(client.signup(&args)).expect_err("signup should fail");
    assert_eq!(
        "This email is already registered.",
        auth::describe_signup_error(&err)
    );

    let Body::Json(body) = &transport.requests()[0].body else {
        panic!("body should be json");
    };
    assert_eq!(Some("2006"), body["graduationYear"].as_str());
}

#[test]
fn create_event_should_post_json() {
    let transport = RecordingTransport::new();
    let client = ApiClient::new(transport.clone());
    let member = credentials(Role::Alumni);
    let event = NewEvent {
        title: "Class of 2006 reunion".to_string(),
        description: String::new(),
        date: "2025-12-20".to_string(),
        location: "Buguma".to_string(),
    };

    block_on(client.create_event(&member, &event)).expect("event should be created");

    let request = &transport.requests()[0];
    assert_eq!("/api/events", request.path);
    assert_eq!(Some(member.token().to_string()), request.bearer);
    let Body::Json(body) = &request.body else {
        panic!("body should be json");
    };
    assert_eq!(Some("2025-12-20"), body["date"].as_str());
}

#[test]
fn reply_should_target_thread() {
    let transport = RecordingTransport::new();
    let client = ApiClient::new(transport.clone());
    let member = credentials(Role::Alumni);
    let thread = RecordId::new("thread-1");

    assert!(matches!(
        block_on(client.reply(&member, &thread, "  ")),
        Err(Error::Validation(_))
    ));
    assert!(transport.requests().is_empty(), "empty reply should not be sent");

    block_on(client.reply(&member, &thread, "Welcome back!")).expect("reply should be sent");
    let request = &transport.requests()[0];
    assert_eq!("/api/forums/thread-1/reply", request.path);
    assert_eq!(
        Body::Json(serde_json::json!({ "content": "Welcome back!" })),
        request.body
    );
}

#[test]
fn admin_publishing_should_carry_admin_token() {
    let transport = RecordingTransport::new();
    let client = ApiClient::new(transport.clone());
    let admin = credentials(Role::Admin);
    let admin = admin.as_admin().expect("credentials should be admin");

    let post = NewPost {
        title: "AGM".to_string(),
        content: "The annual general meeting holds in March.".to_string(),
    };
    block_on(client.post_news(&admin, &post)).expect("news should be posted");

    let minutes = FilePart {
        file_name: "agm.pdf".to_string(),
        mime: "application/pdf".to_string(),
        bytes: b"%PDF".to_vec(),
    };
    assert!(matches!(
        block_on(client.upload_minutes(&admin, " ", minutes.clone())),
        Err(Error::Validation(_))
    ));
    block_on(client.upload_minutes(&admin, "AGM minutes", minutes))
        .expect("minutes should upload");

    let requests = transport.requests();
    assert_eq!(2, requests.len());
    assert_eq!("/api/news", requests[0].path);
    assert_eq!("/api/board-minutes", requests[1].path);
    assert!(requests
        .iter()
        .all(|request| request.bearer.as_deref() == Some(admin.token())));
}

#[test]
fn donate_should_return_checkout() {
    let transport = RecordingTransport::new();
    transport.respond(
        200,
        r#"{"authorization_url":"https://checkout.example/abc","reference":"abc"}"#,
    );
    transport.respond(200, r#"{"success":true}"#);
    let client = ApiClient::new(transport.clone());
    let member = credentials(Role::Alumni);

    assert!(matches!(
        block_on(client.donate(&member, 0)),
        Err(Error::Validation(_))
    ));

    let checkout = block_on(client.donate(&member, 10_000)).expect("donation should start");
    assert_eq!(
        Some("https://checkout.example/abc"),
        checkout.authorization_url.as_deref()
    );

    let verification =
        block_on(client.verify_donation(&member, "abc")).expect("donation should verify");
    assert!(verification.success);

    let requests = transport.requests();
    assert_eq!(
        Body::Json(serde_json::json!({ "amount": 10_000 })),
        requests[0].body
    );
    assert_eq!("/api/donations/verify/abc", requests[1].path);
}
