use super::*;

#[test]
fn from_status_should_use_backend_message() {
    let err = Error::from_status(400, r#"{"msg":"Graduation year is invalid"}"#);
    assert_eq!(
        Error::Validation("Graduation year is invalid".to_string()),
        err,
        "backend message should be kept"
    );

    let err = Error::from_status(500, "");
    assert!(
        matches!(err, Error::Server { status: 500, .. }),
        "empty body should still map status"
    );
}

#[test]
fn from_status_should_map_credential_rejection() {
    assert_eq!(Error::Unauthenticated, Error::from_status(401, ""));
    assert!(Error::from_status(401, "").is_unauthenticated());
    assert!(matches!(Error::from_status(403, "{}"), Error::Forbidden(_)));
    assert_eq!(Error::NotFound, Error::from_status(404, "not json"));
}

#[test]
fn from_login_status_should_distinguish_pending_approval() {
    assert_eq!(
        Error::InvalidCredentials,
        Error::from_login_status(400, r#"{"msg":"Invalid credentials"}"#)
    );

    assert_eq!(
        Error::PendingApproval,
        Error::from_login_status(403, r#"{"msg":"Account not approved"}"#)
    );

    assert!(matches!(
        Error::from_login_status(502, ""),
        Error::Server { status: 502, .. }
    ));
}
