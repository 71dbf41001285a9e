use super::*;

#[test]
fn target_should_keep_payment_reference() {
    let login = LoginReturn::from_location("/donations/success", "?reference=abc-123");
    assert_eq!(
        Some("/donations/success?reference=abc-123"),
        login.target()
    );

    let login = LoginReturn::from_location("/donations/success", "reference=abc-123");
    assert_eq!(
        Some("/donations/success?reference=abc-123"),
        login.target(),
        "leading `?` should be optional"
    );
}

#[test]
fn from_location_should_omit_empty_query() {
    assert_eq!(
        Some("/directory"),
        LoginReturn::from_location("/directory", "").target()
    );
    assert_eq!(
        Some("/directory"),
        LoginReturn::from_location("/directory", "?").target()
    );
}

#[test]
fn target_should_reject_external_locations() {
    for next in [
        "https://example.com/donations/success",
        "//example.com/donations/success",
        "/\\example.com",
        "javascript:alert(1)",
        "donations/success",
        "",
    ] {
        assert_eq!(None, LoginReturn::to(next).target(), "{next:?} should be rejected");
    }

    assert_eq!(None, LoginReturn::default().target());
}

#[test]
fn query_should_round_trip_through_serde() {
    let login = LoginReturn::to("/donations/success?reference=abc");
    let raw = serde_json::to_string(&login).expect("could not serialize");
    let restored: LoginReturn = serde_json::from_str(&raw).expect("could not deserialize");
    assert_eq!(login, restored);

    let empty: LoginReturn = serde_json::from_str("{}").expect("could not deserialize");
    assert_eq!(LoginReturn::default(), empty);
}
