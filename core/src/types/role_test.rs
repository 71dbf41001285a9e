use super::*;

#[test]
fn parse_should_default_to_alumni() {
    assert_eq!(Role::Admin, Role::parse("admin"));
    assert_eq!(Role::Admin, Role::parse(" Admin "));
    assert_eq!(Role::Alumni, Role::parse("alumni"));
    assert_eq!(Role::Alumni, Role::parse(""));
    assert_eq!(Role::Alumni, Role::parse("superuser"));
}

#[test]
fn deserialize_should_accept_missing_role() {
    let role: Role = serde_json::from_str("null").expect("null role should deserialize");
    assert_eq!(Role::Alumni, role);

    let role: Role = serde_json::from_str(r#""admin""#).expect("role should deserialize");
    assert_eq!(Role::Admin, role);

    let json = serde_json::to_string(&Role::Admin).expect("could not serialize role");
    assert_eq!(r#""admin""#, json);
}

#[test]
fn toggled_should_swap_roles() {
    assert_eq!(Role::Admin, Role::Alumni.toggled());
    assert_eq!(Role::Alumni, Role::Admin.toggled());
    assert!(Role::Alumni.toggled().is_admin());
}
