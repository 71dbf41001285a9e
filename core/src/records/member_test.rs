use super::*;
use fake::faker::internet::raw::FreeEmail;
use fake::faker::name::raw::Name;
use fake::locales::EN;
use fake::Fake;

#[test]
fn member_should_deserialize_backend_shape() {
    let email: String = FreeEmail(EN).fake();
    let name: String = Name(EN).fake();
    let json = serde_json::json!({
        "_id": "u1",
        "name": name,
        "email": email,
        "graduationYear": "2006",
        "role": "admin",
        "isApproved": true,
    });

    let member: Member = serde_json::from_value(json).expect("could not deserialize member");
    assert_eq!(RecordId::from("u1"), member.id);
    assert_eq!(name, member.name);
    assert_eq!(email, member.email);
    assert_eq!(Some(2006), member.graduation_year, "string year should parse");
    assert_eq!(Role::Admin, member.role);
    assert!(!member.is_pending());
}

#[test]
fn member_should_default_missing_fields() {
    let member: Member =
        serde_json::from_str(r#"{"_id":"u2","graduationYear":1999}"#).expect("could not deserialize");

    assert_eq!(Some(1999), member.graduation_year);
    assert_eq!(Role::Alumni, member.role);
    assert!(member.is_pending(), "members should be pending unless approved");
    assert_eq!(None, member.profile_pic);
}

#[test]
fn partition_by_approval_should_split_members() {
    let members = vec![
        Member {
            id: "a".into(),
            is_approved: true,
            ..Default::default()
        },
        Member {
            id: "b".into(),
            ..Default::default()
        },
    ];

    let (pending, approved) = partition_by_approval(&members);
    assert_eq!(1, pending.len());
    assert_eq!(RecordId::from("b"), pending[0].id);
    assert_eq!(1, approved.len());
    assert_eq!(RecordId::from("a"), approved[0].id);
}
