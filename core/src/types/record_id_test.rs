use super::*;

#[test]
fn record_id_should_serialize_transparently() {
    let id = RecordId::new("65a1f0c2e4b0a1b2c3d4e5f6");
    let json = serde_json::to_string(&id).expect("could not serialize id");
    assert_eq!(r#""65a1f0c2e4b0a1b2c3d4e5f6""#, json, "id should be a bare string");

    let parsed: RecordId = serde_json::from_str(&json).expect("could not deserialize id");
    assert_eq!(id, parsed);
}

#[test]
fn record_id_should_deref_to_str() {
    let id = RecordId::from("abc");
    assert_eq!("abc", &*id);
    assert_eq!("abc", id.to_string());
}
