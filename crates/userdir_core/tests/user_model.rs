use userdir_core::User;

#[test]
fn default_user_is_empty_record() {
    let user = User::default();
    assert_eq!(user.id, 0);
    assert!(user.name.is_empty());
}

#[test]
fn user_serialization_uses_expected_wire_fields() {
    let user = User::new(2, "User #2");

    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["id"], 2);
    assert_eq!(json["name"], "User #2");

    let decoded: User = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, user);
}

#[test]
fn seed_users_deserialize_from_json_array() {
    let seed = serde_json::json!([
        { "id": 1, "name": "User #1" },
        { "id": 2, "name": "User #2" }
    ]);

    let users: Vec<User> = serde_json::from_value(seed).unwrap();
    assert_eq!(users, vec![User::new(1, "User #1"), User::new(2, "User #2")]);
}
