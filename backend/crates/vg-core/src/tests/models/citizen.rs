use crate::{Citizen, CoreError, IdentityNumber, NewCitizen, PostalAddress};

use chrono::Utc;

fn citizen() -> Citizen {
    Citizen {
        id: 1,
        identity_number: IdentityNumber::parse("11111111111").unwrap(),
        first_name: "Ada".to_string(),
        last_name: "Yilmaz".to_string(),
        address: PostalAddress::default(),
        age: 20,
        password_hash: "$argon2id$secret".to_string(),
        wallet_address: None,
        ticket_issued: false,
        created_at: Utc::now(),
    }
}

#[test]
fn test_full_name() {
    assert_eq!(citizen().full_name(), "Ada Yilmaz");
}

#[test]
fn test_password_hash_never_serialized() {
    let json = serde_json::to_value(citizen()).unwrap();

    assert!(json.get("password_hash").is_none());
    assert_eq!(json["identity_number"], "11111111111");
}

#[test]
fn test_check_age_boundary() {
    assert!(NewCitizen::check_age(18).is_ok());
    assert!(NewCitizen::check_age(90).is_ok());
    assert!(matches!(
        NewCitizen::check_age(17),
        Err(CoreError::Underage { age: 17, .. })
    ));
}
