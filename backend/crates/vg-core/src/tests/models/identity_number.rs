use crate::{CoreError, IdentityNumber};

#[test]
fn given_eleven_digits_when_parsed_then_ok() {
    let id = IdentityNumber::parse("11111111111").unwrap();

    assert_eq!(id.as_str(), "11111111111");
    assert_eq!(id.to_string(), "11111111111");
}

#[test]
fn given_ten_digits_when_parsed_then_invalid() {
    let result = IdentityNumber::parse("1234567890");

    assert!(matches!(
        result,
        Err(CoreError::InvalidIdentityNumber { .. })
    ));
}

#[test]
fn given_twelve_digits_when_parsed_then_invalid() {
    assert!(IdentityNumber::parse("123456789012").is_err());
}

#[test]
fn given_letters_when_parsed_then_invalid() {
    assert!(IdentityNumber::parse("1234567890a").is_err());
    assert!(IdentityNumber::parse("").is_err());
}

#[test]
fn given_non_ascii_digits_when_parsed_then_invalid() {
    // Arabic-Indic digits are numeric but not ASCII
    assert!(IdentityNumber::parse("١١١١١١١١١١١").is_err());
}

#[test]
fn given_json_string_when_deserialized_then_validated() {
    let ok: Result<IdentityNumber, _> = serde_json::from_str("\"12345678901\"");
    let bad: Result<IdentityNumber, _> = serde_json::from_str("\"12345\"");

    assert!(ok.is_ok());
    assert!(bad.is_err());
}
