use crate::WalletAddress;
use crate::models::wallet_address::parse_object_id;

#[test]
fn given_full_address_when_parsed_then_lowercased() {
    let raw = format!("0x{}", "AB".repeat(32));

    let address = WalletAddress::parse(&raw).unwrap();

    assert_eq!(address.as_str(), format!("0x{}", "ab".repeat(32)));
}

#[test]
fn given_short_address_when_parsed_then_left_padded() {
    let address = WalletAddress::parse("0x2").unwrap();

    assert_eq!(address.as_str().len(), 66);
    assert!(address.as_str().ends_with("0002"));
}

#[test]
fn given_missing_prefix_when_parsed_then_invalid() {
    assert!(WalletAddress::parse(&"ab".repeat(32)).is_err());
}

#[test]
fn given_too_long_or_non_hex_when_parsed_then_invalid() {
    assert!(WalletAddress::parse(&format!("0x{}", "a".repeat(65))).is_err());
    assert!(WalletAddress::parse("0xzz").is_err());
    assert!(WalletAddress::parse("0x").is_err());
}

#[test]
fn given_bytes_when_converted_then_hex_encoded() {
    let address = WalletAddress::from_bytes(&[0xff; 32]);

    assert_eq!(address.as_str(), format!("0x{}", "ff".repeat(32)));
}

#[test]
fn given_low_bytes_when_converted_then_each_byte_is_two_digits() {
    let mut bytes = [0u8; 32];
    bytes[31] = 0x0a;

    let address = WalletAddress::from_bytes(&bytes);

    assert_eq!(address.as_str().len(), 66);
    assert!(address.as_str().ends_with("000a"));
    assert_eq!(WalletAddress::parse("0xa").unwrap(), address);
}

#[test]
fn given_bad_object_id_when_parsed_then_error_names_field() {
    let err = parse_object_id("candidateId", "nope").unwrap_err();

    assert_eq!(err.field(), Some("candidateId"));
}
