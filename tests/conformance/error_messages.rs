//! Error Messages
//!
//! Failure text that test authors match on.

use crate::test_utils::*;

#[test]
fn test_uint_out_of_range_message() {
    let err = Encodable::uint(256, Width::Fixed(1)).unwrap_err();
    assert!(err.to_string().contains("value exceeds maximum for width"), "{}", err);
}

#[test]
fn test_short_address_message() {
    let err = Encodable::addr_bytes(&[0u8; 31]).unwrap_err();
    assert!(err.to_string().contains("invalid address length"), "{}", err);
}

#[test]
fn test_option_nest_discriminant_message() {
    let err = dec::option(dec::u8()).from_nest_hex("02").unwrap_err();
    assert!(err.to_string().contains("invalid Option nest-encoding"), "{}", err);
}

#[test]
fn test_wrong_address_prefix() {
    let err = CodecConfig::from_toml_str(r#"address_hrp = "xyz""#)
        .unwrap()
        .parse_address(&Address::ZERO.to_bech32())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidAddressPrefix { .. }), "{:?}", err);
}

#[test]
fn test_malformed_hex() {
    assert!(matches!(Encodable::bytes_hex("abc"), Err(Error::OddHexLength(3))));
    assert!(matches!(Encodable::bytes_hex("zz"), Err(Error::InvalidHex(_))));
}

#[test]
fn test_negative_unsigned() {
    assert!(matches!(
        Encodable::uint(-1, Width::Dynamic),
        Err(Error::NegativeUnsigned(_))
    ));
}

#[test]
fn test_non_positive_id() {
    let err = set_mapper("s", &[(0, Encodable::u8(1))]).unwrap_err();
    assert_eq!(err, Error::NonPositiveId(0));
}
