//! Decoder Vectors
//!
//! Decoding the codec vectors back, and rejecting malformed input.

use crate::test_utils::*;
use num_bigint::{BigInt, BigUint};

#[test]
fn test_uint_vectors() {
    let d = dec::uint(Width::Fixed(1));
    assert_eq!(d.from_top_hex("").unwrap(), BigUint::from(0u32));
    assert_eq!(d.from_nest_hex("00").unwrap(), BigUint::from(0u32));
    assert_eq!(d.from_top_hex("ff").unwrap(), BigUint::from(255u32));
    assert_eq!(dec::uint(Width::Fixed(2)).from_nest_hex("0100").unwrap(), BigUint::from(256u32));
}

#[test]
fn test_int_vectors() {
    assert_eq!(dec::int(Width::Fixed(1)).from_nest_hex("ff").unwrap(), BigInt::from(-1));
    assert_eq!(dec::i().from_nest_hex("00000002ff7f").unwrap(), BigInt::from(-129));
    assert_eq!(dec::i().from_top_hex("ff7f").unwrap(), BigInt::from(-129));
}

#[test]
fn test_option_vectors() {
    let d = dec::option(dec::u16());
    assert_eq!(d.from_top_hex("").unwrap(), None);
    assert_eq!(d.from_nest_hex("00").unwrap(), None);
    assert_eq!(d.from_top_hex("010005").unwrap(), Some(5));
    assert_eq!(d.from_nest_hex("010005").unwrap(), Some(5));
}

#[test]
fn test_list_vectors() {
    let d = dec::list(dec::u8());
    assert_eq!(d.from_top_hex("0102").unwrap(), vec![1, 2]);
    assert_eq!(d.from_nest_hex("000000020102").unwrap(), vec![1, 2]);
}

#[test]
fn test_address_renders_bech32() {
    let mut bytes = [0u8; 32];
    bytes[8..].fill(0x11);
    let bech = Address::from(bytes).to_bech32();
    let a = dec::addr().from_top(&bytes).unwrap();
    assert!(bech.starts_with("erd1"));
    assert_eq!(a.to_bech32(), bech);
    assert_eq!(a.to_hex(), bytes_to_hex(&bytes));
    assert!(a.is_contract());
}

#[test]
fn test_trailing_bytes_rejected() {
    assert_eq!(dec::u8().from_top_hex("0102"), Err(Error::TrailingBytes(1)));
    assert_eq!(dec::option(dec::u8()).from_nest_hex("000000"), Err(Error::TrailingBytes(2)));
}

#[test]
fn test_insufficient_bytes_rejected() {
    assert!(matches!(
        dec::buffer().from_nest_hex("00000005aabb"),
        Err(Error::InsufficientBytes { needed: 5, remaining: 2 })
    ));
}

#[test]
fn test_option_top_discriminant() {
    assert_eq!(
        dec::option(dec::u8()).from_top_hex("0205"),
        Err(Error::InvalidOptionTopEncoding(2))
    );
}
