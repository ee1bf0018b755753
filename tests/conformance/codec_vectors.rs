//! Codec Vectors
//!
//! Top and nest encodings of each wire type.

use crate::test_utils::*;

// =============================================================================
// Unsigned integers
// =============================================================================

#[test]
fn test_u8_zero_top_is_empty() {
    assert_hex(&Encodable::uint(0, Width::Fixed(1)).unwrap(), "", "00");
}

#[test]
fn test_u8_max() {
    assert_hex(&Encodable::uint(255, Width::Fixed(1)).unwrap(), "ff", "ff");
}

#[test]
fn test_u16_256() {
    assert_hex(&Encodable::uint(256, Width::Fixed(2)).unwrap(), "0100", "0100");
}

#[test]
fn test_native_widths() {
    assert_hex(&Encodable::u16(1), "01", "0001");
    assert_hex(&Encodable::u32(1234), "04d2", "000004d2");
    assert_hex(&Encodable::u64(u64::MAX), "ffffffffffffffff", "ffffffffffffffff");
}

#[test]
fn test_dynamic_uint() {
    assert_hex(&Encodable::u(0u32), "", "00000000");
    assert_hex(&Encodable::u(256u32), "0100", "000000020100");
}

// =============================================================================
// Signed integers
// =============================================================================

#[test]
fn test_i8_minus_one() {
    assert_hex(&Encodable::int(-1, Width::Fixed(1)).unwrap(), "ff", "ff");
}

#[test]
fn test_dynamic_int_minus_129() {
    assert_hex(&Encodable::i(-129), "ff7f", "00000002ff7f");
}

#[test]
fn test_dynamic_int_sign_boundaries() {
    assert_hex(&Encodable::i(-128), "80", "0000000180");
    assert_hex(&Encodable::i(127), "7f", "000000017f");
    assert_hex(&Encodable::i(128), "0080", "000000020080");
    assert_hex(&Encodable::i(0), "", "00000000");
}

#[test]
fn test_fixed_int_negative() {
    assert_hex(&Encodable::i32(-2), "fe", "fffffffe");
    assert_hex(&Encodable::i16(-129), "ff7f", "ff7f");
}

// =============================================================================
// Bytes, strings, addresses, booleans
// =============================================================================

#[test]
fn test_buffer_and_bytes() {
    assert_hex(&Encodable::buffer(vec![0xab, 0xcd]), "abcd", "00000002abcd");
    assert_hex(&Encodable::bytes(vec![0xab, 0xcd]), "abcd", "abcd");
    assert_hex(&Encodable::str("xsuite"), "787375697465", "00000006787375697465");
}

#[test]
fn test_address() {
    let mut raw = [0u8; 32];
    raw[31] = 0x2a;
    let e = Encodable::addr_bytes(&raw).unwrap();
    let top = e.to_top_hex();
    assert_eq!(top, format!("{}2a", "00".repeat(31)));
    assert_eq!(e.to_nest_hex(), top);
    assert_eq!(Encodable::addr(&top).unwrap(), e);
    let bech = Address::from(raw).to_bech32();
    assert_eq!(Encodable::addr(&bech).unwrap(), e);
}

#[test]
fn test_bool() {
    assert_hex(&Encodable::bool(true), "01", "01");
    assert_hex(&Encodable::bool(false), "", "00");
}

// =============================================================================
// Composites
// =============================================================================

#[test]
fn test_option() {
    assert_hex(&Encodable::none(), "", "00");
    assert_hex(&Encodable::some(Encodable::u16(5)), "010005", "010005");
}

#[test]
fn test_list() {
    assert_hex(
        &Encodable::list([Encodable::u8(1), Encodable::u8(2)]),
        "0102",
        "000000020102",
    );
}

#[test]
fn test_tuple() {
    assert_hex(
        &Encodable::tuple([Encodable::u8(1), Encodable::str("a")]),
        "010000000161",
        "010000000161",
    );
}

#[test]
fn test_nested_composites() {
    let e = Encodable::list([
        Encodable::tuple([Encodable::u(5u32), Encodable::none()]),
        Encodable::tuple([Encodable::u(0u32), Encodable::some(Encodable::bool(false))]),
    ]);
    assert_hex(
        &e,
        "000000010500000000000100",
        "00000002000000010500000000000100",
    );
}
