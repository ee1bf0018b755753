//! Encodable values
//!
//! Every value has two encodings:
//!
//! - **top**: the minimal form, unambiguous only when the value is the sole,
//!   outermost item being transmitted
//! - **nest**: a self-delimiting form carrying its own fixed width or a u32
//!   big-endian length prefix, used when the value is embedded in a composite
//!
//! | Variant  | Top                                  | Nest                          |
//! |----------|--------------------------------------|-------------------------------|
//! | Bytes    | bytes as-is                          | same as top                   |
//! | Buffer   | bytes as-is                          | u32 length + bytes            |
//! | Address  | 32 bytes                             | same as top                   |
//! | Bool     | empty for false, `01` for true       | one byte                      |
//! | Uint     | minimal big-endian, empty for zero   | W bytes, or u32 length + top  |
//! | Int      | minimal two's complement             | W bytes, or u32 length + top  |
//! | List     | nest of each item                    | u32 count + nest of each item |
//! | Tuple    | nest of each item                    | same as top                   |
//! | Option   | empty, or `01` + nest of inner       | `00`, or `01` + nest of inner |

use crate::int::{length_prefix, IntValue, UintValue, Width};
use num_bigint::{BigInt, BigUint};
use xsuite_core::{bytes_to_b64, bytes_to_hex, hex_to_bytes, Address, Error, Result};

/// Capability shared by everything that can be put on the wire
pub trait Encode {
    /// Top-encoding
    fn to_top_bytes(&self) -> Vec<u8>;

    /// Nest-encoding
    fn to_nest_bytes(&self) -> Vec<u8>;

    /// Top-encoding as lowercase hex
    fn to_top_hex(&self) -> String {
        bytes_to_hex(&self.to_top_bytes())
    }

    /// Nest-encoding as lowercase hex
    fn to_nest_hex(&self) -> String {
        bytes_to_hex(&self.to_nest_bytes())
    }

    /// Top-encoding as standard base64
    fn to_top_b64(&self) -> String {
        bytes_to_b64(&self.to_top_bytes())
    }

    /// Nest-encoding as standard base64
    fn to_nest_b64(&self) -> String {
        bytes_to_b64(&self.to_nest_bytes())
    }
}

impl Encode for Address {
    fn to_top_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    fn to_nest_bytes(&self) -> Vec<u8> {
        self.to_top_bytes()
    }
}

/// An immutable value tagged with its wire type
///
/// Construction validates eagerly: a value that cannot be encoded under its
/// declared width is rejected by the constructor, so encoding never fails.
/// Integer payloads are opaque for that reason.
///
/// Buffer and list lengths must fit in a u32 length prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encodable {
    /// Byte sequence whose length is implied by context; never prefixed
    Bytes(Vec<u8>),
    /// Byte buffer, length-prefixed when nested
    Buffer(Vec<u8>),
    /// 32-byte account address
    Address(Address),
    /// Boolean, encoded as a one-byte unsigned
    Bool(bool),
    /// Unsigned integer
    Uint(UintValue),
    /// Signed integer
    Int(IntValue),
    /// Variable-length list
    List(Vec<Encodable>),
    /// Fixed-arity tuple
    Tuple(Vec<Encodable>),
    /// Optional value
    Option(Option<Box<Encodable>>),
}

// ============================================================================
// Constructors
// ============================================================================

impl Encodable {
    /// Raw bytes, never length-prefixed
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Encodable::Bytes(bytes.into())
    }

    /// Raw bytes from hex
    pub fn bytes_hex(hex: &str) -> Result<Self> {
        Ok(Encodable::Bytes(hex_to_bytes(hex)?))
    }

    /// Buffer, length-prefixed when nested
    pub fn buffer(bytes: impl Into<Vec<u8>>) -> Self {
        Encodable::Buffer(bytes.into())
    }

    /// Buffer from hex
    pub fn buffer_hex(hex: &str) -> Result<Self> {
        Ok(Encodable::Buffer(hex_to_bytes(hex)?))
    }

    /// UTF-8 string, encoded as a buffer
    pub fn str(s: &str) -> Self {
        Encodable::Buffer(s.as_bytes().to_vec())
    }

    /// Address from its bech32 or hex form
    pub fn addr(s: &str) -> Result<Self> {
        Ok(Encodable::Address(Address::parse(s)?))
    }

    /// Address from raw bytes; fails unless exactly 32 bytes
    pub fn addr_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Encodable::Address(Address::from_bytes(bytes)?))
    }

    /// Boolean
    pub fn bool(b: bool) -> Self {
        Encodable::Bool(b)
    }

    /// Unsigned integer of the given width
    ///
    /// Fails with `NegativeUnsigned` for negative values and
    /// `ValueOutOfRange` when a fixed width cannot hold the value.
    pub fn uint(value: impl Into<BigInt>, width: Width) -> Result<Self> {
        let value = value.into();
        let value = value
            .to_biguint()
            .ok_or_else(|| Error::NegativeUnsigned(value.to_string()))?;
        Ok(Encodable::Uint(UintValue::new(value, width)?))
    }

    /// Signed integer of the given width
    ///
    /// Fails with `ValueOutOfRange` when a fixed width cannot hold the value.
    pub fn int(value: impl Into<BigInt>, width: Width) -> Result<Self> {
        Ok(Encodable::Int(IntValue::new(value.into(), width)?))
    }

    /// Unsigned integer of unspecified width
    pub fn u(value: impl Into<BigUint>) -> Self {
        Encodable::Uint(UintValue::dynamic(value.into()))
    }

    /// Signed integer of unspecified width
    pub fn i(value: impl Into<BigInt>) -> Self {
        Encodable::Int(IntValue::dynamic(value.into()))
    }

    /// Fixed-arity tuple
    pub fn tuple(items: impl IntoIterator<Item = Encodable>) -> Self {
        Encodable::Tuple(items.into_iter().collect())
    }

    /// Variable-length list
    pub fn list(items: impl IntoIterator<Item = Encodable>) -> Self {
        Encodable::List(items.into_iter().collect())
    }

    /// Optional value
    pub fn option(value: Option<Encodable>) -> Self {
        Encodable::Option(value.map(Box::new))
    }

    /// Present optional value
    pub fn some(value: Encodable) -> Self {
        Encodable::Option(Some(Box::new(value)))
    }

    /// Absent optional value
    pub fn none() -> Self {
        Encodable::Option(None)
    }
}

macro_rules! native_uint_constructors {
    ($($name:ident: $ty:ty => $width:expr),+ $(,)?) => {
        impl Encodable {
            $(
                #[doc = concat!("`", stringify!($ty), "`, nested at ", stringify!($width), " bytes")]
                pub fn $name(value: $ty) -> Self {
                    Encodable::Uint(UintValue::native(BigUint::from(value), $width))
                }
            )+
        }

        $(
            impl From<$ty> for Encodable {
                fn from(value: $ty) -> Self {
                    Encodable::$name(value)
                }
            }
        )+
    };
}

macro_rules! native_int_constructors {
    ($($name:ident: $ty:ty => $width:expr),+ $(,)?) => {
        impl Encodable {
            $(
                #[doc = concat!("`", stringify!($ty), "`, nested at ", stringify!($width), " bytes")]
                pub fn $name(value: $ty) -> Self {
                    Encodable::Int(IntValue::native(BigInt::from(value), $width))
                }
            )+
        }

        $(
            impl From<$ty> for Encodable {
                fn from(value: $ty) -> Self {
                    Encodable::$name(value)
                }
            }
        )+
    };
}

native_uint_constructors! {
    u8: u8 => 1,
    u16: u16 => 2,
    u32: u32 => 4,
    u64: u64 => 8,
}

native_int_constructors! {
    i8: i8 => 1,
    i16: i16 => 2,
    i32: i32 => 4,
    i64: i64 => 8,
}

impl From<bool> for Encodable {
    fn from(b: bool) -> Self {
        Encodable::Bool(b)
    }
}

impl From<&str> for Encodable {
    fn from(s: &str) -> Self {
        Encodable::str(s)
    }
}

impl From<String> for Encodable {
    fn from(s: String) -> Self {
        Encodable::Buffer(s.into_bytes())
    }
}

impl From<Address> for Encodable {
    fn from(address: Address) -> Self {
        Encodable::Address(address)
    }
}

impl<T: Into<Encodable>> From<Option<T>> for Encodable {
    fn from(value: Option<T>) -> Self {
        Encodable::option(value.map(Into::into))
    }
}

// ============================================================================
// Encoding
// ============================================================================

impl Encodable {
    fn write_top(&self, out: &mut Vec<u8>) {
        match self {
            Encodable::Bytes(b) | Encodable::Buffer(b) => out.extend_from_slice(b),
            Encodable::Address(a) => out.extend_from_slice(a.as_bytes()),
            Encodable::Bool(b) => {
                if *b {
                    out.push(1);
                }
            }
            Encodable::Uint(v) => out.extend(v.top_bytes()),
            Encodable::Int(v) => out.extend(v.top_bytes()),
            Encodable::List(items) | Encodable::Tuple(items) => {
                for item in items {
                    item.write_nest(out);
                }
            }
            Encodable::Option(None) => {}
            Encodable::Option(Some(inner)) => {
                out.push(1);
                inner.write_nest(out);
            }
        }
    }

    fn write_nest(&self, out: &mut Vec<u8>) {
        match self {
            Encodable::Buffer(b) => {
                out.extend_from_slice(&length_prefix(b.len()));
                out.extend_from_slice(b);
            }
            Encodable::Bool(b) => out.push(u8::from(*b)),
            Encodable::Uint(v) => match v.fixed_bytes() {
                Some(bytes) => out.extend(bytes),
                None => write_prefixed(out, &v.top_bytes()),
            },
            Encodable::Int(v) => match v.fixed_bytes() {
                Some(bytes) => out.extend(bytes),
                None => write_prefixed(out, &v.top_bytes()),
            },
            Encodable::List(items) => {
                out.extend_from_slice(&length_prefix(items.len()));
                for item in items {
                    item.write_nest(out);
                }
            }
            Encodable::Option(None) => out.push(0),
            Encodable::Bytes(_)
            | Encodable::Address(_)
            | Encodable::Tuple(_)
            | Encodable::Option(Some(_)) => self.write_top(out),
        }
    }
}

fn write_prefixed(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend_from_slice(&length_prefix(bytes.len()));
    out.extend_from_slice(bytes);
}

impl Encode for Encodable {
    fn to_top_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_top(&mut out);
        out
    }

    fn to_nest_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_nest(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes() {
        let e = Encodable::bytes(vec![65, 66, 67]);
        assert_eq!(e.to_top_hex(), "414243");
        assert_eq!(e.to_nest_hex(), "414243");
    }

    #[test]
    fn test_buffer() {
        let e = Encodable::buffer(vec![1, 2, 3]);
        assert_eq!(e.to_top_hex(), "010203");
        assert_eq!(e.to_nest_hex(), "00000003010203");
    }

    #[test]
    fn test_str() {
        let e = Encodable::str("hi");
        assert_eq!(e.to_top_hex(), "6869");
        assert_eq!(e.to_nest_hex(), "000000026869");
    }

    #[test]
    fn test_addr() {
        let e = Encodable::addr_bytes(&[0u8; 32]).unwrap();
        assert_eq!(e.to_top_hex(), "00".repeat(32));
        assert_eq!(e.to_nest_hex(), "00".repeat(32));
    }

    #[test]
    fn test_addr_wrong_length() {
        let err = Encodable::addr_bytes(&[0u8; 31]).unwrap_err();
        assert!(err.to_string().contains("invalid address length"));
    }

    #[test]
    fn test_bool() {
        assert_eq!(Encodable::bool(true).to_top_hex(), "01");
        assert_eq!(Encodable::bool(false).to_top_hex(), "");
        assert_eq!(Encodable::bool(true).to_nest_hex(), "01");
        assert_eq!(Encodable::bool(false).to_nest_hex(), "00");
    }

    #[test]
    fn test_native_uints() {
        assert_eq!(Encodable::u8(12).to_top_hex(), "0c");
        assert_eq!(Encodable::u16(1234).to_top_hex(), "04d2");
        assert_eq!(Encodable::u32(1234).to_top_hex(), "04d2");
        assert_eq!(Encodable::u64(1234).to_top_hex(), "04d2");
        assert_eq!(Encodable::u32(1234).to_nest_hex(), "000004d2");
        assert_eq!(Encodable::u64(1234).to_nest_hex(), "00000000000004d2");
    }

    #[test]
    fn test_dynamic_uint() {
        assert_eq!(Encodable::u(1234u32).to_top_hex(), "04d2");
        assert_eq!(Encodable::u(1234u32).to_nest_hex(), "0000000204d2");
        assert_eq!(Encodable::u(0u32).to_top_hex(), "");
        assert_eq!(Encodable::u(0u32).to_nest_hex(), "00000000");
    }

    #[test]
    fn test_uint_out_of_range() {
        let err = Encodable::uint(256, Width::Fixed(1)).unwrap_err();
        assert!(err.to_string().contains("value exceeds maximum for width"));
    }

    #[test]
    fn test_uint_negative() {
        assert!(matches!(
            Encodable::uint(-1, Width::Dynamic),
            Err(Error::NegativeUnsigned(_))
        ));
    }

    #[test]
    fn test_native_ints() {
        assert_eq!(Encodable::i8(12).to_top_hex(), "0c");
        assert_eq!(Encodable::i16(1234).to_top_hex(), "04d2");
        assert_eq!(Encodable::i32(1234).to_top_hex(), "04d2");
        assert_eq!(Encodable::i64(1234).to_top_hex(), "04d2");
        assert_eq!(Encodable::i32(-2).to_nest_hex(), "fffffffe");
        assert_eq!(Encodable::i8(-1).to_nest_hex(), "ff");
    }

    #[test]
    fn test_dynamic_int() {
        assert_eq!(Encodable::i(1234).to_top_hex(), "04d2");
        assert_eq!(Encodable::i(-129).to_top_hex(), "ff7f");
        assert_eq!(Encodable::i(-129).to_nest_hex(), "00000002ff7f");
        assert_eq!(Encodable::i(0).to_nest_hex(), "00000000");
    }

    #[test]
    fn test_int_out_of_range() {
        assert!(Encodable::int(128, Width::Fixed(1)).is_err());
        assert!(Encodable::int(-129, Width::Fixed(1)).is_err());
        assert!(Encodable::int(-128, Width::Fixed(1)).is_ok());
        assert_eq!(
            Encodable::int(0, Width::Fixed(0)),
            Err(Error::InvalidWidth(0))
        );
    }

    #[test]
    fn test_fixed_width_int_never_widens() {
        assert!(matches!(
            Encodable::int(-300, Width::Fixed(1)),
            Err(Error::ValueOutOfRange { width: 1, .. })
        ));

        let e = Encodable::int(-128, Width::Fixed(1)).unwrap();
        assert_eq!(e.to_nest_hex(), "80");
        match &e {
            Encodable::Int(v) => {
                assert_eq!(v.width(), Width::Fixed(1));
                assert_eq!(*v.value(), BigInt::from(-128));
            }
            other => panic!("expected Int, got {:?}", other),
        }
    }

    #[test]
    fn test_fixed_width_uint_never_widens() {
        assert!(Encodable::uint(256, Width::Fixed(1)).is_err());
        let e = Encodable::uint(255, Width::Fixed(1)).unwrap();
        assert_eq!(e.to_nest_bytes().len(), 1);
        if let Encodable::Uint(v) = &e {
            assert_eq!(*v.value(), BigUint::from(255u32));
        }
    }

    #[test]
    fn test_tuple() {
        let e = Encodable::tuple([Encodable::u32(1234), Encodable::i32(-2)]);
        assert_eq!(e.to_top_hex(), "000004d2fffffffe");
        assert_eq!(e.to_nest_hex(), "000004d2fffffffe");
    }

    #[test]
    fn test_list() {
        let e = Encodable::list([Encodable::u32(1234), Encodable::u32(4321)]);
        assert_eq!(e.to_top_hex(), "000004d2000010e1");
        assert_eq!(e.to_nest_hex(), "00000002000004d2000010e1");
    }

    #[test]
    fn test_empty_list() {
        let e = Encodable::list([]);
        assert_eq!(e.to_top_hex(), "");
        assert_eq!(e.to_nest_hex(), "00000000");
    }

    #[test]
    fn test_option() {
        assert_eq!(Encodable::some(Encodable::u32(1234)).to_top_hex(), "01000004d2");
        assert_eq!(Encodable::none().to_top_hex(), "");
        assert_eq!(Encodable::none().to_nest_hex(), "00");
    }

    #[test]
    fn test_nested_option_of_buffer() {
        let e = Encodable::some(Encodable::str("a"));
        assert_eq!(e.to_top_hex(), "010000000161");
        assert_eq!(e.to_nest_hex(), "010000000161");
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(Encodable::from(5u8), Encodable::u8(5));
        assert_eq!(Encodable::from(-5i64), Encodable::i64(-5));
        assert_eq!(Encodable::from("x"), Encodable::str("x"));
        assert_eq!(Encodable::from(Some(1u16)), Encodable::some(Encodable::u16(1)));
        assert_eq!(Encodable::from(None::<u16>), Encodable::none());
    }

    #[test]
    fn test_b64() {
        assert_eq!(Encodable::str("hi").to_top_b64(), "aGk=");
        assert_eq!(Encodable::str("").to_nest_b64(), "AAAAAA==");
    }

    #[test]
    fn test_hex_constructors() {
        assert_eq!(Encodable::bytes_hex("0102").unwrap().to_nest_hex(), "0102");
        assert_eq!(Encodable::buffer_hex("0102").unwrap().to_nest_hex(), "000000020102");
        assert!(Encodable::bytes_hex("012").is_err());
    }
}
