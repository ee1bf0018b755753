//! Decoder factories
//!
//! Short constructors mirroring the `Encodable` ones, so a decoder tree reads
//! like the value it decodes:
//!
//! ```
//! use xsuite_codec::{dec, Decode};
//!
//! let d = dec::list((dec::u32(), dec::str()));
//! let items = d.from_top_hex("000000010000000161").unwrap();
//! assert_eq!(items, vec![(1, "a".to_string())]);
//! ```
//!
//! Native-width integer factories (`u8`, `i64`, ...) return Rust integers;
//! `u`, `i`, `uint` and `int` return big integers.

use crate::decode::{
    AddressDecoder, BoolDecoder, BufferDecoder, BytesDecoder, Decode, FixedListDecoder,
    IntDecoder, ListDecoder, OptionDecoder, StrDecoder, UintDecoder,
};
use crate::int::Width;
use num_bigint::{BigInt, BigUint};
use xsuite_core::{Error, Result};

/// Length-prefixed buffer
pub fn buffer() -> BufferDecoder {
    BufferDecoder
}

/// Unprefixed bytes of `width`
pub fn bytes(width: Width) -> BytesDecoder {
    BytesDecoder::new(width)
}

/// UTF-8 string
pub fn str() -> StrDecoder {
    StrDecoder
}

/// 32-byte address
pub fn addr() -> AddressDecoder {
    AddressDecoder
}

/// Strict boolean
pub fn bool() -> BoolDecoder {
    BoolDecoder
}

/// Unsigned big integer of `width`
pub fn uint(width: Width) -> UintDecoder {
    UintDecoder::new(width)
}

/// Signed big integer of `width`
pub fn int(width: Width) -> IntDecoder {
    IntDecoder::new(width)
}

/// Unsigned big integer, length-prefixed when nested
pub fn u() -> UintDecoder {
    UintDecoder::new(Width::Dynamic)
}

/// Signed big integer, length-prefixed when nested
pub fn i() -> IntDecoder {
    IntDecoder::new(Width::Dynamic)
}

/// List of `item`
pub fn list<D: Decode>(item: D) -> ListDecoder<D> {
    ListDecoder::new(item)
}

/// Exactly `len` items of `item`, without a count prefix
pub fn fixed_list<D: Decode>(len: usize, item: D) -> FixedListDecoder<D> {
    FixedListDecoder::new(len, item)
}

/// Optional `inner`
pub fn option<D: Decode>(inner: D) -> OptionDecoder<D> {
    OptionDecoder::new(inner)
}

fn narrow_uint<T>(value: BigUint, width: usize) -> Result<T>
where
    T: for<'a> TryFrom<&'a BigUint>,
{
    T::try_from(&value).map_err(|_| Error::ValueOutOfRange {
        value: value.to_string(),
        width,
    })
}

fn narrow_int<T>(value: BigInt, width: usize) -> Result<T>
where
    T: for<'a> TryFrom<&'a BigInt>,
{
    T::try_from(&value).map_err(|_| Error::ValueOutOfRange {
        value: value.to_string(),
        width,
    })
}

macro_rules! native_decoders {
    ($($name:ident: $ty:ty => $decoder:ident, $narrow:ident, $width:expr);+ $(;)?) => {
        $(
            #[doc = concat!("`", stringify!($ty), "`, nested at ", stringify!($width), " bytes")]
            pub fn $name() -> impl Decode<Output = $ty> + Clone {
                $decoder::new(Width::Fixed($width)).try_map(|v| $narrow::<$ty>(v, $width))
            }
        )+
    };
}

native_decoders! {
    u8: u8 => UintDecoder, narrow_uint, 1;
    u16: u16 => UintDecoder, narrow_uint, 2;
    u32: u32 => UintDecoder, narrow_uint, 4;
    usize: usize => UintDecoder, narrow_uint, 4;
    u64: u64 => UintDecoder, narrow_uint, 8;
    i8: i8 => IntDecoder, narrow_int, 1;
    i16: i16 => IntDecoder, narrow_int, 2;
    i32: i32 => IntDecoder, narrow_int, 4;
    isize: isize => IntDecoder, narrow_int, 4;
    i64: i64 => IntDecoder, narrow_int, 8;
}
