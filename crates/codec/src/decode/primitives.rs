//! Leaf decoders: byte sequences, strings, addresses, booleans and integers

use super::{read_length_prefixed, Decode};
use crate::int::{int_from_twos, uint_from_be, Width};
use num_bigint::{BigInt, BigUint};
use xsuite_core::{Address, ByteReader, Error, Result, ADDRESS_BYTE_LENGTH};

/// Length-prefixed byte buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferDecoder;

impl Decode for BufferDecoder {
    type Output = Vec<u8>;

    fn decode_top(&self, r: &mut ByteReader<'_>) -> Result<Vec<u8>> {
        Ok(r.read_remaining().to_vec())
    }

    fn decode_nest(&self, r: &mut ByteReader<'_>) -> Result<Vec<u8>> {
        Ok(read_length_prefixed(r)?.to_vec())
    }
}

/// Unprefixed byte sequence, either of a known width or running to the end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BytesDecoder {
    width: Width,
}

impl BytesDecoder {
    /// Decoder reading exactly `Fixed(n)` bytes, or everything for `Dynamic`
    pub fn new(width: Width) -> Self {
        BytesDecoder { width }
    }

    fn read(&self, r: &mut ByteReader<'_>) -> Result<Vec<u8>> {
        let bytes = match self.width {
            Width::Fixed(n) => r.read_exact(n)?,
            Width::Dynamic => r.read_remaining(),
        };
        Ok(bytes.to_vec())
    }
}

impl Default for BytesDecoder {
    fn default() -> Self {
        BytesDecoder::new(Width::Dynamic)
    }
}

impl Decode for BytesDecoder {
    type Output = Vec<u8>;

    fn decode_top(&self, r: &mut ByteReader<'_>) -> Result<Vec<u8>> {
        self.read(r)
    }

    fn decode_nest(&self, r: &mut ByteReader<'_>) -> Result<Vec<u8>> {
        self.read(r)
    }
}

/// UTF-8 string carried in a buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrDecoder;

impl StrDecoder {
    fn utf8(bytes: Vec<u8>) -> Result<String> {
        String::from_utf8(bytes).map_err(|e| Error::InvalidUtf8(e.to_string()))
    }
}

impl Decode for StrDecoder {
    type Output = String;

    fn decode_top(&self, r: &mut ByteReader<'_>) -> Result<String> {
        Self::utf8(BufferDecoder.decode_top(r)?)
    }

    fn decode_nest(&self, r: &mut ByteReader<'_>) -> Result<String> {
        Self::utf8(BufferDecoder.decode_nest(r)?)
    }
}

/// 32-byte address, identical in both modes
///
/// Render the result with `Address::to_bech32` or `Address::to_hex`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressDecoder;

impl Decode for AddressDecoder {
    type Output = Address;

    fn decode_top(&self, r: &mut ByteReader<'_>) -> Result<Address> {
        Address::from_bytes(r.read_exact(ADDRESS_BYTE_LENGTH)?)
    }

    fn decode_nest(&self, r: &mut ByteReader<'_>) -> Result<Address> {
        self.decode_top(r)
    }
}

/// Boolean; only the bytes 0 and 1 are accepted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolDecoder;

impl BoolDecoder {
    fn from_byte(byte: u8) -> Result<bool> {
        match byte {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(Error::InvalidBool(other)),
        }
    }
}

impl Decode for BoolDecoder {
    type Output = bool;

    fn decode_top(&self, r: &mut ByteReader<'_>) -> Result<bool> {
        match r.read_at_most(1).first() {
            None => Ok(false),
            Some(byte) => Self::from_byte(*byte),
        }
    }

    fn decode_nest(&self, r: &mut ByteReader<'_>) -> Result<bool> {
        Self::from_byte(r.read_u8()?)
    }
}

/// Unsigned integer
///
/// Top mode reads up to the fixed width (or everything for `Dynamic`), since
/// top-encoding strips leading zeroes. Nest mode reads exactly the fixed
/// width, or a u32 length prefix and that many bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UintDecoder {
    width: Width,
}

impl UintDecoder {
    /// Decoder for the given width
    pub fn new(width: Width) -> Self {
        UintDecoder { width }
    }
}

impl Default for UintDecoder {
    fn default() -> Self {
        UintDecoder::new(Width::Dynamic)
    }
}

impl Decode for UintDecoder {
    type Output = BigUint;

    fn decode_top(&self, r: &mut ByteReader<'_>) -> Result<BigUint> {
        Ok(uint_from_be(read_int_top(r, self.width)))
    }

    fn decode_nest(&self, r: &mut ByteReader<'_>) -> Result<BigUint> {
        Ok(uint_from_be(read_int_nest(r, self.width)?))
    }
}

/// Signed two's-complement integer, with the same width rules as `UintDecoder`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntDecoder {
    width: Width,
}

impl IntDecoder {
    /// Decoder for the given width
    pub fn new(width: Width) -> Self {
        IntDecoder { width }
    }
}

impl Default for IntDecoder {
    fn default() -> Self {
        IntDecoder::new(Width::Dynamic)
    }
}

impl Decode for IntDecoder {
    type Output = BigInt;

    fn decode_top(&self, r: &mut ByteReader<'_>) -> Result<BigInt> {
        Ok(int_from_twos(read_int_top(r, self.width)))
    }

    fn decode_nest(&self, r: &mut ByteReader<'_>) -> Result<BigInt> {
        Ok(int_from_twos(read_int_nest(r, self.width)?))
    }
}

fn read_int_top<'a>(r: &mut ByteReader<'a>, width: Width) -> &'a [u8] {
    match width {
        Width::Fixed(n) => r.read_at_most(n),
        Width::Dynamic => r.read_remaining(),
    }
}

fn read_int_nest<'a>(r: &mut ByteReader<'a>, width: Width) -> Result<&'a [u8]> {
    match width {
        Width::Fixed(n) => r.read_exact(n),
        Width::Dynamic => read_length_prefixed(r),
    }
}
