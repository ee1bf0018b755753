//! Integer widths and two's-complement helpers
//!
//! Integers are big-endian on the wire. Top-encoding is always minimal
//! (zero is the empty sequence); nest-encoding is either exactly `W` bytes
//! for a fixed width or a u32 length prefix followed by the top bytes.

use byteorder::{BigEndian, ByteOrder};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use xsuite_core::{Error, Result};

/// Size in bytes of every length/count prefix
pub const LENGTH_PREFIX_BYTES: usize = 4;

/// Byte width of an integer or fixed byte sequence, decided at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// Exactly this many bytes when nested
    Fixed(usize),
    /// Length-prefixed when nested
    Dynamic,
}

/// Unsigned integer paired with the width it was validated against
///
/// Only built through the checked `Encodable` constructors, so a fixed width
/// always holds the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UintValue {
    value: BigUint,
    width: Width,
}

impl UintValue {
    pub(crate) fn new(value: BigUint, width: Width) -> Result<Self> {
        if let Width::Fixed(w) = width {
            check_uint_width(&value, w)?;
        }
        Ok(UintValue { value, width })
    }

    /// Native Rust integer at its own width, which always fits
    pub(crate) fn native(value: BigUint, width: usize) -> Self {
        UintValue {
            value,
            width: Width::Fixed(width),
        }
    }

    pub(crate) fn dynamic(value: BigUint) -> Self {
        UintValue {
            value,
            width: Width::Dynamic,
        }
    }

    /// The integer
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Nest width
    pub fn width(&self) -> Width {
        self.width
    }

    pub(crate) fn top_bytes(&self) -> Vec<u8> {
        uint_top_bytes(&self.value)
    }

    /// `None` for a dynamic width, which nests behind a length prefix
    pub(crate) fn fixed_bytes(&self) -> Option<Vec<u8>> {
        match self.width {
            Width::Fixed(w) => Some(uint_fixed_bytes(&self.value, w)),
            Width::Dynamic => None,
        }
    }
}

/// Signed integer paired with the width it was validated against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntValue {
    value: BigInt,
    width: Width,
}

impl IntValue {
    pub(crate) fn new(value: BigInt, width: Width) -> Result<Self> {
        if let Width::Fixed(w) = width {
            check_int_width(&value, w)?;
        }
        Ok(IntValue { value, width })
    }

    pub(crate) fn native(value: BigInt, width: usize) -> Self {
        IntValue {
            value,
            width: Width::Fixed(width),
        }
    }

    pub(crate) fn dynamic(value: BigInt) -> Self {
        IntValue {
            value,
            width: Width::Dynamic,
        }
    }

    /// The integer
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Nest width
    pub fn width(&self) -> Width {
        self.width
    }

    pub(crate) fn top_bytes(&self) -> Vec<u8> {
        int_top_bytes(&self.value)
    }

    pub(crate) fn fixed_bytes(&self) -> Option<Vec<u8>> {
        match self.width {
            Width::Fixed(w) => Some(twos_complement(&self.value, w)),
            Width::Dynamic => None,
        }
    }
}

/// u32 big-endian length prefix
///
/// Buffers and lists longer than `u32::MAX` cannot be represented on the
/// wire; encoding one is a caller bug, checked only in debug builds.
pub(crate) fn length_prefix(len: usize) -> [u8; LENGTH_PREFIX_BYTES] {
    debug_assert!(len <= u32::MAX as usize);
    let mut buf = [0u8; LENGTH_PREFIX_BYTES];
    BigEndian::write_u32(&mut buf, len as u32);
    buf
}

pub(crate) fn read_length_prefix(bytes: &[u8]) -> usize {
    BigEndian::read_u32(bytes) as usize
}

// ============================================================================
// Unsigned
// ============================================================================

/// Minimal big-endian bytes; empty for zero
pub(crate) fn uint_top_bytes(value: &BigUint) -> Vec<u8> {
    if value.is_zero() {
        Vec::new()
    } else {
        value.to_bytes_be()
    }
}

/// Big-endian bytes left-padded to `width`; caller has checked the range
pub(crate) fn uint_fixed_bytes(value: &BigUint, width: usize) -> Vec<u8> {
    let top = uint_top_bytes(value);
    let mut out = vec![0u8; width.saturating_sub(top.len())];
    out.extend_from_slice(&top);
    out
}

pub(crate) fn check_uint_width(value: &BigUint, width: usize) -> Result<()> {
    if width == 0 {
        return Err(Error::InvalidWidth(width));
    }
    if value.bits() > 8 * width as u64 {
        return Err(Error::ValueOutOfRange {
            value: value.to_string(),
            width,
        });
    }
    Ok(())
}

pub(crate) fn uint_from_be(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

// ============================================================================
// Signed
// ============================================================================

/// Smallest byte count that represents `value` with its sign
///
/// Zero takes no bytes. A negative value is biased by one first, so -128
/// fits in one byte and -129 needs two.
pub(crate) fn int_unambiguous_len(value: &BigInt) -> usize {
    if value.is_zero() {
        return 0;
    }
    let magnitude = match value.sign() {
        Sign::Minus => value.magnitude() - 1u32,
        _ => value.magnitude().clone(),
    };
    (magnitude.bits() / 8 + 1) as usize
}

/// Two's-complement bytes of exactly `width`; caller has checked the range
pub(crate) fn twos_complement(value: &BigInt, width: usize) -> Vec<u8> {
    let unsigned = match value.sign() {
        Sign::Minus => (BigUint::one() << (8 * width)) - value.magnitude(),
        _ => value.magnitude().clone(),
    };
    uint_fixed_bytes(&unsigned, width)
}

pub(crate) fn int_top_bytes(value: &BigInt) -> Vec<u8> {
    twos_complement(value, int_unambiguous_len(value))
}

pub(crate) fn check_int_width(value: &BigInt, width: usize) -> Result<()> {
    if width == 0 {
        return Err(Error::InvalidWidth(width));
    }
    let bound = BigInt::one() << (8 * width - 1);
    if *value >= bound || *value < -bound {
        return Err(Error::ValueOutOfRange {
            value: value.to_string(),
            width,
        });
    }
    Ok(())
}

pub(crate) fn int_from_twos(bytes: &[u8]) -> BigInt {
    if bytes.is_empty() {
        return BigInt::zero();
    }
    BigInt::from_signed_bytes_be(bytes)
}
