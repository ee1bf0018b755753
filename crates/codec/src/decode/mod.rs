//! Decoders
//!
//! A decoder is a type tag plus two reader-driven functions, `decode_top`
//! and `decode_nest`, each the exact inverse of the matching encoding.
//! The provided `from_*` entry points create a fresh `ByteReader` per call
//! and fail with `TrailingBytes` unless the whole input was consumed.
//!
//! Composite decoders always decode their children in nest mode; only the
//! outermost value of a call is ever decoded in top mode.

mod composite;
mod primitives;

pub use composite::{FixedListDecoder, ListDecoder, OptionDecoder};
pub use primitives::{
    AddressDecoder, BoolDecoder, BufferDecoder, BytesDecoder, IntDecoder, StrDecoder,
    UintDecoder,
};

use crate::int::{read_length_prefix, LENGTH_PREFIX_BYTES};
use tracing::trace;
use xsuite_core::{b64_to_bytes, hex_to_bytes, ByteReader, Limits, Result};

/// Mirror image of `Encode`: reads one value back from a `ByteReader`
pub trait Decode {
    /// Decoded value
    type Output;

    /// Decode assuming the value is the outermost item of the input
    fn decode_top(&self, r: &mut ByteReader<'_>) -> Result<Self::Output>;

    /// Decode a self-delimiting (nest-encoded) value
    fn decode_nest(&self, r: &mut ByteReader<'_>) -> Result<Self::Output>;

    /// Top-decode `bytes` entirely, with default limits
    fn from_top(&self, bytes: &[u8]) -> Result<Self::Output> {
        self.from_top_with_limits(bytes, Limits::default())
    }

    /// Nest-decode `bytes` entirely, with default limits
    fn from_nest(&self, bytes: &[u8]) -> Result<Self::Output> {
        self.from_nest_with_limits(bytes, Limits::default())
    }

    /// Top-decode `bytes` entirely under `limits`
    fn from_top_with_limits(&self, bytes: &[u8], limits: Limits) -> Result<Self::Output> {
        let mut r = ByteReader::with_limits(bytes, limits);
        let value = self.decode_top(&mut r)?;
        finish(&r, "top")?;
        Ok(value)
    }

    /// Nest-decode `bytes` entirely under `limits`
    fn from_nest_with_limits(&self, bytes: &[u8], limits: Limits) -> Result<Self::Output> {
        let mut r = ByteReader::with_limits(bytes, limits);
        let value = self.decode_nest(&mut r)?;
        finish(&r, "nest")?;
        Ok(value)
    }

    /// Top-decode a hex string
    fn from_top_hex(&self, hex: &str) -> Result<Self::Output> {
        self.from_top(&hex_to_bytes(hex)?)
    }

    /// Nest-decode a hex string
    fn from_nest_hex(&self, hex: &str) -> Result<Self::Output> {
        self.from_nest(&hex_to_bytes(hex)?)
    }

    /// Top-decode a base64 string
    fn from_top_b64(&self, b64: &str) -> Result<Self::Output> {
        self.from_top(&b64_to_bytes(b64)?)
    }

    /// Nest-decode a base64 string
    fn from_nest_b64(&self, b64: &str) -> Result<Self::Output> {
        self.from_nest(&b64_to_bytes(b64)?)
    }

    /// Transform every decoded value with `f`
    fn map<T, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> T,
    {
        Map { inner: self, f }
    }

    /// Transform every decoded value with a fallible `f`
    fn try_map<T, F>(self, f: F) -> TryMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Result<T>,
    {
        TryMap { inner: self, f }
    }
}

fn finish(r: &ByteReader<'_>, mode: &'static str) -> Result<()> {
    if let Err(e) = r.assert_consumed() {
        trace!(
            target: "xsuite::codec",
            mode,
            offset = r.offset(),
            trailing = r.remaining(),
            "Decode rejected"
        );
        return Err(e);
    }
    Ok(())
}

/// Read a u32 length prefix followed by that many bytes
pub(crate) fn read_length_prefixed<'a>(r: &mut ByteReader<'a>) -> Result<&'a [u8]> {
    let len = read_length_prefix(r.read_exact(LENGTH_PREFIX_BYTES)?);
    r.limits().check_length_prefix(len)?;
    r.read_exact(len)
}

/// Read a u32 element count
pub(crate) fn read_count(r: &mut ByteReader<'_>) -> Result<usize> {
    let count = read_length_prefix(r.read_exact(LENGTH_PREFIX_BYTES)?);
    r.limits().check_list_len(count)?;
    Ok(count)
}

// ============================================================================
// Combinators
// ============================================================================

/// Decoder returned by [`Decode::map`]
#[derive(Debug, Clone)]
pub struct Map<D, F> {
    inner: D,
    f: F,
}

impl<D, F, T> Decode for Map<D, F>
where
    D: Decode,
    F: Fn(D::Output) -> T,
{
    type Output = T;

    fn decode_top(&self, r: &mut ByteReader<'_>) -> Result<T> {
        self.inner.decode_top(r).map(&self.f)
    }

    fn decode_nest(&self, r: &mut ByteReader<'_>) -> Result<T> {
        self.inner.decode_nest(r).map(&self.f)
    }
}

/// Decoder returned by [`Decode::try_map`]
#[derive(Debug, Clone)]
pub struct TryMap<D, F> {
    inner: D,
    f: F,
}

impl<D, F, T> Decode for TryMap<D, F>
where
    D: Decode,
    F: Fn(D::Output) -> Result<T>,
{
    type Output = T;

    fn decode_top(&self, r: &mut ByteReader<'_>) -> Result<T> {
        self.inner.decode_top(r).and_then(&self.f)
    }

    fn decode_nest(&self, r: &mut ByteReader<'_>) -> Result<T> {
        self.inner.decode_nest(r).and_then(&self.f)
    }
}

impl<D: Decode + ?Sized> Decode for Box<D> {
    type Output = D::Output;

    fn decode_top(&self, r: &mut ByteReader<'_>) -> Result<Self::Output> {
        (**self).decode_top(r)
    }

    fn decode_nest(&self, r: &mut ByteReader<'_>) -> Result<Self::Output> {
        (**self).decode_nest(r)
    }
}

impl<D: Decode + ?Sized> Decode for &D {
    type Output = D::Output;

    fn decode_top(&self, r: &mut ByteReader<'_>) -> Result<Self::Output> {
        (**self).decode_top(r)
    }

    fn decode_nest(&self, r: &mut ByteReader<'_>) -> Result<Self::Output> {
        (**self).decode_nest(r)
    }
}

// ============================================================================
// Tuples
// ============================================================================

// A tuple has no size ambiguity: both modes nest-decode each element in order.
macro_rules! tuple_decoder {
    ($($d:ident $v:ident),+) => {
        impl<$($d: Decode),+> Decode for ($($d,)+) {
            type Output = ($($d::Output,)+);

            fn decode_top(&self, r: &mut ByteReader<'_>) -> Result<Self::Output> {
                self.decode_nest(r)
            }

            fn decode_nest(&self, r: &mut ByteReader<'_>) -> Result<Self::Output> {
                let ($($v,)+) = self;
                Ok(($($v.decode_nest(r)?,)+))
            }
        }
    };
}

tuple_decoder!(A a);
tuple_decoder!(A a, B b);
tuple_decoder!(A a, B b, C c);
tuple_decoder!(A a, B b, C c, D d);
tuple_decoder!(A a, B b, C c, D d, E e);
tuple_decoder!(A a, B b, C c, D d, E e, F f);
tuple_decoder!(A a, B b, C c, D d, E e, F f, G g);
tuple_decoder!(A a, B b, C c, D d, E e, F f, G g, H h);
