//! Lists and options

use super::{read_count, Decode};
use xsuite_core::{ByteReader, Error, Result};

/// Variable-length list of nest-encoded items
///
/// Top mode has no count and keeps decoding until the reader is consumed, so
/// a top-decoded list must be the last thing in its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListDecoder<D> {
    item: D,
}

impl<D: Decode> ListDecoder<D> {
    /// List of items decoded by `item`
    pub fn new(item: D) -> Self {
        ListDecoder { item }
    }
}

impl<D: Decode> Decode for ListDecoder<D> {
    type Output = Vec<D::Output>;

    fn decode_top(&self, r: &mut ByteReader<'_>) -> Result<Self::Output> {
        let max = r.limits().max_list_len;
        let mut items = Vec::new();
        while !r.is_consumed() {
            // also stops a zero-width item from looping forever
            if items.len() == max {
                return Err(Error::LimitExceeded {
                    what: "list length",
                    actual: items.len() + 1,
                    max,
                });
            }
            items.push(self.item.decode_nest(r)?);
        }
        Ok(items)
    }

    fn decode_nest(&self, r: &mut ByteReader<'_>) -> Result<Self::Output> {
        let count = read_count(r)?;
        decode_n(&self.item, count, r)
    }
}

/// List with a count known ahead of time; no prefix in either mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedListDecoder<D> {
    len: usize,
    item: D,
}

impl<D: Decode> FixedListDecoder<D> {
    /// List of exactly `len` items decoded by `item`
    pub fn new(len: usize, item: D) -> Self {
        FixedListDecoder { len, item }
    }

    /// Number of items decoded
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list decodes zero items
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<D: Decode> Decode for FixedListDecoder<D> {
    type Output = Vec<D::Output>;

    fn decode_top(&self, r: &mut ByteReader<'_>) -> Result<Self::Output> {
        self.decode_nest(r)
    }

    fn decode_nest(&self, r: &mut ByteReader<'_>) -> Result<Self::Output> {
        decode_n(&self.item, self.len, r)
    }
}

fn decode_n<D: Decode>(item: &D, count: usize, r: &mut ByteReader<'_>) -> Result<Vec<D::Output>> {
    // the count is untrusted; never reserve more slots than bytes left
    let mut items = Vec::with_capacity(count.min(r.remaining()));
    for _ in 0..count {
        items.push(item.decode_nest(r)?);
    }
    Ok(items)
}

/// Optional value
///
/// | Mode | Absent | Present                   | Otherwise                  |
/// |------|--------|---------------------------|----------------------------|
/// | top  | empty  | `01` + nest of the value  | `InvalidOptionTopEncoding` |
/// | nest | `00`   | `01` + nest of the value  | `InvalidOptionNestEncoding`|
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionDecoder<D> {
    inner: D,
}

impl<D: Decode> OptionDecoder<D> {
    /// Optional value decoded by `inner` when present
    pub fn new(inner: D) -> Self {
        OptionDecoder { inner }
    }
}

impl<D: Decode> Decode for OptionDecoder<D> {
    type Output = Option<D::Output>;

    fn decode_top(&self, r: &mut ByteReader<'_>) -> Result<Self::Output> {
        if r.is_consumed() {
            return Ok(None);
        }
        match r.read_u8()? {
            1 => Ok(Some(self.inner.decode_nest(r)?)),
            other => Err(Error::InvalidOptionTopEncoding(other)),
        }
    }

    fn decode_nest(&self, r: &mut ByteReader<'_>) -> Result<Self::Output> {
        match r.read_u8()? {
            0 => Ok(None),
            1 => Ok(Some(self.inner.decode_nest(r)?)),
            other => Err(Error::InvalidOptionNestEncoding(other)),
        }
    }
}
