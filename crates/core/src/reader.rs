//! Bounded forward-only cursor over a byte buffer
//!
//! Every decoder drives one `ByteReader`. A reader is created for a single
//! decode call and dropped at its end; it is never shared.

use crate::error::{Error, Result};
use crate::limits::Limits;

/// Forward-only reader over a borrowed byte slice
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
    limits: Limits,
}

impl<'a> ByteReader<'a> {
    /// Create a reader with default limits
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_limits(bytes, Limits::default())
    }

    /// Create a reader with custom limits
    pub fn with_limits(bytes: &'a [u8], limits: Limits) -> Self {
        ByteReader {
            bytes,
            offset: 0,
            limits,
        }
    }

    /// Limits that apply to this decode call
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Read exactly `n` bytes
    ///
    /// Fails with `InsufficientBytes` without consuming anything if fewer
    /// than `n` bytes remain.
    pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(Error::InsufficientBytes {
                needed: n,
                remaining,
            });
        }
        Ok(self.take(n))
    }

    /// Read up to `n` bytes; never fails
    pub fn read_at_most(&mut self, n: usize) -> &'a [u8] {
        let n = n.min(self.remaining());
        self.take(n)
    }

    /// Read and consume everything left
    pub fn read_remaining(&mut self) -> &'a [u8] {
        let n = self.remaining();
        self.take(n)
    }

    /// Read a single byte
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_exact(1)?[0])
    }

    /// Number of unread bytes
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    /// Current read offset
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether every byte has been read
    pub fn is_consumed(&self) -> bool {
        self.offset == self.bytes.len()
    }

    /// Fail with `TrailingBytes` unless every byte has been read
    pub fn assert_consumed(&self) -> Result<()> {
        if !self.is_consumed() {
            return Err(Error::TrailingBytes(self.remaining()));
        }
        Ok(())
    }

    fn take(&mut self, n: usize) -> &'a [u8] {
        let slice = &self.bytes[self.offset..self.offset + n];
        self.offset += n;
        slice
    }
}
