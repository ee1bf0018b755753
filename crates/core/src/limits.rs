//! Size limits enforced while decoding
//!
//! Length prefixes and list counts come straight from untrusted bytes. These
//! limits cap them before any allocation is sized from them. Violations
//! result in `Error::LimitExceeded`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Size limits for decoders
///
/// Carried by every `ByteReader`; nested decoders read them from the reader
/// they are handed, so one setting governs a whole decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum value of a u32 length prefix in bytes (default: 16MB)
    pub max_length_prefix: usize,

    /// Maximum element count of a nest-encoded list (default: 1M elements)
    pub max_list_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_length_prefix: 16 * 1024 * 1024, // 16MB
            max_list_len: 1_000_000,
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    ///
    /// This is useful for unit tests that need to test limit enforcement
    /// without creating extremely large inputs.
    pub fn with_small_limits() -> Self {
        Limits {
            max_length_prefix: 1000,
            max_list_len: 100,
        }
    }

    /// Validate a length prefix read from the input
    pub fn check_length_prefix(&self, len: usize) -> Result<()> {
        if len > self.max_length_prefix {
            return Err(Error::LimitExceeded {
                what: "length prefix",
                actual: len,
                max: self.max_length_prefix,
            });
        }
        Ok(())
    }

    /// Validate a list element count read from the input
    pub fn check_list_len(&self, len: usize) -> Result<()> {
        if len > self.max_list_len {
            return Err(Error::LimitExceeded {
                what: "list length",
                actual: len,
                max: self.max_list_len,
            });
        }
        Ok(())
    }
}
