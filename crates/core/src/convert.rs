//! Hex and base64 conversions
//!
//! Node APIs return storage keys and values as hex (account storage) or
//! base64 (query results). These helpers turn both into raw bytes.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Lowercase hex rendering of `bytes`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Parse a hex string (either case, no `0x` prefix)
///
/// Fails with `OddHexLength` or `InvalidHex`.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return Err(Error::OddHexLength(hex.len()));
    }
    Ok(hex::decode(hex)?)
}

/// Standard base64 rendering of `bytes`
pub fn bytes_to_b64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Parse a standard base64 string
pub fn b64_to_bytes(b64: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(b64)?)
}

/// Convert base64 to lowercase hex
pub fn b64_to_hex(b64: &str) -> Result<String> {
    b64_to_bytes(b64).map(|b| bytes_to_hex(&b))
}
