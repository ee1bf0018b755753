//! Shared helpers for the conformance suite

pub use xsuite::*;

/// Assert an encodable's top and nest hex forms
pub fn assert_hex(e: &Encodable, top: &str, nest: &str) {
    assert_eq!(e.to_top_hex(), top, "top encoding of {:?}", e);
    assert_eq!(e.to_nest_hex(), nest, "nest encoding of {:?}", e);
}

/// Hex of a UTF-8 storage key
pub fn key_hex(s: &str) -> String {
    bytes_to_hex(s.as_bytes())
}
