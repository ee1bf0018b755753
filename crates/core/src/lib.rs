//! Core types for xsuite
//!
//! This crate defines the foundational pieces shared by the codec and the
//! storage layout engine:
//! - Error: Error type hierarchy and `Result` alias
//! - ByteReader: bounded forward-only cursor used by every decoder
//! - Address: 32-byte account address with bech32/hex forms
//! - Limits: decode-time bounds on length prefixes and list counts
//! - CodecConfig: TOML-loadable address prefix and limits
//! - convert: hex and base64 helpers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address;
pub mod config;
pub mod convert;
pub mod error;
pub mod limits;
pub mod reader;

pub use address::{Address, ADDRESS_BYTE_LENGTH, DEFAULT_HRP};
pub use config::CodecConfig;
pub use convert::{b64_to_bytes, b64_to_hex, bytes_to_b64, bytes_to_hex, hex_to_bytes};
pub use error::{Error, Result};
pub use limits::Limits;
pub use reader::ByteReader;
