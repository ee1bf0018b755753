//! Top/nest binary ABI codec
//!
//! This crate turns typed values into the byte sequences a smart contract
//! expects, and parses them back:
//! - Encodable: closed sum type over every wire type, built with constructors
//! - Encode: `to_top_bytes`/`to_nest_bytes` plus hex and base64 forms
//! - Decode: reader-driven inverse, one decoder per wire type, with `map`,
//!   `try_map` and tuple composition
//! - dec: factory functions for building decoder trees
//!
//! Encoding never fails once a value is constructed; range and format
//! checks happen in the constructors.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dec;
pub mod decode;
pub mod encode;
pub mod int;

pub use decode::{
    AddressDecoder, BoolDecoder, BufferDecoder, BytesDecoder, Decode, FixedListDecoder,
    IntDecoder, ListDecoder, Map, OptionDecoder, StrDecoder, TryMap, UintDecoder,
};
pub use encode::{Encodable, Encode};
pub use int::{IntValue, UintValue, Width, LENGTH_PREFIX_BYTES};
