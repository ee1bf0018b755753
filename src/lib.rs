//! xsuite - binary ABI codec and storage-layout engine for smart-contract tests
//!
//! xsuite turns typed values into the exact bytes a contract expects, parses
//! chain bytes back into typed values, and computes the raw storage pairs a
//! contract's storage mappers would persist.
//!
//! # Quick Start
//!
//! ```
//! use xsuite::{dec, set_mapper, to_raw_kvs, Decode, Encodable, Encode};
//!
//! // Encode a call argument
//! let arg = Encodable::list([Encodable::u8(1), Encodable::u8(2)]);
//! assert_eq!(arg.to_nest_hex(), "000000020102");
//!
//! // Decode a query result
//! let value = dec::option(dec::u16()).from_top_hex("010005").unwrap();
//! assert_eq!(value, Some(5));
//!
//! // Expected storage of a set mapper
//! let kvs = set_mapper("members", &[(1, Encodable::str("alice"))]).unwrap();
//! assert_eq!(to_raw_kvs(&kvs).len(), 4);
//! ```
//!
//! # Architecture
//!
//! - [`xsuite_core`]: errors, byte reader, addresses, limits and config
//! - [`xsuite_codec`]: encoders and decoders
//! - [`xsuite_storage`]: storage mappers, ESDT records, kv comparison
//!
//! Every operation is a pure, synchronous transformation; nothing is shared
//! between calls.

pub use xsuite_codec::*;
pub use xsuite_core::*;
pub use xsuite_storage::*;
