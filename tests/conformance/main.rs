//! Conformance Test Suite
//!
//! Literal byte vectors every xsuite release must reproduce bit for bit.
//! These encode an external contract (the chain's ABI and storage layout),
//! so a failing vector is always a bug in xsuite, never in the vector.
//!
//! ## Test Groups
//!
//! - **Codec vectors**: top/nest encodings of every wire type
//! - **Decoder vectors**: the inverse direction, including rejected input
//! - **Storage vectors**: mapper layouts and ESDT records
//! - **Error messages**: user-facing failure text
//! - **Width properties**: fixed-width integers never widen on the wire
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test conformance
//! ```

mod test_utils;

mod codec_vectors;
mod decoder_vectors;
mod error_messages;
mod storage_vectors;
mod width_properties;
