//! Error types for xsuite
//!
//! This module defines all error types used by the codec and the storage
//! layout engine. We use `thiserror` for automatic `Display` and `Error`
//! trait implementations.
//!
//! Every failure is fatal to the call that raised it. Nothing in the core
//! retries or recovers; callers decide whether a failure is a test failure
//! or aborts a higher-level operation.

use thiserror::Error;

/// Result type alias for xsuite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the codec and storage layout engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // ------------------------------------------------------------------
    // Malformed input
    // ------------------------------------------------------------------
    /// Hex string with an odd number of characters
    #[error("odd hex length: {0}")]
    OddHexLength(usize),

    /// Hex string containing a non-hex character
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Base64 string that cannot be decoded
    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    /// Human-readable address that fails bech32 parsing or checksum
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Human-readable address carrying the wrong prefix
    #[error("invalid address prefix: expected {expected}, got {actual}")]
    InvalidAddressPrefix {
        /// Prefix required by the configuration
        expected: String,
        /// Prefix found in the input
        actual: String,
    },

    /// Raw address that is not exactly 32 bytes
    #[error("invalid address length: expected {expected} bytes, got {actual}")]
    InvalidAddressLength {
        /// Required byte length
        expected: usize,
        /// Byte length supplied
        actual: usize,
    },

    /// Bytes that are not valid UTF-8 where a string was expected
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(String),

    // ------------------------------------------------------------------
    // Range violation
    // ------------------------------------------------------------------
    /// A fixed width of zero bytes was requested for an integer
    #[error("invalid integer width: {0}")]
    InvalidWidth(usize),

    /// Integer not representable in the configured fixed width
    #[error("value exceeds maximum for width {width}: {value}")]
    ValueOutOfRange {
        /// Decimal rendering of the offending value
        value: String,
        /// Configured width in bytes
        width: usize,
    },

    /// Negative value supplied where an unsigned integer is required
    #[error("negative value not allowed for unsigned integer: {0}")]
    NegativeUnsigned(String),

    // ------------------------------------------------------------------
    // Structural violation
    // ------------------------------------------------------------------
    /// Fixed-width or length-prefixed read ran past the end of the buffer
    #[error("insufficient bytes: needed {needed}, remaining {remaining}")]
    InsufficientBytes {
        /// Bytes requested
        needed: usize,
        /// Bytes left in the buffer
        remaining: usize,
    },

    /// Top-level decode finished with unread bytes
    #[error("trailing bytes: {0} bytes left unread")]
    TrailingBytes(usize),

    /// Option top-encoding whose first byte is not 0x01
    #[error("invalid Option top-encoding: unexpected leading byte {0:#04x}")]
    InvalidOptionTopEncoding(u8),

    /// Option nest-encoding whose first byte is neither 0x00 nor 0x01
    #[error("invalid Option nest-encoding: unexpected leading byte {0:#04x}")]
    InvalidOptionNestEncoding(u8),

    /// Boolean byte that is neither 0x00 nor 0x01
    #[error("invalid boolean byte: {0:#04x}")]
    InvalidBool(u8),

    /// Length prefix or element count above the configured limit
    #[error("{what} of {actual} exceeds limit of {max}")]
    LimitExceeded {
        /// Which quantity was bounded
        what: &'static str,
        /// Value read from the input
        actual: usize,
        /// Configured maximum
        max: usize,
    },

    // ------------------------------------------------------------------
    // Domain invariant violation
    // ------------------------------------------------------------------
    /// Set/map mapper id that is zero or negative
    #[error("non-positive id not allowed: {0}")]
    NonPositiveId(i64),

    /// Set/map mapper snapshot containing the same id twice
    #[error("duplicate id in snapshot: {0}")]
    DuplicateId(i64),

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------
    /// Configuration text that cannot be parsed
    #[error("config error: {0}")]
    Config(String),
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::InvalidHex(e.to_string())
    }
}

impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Self {
        Error::InvalidBase64(e.to_string())
    }
}

impl From<bech32::Error> for Error {
    fn from(e: bech32::Error) -> Self {
        Error::InvalidAddress(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
