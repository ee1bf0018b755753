//! Fixed-length account addresses
//!
//! An address is exactly 32 bytes on the wire. Humans see it as a bech32
//! string with the `erd` prefix; node APIs sometimes return it as 64 hex
//! characters. Both forms parse into the same [`Address`].

use crate::convert::hex_to_bytes;
use crate::error::{Error, Result};
use bech32::{FromBase32, ToBase32, Variant};
use std::fmt;
use std::str::FromStr;

/// Byte length of every address
pub const ADDRESS_BYTE_LENGTH: usize = 32;

/// Human-readable prefix of bech32 addresses
pub const DEFAULT_HRP: &str = "erd";

/// Leading zero bytes that mark a smart-contract address
const CONTRACT_ZERO_PREFIX: usize = 8;

/// A 32-byte account address
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; ADDRESS_BYTE_LENGTH]);

impl Address {
    /// The all-zero address
    pub const ZERO: Address = Address([0u8; ADDRESS_BYTE_LENGTH]);

    /// Build an address from raw bytes
    ///
    /// Fails with `InvalidAddressLength` unless `bytes` is exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; ADDRESS_BYTE_LENGTH] =
            bytes.try_into().map_err(|_| Error::InvalidAddressLength {
                expected: ADDRESS_BYTE_LENGTH,
                actual: bytes.len(),
            })?;
        Ok(Address(arr))
    }

    /// Parse a bech32 (`erd1...`) or 64-character hex address
    pub fn parse(s: &str) -> Result<Self> {
        Self::parse_with_hrp(s, DEFAULT_HRP)
    }

    /// Parse with a custom bech32 prefix
    pub fn parse_with_hrp(s: &str, hrp: &str) -> Result<Self> {
        if s.len() == 2 * ADDRESS_BYTE_LENGTH && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Self::from_bytes(&hex_to_bytes(s)?);
        }
        Self::from_bech32_with_hrp(s, hrp)
    }

    /// Parse a bech32 address with the default prefix
    pub fn from_bech32(s: &str) -> Result<Self> {
        Self::from_bech32_with_hrp(s, DEFAULT_HRP)
    }

    /// Parse a bech32 address, requiring the given prefix
    pub fn from_bech32_with_hrp(s: &str, hrp: &str) -> Result<Self> {
        let (actual_hrp, data, variant) = bech32::decode(s)?;
        if actual_hrp != hrp {
            return Err(Error::InvalidAddressPrefix {
                expected: hrp.to_string(),
                actual: actual_hrp,
            });
        }
        if variant != Variant::Bech32 {
            return Err(Error::InvalidAddress(format!(
                "expected bech32 checksum, got {:?}",
                variant
            )));
        }
        let bytes = Vec::<u8>::from_base32(&data)?;
        Self::from_bytes(&bytes)
    }

    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8; ADDRESS_BYTE_LENGTH] {
        &self.0
    }

    /// Lowercase hex rendering
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Bech32 rendering with the default prefix
    pub fn to_bech32(&self) -> String {
        self.to_string()
    }

    /// Bech32 rendering with a custom prefix
    pub fn to_bech32_with_hrp(&self, hrp: &str) -> Result<String> {
        Ok(bech32::encode(hrp, self.0.to_base32(), Variant::Bech32)?)
    }

    /// Whether this is a smart-contract address (eight leading zero bytes)
    pub fn is_contract(&self) -> bool {
        self.0[..CONTRACT_ZERO_PREFIX].iter().all(|b| *b == 0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = bech32::encode(DEFAULT_HRP, self.0.to_base32(), Variant::Bech32)
            .map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Address::parse(s)
    }
}

impl From<[u8; ADDRESS_BYTE_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_BYTE_LENGTH]) -> Self {
        Address(bytes)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Address::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
