//! Codec configuration
//!
//! Holds the knobs a test suite may want to change between chains: the
//! bech32 prefix addresses are rendered and parsed with, and the decode
//! limits. Loaded from TOML text; the core itself reads no files and no
//! environment variables.

use crate::address::{Address, DEFAULT_HRP};
use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::reader::ByteReader;
use serde::{Deserialize, Serialize};

/// Codec configuration
///
/// # Example
///
/// ```toml
/// address_hrp = "erd"
///
/// [limits]
/// max_length_prefix = 16777216
/// max_list_len = 1000000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Bech32 prefix for human-readable addresses
    #[serde(default = "default_hrp")]
    pub address_hrp: String,
    /// Decode limits
    #[serde(default)]
    pub limits: Limits,
}

fn default_hrp() -> String {
    DEFAULT_HRP.to_string()
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            address_hrp: default_hrp(),
            limits: Limits::default(),
        }
    }
}

impl CodecConfig {
    /// Parse configuration from TOML text
    ///
    /// Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: CodecConfig = toml::from_str(s)?;
        if config.address_hrp.is_empty() {
            return Err(Error::Config("address_hrp must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Returns the default configuration text with comments.
    pub fn default_toml() -> &'static str {
        r#"# xsuite codec configuration
#
# Bech32 prefix used to parse and render addresses.
address_hrp = "erd"

[limits]
# Largest accepted u32 length prefix, in bytes.
max_length_prefix = 16777216
# Largest accepted element count of a nest-encoded list.
max_list_len = 1000000
"#
    }

    /// Parse an address using the configured prefix
    pub fn parse_address(&self, s: &str) -> Result<Address> {
        Address::parse_with_hrp(s, &self.address_hrp)
    }

    /// Render an address using the configured prefix
    pub fn format_address(&self, address: &Address) -> Result<String> {
        address.to_bech32_with_hrp(&self.address_hrp)
    }

    /// Reader over `bytes` carrying the configured limits
    pub fn reader<'a>(&self, bytes: &'a [u8]) -> ByteReader<'a> {
        ByteReader::with_limits(bytes, self.limits)
    }
}
