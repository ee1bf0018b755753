//! Raw storage pairs
//!
//! A `Kv` is an opaque key and an opaque value, both raw bytes, exactly as a
//! node's account-storage endpoint reports them. Mapper functions produce
//! them; test code compares them against what the node returns.
//!
//! Storage has no notion of an "empty" entry: writing an empty value deletes
//! the key. Comparisons therefore treat a missing key as an empty value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use xsuite_codec::Encode;
use xsuite_core::{bytes_to_hex, hex_to_bytes, Result};

/// Raw storage pairs keyed by hex key, hex values
///
/// This is the shape account-storage endpoints return.
pub type RawKvs = BTreeMap<String, String>;

/// One raw storage pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Kv {
    /// Key bytes
    pub key: Vec<u8>,
    /// Value bytes
    pub value: Vec<u8>,
}

impl Kv {
    /// Pair from raw bytes
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Kv {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Pair whose key and value are the top-encodings of `key` and `value`
    pub fn from_top(key: &impl Encode, value: &impl Encode) -> Self {
        Kv::new(key.to_top_bytes(), value.to_top_bytes())
    }

    /// Pair from hex strings
    pub fn from_hex(key: &str, value: &str) -> Result<Self> {
        Ok(Kv::new(hex_to_bytes(key)?, hex_to_bytes(value)?))
    }

    /// Key as lowercase hex
    pub fn key_hex(&self) -> String {
        bytes_to_hex(&self.key)
    }

    /// Value as lowercase hex
    pub fn value_hex(&self) -> String {
        bytes_to_hex(&self.value)
    }
}

/// Collect pairs into a hex map; a later pair overwrites an earlier one with
/// the same key
pub fn to_raw_kvs<'a>(kvs: impl IntoIterator<Item = &'a Kv>) -> RawKvs {
    kvs.into_iter()
        .map(|kv| (kv.key_hex(), kv.value_hex()))
        .collect()
}

/// Parse a hex map back into pairs, in key order
pub fn from_raw_kvs(raw: &RawKvs) -> Result<Vec<Kv>> {
    raw.iter().map(|(k, v)| Kv::from_hex(k, v)).collect()
}

/// An expected pair that storage does not hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KvMismatch {
    /// Hex key
    pub key: String,
    /// Expected hex value
    pub expected: String,
    /// Hex value found in storage; empty when the key is absent
    pub actual: String,
}

impl fmt::Display for KvMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "key {}: expected {:?}, got {:?}",
            self.key, self.expected, self.actual
        )
    }
}

/// Every expected pair whose value differs in `actual`
///
/// Keys absent from `actual` compare as empty values, so expecting `""` for
/// a key matches its absence. Extra keys in `actual` are ignored. Hex case
/// is not significant.
pub fn missing_kvs(expected: &RawKvs, actual: &RawKvs) -> Vec<KvMismatch> {
    let actual: BTreeMap<String, String> = actual
        .iter()
        .map(|(k, v)| (k.to_ascii_lowercase(), v.to_ascii_lowercase()))
        .collect();
    expected
        .iter()
        .filter_map(|(key, value)| {
            let key = key.to_ascii_lowercase();
            let expected = value.to_ascii_lowercase();
            let found = actual.get(&key).cloned().unwrap_or_default();
            (found != expected).then(|| KvMismatch {
                key,
                expected,
                actual: found,
            })
        })
        .collect()
}
