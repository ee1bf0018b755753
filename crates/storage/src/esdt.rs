//! ESDT token storage records
//!
//! The protocol keeps token state in three kinds of account-storage entries:
//!
//! | Key                                        | Value                          |
//! |--------------------------------------------|--------------------------------|
//! | `"ELRONDesdt" + id` ++ top(u64 nonce)      | protobuf `ESDigitalToken`      |
//! | `"ELRONDnonce" + id`                       | top(last created nonce)        |
//! | `"ELRONDroleesdt" + id`                    | protobuf `ESDTRoles`           |
//!
//! The nonce suffix is omitted for fungible tokens (nonce 0). Protobuf fields
//! are proto2 `optional`, so an explicitly set zero is still written.

use crate::kvs::Kv;
use num_bigint::BigUint;
use prost::Message;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use xsuite_codec::{Encodable, Encode};
use xsuite_core::Address;

const ESDT_KEY_PREFIX: &str = "ELRONDesdt";
const NONCE_KEY_PREFIX: &str = "ELRONDnonce";
const ROLES_KEY_PREFIX: &str = "ELRONDroleesdt";

// ============================================================================
// Wire messages
// ============================================================================

/// Token balance record stored under the `ELRONDesdt` key
#[derive(Clone, PartialEq, Message)]
pub struct EsdtRecord {
    /// 1 for a non-fungible or semi-fungible instance
    #[prost(uint64, optional, tag = "1")]
    pub r#type: Option<u64>,
    /// Big-endian amount with a leading zero byte
    #[prost(bytes = "vec", optional, tag = "2")]
    pub value: Option<Vec<u8>>,
    /// Token instance properties
    #[prost(bytes = "vec", optional, tag = "3")]
    pub properties: Option<Vec<u8>>,
    /// Instance metadata
    #[prost(message, optional, tag = "4")]
    pub metadata: Option<EsdtMetadata>,
    /// Reserved by the protocol
    #[prost(bytes = "vec", optional, tag = "5")]
    pub reserved: Option<Vec<u8>>,
}

/// Metadata of one token instance
#[derive(Clone, PartialEq, Message)]
pub struct EsdtMetadata {
    /// Instance nonce
    #[prost(uint64, optional, tag = "1")]
    pub nonce: Option<u64>,
    /// Display name
    #[prost(bytes = "vec", optional, tag = "2")]
    pub name: Option<Vec<u8>>,
    /// Creator address bytes
    #[prost(bytes = "vec", optional, tag = "3")]
    pub creator: Option<Vec<u8>>,
    /// Royalties in basis points
    #[prost(uint64, optional, tag = "4")]
    pub royalties: Option<u64>,
    /// Content hash
    #[prost(bytes = "vec", optional, tag = "5")]
    pub hash: Option<Vec<u8>>,
    /// Content URIs
    #[prost(string, repeated, tag = "6")]
    pub uris: Vec<String>,
    /// Free-form attributes
    #[prost(bytes = "vec", optional, tag = "7")]
    pub attributes: Option<Vec<u8>>,
}

/// Role grants stored under the `ELRONDroleesdt` key
#[derive(Clone, PartialEq, Message)]
pub struct EsdtRoles {
    /// Role names
    #[prost(string, repeated, tag = "1")]
    pub roles: Vec<String>,
}

// ============================================================================
// Roles
// ============================================================================

/// Special role an account can hold for a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EsdtRole {
    /// Mint fungible units locally
    #[serde(rename = "ESDTRoleLocalMint")]
    LocalMint,
    /// Burn fungible units locally
    #[serde(rename = "ESDTRoleLocalBurn")]
    LocalBurn,
    /// Transfer when transfers are restricted
    #[serde(rename = "ESDTTransferRole")]
    Transfer,
    /// Create new instances
    #[serde(rename = "ESDTRoleNFTCreate")]
    NftCreate,
    /// Burn instances
    #[serde(rename = "ESDTRoleNFTBurn")]
    NftBurn,
    /// Update instance attributes
    #[serde(rename = "ESDTRoleNFTUpdateAttributes")]
    NftUpdateAttributes,
    /// Add URIs to an instance
    #[serde(rename = "ESDTRoleNFTAddURI")]
    NftAddUri,
    /// Add quantity to an instance
    #[serde(rename = "ESDTRoleNFTAddQuantity")]
    NftAddQuantity,
}

impl EsdtRole {
    /// Role name as stored on chain
    pub fn as_str(&self) -> &'static str {
        match self {
            EsdtRole::LocalMint => "ESDTRoleLocalMint",
            EsdtRole::LocalBurn => "ESDTRoleLocalBurn",
            EsdtRole::Transfer => "ESDTTransferRole",
            EsdtRole::NftCreate => "ESDTRoleNFTCreate",
            EsdtRole::NftBurn => "ESDTRoleNFTBurn",
            EsdtRole::NftUpdateAttributes => "ESDTRoleNFTUpdateAttributes",
            EsdtRole::NftAddUri => "ESDTRoleNFTAddURI",
            EsdtRole::NftAddQuantity => "ESDTRoleNFTAddQuantity",
        }
    }
}

impl fmt::Display for EsdtRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Token description
// ============================================================================

/// Expected token state of one account
///
/// Only the fields that are set contribute pairs. A token with neither an
/// amount nor any metadata produces no balance record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Esdt {
    /// Token identifier, e.g. `TOKEN-abcdef`
    pub id: String,
    /// Instance nonce; 0 for fungible tokens
    pub nonce: u64,
    /// Balance
    pub amount: Option<BigUint>,
    /// Granted roles
    pub roles: Option<Vec<EsdtRole>>,
    /// Last created nonce
    pub last_nonce: Option<u64>,
    /// Instance name
    pub name: Option<String>,
    /// Instance creator
    pub creator: Option<Address>,
    /// Royalties in basis points
    pub royalties: Option<u64>,
    /// Content hash
    pub hash: Option<Vec<u8>>,
    /// Content URIs
    pub uris: Option<Vec<String>>,
    /// Attributes
    pub attrs: Option<Vec<u8>>,
}

impl Esdt {
    /// Token `id` with nothing set
    pub fn new(id: impl Into<String>) -> Self {
        Esdt {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the instance nonce
    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    /// Set the balance
    pub fn amount(mut self, amount: impl Into<BigUint>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Set the granted roles
    pub fn roles(mut self, roles: impl IntoIterator<Item = EsdtRole>) -> Self {
        self.roles = Some(roles.into_iter().collect());
        self
    }

    /// Set the last created nonce
    pub fn last_nonce(mut self, last_nonce: u64) -> Self {
        self.last_nonce = Some(last_nonce);
        self
    }

    /// Set the instance name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the instance creator
    pub fn creator(mut self, creator: Address) -> Self {
        self.creator = Some(creator);
        self
    }

    /// Set the royalties
    pub fn royalties(mut self, royalties: u64) -> Self {
        self.royalties = Some(royalties);
        self
    }

    /// Set the content hash
    pub fn hash(mut self, hash: impl Into<Vec<u8>>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Set the content URIs
    pub fn uris<S: Into<String>>(mut self, uris: impl IntoIterator<Item = S>) -> Self {
        self.uris = Some(uris.into_iter().map(Into::into).collect());
        self
    }

    /// Set the attributes
    pub fn attrs(mut self, attrs: impl Into<Vec<u8>>) -> Self {
        self.attrs = Some(attrs.into());
        self
    }

    fn has_metadata(&self) -> bool {
        self.name.is_some()
            || self.creator.is_some()
            || self.royalties.is_some()
            || self.hash.is_some()
            || self.uris.is_some()
            || self.attrs.is_some()
    }

    fn metadata(&self) -> EsdtMetadata {
        EsdtMetadata {
            nonce: (self.nonce != 0).then_some(self.nonce),
            name: self.name.as_ref().map(|n| n.as_bytes().to_vec()),
            creator: self.creator.map(|c| c.as_bytes().to_vec()),
            royalties: self.royalties,
            hash: self.hash.clone(),
            uris: self.uris.clone().unwrap_or_default(),
            attributes: self.attrs.clone(),
        }
    }

    /// Balance record, or `None` when neither amount nor metadata is set
    pub fn record(&self) -> Option<EsdtRecord> {
        let has_metadata = self.has_metadata();
        if self.amount.is_none() && !has_metadata {
            return None;
        }
        let amount = self.amount.clone().unwrap_or_default();
        let has_amount = amount != BigUint::default();

        let mut record = EsdtRecord::default();
        if self.nonce != 0 && (has_amount || has_metadata) {
            record.r#type = Some(1);
        }
        if has_metadata {
            record.properties = Some(vec![1]);
        }
        if has_metadata || has_amount {
            let mut value = vec![0];
            if has_amount {
                value.extend(Encodable::u(amount).to_top_bytes());
            } else {
                value.push(0);
            }
            record.value = Some(value);
        }
        if has_metadata {
            record.metadata = Some(self.metadata());
        }
        Some(record)
    }

    /// Key of the balance record
    pub fn record_key(&self) -> Vec<u8> {
        let mut key = format!("{}{}", ESDT_KEY_PREFIX, self.id).into_bytes();
        if self.nonce != 0 {
            key.extend(Encodable::u64(self.nonce).to_top_bytes());
        }
        key
    }
}

/// Storage pairs for one token
pub fn esdt_kvs(esdt: &Esdt) -> Vec<Kv> {
    let mut kvs = Vec::new();
    if let Some(record) = esdt.record() {
        kvs.push(Kv::new(esdt.record_key(), record.encode_to_vec()));
    }
    if let Some(last_nonce) = esdt.last_nonce {
        kvs.push(Kv::new(
            format!("{}{}", NONCE_KEY_PREFIX, esdt.id).into_bytes(),
            Encodable::u(last_nonce).to_top_bytes(),
        ));
    }
    if let Some(roles) = &esdt.roles {
        let message = EsdtRoles {
            roles: roles.iter().map(|r| r.as_str().to_string()).collect(),
        };
        kvs.push(Kv::new(
            format!("{}{}", ROLES_KEY_PREFIX, esdt.id).into_bytes(),
            message.encode_to_vec(),
        ));
    }
    debug!(target: "xsuite::storage", id = %esdt.id, nonce = esdt.nonce, pairs = kvs.len(), "ESDT");
    kvs
}

/// Storage pairs for several tokens, in order
pub fn esdts_kvs(esdts: &[Esdt]) -> Vec<Kv> {
    esdts.iter().flat_map(esdt_kvs).collect()
}
