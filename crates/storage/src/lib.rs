//! Expected contract storage for xsuite
//!
//! This crate computes, byte for byte, the account-storage pairs a contract
//! would hold, so tests can diff them against what a node reports:
//! - Kv / RawKvs: raw pairs and their hex-map form
//! - mapper: single value, vec, unordered set, set and map layouts
//! - esdt: token balance, nonce and role records
//! - missing_kvs: expected-vs-actual comparison
//!
//! Every function is pure and recomputes its output from the snapshot it
//! is given.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod esdt;
pub mod kvs;
pub mod mapper;

pub use esdt::{esdt_kvs, esdts_kvs, Esdt, EsdtMetadata, EsdtRecord, EsdtRole, EsdtRoles};
pub use kvs::{from_raw_kvs, missing_kvs, to_raw_kvs, Kv, KvMismatch, RawKvs};
pub use mapper::{
    map_mapper, set_mapper, set_mapper_with_max_id, single_value_mapper, unordered_set_mapper,
    value_mapper, vec_mapper, BaseKey,
};
