//! Storage mapper layouts
//!
//! Each function takes a base key and a snapshot of a logical collection and
//! returns the raw pairs the contract's storage mapper would persist for it.
//! Nothing is cached: every call recomputes the full pair set from the
//! snapshot it is given.
//!
//! ## Key Layout
//!
//! A sub-key is the base key bytes, then a UTF-8 suffix such as `.item`,
//! then the nest-encoding of an optional key part:
//!
//! ```text
//! "balances" ++ ".item" ++ nest(u32 i)
//! ```
//!
//! | Mapper       | Pairs                                                        |
//! |--------------|--------------------------------------------------------------|
//! | SingleValue  | `base ++ nest(k)` → top(v)                                   |
//! | Vec          | `.item ++ nest(u32 i)` → top(v), `.len` → top(u32 n)         |
//! | UnorderedSet | Vec pairs, plus `.index ++ nest(v)` → top(u32 i)             |
//! | Set          | `.info`, `.node_id`, `.value`, `.node_links` (see below)     |
//! | Map          | Set over the keys, plus `.mapped ++ nest(k)` → top(v)        |
//!
//! Indexes are 1-based. An empty collection produces no pairs at all, not
//! even a `.len` or `.info` pair.
//!
//! ## Set Layout
//!
//! A set is a doubly linked list of nodes ordered by ascending id, the order
//! a contract iterates it in regardless of insertion order. Id `0` is the
//! "no neighbour" sentinel.
//!
//! ```text
//! .info            → (count, first id, last id, max id)
//! .node_id ++ v    → id
//! .value ++ id     → v
//! .node_links ++ id → (prev id, next id)
//! ```
//!
//! The max id is the largest id ever handed out, which survives removals.
//! A snapshot only knows the ids present now; callers that removed the
//! largest id pass the true maximum to [`set_mapper_with_max_id`].

use crate::kvs::Kv;
use std::fmt;
use tracing::debug;
use xsuite_codec::{Encodable, Encode};
use xsuite_core::{Error, Result};

/// Storage key prefix of one mapper
///
/// Usually just the mapper's name. Mappers declared with arguments append
/// the nest-encoding of each argument to the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseKey(Vec<u8>);

impl BaseKey {
    /// Base key for a mapper named `name`
    pub fn new(name: &str) -> Self {
        BaseKey(name.as_bytes().to_vec())
    }

    /// Append a mapper argument
    pub fn arg(mut self, arg: &impl Encode) -> Self {
        self.0.extend(arg.to_nest_bytes());
        self
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    fn sub_key(&self, suffix: &str) -> Vec<u8> {
        let mut key = self.0.clone();
        key.extend_from_slice(suffix.as_bytes());
        key
    }

    fn sub_key_with(&self, suffix: &str, part: &impl Encode) -> Vec<u8> {
        let mut key = self.sub_key(suffix);
        key.extend(part.to_nest_bytes());
        key
    }
}

impl From<&str> for BaseKey {
    fn from(name: &str) -> Self {
        BaseKey::new(name)
    }
}

impl From<String> for BaseKey {
    fn from(name: String) -> Self {
        BaseKey(name.into_bytes())
    }
}

impl fmt::Display for BaseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

// ============================================================================
// Flat mappers
// ============================================================================

/// A single stored value under exactly the base key
pub fn value_mapper(base_key: impl Into<BaseKey>, value: &impl Encode) -> Vec<Kv> {
    let base_key = base_key.into();
    debug!(target: "xsuite::storage", base_key = %base_key, pairs = 1, "Value mapper");
    vec![Kv::new(base_key.as_bytes(), value.to_top_bytes())]
}

/// One pair per entry: `base ++ nest(key)` → top(value)
///
/// Keys may be any encodable, including tuples for compound keys.
pub fn single_value_mapper<K, V>(base_key: impl Into<BaseKey>, entries: &[(K, V)]) -> Vec<Kv>
where
    K: Encode,
    V: Encode,
{
    let base_key = base_key.into();
    let kvs: Vec<Kv> = entries
        .iter()
        .map(|(k, v)| Kv::new(base_key.sub_key_with("", k), v.to_top_bytes()))
        .collect();
    debug!(target: "xsuite::storage", base_key = %base_key, pairs = kvs.len(), "Single value mapper");
    kvs
}

/// Items under `.item` at 1-based indexes, plus the `.len` pair
pub fn vec_mapper<V: Encode>(base_key: impl Into<BaseKey>, items: &[V]) -> Result<Vec<Kv>> {
    let base_key = base_key.into();
    let kvs = vec_kvs(&base_key, items)?;
    debug!(target: "xsuite::storage", base_key = %base_key, pairs = kvs.len(), "Vec mapper");
    Ok(kvs)
}

/// Vec layout plus a reverse `.index` lookup from value to index
pub fn unordered_set_mapper<V: Encode>(
    base_key: impl Into<BaseKey>,
    items: &[V],
) -> Result<Vec<Kv>> {
    let base_key = base_key.into();
    let mut kvs = vec_kvs(&base_key, items)?;
    for (i, item) in items.iter().enumerate() {
        kvs.push(Kv::new(
            base_key.sub_key_with(".index", item),
            index(i + 1)?.to_top_bytes(),
        ));
    }
    debug!(target: "xsuite::storage", base_key = %base_key, pairs = kvs.len(), "Unordered set mapper");
    Ok(kvs)
}

fn vec_kvs<V: Encode>(base_key: &BaseKey, items: &[V]) -> Result<Vec<Kv>> {
    if items.is_empty() {
        return Ok(Vec::new());
    }
    let mut kvs = Vec::with_capacity(items.len() + 1);
    for (i, item) in items.iter().enumerate() {
        kvs.push(Kv::new(
            base_key.sub_key_with(".item", &index(i + 1)?),
            item.to_top_bytes(),
        ));
    }
    kvs.push(Kv::new(
        base_key.sub_key(".len"),
        index(items.len())?.to_top_bytes(),
    ));
    Ok(kvs)
}

fn index(i: usize) -> Result<Encodable> {
    u32::try_from(i)
        .map(Encodable::u32)
        .map_err(|_| Error::ValueOutOfRange {
            value: i.to_string(),
            width: 4,
        })
}

// ============================================================================
// Linked mappers
// ============================================================================

/// Set of `(id, value)` entries
///
/// Entries may come in any order. Fails with `NonPositiveId` for an id of
/// zero or below, `DuplicateId` when an id repeats, and `ValueOutOfRange`
/// for an id that does not fit in a u32.
pub fn set_mapper<V: Encode>(base_key: impl Into<BaseKey>, entries: &[(i64, V)]) -> Result<Vec<Kv>> {
    set_mapper_with_max_id(base_key, entries, 0)
}

/// Set of `(id, value)` entries with a caller-tracked maximum id
///
/// The emitted max id is the larger of `max_id` and the largest id present.
pub fn set_mapper_with_max_id<V: Encode>(
    base_key: impl Into<BaseKey>,
    entries: &[(i64, V)],
    max_id: u32,
) -> Result<Vec<Kv>> {
    let base_key = base_key.into();
    let nodes = sorted_nodes(entries.iter().map(|(id, v)| (*id, v)))?;
    let kvs = set_kvs(&base_key, &nodes, max_id);
    debug!(target: "xsuite::storage", base_key = %base_key, pairs = kvs.len(), "Set mapper");
    Ok(kvs)
}

/// Map of `(id, key, value)` entries
///
/// The keys form a set under the base key, so ids follow the same rules as
/// [`set_mapper`]; each value is stored under `.mapped ++ nest(key)`.
pub fn map_mapper<K, V>(base_key: impl Into<BaseKey>, entries: &[(i64, K, V)]) -> Result<Vec<Kv>>
where
    K: Encode,
    V: Encode,
{
    let base_key = base_key.into();
    let nodes = sorted_nodes(entries.iter().map(|(id, k, _)| (*id, k)))?;
    let mut kvs = set_kvs(&base_key, &nodes, 0);
    for (_, k, v) in entries {
        kvs.push(Kv::new(base_key.sub_key_with(".mapped", k), v.to_top_bytes()));
    }
    debug!(target: "xsuite::storage", base_key = %base_key, pairs = kvs.len(), "Map mapper");
    Ok(kvs)
}

/// Validate ids and order entries by ascending id
fn sorted_nodes<'a, V: 'a>(
    entries: impl Iterator<Item = (i64, &'a V)>,
) -> Result<Vec<(u32, &'a V)>> {
    let mut nodes = entries
        .map(|(id, v)| Ok((node_id(id)?, v)))
        .collect::<Result<Vec<_>>>()?;
    nodes.sort_by_key(|(id, _)| *id);
    if let Some(pair) = nodes.windows(2).find(|pair| pair[0].0 == pair[1].0) {
        return Err(Error::DuplicateId(i64::from(pair[0].0)));
    }
    Ok(nodes)
}

fn node_id(id: i64) -> Result<u32> {
    if id <= 0 {
        return Err(Error::NonPositiveId(id));
    }
    u32::try_from(id).map_err(|_| Error::ValueOutOfRange {
        value: id.to_string(),
        width: 4,
    })
}

fn set_kvs<V: Encode>(base_key: &BaseKey, nodes: &[(u32, &V)], max_id: u32) -> Vec<Kv> {
    let (first, last) = match (nodes.first(), nodes.last()) {
        (Some(first), Some(last)) => (first.0, last.0),
        _ => return Vec::new(),
    };
    // ids are unique u32 values, so the count fits as well
    let count = nodes.len() as u32;
    let max_id = max_id.max(last);

    let info = Encodable::tuple([
        Encodable::u32(count),
        Encodable::u32(first),
        Encodable::u32(last),
        Encodable::u32(max_id),
    ]);

    let mut node_ids = Vec::with_capacity(nodes.len());
    let mut values = Vec::with_capacity(nodes.len());
    let mut links = Vec::with_capacity(nodes.len());
    for (i, (id, value)) in nodes.iter().enumerate() {
        let prev = if i == 0 { 0 } else { nodes[i - 1].0 };
        let next = nodes.get(i + 1).map_or(0, |n| n.0);
        let id = Encodable::u32(*id);
        node_ids.push(Kv::new(
            base_key.sub_key_with(".node_id", *value),
            id.to_top_bytes(),
        ));
        values.push(Kv::new(
            base_key.sub_key_with(".value", &id),
            value.to_top_bytes(),
        ));
        links.push(Kv::new(
            base_key.sub_key_with(".node_links", &id),
            Encodable::tuple([Encodable::u32(prev), Encodable::u32(next)]).to_top_bytes(),
        ));
    }

    let mut kvs = Vec::with_capacity(1 + 3 * nodes.len());
    kvs.push(Kv::new(base_key.sub_key(".info"), info.to_top_bytes()));
    kvs.extend(node_ids);
    kvs.extend(values);
    kvs.extend(links);
    kvs
}
