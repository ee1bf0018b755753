//! Storage Vectors
//!
//! Mapper layouts and ESDT records as a node stores them.

use crate::test_utils::*;

fn u32_hex(v: u32) -> String {
    Encodable::u32(v).to_nest_hex()
}

fn info(count: u32, first: u32, last: u32, max: u32) -> String {
    [count, first, last, max].iter().map(|v| u32_hex(*v)).collect()
}

#[test]
fn test_set_mapper_chain() {
    let entries = [
        (3, Encodable::str("C")),
        (1, Encodable::str("A")),
        (4, Encodable::str("D")),
    ];
    let raw = to_raw_kvs(&set_mapper("set", &entries).unwrap());
    let links = |id: u32| raw[&format!("{}{}", key_hex("set.node_links"), u32_hex(id))].clone();

    assert_eq!(links(1), format!("{}{}", u32_hex(0), u32_hex(3)));
    assert_eq!(links(3), format!("{}{}", u32_hex(1), u32_hex(4)));
    assert_eq!(links(4), format!("{}{}", u32_hex(3), u32_hex(0)));
    assert_eq!(raw[&key_hex("set.info")], info(3, 1, 4, 4));
}

#[test]
fn test_set_mapper_after_removal() {
    let entries = [(1, Encodable::str("A")), (4, Encodable::str("D"))];
    let raw = to_raw_kvs(&set_mapper("set", &entries).unwrap());
    let links = |id: u32| raw[&format!("{}{}", key_hex("set.node_links"), u32_hex(id))].clone();

    assert_eq!(links(1), format!("{}{}", u32_hex(0), u32_hex(4)));
    assert_eq!(links(4), format!("{}{}", u32_hex(1), u32_hex(0)));
    assert_eq!(raw[&key_hex("set.info")], info(2, 1, 4, 4));
}

#[test]
fn test_empty_mappers() {
    let values: &[Encodable] = &[];
    let entries: &[(i64, Encodable)] = &[];
    let map: &[(i64, Encodable, Encodable)] = &[];
    assert!(set_mapper("s", entries).unwrap().is_empty());
    assert!(vec_mapper("v", values).unwrap().is_empty());
    assert!(map_mapper("m", map).unwrap().is_empty());
}

#[test]
fn test_vec_mapper_layout() {
    let raw = to_raw_kvs(&vec_mapper("list", &[Encodable::str("x")]).unwrap());
    assert_eq!(raw[&format!("{}00000001", key_hex("list.item"))], "78");
    assert_eq!(raw[&key_hex("list.len")], "01");
}

#[test]
fn test_single_value_mapper_compound_key() {
    let key = Encodable::tuple([Encodable::u8(1), Encodable::str("k")]);
    let kvs = single_value_mapper("owner", &[(key, Encodable::u64(9))]);
    assert_eq!(kvs[0].key_hex(), format!("{}01000000016b", key_hex("owner")));
    assert_eq!(kvs[0].value_hex(), "09");
}

#[test]
fn test_esdt_records() {
    let kvs = esdts_kvs(&[
        Esdt::new("WEGLD-abcdef").amount(1_000_000_000_000_000_000u64),
        Esdt::new("SFT-abcdef").nonce(1).amount(5u32).name("x").last_nonce(1),
    ]);
    assert_eq!(kvs[0].key_hex(), key_hex("ELRONDesdtWEGLD-abcdef"));
    assert_eq!(kvs[0].value_hex(), "1209000de0b6b3a7640000");
    assert_eq!(kvs[1].key_hex(), format!("{}01", key_hex("ELRONDesdtSFT-abcdef")));
    assert_eq!(kvs[1].value_hex(), "0801120200051a0101220508011201 78".replace(' ', ""));
    assert_eq!(kvs[2].key_hex(), key_hex("ELRONDnonceSFT-abcdef"));
    assert_eq!(kvs[2].value_hex(), "01");
}
