#![allow(clippy::unwrap_used, clippy::missing_docs_in_private_items)]

use std::collections::HashMap;

use chaintable::{HashTable, TableError, TableExtensions};
use proptest::{collection::vec, prelude::*};

/// Key/value pairs drawn from a small key alphabet so that repeats and collisions are common
fn entries() -> impl Strategy<Value = Vec<(String, String)>> {
    vec(("[a-e]{0,3}", ".{0,8}"), 0..64)
}

#[derive(Debug, Clone)]
enum Op {
    Insert(String, String),
    Remove(String),
    Resize,
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    vec(
        prop_oneof![
            4 => ("[a-f]{0,2}", "[a-z]{0,4}").prop_map(|(k, v)| Op::Insert(k, v)),
            2 => "[a-f]{0,2}".prop_map(Op::Remove),
            1 => Just(Op::Resize),
        ],
        0..128,
    )
}

proptest! {
    #[test]
    fn round_trip(capacity in 1usize..8, entries in entries()) {
        let mut table = HashTable::new(capacity).unwrap();
        let mut expected = HashMap::new();
        for (key, value) in &entries {
            table.insert(key.as_str(), value.as_str());
            expected.insert(key.clone(), value.clone());
        }

        prop_assert_eq!(table.len(), expected.len());
        for (key, value) in &expected {
            prop_assert_eq!(table.retrieve(key), Ok(value.as_str()));
        }
    }

    #[test]
    fn overwrite_keeps_one_entry(
        capacity in 1usize..8,
        entries in entries(),
        key in "[a-e]{0,3}",
        first in ".{0,8}",
        second in ".{0,8}"
    ) {
        let mut table: HashTable = HashTable::new(capacity).unwrap();
        table.extend(entries);
        table.insert(key.as_str(), first.as_str());
        let len = table.len();

        prop_assert_eq!(table.insert(key.as_str(), second.as_str()), Some(first));
        prop_assert_eq!(table.len(), len);
        prop_assert_eq!(table.retrieve(&key), Ok(second.as_str()));
        prop_assert_eq!(table.keys().iter().filter(|k| **k == key).count(), 1);
    }

    #[test]
    fn removal_leaves_others_intact(capacity in 1usize..8, entries in entries(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!entries.is_empty());
        let mut table = HashTable::new(capacity).unwrap();
        let mut expected = HashMap::new();
        for (key, value) in &entries {
            table.insert(key.as_str(), value.as_str());
            expected.insert(key.clone(), value.clone());
        }

        let (victim, _) = pick.get(&entries);
        let value = expected.remove(victim).unwrap();
        prop_assert_eq!(table.remove(victim), Ok(value));
        prop_assert_eq!(table.retrieve(victim), Err(TableError::KeyNotFound(victim.clone())));
        prop_assert_eq!(table.remove(victim), Err(TableError::KeyNotFound(victim.clone())));
        prop_assert_eq!(table.len(), expected.len());
        for (key, value) in &expected {
            prop_assert_eq!(table.retrieve(key), Ok(value.as_str()));
        }
    }

    #[test]
    fn resize_preserves_contents(capacity in 1usize..16, entries in entries()) {
        let mut table = HashTable::new(capacity).unwrap();
        table.extend(entries);
        let before = table.clone();

        let resized = table.resize();
        prop_assert_eq!(resized.capacity(), capacity * 2);
        prop_assert_eq!(resized.len(), before.len());
        for (key, value) in &before {
            prop_assert_eq!(resized.retrieve(key), Ok(value));
        }
        prop_assert_eq!(resized.chain_lengths().sum::<usize>(), resized.len());
    }

    #[test]
    fn agrees_with_std_hash_map(capacity in 1usize..4, ops in ops()) {
        let mut table = HashTable::new(capacity).unwrap();
        let mut model: HashMap<String, String> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    prop_assert_eq!(
                        table.insert(key.as_str(), value.as_str()),
                        model.insert(key, value)
                    );
                }
                Op::Remove(key) => {
                    prop_assert_eq!(
                        table.remove(&key).ok(),
                        model.remove(&key)
                    );
                }
                Op::Resize => {
                    let capacity = table.capacity();
                    table = table.resize();
                    prop_assert_eq!(table.capacity(), capacity * 2);
                }
            }
            prop_assert_eq!(table.len(), model.len());
        }

        for (key, value) in &model {
            prop_assert_eq!(table.get(key), Some(value.as_str()));
        }
        table.destroy();
    }
}
