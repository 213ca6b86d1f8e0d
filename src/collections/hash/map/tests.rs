#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::collections::error::NotFound;
use crate::expected::Expected;
use crate::str::Str;
use crate::util::alloc::DropTally;
use crate::util::hash::{FixedHash, PassThroughBuilder};

#[test]
fn test_set_and_get() {
    let mut map = HashMap::<u32, &str>::new();
    assert_eq!(map.bucket_count(), DEFAULT_BUCKETS);

    assert_eq!(map.set(1, "one"), None);
    assert_eq!(map.set(2, "two"), None);
    assert_eq!(map.get(&1), Expected::Ok(&"one"));
    assert_eq!(map.get(&2), Expected::Ok(&"two"));
    assert_eq!(map.get(&3), Expected::Err(NotFound), "Missing keys shouldn't be found.");

    assert_eq!(map.set(1, "uno"), Some("one"), "Overwriting should return the old value.");
    assert_eq!(map.len(), 2, "Overwriting shouldn't change the length.");
    assert_eq!(map.get(&1), Expected::Ok(&"uno"));

    *map.get_mut(&2).throw() = "dos";
    assert_eq!(map.get_entry(&2), Expected::Ok((&2, &"dos")));
    assert!(map.contains(&2));
    assert!(!map.contains(&4));
}

#[test]
fn test_delete() {
    let mut map = HashMap::<String, i32>::new();
    map.set("a".into(), 1);
    map.set("b".into(), 2);
    map.set("c".into(), 3);

    assert_eq!(map.delete("b"), Expected::Ok(2));
    assert_eq!(map.len(), 2);
    assert!(map.get("b").is_err(), "A deleted key shouldn't be found.");
    assert_eq!(map.get("a"), Expected::Ok(&1));
    assert_eq!(map.get("c"), Expected::Ok(&3));

    assert_eq!(map.delete("b"), Expected::Err(NotFound));
    assert_eq!(map.delete("z"), Expected::Err(NotFound));
    assert_eq!(map.len(), 2, "Deleting a missing key shouldn't change the length.");

    assert_eq!(map.delete_entry("a"), Expected::Ok((String::from("a"), 1)));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_rehash() {
    let mut map = HashMap::<u32, u32>::new();
    for i in 0..6 {
        map.set(i, i * 10);
    }
    assert_eq!(map.bucket_count(), 8, "A load factor of exactly 3/4 shouldn't rehash.");

    map.set(6, 60);
    assert_eq!(map.bucket_count(), 16, "Exceeding the load factor should double the buckets.");
    assert_eq!(map.len(), 7);
    for i in 0..7 {
        assert_eq!(map.get(&i), Expected::Ok(&(i * 10)), "Every entry should survive a rehash.");
    }

    for i in 7..100 {
        map.set(i, i * 10);
    }
    assert_eq!(map.bucket_count(), 256);
    assert!(map.len() * 4 <= map.bucket_count() * 3);
}

#[test]
fn test_hash_collisions() {
    let mut map = HashMap::with_hasher(PassThroughBuilder);
    map.set(FixedHash::new(0, "zero"), 0);
    map.set(FixedHash::new(8, "eight"), 8);
    map.set(FixedHash::new(1, "one"), 1);
    map.set(FixedHash::new(16, "sixteen"), 16);

    assert_eq!(
        *map.iter().map(|(k, _)| k.clone().value()).collect::<Vector<_>>(),
        ["sixteen", "eight", "zero", "one"],
        "Colliding entries should be chained from the most recent."
    );

    assert_eq!(map.delete(&FixedHash::new(8, "eight")), Expected::Ok(8));
    assert_eq!(
        map.delete(&FixedHash::new(0, "eight")), Expected::Err(NotFound),
        "Keys should only be found in the bucket for their hash."
    );
    assert_eq!(map.get(&FixedHash::new(0, "zero")), Expected::Ok(&0));
    assert_eq!(
        map.get(&FixedHash::new(16, "sixteen")), Expected::Ok(&16),
        "Unlinking from the middle of a chain shouldn't lose the rest of it."
    );
    assert_eq!(map.len(), 3);
}

#[test]
fn test_clear_and_free() {
    let mut map: HashMap<u32, u32> = (0..20).map(|i| (i, i)).collect();
    assert_eq!(map.bucket_count(), 32);

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.bucket_count(), DEFAULT_BUCKETS, "Clearing should restore the default buckets.");
    assert!(map.get(&3).is_err());

    map.set(1, 1);
    map.free();
    assert_eq!(map.bucket_count(), 0);
    assert!(map.get(&1).is_err(), "A freed map should find nothing.");
    assert!(map.delete(&1).is_err());
    assert_eq!(map.iter().count(), 0);

    map.free();
    map.set(2, 2);
    assert_eq!(map.bucket_count(), DEFAULT_BUCKETS, "A freed map should be reusable.");
    assert_eq!(map.get(&2), Expected::Ok(&2));
}

#[test]
fn test_iterators() {
    let mut map: HashMap<u32, u32> = (0..10).map(|i| (i, i * 2)).collect();

    assert_eq!(map.iter().len(), 10);
    assert_eq!(map.keys().sum::<u32>(), 45);
    assert_eq!(map.values().sum::<u32>(), 90);

    for value in map.values_mut() {
        *value += 1;
    }
    let mut total = 0;
    map.foreach(|_, v| total += v);
    assert_eq!(total, 100, "Every entry should be visited exactly once.");

    assert_eq!(map.keys().len(), 10);
    assert_eq!(map.values().len(), 10);
    assert_eq!(map.values_mut().len(), 10);

    let mut values = map.values();
    values.by_ref().for_each(drop);
    assert_eq!(values.len(), 0);
    assert!(values.next().is_none(), "Exhausted iterators should stay exhausted.");

    let into_keys = map.clone().into_keys();
    assert_eq!(into_keys.len(), 10);
    assert_eq!(map.clone().into_values().len(), 10);
    drop(into_keys);

    let mut keys = map.clone().into_keys().collect::<Vector<_>>();
    keys.sort();
    assert_eq!(&*keys, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(map.into_values().count(), 10);
}

#[test]
fn test_drop() {
    let tally = DropTally::new();
    let mut map = HashMap::<u32, DropTally>::new();
    for i in 0..10 {
        map.set(i, tally.clone());
    }

    map.set(0, tally.clone());
    assert_eq!(tally.drops(), 1, "Replaced values should be dropped by the caller.");

    drop(map.delete(&1));
    assert_eq!(tally.drops(), 2);

    let mut iter = map.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(tally.drops(), 11, "Every value should be dropped exactly once.");
}

#[test]
fn test_long_chain_drop() {
    let mut map = HashMap::with_hasher(PassThroughBuilder);
    for i in 0..100_000 {
        // SAFETY: The map has its default buckets and PassThroughBuilder hashes FixedHash to 0.
        unsafe { map.prepend(0, FixedHash::new(0, i), ()) };
    }
    assert_eq!(map.len(), 100_000);
    // Would overflow the stack if chains were dropped recursively.
    drop(map);
}

#[test]
fn test_equality() {
    let map: HashMap<&str, u8> = [("a", 1), ("b", 2)].into_iter().collect();
    let mut other = map.clone();
    assert_eq!(map, other);

    other.set("b", 3);
    assert_ne!(map, other);
    other.delete("b").throw();
    assert_ne!(map, other, "Maps of different lengths should be unequal.");
}

#[test]
fn test_blob() {
    let mut map: BlobMap = BlobMap::new();
    let key = String::from("payload");

    assert_eq!(map.set_blob(&Str::from_ref(&key), &[1, 2, 3]), None);
    drop(key);

    assert_eq!(map.get_blob(&Str::lit("payload")), Expected::Ok(&[1_u8, 2, 3][..]));
    assert!(map.get_blob(&Str::lit("other")).is_err());

    let old = map.set_blob(&Str::lit("payload"), &[4]);
    assert_eq!(old.as_deref(), Some(&[1_u8, 2, 3][..]));
    assert_eq!(map.len(), 1);

    assert_eq!(map.delete_blob(&Str::lit("payload")).into_ok().as_deref(), Some(&[4_u8][..]));
    assert!(map.is_empty());
}
