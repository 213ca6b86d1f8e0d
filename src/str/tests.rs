#![cfg(test)]

use std::cmp::Ordering;
use std::hash::BuildHasher;

use super::*;
use crate::collections::hash::{Fnv1aBuildHasher, HashMap, fnv1a};
use crate::expected::Expected;

#[test]
fn test_variants() {
    let literal = Str::lit("abc");
    let text = String::from("abc");
    let borrowed = Str::from_ref(&text);
    let owned = Str::own(String::from("abc"));

    assert!(literal.is_literal());
    assert!(!borrowed.is_literal() && !borrowed.is_owned());
    assert!(owned.is_owned());

    assert_eq!(literal, borrowed, "Equality should only consider the bytes.");
    assert_eq!(borrowed, owned);
    assert_eq!(owned.len(), 3);
    assert!(Str::empty().is_empty());
}

#[test]
fn test_copies() {
    let text = String::from("borrowed");
    let copy = Str::from_ref(&text).dup();
    drop(text);
    assert!(copy.is_owned());
    assert_eq!(copy.to_str(), Ok("borrowed"), "A copy should outlive the original bytes.");

    assert!(Str::lit("x").into_owned().is_literal(), "Literals don't need to be copied.");
    assert!(Str::from_bytes(b"y").into_owned().is_owned());
}

#[test]
fn test_join_and_format() {
    let joined = Str::from_ref("left").join(&Str::lit("-right"));
    assert_eq!(joined, Str::lit("left-right"));

    let twelve = Str::format(format_args!("twelve{{{}}}", 12));
    assert_eq!(twelve, Str::lit("twelve{12}"));
    assert_eq!(Str::format(format_args!("plain")), Str::lit("plain"));

    assert!(Str::empty().join(&Str::empty()).is_empty());
}

#[test]
fn test_ordering() {
    assert!(Str::lit("abc") < Str::lit("abd"));
    assert!(Str::lit("ab") < Str::lit("abc"), "A prefix should sort first.");
    assert_eq!(Str::lit("b").cmp(&Str::own("b".into())), Ordering::Equal);
}

#[test]
fn test_hash_is_fnv1a() {
    let hash = Fnv1aBuildHasher.hash_one(Str::lit("hello"));
    assert_eq!(
        hash, fnv1a(b"hello") as u64,
        "Hashing should write exactly the bytes of the Str."
    );
    assert_eq!(
        Fnv1aBuildHasher.hash_one(Str::own("hello".into())), hash,
        "The variant shouldn't affect the hash."
    );
}

#[test]
fn test_composite_keys() {
    let first = (Str::lit("ab"), Str::lit("c"));
    let second = (Str::lit("a"), Str::lit("bc"));
    assert_eq!(
        Fnv1aBuildHasher.hash_one(&first), Fnv1aBuildHasher.hash_one(&second),
        "Concatenated Strs should hash the same, without a separator."
    );

    let mut map: HashMap<_, _, Fnv1aBuildHasher> = HashMap::new();
    map.set(first.clone(), 1);
    map.set(second.clone(), 2);
    assert_eq!(map.len(), 2, "Equal hashes shouldn't merge unequal keys.");
    assert_eq!(map.get(&first), Expected::Ok(&1));
    assert_eq!(map.get(&second), Expected::Ok(&2));
}

#[test]
fn test_invalid_utf8() {
    let bytes = Str::from_bytes(b"ok\xFFok");
    assert!(bytes.to_str().is_err());
    assert_eq!(bytes.to_string(), "ok\u{FFFD}ok", "Display should be lossy.");
    assert_eq!(format!("{:?}", Str::lit("hi")), "Literal(\"hi\")");
}
