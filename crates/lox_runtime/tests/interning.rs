mod common;

use lox_runtime::{Value, fnv1a};
use proptest::prelude::*;

#[test]
fn copy_string_twice_returns_the_same_object() {
    let mut rt = common::runtime();
    let a = rt.copy_string(b"hello");
    let b = rt.copy_string(b"hello");
    assert_eq!(a, b);
    assert_eq!(rt.heap().len(), 1);
    assert_eq!(rt.strings().len(), 1);
}

#[test]
fn take_and_copy_agree() {
    let mut rt = common::runtime();
    let taken = rt.take_string(b"lox".to_vec());
    let copied = rt.copy_string(b"lox");
    let taken_again = rt.take_string(vec![b'l', b'o', b'x']);
    assert_eq!(taken, copied);
    assert_eq!(taken, taken_again);
    assert_eq!(rt.heap().len(), 1);
}

#[test]
fn take_string_hit_allocates_nothing() {
    let mut rt = common::runtime();
    let original = rt.copy_string(b"redundant");
    let count = rt.heap().alloc_count();
    let bytes = rt.heap().alloc_bytes();

    let again = rt.take_string(b"redundant".to_vec());

    assert_eq!(again, original);
    assert_eq!(rt.heap().alloc_count(), count);
    assert_eq!(rt.heap().alloc_bytes(), bytes);
}

#[test]
fn distinct_content_gets_distinct_objects() {
    let mut rt = common::runtime();
    let a = rt.copy_string(b"a");
    let b = rt.copy_string(b"b");
    let empty = rt.copy_string(b"");
    let empty_again = rt.take_string(Vec::new());
    assert_ne!(a, b);
    assert_ne!(a, empty);
    assert_eq!(empty, empty_again);
    assert_eq!(rt.heap().len(), 3);
}

#[test]
fn hash_is_fixed_for_both_constructors() {
    let mut rt = common::runtime();
    let copied = Value::obj(rt.copy_string(b"lox"));
    assert_eq!(rt.as_string(copied).unwrap().hash(), 1_213_292_412);

    let mut other = common::runtime();
    let taken = Value::obj(other.take_string(b"lox".to_vec()));
    assert_eq!(other.as_string(taken).unwrap().hash(), 1_213_292_412);
}

#[test]
fn strings_are_immutable_after_construction() {
    let mut rt = common::runtime();
    let v = rt.intern("stable");
    let before = rt.as_string(v).unwrap();
    let (bytes, hash) = (before.as_bytes().to_vec(), before.hash());

    for i in 0..100 {
        rt.intern(&format!("filler {i}"));
    }
    rt.take_string(b"stable".to_vec());

    let after = rt.as_string(v).unwrap();
    assert_eq!(after.as_bytes(), bytes.as_slice());
    assert_eq!(after.hash(), hash);
    assert_eq!(after.as_bytes_with_nul().last(), Some(&0));
}

#[test]
fn concatenation_is_interned() {
    let mut rt = common::runtime();
    let foo = rt.intern("foo");
    let bar = rt.intern("bar");
    let joined = rt.concatenate(foo, bar).unwrap();
    let literal = rt.intern("foobar");
    assert_eq!(joined, literal);
    assert_eq!(rt.as_bytes(joined).unwrap(), b"foobar");
    assert!(rt.concatenate(foo, Value::from_f64(1.0)).is_err());
}

#[test]
fn interior_nul_bytes_are_content() {
    let mut rt = common::runtime();
    let a = rt.copy_string(b"a\0b");
    let b = rt.copy_string(b"a");
    assert_ne!(a, b);
    assert_eq!(rt.as_bytes(Value::obj(a)).unwrap(), b"a\0b");
}

proptest! {
    #[test]
    fn equal_content_is_identical(
        words in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..8), 1..32),
    ) {
        let mut rt = lox_runtime::Runtime::new();
        let mut seen = std::collections::HashMap::new();
        for (i, w) in words.iter().enumerate() {
            let id = if i % 2 == 0 {
                rt.copy_string(w)
            } else {
                rt.take_string(w.clone())
            };
            let canonical = *seen.entry(w.clone()).or_insert(id);
            prop_assert_eq!(id, canonical);
            prop_assert_eq!(rt.as_string(Value::obj(id)).unwrap().hash(), fnv1a(w));
        }
        prop_assert_eq!(rt.heap().len(), seen.len());
        prop_assert_eq!(rt.strings().len(), seen.len());
    }
}
