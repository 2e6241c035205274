//! Merge scenarios across comparers and source shapes

use std::collections::HashMap;

use extkit_core::merge::{
    merge, merge_all, merge_all_with, merge_using, merge_with, IgnoreAsciiCase, IgnoreCase,
    KeyComparer, Mapping, Ordinal,
};
use pretty_assertions::assert_eq;

/// Helper to build a string-keyed mapping with a given comparer
fn build<C>(comparer: C, pairs: &[(&str, &str)]) -> Mapping<String, String, C>
where
    C: KeyComparer<String>,
{
    let mut mapping = Mapping::with_comparer(comparer);
    mapping.extend(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())));
    mapping
}

fn plain(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn value<'a, C>(mapping: &'a Mapping<String, String, C>, key: &str) -> Option<&'a str>
where
    C: KeyComparer<String, Canonical = String> + KeyComparer<str, Canonical = String>,
{
    mapping.get(key).map(String::as_str)
}

#[test]
fn test_merge_creates_third_mapping() {
    let first = build(Ordinal, &[("1", "10"), ("2", "20"), ("3", "30")]);
    let second = plain(&[("3", "300"), ("4", "400")]);

    let third = merge(&first, Some(&second));

    assert_eq!(third.len(), 4);
    for key in ["1", "2", "3", "4"] {
        assert!(third.contains_key(key), "missing key {key}");
    }
    assert_eq!(value(&third, "3"), Some("300"));
}

#[test]
fn test_explicit_case_insensitive_comparer() {
    let first = plain(&[("a", "10"), ("b", "20"), ("c", "30")]);
    let second = plain(&[("C", "300"), ("d", "400")]);

    let third = merge_using(IgnoreCase, &first, Some(&second));

    assert_eq!(third.len(), 4);
    let (key, val) = third.get_key_value("c").unwrap();
    assert_eq!(key, "c");
    assert_eq!(val, "300");
}

#[test]
fn test_inherited_case_insensitive_comparer() {
    let first = build(IgnoreCase, &[("a", "10"), ("b", "20"), ("c", "30")]);
    let second = plain(&[("C", "300"), ("d", "400")]);

    let third = merge(&first, Some(&second));

    let mut keys: Vec<&str> = third.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["a", "b", "c", "d"]);
    assert_eq!(value(&third, "c"), Some("300"));
}

#[test]
fn test_explicit_comparer_overrides_left() {
    let first = build(Ordinal, &[("key", "1")]);
    let second = build(Ordinal, &[("KEY", "2")]);

    let third = merge_using(IgnoreAsciiCase, &first, Some(&second));

    assert_eq!(third.len(), 1);
    assert_eq!(third.get_key_value("Key").map(|(k, _)| k.as_str()), Some("key"));
    assert_eq!(value(&third, "key"), Some("2"));
}

#[test]
fn test_absent_source_yields_equal_copy() {
    let first = build(IgnoreCase, &[("a", "1")]);
    let overrides: Option<Mapping<String, String, IgnoreCase>> = None;

    let copy = merge(&first, overrides.as_ref());

    assert_eq!(copy, first);
    assert_eq!(copy.comparer(), first.comparer());
}

#[test]
fn test_resolver_over_case_insensitive_sources() {
    let first = build(IgnoreCase, &[("Tag", "rust")]);
    let second = plain(&[("TAG", "go")]);
    let third = plain(&[("tag", "zig")]);

    let merged = merge_all_with(&first, [&second, &third], |acc, next| format!("{acc},{next}"));

    assert_eq!(merged.len(), 1);
    let (key, val) = merged.get_key_value("tag").unwrap();
    assert_eq!(key, "Tag");
    assert_eq!(val, "rust,go,zig");
}

#[test]
fn test_resolver_sees_existing_then_incoming() {
    let first = build(Ordinal, &[("k", "old")]);
    let second = build(Ordinal, &[("k", "new")]);

    let keep_existing = merge_with(&first, Some(&second), |existing, _| existing.clone());
    let take_incoming = merge_with(&first, Some(&second), |_, incoming| incoming.clone());

    assert_eq!(value(&keep_existing, "k"), Some("old"));
    assert_eq!(value(&take_incoming, "k"), Some("new"));
}

#[test]
fn test_merge_all_mixed_sources() {
    let first = build(Ordinal, &[("a", "1")]);
    let sources = vec![plain(&[("a", "2"), ("b", "2")]), plain(&[("b", "3")])];

    let merged = merge_all(&first, &sources);

    assert_eq!(value(&merged, "a"), Some("2"));
    assert_eq!(value(&merged, "b"), Some("3"));
}

#[test]
fn test_counting_resolver_across_many_sources() {
    let sources: Vec<Mapping<&str, u32>> = (0..5)
        .map(|i| [("hits", 1), ("last", i)].into_iter().collect())
        .collect();

    let merged = merge_all_with(&sources[0], &sources[1..], |acc, next| acc + next);

    assert_eq!(merged.get(&"hits"), Some(&5));
    // 0 + 1 + 2 + 3 + 4
    assert_eq!(merged.get(&"last"), Some(&10));
}
