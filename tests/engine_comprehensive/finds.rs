//! Criteria-based scans and counts

use super::*;
use conceptdb::Criteria;
use std::collections::BTreeSet;

fn seed_rows(store: &ConceptStore) {
    // The canonical filtering fixture: {a:1,b:1}, {a:1,b:2}, {a:2,b:1}
    store
        .put("rows", "r1", record([("a", Value::from(1i64)), ("b", Value::from(1i64))]))
        .unwrap();
    store
        .put("rows", "r2", record([("a", Value::from(1i64)), ("b", Value::from(2i64))]))
        .unwrap();
    store
        .put("rows", "r3", record([("a", Value::from(2i64)), ("b", Value::from(1i64))]))
        .unwrap();
}

#[test]
fn test_empty_criteria_returns_all_as_set() {
    let store = new_store();
    for i in 0..7 {
        store
            .put("article", format!("a{}", i), record([("n", Value::from(i as i64))]))
            .unwrap();
    }

    let all = store.find("article", None).unwrap();
    let keys: BTreeSet<String> = all.into_iter().map(|(k, _)| k).collect();
    let expected: BTreeSet<String> = (0..7).map(|i| format!("a{}", i)).collect();
    assert_eq!(keys, expected);

    let explicit_empty = store.find("article", Some(&Criteria::new())).unwrap();
    assert_eq!(explicit_empty.len(), 7);
}

#[test]
fn test_single_field_criteria_filters() {
    let store = new_store();
    seed_rows(&store);

    let hits = store
        .find("rows", Some(&Criteria::new().field("a", 1i64)))
        .unwrap();
    let keys: Vec<&str> = hits.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["r1", "r2"]);
}

#[test]
fn test_multi_field_criteria_is_conjunction() {
    let store = new_store();
    seed_rows(&store);

    let hits = store
        .find(
            "rows",
            Some(&Criteria::new().field("a", 1i64).field("b", 2i64)),
        )
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0, "r2");
}

#[test]
fn test_criteria_on_absent_field_matches_nothing() {
    let store = new_store();
    seed_rows(&store);

    let hits = store
        .find("rows", Some(&Criteria::new().field("c", 1i64)))
        .unwrap();
    assert!(hits.is_empty());
}

#[test]
fn test_criteria_equality_is_type_distinct() {
    let store = new_store();
    seed_rows(&store);

    // Int(1) rows do not match Float(1.0) criteria
    let hits = store
        .find("rows", Some(&Criteria::new().field("a", 1.0f64)))
        .unwrap();
    assert!(hits.is_empty());
}

#[test]
fn test_criteria_matches_list_values_structurally() {
    let store = new_store();
    store
        .put(
            "tag",
            "rust",
            record([("articles", Value::from_iter(["a1", "a2"]))]),
        )
        .unwrap();

    let exact = Criteria::new().field("articles", Value::from_iter(["a1", "a2"]));
    assert_eq!(store.find("tag", Some(&exact)).unwrap().len(), 1);

    let reordered = Criteria::new().field("articles", Value::from_iter(["a2", "a1"]));
    assert!(store.find("tag", Some(&reordered)).unwrap().is_empty());
}

#[test]
fn test_find_on_missing_relation_is_empty() {
    let store = new_store();
    assert!(store.find("never-written", None).unwrap().is_empty());
    assert!(store
        .find("never-written", Some(&Criteria::new().field("a", 1i64)))
        .unwrap()
        .is_empty());
}

#[test]
fn test_find_order_stable_for_fixed_state() {
    let store = new_store();
    for key in ["zebra", "apple", "mango", "banana"] {
        store
            .put("fruit", key, record([("name", Value::from(key))]))
            .unwrap();
    }

    let first = store.find("fruit", None).unwrap();
    let second = store.find("fruit", None).unwrap();
    assert_eq!(first, second);

    let keys: Vec<&str> = first.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["apple", "banana", "mango", "zebra"]);
}

#[test]
fn test_count_matches_find_len() {
    let store = new_store();
    seed_rows(&store);

    let criteria = Criteria::new().field("b", 1i64);
    assert_eq!(
        store.count("rows", Some(&criteria)).unwrap(),
        store.find("rows", Some(&criteria)).unwrap().len()
    );
    assert_eq!(store.count("rows", None).unwrap(), 3);
    assert_eq!(store.count("never-written", None).unwrap(), 0);
}

#[test]
fn test_membership_check_via_find() {
    let store = new_store();

    // Subscription rows located by value fields, dedup checked via find
    store
        .put(
            "subscription",
            "alice:article.published",
            record([
                ("user", Value::from("alice")),
                ("pattern", Value::from("article.published")),
            ]),
        )
        .unwrap();

    let existing = store
        .find(
            "subscription",
            Some(
                &Criteria::new()
                    .field("user", "alice")
                    .field("pattern", "article.published"),
            ),
        )
        .unwrap();
    assert_eq!(existing.len(), 1);
}
