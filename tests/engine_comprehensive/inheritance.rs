//! Effective-field resolution over parent-schema chains

use super::*;
use conceptdb::{Error, InheritanceResolver};

fn define_schema(store: &ConceptStore, key: &str, fields: &[&str], parent: Option<&str>) {
    let mut definition = record([(
        "fields",
        Value::from_iter(fields.iter().copied()),
    )]);
    match parent {
        Some(parent) => {
            definition.set("parent", parent);
        }
        None => {
            definition.set("parent", Value::Null);
        }
    }
    store.put("schema", key, definition).unwrap();
}

#[test]
fn test_child_inherits_base_fields_first() {
    let store = new_store();
    define_schema(&store, "base", &["id", "name"], None);
    define_schema(&store, "child", &["email"], Some("base"));

    let resolver = InheritanceResolver::new(Arc::clone(&store), "schema");
    assert_eq!(
        resolver.resolve_names("child").unwrap(),
        vec!["id", "name", "email"]
    );

    // Resolving the base alone yields only its own fields
    assert_eq!(resolver.resolve_names("base").unwrap(), vec!["id", "name"]);
}

#[test]
fn test_deep_chain_orders_most_distant_first() {
    let store = new_store();
    define_schema(&store, "entity", &["id"], None);
    define_schema(&store, "person", &["name"], Some("entity"));
    define_schema(&store, "employee", &["badge"], Some("person"));
    define_schema(&store, "manager", &["reports"], Some("employee"));

    let resolver = InheritanceResolver::new(store, "schema");
    assert_eq!(
        resolver.resolve_names("manager").unwrap(),
        vec!["id", "name", "badge", "reports"]
    );
}

#[test]
fn test_orphan_resolves_own_fields_without_error() {
    let store = new_store();
    define_schema(&store, "orphan", &["email"], Some("missing-id"));

    let resolver = InheritanceResolver::new(store, "schema");
    assert_eq!(resolver.resolve_names("orphan").unwrap(), vec!["email"]);
}

#[test]
fn test_missing_start_record_is_not_found() {
    let store = new_store();
    let resolver = InheritanceResolver::new(store, "schema");

    assert!(matches!(
        resolver.resolve("ghost"),
        Err(Error::RecordNotFound { .. })
    ));
}

#[test]
fn test_empty_levels_contribute_nothing() {
    let store = new_store();
    store.put("schema", "base", record([])).unwrap();
    define_schema(&store, "child", &["email"], Some("base"));

    let resolver = InheritanceResolver::new(store, "schema");
    assert_eq!(resolver.resolve_names("child").unwrap(), vec!["email"]);
}

#[test]
fn test_duplicate_entries_are_kept_in_order() {
    // The resolver merges, it does not dedup: "id" at two levels appears twice
    let store = new_store();
    define_schema(&store, "base", &["id", "name"], None);
    define_schema(&store, "child", &["id", "email"], Some("base"));

    let resolver = InheritanceResolver::new(store, "schema");
    assert_eq!(
        resolver.resolve_names("child").unwrap(),
        vec!["id", "name", "id", "email"]
    );
}

#[test]
fn test_resolution_sees_updates_made_through_update() {
    let store = new_store();
    define_schema(&store, "base", &["id"], None);
    define_schema(&store, "child", &["email"], Some("base"));

    // Add a field to the base schema the way a handler would
    store
        .update("schema", "base", |current| {
            let mut fields = current.unwrap().get_list("fields").unwrap().to_vec();
            fields.push(Value::from("created_at"));
            let mut next = current.unwrap().clone();
            next.set("fields", Value::List(fields));
            Some(next)
        })
        .unwrap();

    let resolver = InheritanceResolver::new(store, "schema");
    assert_eq!(
        resolver.resolve_names("child").unwrap(),
        vec!["id", "created_at", "email"]
    );
}

#[test]
fn test_cycle_truncates_gracefully() {
    let store = new_store();
    define_schema(&store, "a", &["one"], Some("b"));
    define_schema(&store, "b", &["two"], Some("c"));
    define_schema(&store, "c", &["three"], Some("a"));

    let resolver = InheritanceResolver::new(store, "schema");
    // Walk from a: visits a, b, c, then stops at the repeat of a
    assert_eq!(
        resolver.resolve_names("a").unwrap(),
        vec!["three", "two", "one"]
    );
}
