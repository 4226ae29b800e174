//! Inheritance resolution over parent-chain records
//!
//! Some relations form a forest: each record may name another record in
//! the same relation as its parent (a schema extending a base schema).
//! The resolver walks that chain through the store and merges a designated
//! list-valued field across all levels, ancestor entries ordered first.
//!
//! ## Design
//!
//! Stateless facade over the engine: the resolver holds an
//! `Arc<ConceptStore>` and the three names that parameterize the walk
//! (relation, list field, parent field). It issues one `get` per ancestor;
//! the walk is NOT atomic across the chain — a concurrent write to an
//! ancestor mid-walk may or may not be observed, which is acceptable
//! because these definitions change far less often than they are read.
//!
//! ## Termination
//!
//! A parent reference to a missing key ends the walk silently (best
//! effort, logged at debug). A repeated key — a cycle, which well-formed
//! data never contains — truncates the walk with a warning instead of
//! looping forever.

use conceptdb_core::error::Result;
use conceptdb_core::{Error, Record, Value};
use conceptdb_engine::ConceptStore;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, warn};

/// Default name of the merged list-valued field
pub const DEFAULT_LIST_FIELD: &str = "fields";

/// Default name of the parent-reference field
pub const DEFAULT_PARENT_FIELD: &str = "parent";

/// Walks a record's parent chain and merges one list-valued field
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use conceptdb::{ConceptStore, InheritanceResolver, Record, Value};
///
/// let store = Arc::new(ConceptStore::new());
/// store.put("schema", "base", Record::new()
///     .with("fields", Value::from_iter(["id", "name"])))?;
/// store.put("schema", "child", Record::new()
///     .with("fields", Value::from_iter(["email"]))
///     .with("parent", "base"))?;
///
/// let resolver = InheritanceResolver::new(store, "schema");
/// assert_eq!(resolver.resolve_names("child")?, vec!["id", "name", "email"]);
/// # Ok::<(), conceptdb::Error>(())
/// ```
pub struct InheritanceResolver {
    store: Arc<ConceptStore>,
    relation: String,
    list_field: String,
    parent_field: String,
}

impl InheritanceResolver {
    /// Resolver over `relation` using the default field names
    pub fn new(store: Arc<ConceptStore>, relation: impl Into<String>) -> Self {
        Self::with_fields(store, relation, DEFAULT_LIST_FIELD, DEFAULT_PARENT_FIELD)
    }

    /// Resolver with explicit list-field and parent-field names
    pub fn with_fields(
        store: Arc<ConceptStore>,
        relation: impl Into<String>,
        list_field: impl Into<String>,
        parent_field: impl Into<String>,
    ) -> Self {
        InheritanceResolver {
            store,
            relation: relation.into(),
            list_field: list_field.into(),
            parent_field: parent_field.into(),
        }
    }

    /// Compute the effective merged list for `start_key`
    ///
    /// Walks from the starting record up the parent chain, prepending
    /// each level's list-field contents, so the most distant ancestor's
    /// entries come first and the starting record's entries last. A level
    /// without list-field data contributes nothing.
    ///
    /// Fails with [`Error::RecordNotFound`] only when the starting record
    /// itself is absent; a broken chain further up is tolerated.
    pub fn resolve(&self, start_key: &str) -> Result<Vec<Value>> {
        let start = self
            .store
            .get(&self.relation, start_key)?
            .ok_or_else(|| Error::RecordNotFound {
                relation: self.relation.clone(),
                key: start_key.to_string(),
            })?;

        let mut levels: VecDeque<Vec<Value>> = VecDeque::new();
        let mut visited = FxHashSet::default();
        visited.insert(start_key.to_string());

        let mut current = Some(start.value);
        while let Some(record) = current.take() {
            levels.push_front(self.own_entries(&record));

            let Some(parent_key) = self.parent_key(&record) else {
                break;
            };

            if !visited.insert(parent_key.clone()) {
                warn!(
                    target: "conceptdb::resolve",
                    relation = %self.relation,
                    parent = %parent_key,
                    "parent chain cycle, truncating walk"
                );
                break;
            }

            match self.store.get(&self.relation, &parent_key)? {
                Some(parent) => current = Some(parent.value),
                None => {
                    debug!(
                        target: "conceptdb::resolve",
                        relation = %self.relation,
                        parent = %parent_key,
                        "parent chain broken, stopping walk"
                    );
                }
            }
        }

        Ok(levels.into_iter().flatten().collect())
    }

    /// Like [`resolve`](Self::resolve), keeping only string entries
    ///
    /// Convenience for the common case where the merged field holds
    /// field names.
    pub fn resolve_names(&self, start_key: &str) -> Result<Vec<String>> {
        Ok(self
            .resolve(start_key)?
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect())
    }

    fn own_entries(&self, record: &Record) -> Vec<Value> {
        record
            .get_list(&self.list_field)
            .map(<[Value]>::to_vec)
            .unwrap_or_default()
    }

    /// Extract the parent reference, if any
    ///
    /// Absent, null, empty-string, and non-string values all mean
    /// "no parent".
    fn parent_key(&self, record: &Record) -> Option<String> {
        match record.get(&self.parent_field) {
            Some(Value::String(key)) if !key.is_empty() => Some(key.clone()),
            _ => None,
        }
    }
}

impl std::fmt::Debug for InheritanceResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InheritanceResolver")
            .field("relation", &self.relation)
            .field("list_field", &self.list_field)
            .field("parent_field", &self.parent_field)
            .finish()
    }
}
