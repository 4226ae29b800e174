//! ConceptStore: the relation-oriented record store
//!
//! ## Design
//!
//! - DashMap of relation name → relation shard; the outer map is touched
//!   only to fetch the shard handle, so operations on different relations
//!   never contend on a relation lock.
//! - Each relation guards its rows with a single `parking_lot::RwLock`
//!   around an FxHashMap: one lock per relation, reads shared, writes
//!   exclusive.
//! - Relations are created lazily on first write. An empty relation is
//!   indistinguishable from a non-existent one: `get` returns `Ok(None)`
//!   and `find` returns an empty list, never an error.
//!
//! ## Versioning
//!
//! A store-global `AtomicU64` assigns a version to every write, allocated
//! under the owning relation's write lock so the last writer to a key also
//! carries the larger version. Versions are the compare-and-swap token for
//! [`ConceptStore::put_if_version`] and have no other meaning.
//!
//! ## Atomicity
//!
//! Each individual operation on a (relation, key) pair is atomic: a reader
//! never observes a partially written record, and concurrent `put`s to the
//! same key serialize on the relation write lock, last writer wins. The
//! compound read-modify-write pattern `get` → compute → `put` is NOT
//! atomic end-to-end; callers whose updates do not commute must go through
//! [`ConceptStore::put_if_version`] or [`ConceptStore::update`] instead.
//!
//! ## Thread Safety
//!
//! `ConceptStore` is `Send + Sync`. Share one instance behind an `Arc` and
//! pass it explicitly into every business-logic call; there is no global
//! singleton.

use conceptdb_core::error::Result;
use conceptdb_core::{Criteria, Error, Record, Versioned};
use dashmap::DashMap;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::config::StoreConfig;

/// One relation's rows behind the per-relation lock
struct Relation {
    rows: RwLock<FxHashMap<String, Versioned<Record>>>,
}

impl Relation {
    fn with_capacity(capacity: usize) -> Self {
        Relation {
            rows: RwLock::new(FxHashMap::with_capacity_and_hasher(
                capacity,
                Default::default(),
            )),
        }
    }

    fn len(&self) -> usize {
        self.rows.read().len()
    }
}

/// Schema-less, relation-oriented record store
///
/// Owns every relation and exposes the four-operation contract (`get`,
/// `put`, `del`, `find`) plus the guarded write variants. All state lives
/// here; consumers hold `Arc<ConceptStore>` and nothing else.
///
/// # Example
///
/// ```
/// use conceptdb_core::{Criteria, Record};
/// use conceptdb_engine::ConceptStore;
///
/// let store = ConceptStore::new();
/// store.put("article", "a1", Record::new().with("author", "alice"))?;
///
/// let hits = store.find("article", Some(&Criteria::new().field("author", "alice")))?;
/// assert_eq!(hits.len(), 1);
/// # Ok::<(), conceptdb_core::Error>(())
/// ```
pub struct ConceptStore {
    /// Relation name → shard
    relations: DashMap<String, Arc<Relation>>,
    /// Global version counter for writes
    version: AtomicU64,
    config: StoreConfig,
}

impl ConceptStore {
    /// Create a store with default capacity hints
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create a store with explicit capacity hints
    pub fn with_config(config: StoreConfig) -> Self {
        ConceptStore {
            relations: DashMap::with_capacity(config.expected_relations),
            version: AtomicU64::new(0),
            config,
        }
    }

    /// Current value of the global version counter
    #[inline]
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    #[inline]
    fn next_version(&self) -> u64 {
        self.version.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Fetch a relation shard without creating it
    fn relation(&self, name: &str) -> Option<Arc<Relation>> {
        self.relations.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Fetch a relation shard, creating it on first write
    fn relation_or_create(&self, name: &str) -> Arc<Relation> {
        if let Some(rel) = self.relation(name) {
            return rel;
        }
        Arc::clone(
            self.relations
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Relation::with_capacity(self.config.relation_capacity)))
                .value(),
        )
    }

    // ========================================================================
    // Core operations
    // ========================================================================

    /// Get the current record at `key`, or `Ok(None)` if absent
    ///
    /// Absence covers both a missing key and a relation that has never
    /// been written. No side effects.
    pub fn get(&self, relation: &str, key: &str) -> Result<Option<Versioned<Record>>> {
        let Some(rel) = self.relation(relation) else {
            return Ok(None);
        };
        let rows = rel.rows.read();
        Ok(rows.get(key).cloned())
    }

    /// Insert or fully replace the record at `key`, returning the version
    ///
    /// Creates the relation on first use. There is no partial-field
    /// update: the stored record is replaced whole. Concurrent `put`s to
    /// the same key serialize on the relation write lock; the last to
    /// apply wins and carries the larger version.
    pub fn put(&self, relation: &str, key: impl Into<String>, record: Record) -> Result<u64> {
        let rel = self.relation_or_create(relation);
        let key = key.into();
        let mut rows = rel.rows.write();
        let version = self.next_version();
        debug!(
            target: "conceptdb::store",
            relation = %relation,
            key = %key,
            version,
            "record written"
        );
        rows.insert(key, Versioned::new(record, version));
        Ok(version)
    }

    /// Remove the record at `key`, returning it if it existed
    ///
    /// A no-op returning `Ok(None)` when the key (or the whole relation)
    /// is absent — not an error.
    pub fn del(&self, relation: &str, key: &str) -> Result<Option<Versioned<Record>>> {
        let Some(rel) = self.relation(relation) else {
            return Ok(None);
        };
        let removed = rel.rows.write().remove(key);
        if let Some(ref evicted) = removed {
            debug!(
                target: "conceptdb::store",
                relation = %relation,
                key = %key,
                version = evicted.version,
                "record deleted"
            );
        }
        Ok(removed)
    }

    /// Find every record whose fields superset-match `criteria`
    ///
    /// `None` (or empty) criteria returns all records in the relation.
    /// Linear scan under the relation read lock, so the result is a
    /// consistent snapshot of that one relation. Results are sorted by
    /// key: order is stable for a fixed underlying state.
    pub fn find(
        &self,
        relation: &str,
        criteria: Option<&Criteria>,
    ) -> Result<Vec<(String, Versioned<Record>)>> {
        let Some(rel) = self.relation(relation) else {
            return Ok(Vec::new());
        };
        let rows = rel.rows.read();
        let mut results: Vec<(String, Versioned<Record>)> = rows
            .iter()
            .filter(|(_, stored)| criteria.map_or(true, |c| c.matches(&stored.value)))
            .map(|(key, stored)| (key.clone(), stored.clone()))
            .collect();

        // Scan order of the hash map is arbitrary; sort for stable ordering
        results.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(results)
    }

    // ========================================================================
    // Guarded writes
    // ========================================================================

    /// Compare-and-swap: replace the record only at the expected version
    ///
    /// `expected = None` means the key must not exist (insert-if-absent,
    /// the dedup-on-register guard). On mismatch the store is unchanged
    /// and [`Error::VersionConflict`] reports both versions; re-read and
    /// retry.
    pub fn put_if_version(
        &self,
        relation: &str,
        key: &str,
        expected: Option<u64>,
        record: Record,
    ) -> Result<u64> {
        let rel = self.relation_or_create(relation);
        let mut rows = rel.rows.write();
        let actual = rows.get(key).map(|stored| stored.version);
        if actual != expected {
            return Err(Error::VersionConflict {
                relation: relation.to_string(),
                key: key.to_string(),
                expected,
                actual,
            });
        }
        let version = self.next_version();
        debug!(
            target: "conceptdb::store",
            relation = %relation,
            key = %key,
            version,
            "record swapped"
        );
        rows.insert(key.to_string(), Versioned::new(record, version));
        Ok(version)
    }

    /// Exclusive read-modify-write on one key
    ///
    /// Holds the relation write lock across the closure: the current
    /// record (if any) is presented, and the returned record is written
    /// back in the same critical section, so no concurrent writer can
    /// interleave. Returning `None` leaves the store unchanged and yields
    /// `Ok(None)`.
    ///
    /// The closure runs under the relation lock: it must not call back
    /// into the store for the same relation, and should stay short.
    pub fn update<F>(&self, relation: &str, key: &str, apply: F) -> Result<Option<u64>>
    where
        F: FnOnce(Option<&Record>) -> Option<Record>,
    {
        let rel = self.relation_or_create(relation);
        let mut rows = rel.rows.write();
        let current = rows.get(key).map(|stored| &stored.value);
        match apply(current) {
            Some(next) => {
                let version = self.next_version();
                debug!(
                    target: "conceptdb::store",
                    relation = %relation,
                    key = %key,
                    version,
                    "record updated in place"
                );
                rows.insert(key.to_string(), Versioned::new(next, version));
                Ok(Some(version))
            }
            None => Ok(None),
        }
    }

    // ========================================================================
    // Administrative surface
    // ========================================================================

    /// Check if a key exists
    pub fn contains(&self, relation: &str, key: &str) -> bool {
        self.relation(relation)
            .map(|rel| rel.rows.read().contains_key(key))
            .unwrap_or(false)
    }

    /// Number of records in a relation (0 for a relation never written)
    pub fn relation_len(&self, relation: &str) -> usize {
        self.relation(relation).map(|rel| rel.len()).unwrap_or(0)
    }

    /// Count records matching `criteria` without cloning them out
    pub fn count(&self, relation: &str, criteria: Option<&Criteria>) -> Result<usize> {
        let Some(rel) = self.relation(relation) else {
            return Ok(0);
        };
        let rows = rel.rows.read();
        Ok(rows
            .values()
            .filter(|stored| criteria.map_or(true, |c| c.matches(&stored.value)))
            .count())
    }

    /// Names of every relation that has ever been written, sorted
    pub fn relation_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.relations.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Total records across all relations
    pub fn total_records(&self) -> usize {
        self.relations.iter().map(|e| e.value().len()).sum()
    }

    /// Drop a relation and all its records
    ///
    /// Returns true if the relation existed. Mostly useful in tests;
    /// production callers delete individual keys.
    pub fn clear_relation(&self, relation: &str) -> bool {
        let removed = self.relations.remove(relation).is_some();
        if removed {
            debug!(target: "conceptdb::store", relation = %relation, "relation cleared");
        }
        removed
    }
}

impl Default for ConceptStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConceptStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConceptStore")
            .field("relations", &self.relations.len())
            .field("version", &self.version())
            .field("total_records", &self.total_records())
            .finish()
    }
}
