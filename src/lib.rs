//! conceptdb — embedded schema-less record store for concept handlers
//!
//! conceptdb is an in-process, single-node store organized as named
//! relations of string-keyed records. Records are schema-less field →
//! value maps; the engine exposes four operations (`get`, `put`, `del`,
//! criteria-based `find`) plus guarded write variants for safe
//! read-modify-write under concurrency.
//!
//! # Quick Start
//!
//! ```
//! use conceptdb::{ConceptStore, Criteria, Record};
//!
//! let store = ConceptStore::new();
//!
//! // Relations are created on first write
//! store.put("article", "a1", Record::new()
//!     .with("author", "alice")
//!     .with("title", "intro"))?;
//!
//! // Criteria-based lookup
//! let by_alice = store.find("article", Some(&Criteria::new().field("author", "alice")))?;
//! assert_eq!(by_alice.len(), 1);
//!
//! // Absence is a value, not an error
//! assert!(store.get("article", "missing")?.is_none());
//! # Ok::<(), conceptdb::Error>(())
//! ```
//!
//! # Architecture
//!
//! - [`conceptdb_core`]: value model (`Value`, `Record`), criteria,
//!   versioning, key helpers, errors.
//! - [`conceptdb_engine`]: the store itself — DashMap of per-relation
//!   shards, each behind a single relation lock.
//! - This crate: re-exports plus the [`InheritanceResolver`], the one
//!   consumer-side algorithm shipped with the engine (effective-field
//!   resolution over parent-schema chains).
//!
//! Handlers hold an `Arc<ConceptStore>` and pass it explicitly into every
//! call; there is no ambient global store.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod resolve;

pub use conceptdb_core::{
    composite_key, prefixed_key, split_composite, unique_key, Criteria, Error, Record, Result,
    Value, Versioned, COMPOSITE_DELIMITER,
};
pub use conceptdb_engine::{ConceptStore, StoreConfig};
pub use resolve::InheritanceResolver;
