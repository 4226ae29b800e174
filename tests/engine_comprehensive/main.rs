//! Engine Comprehensive Test Suite
//!
//! End-to-end coverage of the public store surface, testing correctness,
//! criteria matching, concurrency semantics, and inheritance resolution.
//!
//! ## Modules
//!
//! - `ops`: get/put/del contract, versioning, key conventions
//! - `finds`: criteria-based scans and counts
//! - `concurrency`: lost-update demonstration and the guarded variants
//! - `inheritance`: effective-field resolution over parent chains
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test engine_comprehensive
//!
//! # Run one module
//! cargo test --test engine_comprehensive concurrency::
//!
//! # Run with store debug logging
//! RUST_LOG=debug cargo test --test engine_comprehensive -- --nocapture
//! ```

use std::sync::Arc;
use std::sync::Once;

use conceptdb::{ConceptStore, Record, Value};

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per process
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Fresh shared store with tracing installed
pub fn new_store() -> Arc<ConceptStore> {
    init_tracing();
    Arc::new(ConceptStore::new())
}

/// Build a record from field pairs
///
/// Usage: `record([("author", Value::from("alice")), ("draft", Value::Bool(false))])`
pub fn record<I>(pairs: I) -> Record
where
    I: IntoIterator<Item = (&'static str, Value)>,
{
    pairs.into_iter().collect()
}

mod finds;
mod inheritance;
