//! Criteria: partial-field-equality predicate for `find`
//!
//! A `Criteria` names a set of fields with expected values. A record
//! matches when every named field is present with a structurally equal
//! value (AND semantics). Empty criteria match every record.
//!
//! Supports only top-level field equality. Ranges, nested paths, and
//! disjunction are deliberately absent — `find` is a linear scan and the
//! call sites only ever filter on exact values.

use crate::record::Record;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Equality conditions applied to a record during `find`
///
/// # Example
///
/// ```
/// use conceptdb_core::{Criteria, Record};
///
/// let criteria = Criteria::new().field("author", "alice").field("draft", false);
/// let record = Record::new()
///     .with("author", "alice")
///     .with("draft", false)
///     .with("title", "intro");
///
/// assert!(criteria.matches(&record));
/// assert!(Criteria::new().matches(&record));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Criteria {
    equals: BTreeMap<String, Value>,
}

impl Criteria {
    /// Create an empty criteria set (matches all records)
    pub fn new() -> Self {
        Criteria {
            equals: BTreeMap::new(),
        }
    }

    /// Add an equality condition
    pub fn field(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.equals.insert(field.into(), value.into());
        self
    }

    /// Check if a record matches every condition
    ///
    /// An absent field, or a present-but-unequal value, fails the whole
    /// match. Equality is structural and type-distinct per the `Value`
    /// rules: `Int(1)` never matches `Float(1.0)`.
    pub fn matches(&self, record: &Record) -> bool {
        self.equals
            .iter()
            .all(|(field, expected)| record.get(field) == Some(expected))
    }

    /// Check if the criteria set is empty (matches all)
    pub fn is_empty(&self) -> bool {
        self.equals.is_empty()
    }

    /// Number of conditions
    pub fn len(&self) -> usize {
        self.equals.len()
    }

    /// Iterate over conditions in field order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.equals.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Criteria {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Criteria {
            equals: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
