//! Store construction options

/// Capacity hints for a [`ConceptStore`](crate::ConceptStore)
///
/// Both values are hints, not limits: the store grows past them freely.
/// Pre-sizing matters only for workloads that know their relation count
/// up front and want to avoid rehashing during warm-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Expected number of relations (pre-sizes the relation map)
    pub expected_relations: usize,
    /// Initial row capacity for each newly created relation
    pub relation_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            expected_relations: 16,
            relation_capacity: 64,
        }
    }
}
