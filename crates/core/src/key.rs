//! Key conventions for callers
//!
//! The engine treats keys as opaque strings; these helpers encode the two
//! conventions the concept handlers rely on:
//!
//! - **Entity keys** are random unique identifiers minted at creation time
//!   ([`unique_key`], [`prefixed_key`]).
//! - **Relationship keys** concatenate two logical identifiers with a fixed
//!   delimiter ([`composite_key`]), e.g. `resource:action` for a policy row
//!   or `user:event-pattern` for a subscription row.
//!
//! The delimiter must not occur inside either component or the composite
//! key is ambiguous. The engine does not enforce this — [`composite_key`]
//! validates on behalf of the caller. Queries that need to locate rows by
//! one component should filter on record fields via `find`, not parse keys.

use crate::error::{Error, Result};
use uuid::Uuid;

/// Delimiter separating the components of a composite key
pub const COMPOSITE_DELIMITER: char = ':';

/// Mint a random unique entity key
pub fn unique_key() -> String {
    Uuid::new_v4().to_string()
}

/// Mint a random unique entity key with a readable prefix
///
/// Produces keys like `notif_1f3c...`, the shape the reference handlers
/// use for secondary entities.
pub fn prefixed_key(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

/// Build a composite key from two components
///
/// Returns [`Error::InvalidKey`] if either component contains the
/// delimiter, since the resulting key could not be split unambiguously.
pub fn composite_key(left: &str, right: &str) -> Result<String> {
    for component in [left, right] {
        if component.contains(COMPOSITE_DELIMITER) {
            return Err(Error::InvalidKey(format!(
                "composite key component {:?} contains delimiter {:?}",
                component, COMPOSITE_DELIMITER
            )));
        }
    }
    Ok(format!("{}{}{}", left, COMPOSITE_DELIMITER, right))
}

/// Split a composite key back into its two components
///
/// Returns `None` if the key contains no delimiter.
pub fn split_composite(key: &str) -> Option<(&str, &str)> {
    key.split_once(COMPOSITE_DELIMITER)
}
