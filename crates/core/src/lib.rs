//! Core types for conceptdb
//!
//! This crate defines the foundational types used throughout the system:
//! - Value: unified enum for all record field values
//! - Record: schema-less field → value mapping
//! - Criteria: partial-field-equality predicate for `find`
//! - Versioned: value + write version pair (the CAS token)
//! - Key helpers: unique entity keys, composite relationship keys
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod criteria;
pub mod error;
pub mod key;
pub mod record;
pub mod value;
pub mod versioned;

pub use criteria::Criteria;
pub use error::{Error, Result};
pub use key::{composite_key, prefixed_key, split_composite, unique_key, COMPOSITE_DELIMITER};
pub use record::Record;
pub use value::Value;
pub use versioned::Versioned;
