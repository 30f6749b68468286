//! Tag source abstraction layer
//!
//! The engine reads version-control state through the [TagSource] trait,
//! which supplies raw tag names and nothing else. Concrete implementations:
//!
//! - [repository::Git2TagSource]: a real implementation using the `git2` crate
//! - [mock::MockTagSource]: an in-memory implementation for testing
//!
//! Code should depend on the trait rather than a concrete implementation so
//! deduction logic stays testable without a repository on disk.

pub mod mock;
pub mod repository;

pub use mock::MockTagSource;
pub use repository::Git2TagSource;

use crate::error::Result;

/// Supplier of raw version-control tag names.
///
/// A single operation: list the tag names sharing a prefix. It is invoked at
/// most once per deduction. A failing source must surface one error; partial
/// results are never returned.
pub trait TagSource {
    /// List all tag names beginning with `prefix`.
    ///
    /// An empty result is valid (no tags exist yet). Implementations may
    /// filter on either side of the query boundary, but every returned name
    /// starts with `prefix`.
    fn list_tag_names(&self, prefix: &str) -> Result<Vec<String>>;
}
