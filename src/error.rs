//! Error types for densify.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh construction and renumbering.
#[derive(Error, Debug)]
pub enum MeshError {
    /// A raw block record has no rows, so no block label is available.
    #[error("block {block} is empty (missing block id)")]
    MissingBlockId {
        /// The block position in the input record list.
        block: usize,
    },

    /// A raw block record's header row does not hold exactly one block id.
    #[error("block {block} has a malformed header: expected a single block id, found {found} values")]
    MalformedBlockHeader {
        /// The block position in the input record list.
        block: usize,
        /// The number of values found in the header row.
        found: usize,
    },

    /// A node id encountered during substitution is absent from the map.
    ///
    /// When raised from [`renumber`](crate::algo::renumber::renumber) this
    /// signals an internal invariant violation rather than a user error:
    /// the map is built from the same mesh it is applied to.
    #[error("node {node} is not present in the renumbering map")]
    UnmappedNode {
        /// The unmapped node id value.
        node: usize,
    },

    /// Parallel old/new sequences of unequal length were supplied.
    #[error("mapping length mismatch: {old} old values vs {new} new values")]
    MappingLengthMismatch {
        /// The number of old values.
        old: usize,
        /// The number of new values.
        new: usize,
    },

    /// The same old value appears more than once in a mapping definition.
    #[error("duplicate old value {value} in renumbering map")]
    DuplicateMapKey {
        /// The repeated old value.
        value: usize,
    },
}
