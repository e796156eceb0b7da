//! # Densify
//!
//! Compact sparse mesh node numberings into dense finite-element
//! connectivity.
//!
//! Structured-grid generators hand out node ids over a full lattice, so a
//! mesh that keeps only some cells of that lattice references a sparse,
//! non-contiguous id set. Densify renumbers those ids onto the dense range
//! `1..=k` while preserving everything else: block order, block labels,
//! element order, and in-element node order.
//!
//! ## Features
//!
//! - **Block-structured connectivity**: meshes as ordered blocks of
//!   ordered elements, with type-safe node and block identifiers
//! - **Order-preserving renumbering**: old ids `a < b` always map to new
//!   ids `map(a) < map(b)`
//! - **Flexible indexing**: 16-bit, 32-bit, and 64-bit identifier widths
//! - **Pure values**: no I/O, no global state, no interior mutability
//!
//! ## Quick Start
//!
//! ```
//! use densify::prelude::*;
//!
//! // Two hex blocks referencing sparse lattice ids
//! let mesh: Mesh = Mesh::from_blocks(vec![
//!     Block::new(
//!         BlockId::new(31),
//!         vec![Element::from_ids(&[11, 12, 15, 14, 20, 21, 24, 23])],
//!     ),
//!     Block::new(
//!         BlockId::new(44),
//!         vec![Element::from_ids(&[14, 15, 18, 17, 23, 24, 27, 26])],
//!     ),
//! ]);
//!
//! let (dense, map) = renumber_with_map(&mesh).unwrap();
//!
//! // 12 distinct ids in use, compacted onto 1..=12
//! assert_eq!(map.len(), 12);
//! assert_eq!(dense.num_blocks(), 2);
//!
//! // Same id, same image, wherever it occurs: 23 ranks ninth
//! assert_eq!(map.get(NodeId::new(23)), Some(NodeId::new(9)));
//! ```
//!
//! ## Raw Records
//!
//! Meshes can also be built from the raw per-block records a generator or
//! file reader produces; the first row of each record is the block label:
//!
//! ```
//! use densify::prelude::*;
//!
//! let records = vec![vec![vec![7], vec![1, 2, 4, 3]]];
//! let mesh: Mesh = build_from_records(&records).unwrap();
//! assert_eq!(mesh.num_blocks(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use densify::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::renumber::{renumber, renumber_with_map, NodeMap};
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{build_from_records, Block, BlockId, Element, Mesh, MeshIndex, NodeId};
}
