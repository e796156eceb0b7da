//! Core mesh data structures.
//!
//! This module provides the block-structured connectivity representation
//! used throughout the crate.
//!
//! # Overview
//!
//! A [`Mesh`] is an ordered sequence of [`Block`]s; a block pairs a
//! [`BlockId`] label with an ordered sequence of [`Element`]s; an element
//! is an ordered sequence of [`NodeId`]s. There are no coordinates and no
//! element-type information: this is a pure connectivity representation.
//!
//! # Identifier Types
//!
//! Node ids and block labels are type-safe wrappers, generic over the
//! underlying integer type (the [`MeshIndex`] trait), allowing you to
//! choose `u16`, `u32`, or `u64` based on the size of the identifier
//! space. The default is `u64`.
//!
//! # Construction
//!
//! Meshes are constructed either from typed blocks or from raw per-block
//! records:
//!
//! ```
//! use densify::mesh::{build_from_records, Mesh};
//!
//! let records = vec![vec![vec![2], vec![1, 2, 4, 3]]];
//! let mesh: Mesh = build_from_records(&records).unwrap();
//! assert_eq!(mesh.num_blocks(), 1);
//! ```

mod block;
mod builder;
mod index;

pub use block::{Block, Element, Mesh};
pub use builder::build_from_records;
pub use index::{BlockId, MeshIndex, NodeId};
