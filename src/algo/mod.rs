//! Mesh processing algorithms.
//!
//! This module contains algorithms operating on block-structured
//! connectivity:
//!
//! - **Renumbering**: compaction of sparse lattice node numberings into
//!   dense finite-element numberings

pub mod renumber;
