//! Identifier types for mesh entities.
//!
//! This module provides type-safe wrappers for node identifiers and block
//! labels. The wrappers are generic over the underlying integer type to
//! support identifier spaces of different sizes (u16 for small meshes, u32
//! for typical meshes, u64 for the large sparse lattices produced by
//! structured-grid generators).
//!
//! Keeping [`NodeId`] and [`BlockId`] as distinct types means a block label
//! can never be mistaken for a node identifier, even when the two collide
//! numerically.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Trait for integer types that can back a mesh identifier.
///
/// This trait is implemented for `u16`, `u32`, and `u64`, allowing users to
/// choose the appropriate width for their identifier space. Ordering of the
/// wrapper types follows the ordering of the raw integer.
pub trait MeshIndex:
    Copy + Clone + Eq + PartialEq + Ord + PartialOrd + Hash + Debug + Display + Send + Sync + 'static
{
    /// The maximum representable identifier value.
    const MAX: Self;

    /// Convert from usize to this index type.
    ///
    /// # Panics
    /// Panics in debug builds if the value is too large for this index type.
    fn from_usize(v: usize) -> Self;

    /// Convert to usize.
    fn to_usize(self) -> usize;
}

impl MeshIndex for u16 {
    const MAX: Self = u16::MAX;

    #[inline]
    fn from_usize(v: usize) -> Self {
        debug_assert!(v <= Self::MAX as usize, "identifier {} too large for u16", v);
        v as u16
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl MeshIndex for u32 {
    const MAX: Self = u32::MAX;

    #[inline]
    fn from_usize(v: usize) -> Self {
        debug_assert!(v <= Self::MAX as usize, "identifier {} too large for u32", v);
        v as u32
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl MeshIndex for u64 {
    const MAX: Self = u64::MAX;

    #[inline]
    fn from_usize(v: usize) -> Self {
        v as u64
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

/// A type-safe node identifier.
///
/// In lattice form a node id is an arbitrary positive integer drawn from a
/// possibly sparse numbering space; in element form node ids form the dense
/// range `1..=k`. Both forms use this same type.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct NodeId<I: MeshIndex = u64>(I);

/// A type-safe block label.
///
/// Block labels live in their own numbering space and are never part of any
/// element connectivity.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct BlockId<I: MeshIndex = u64>(I);

macro_rules! impl_id_type {
    ($name:ident, $display:literal) => {
        impl<I: MeshIndex> $name<I> {
            /// Create a new identifier from a raw value.
            #[inline]
            pub fn new(value: usize) -> Self {
                Self(I::from_usize(value))
            }

            /// Get the identifier value as usize.
            #[inline]
            pub fn index(self) -> usize {
                self.0.to_usize()
            }

            /// Get the raw value of the underlying type.
            #[inline]
            pub fn raw(self) -> I {
                self.0
            }
        }

        impl<I: MeshIndex> Debug for $name<I> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $display, self.0)
            }
        }

        impl<I: MeshIndex> Display for $name<I> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl<I: MeshIndex> From<usize> for $name<I> {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_id_type!(NodeId, "N");
impl_id_type!(BlockId, "B");
