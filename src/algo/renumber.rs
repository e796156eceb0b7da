//! Lattice-to-element connectivity renumbering.
//!
//! Structured-grid generators number nodes over a full lattice, so the ids
//! referenced by a mesh are sparse and non-contiguous. This module compacts
//! them: every node id actually used by the mesh is replaced by its rank in
//! the dense range `1..=k`, where `k` is the number of distinct used ids.
//! Block order, block labels, element order, and in-element node order all
//! survive the rewrite unchanged.
//!
//! # Algorithm
//!
//! 1. Collect the distinct node ids appearing in any element of any block.
//!    Block labels are stored apart from connectivity and never enter this
//!    set, even when a label collides numerically with a node id.
//! 2. Sort the distinct ids ascending and assign consecutive integers
//!    starting at 1 in that order. Ascending numeric order is the tie-break
//!    rule: for any used ids `a < b`, the new ids satisfy
//!    `map(a) < map(b)`.
//! 3. Rebuild the mesh block by block, substituting each node id with its
//!    image under the map.
//!
//! # Example
//!
//! ```
//! use densify::mesh::{Block, BlockId, Element, Mesh};
//! use densify::algo::renumber::renumber;
//!
//! // One quad referencing sparse lattice ids
//! let mesh: Mesh = Mesh::from_blocks(vec![Block::new(
//!     BlockId::new(1),
//!     vec![Element::from_ids(&[10, 11, 21, 20])],
//! )]);
//!
//! let dense = renumber(&mesh).unwrap();
//! let flat = dense.flatten_elements();
//! assert_eq!(flat[0], Element::from_ids(&[1, 2, 4, 3]));
//! ```

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{MeshError, Result};
use crate::mesh::{Block, Element, Mesh, MeshIndex, NodeId};

/// An order-preserving map from lattice node ids to dense node ids.
///
/// The map is a bijection from the distinct node ids used by a mesh onto
/// `1..=k`. It is backed by an ordered container: iteration yields pairs in
/// ascending order of the old id, and the assignment of new ids follows
/// that same order. A hash container would not do here, since the contract
/// depends on ascending numeric order rather than any iteration order a
/// particular container happens to produce.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeMap<I: MeshIndex = u64> {
    map: BTreeMap<NodeId<I>, NodeId<I>>,
}

impl<I: MeshIndex> NodeMap<I> {
    /// Build the dense renumbering map for a mesh.
    ///
    /// Collects the distinct node ids used by the mesh's elements, sorts
    /// them ascending, and assigns `1..=k` in that order. Building the map
    /// never fails: an empty mesh simply yields an empty map.
    pub fn from_mesh(mesh: &Mesh<I>) -> Self {
        // Used ids are accumulated from element sequences only; block
        // labels are a different type and cannot end up in this set.
        let mut used: BTreeSet<NodeId<I>> = BTreeSet::new();
        for element in mesh.elements() {
            used.extend(element.nodes.iter().copied());
        }

        // BTreeSet iterates ascending, so rank order is numeric order
        let map = used
            .iter()
            .enumerate()
            .map(|(rank, &old)| (old, NodeId::new(rank + 1)))
            .collect();

        Self { map }
    }

    /// Build an explicit map from two parallel sequences of equal length.
    ///
    /// `old[i]` maps to `new[i]`. Fails if the sequences differ in length
    /// or if an old value is repeated: the mapping must be single-valued on
    /// its keys.
    pub fn from_pairs(old: &[NodeId<I>], new: &[NodeId<I>]) -> Result<Self> {
        if old.len() != new.len() {
            return Err(MeshError::MappingLengthMismatch {
                old: old.len(),
                new: new.len(),
            });
        }

        let mut map = BTreeMap::new();
        for (&o, &n) in old.iter().zip(new.iter()) {
            if map.insert(o, n).is_some() {
                return Err(MeshError::DuplicateMapKey { value: o.index() });
            }
        }

        Ok(Self { map })
    }

    /// Look up the new id for an old id.
    pub fn get(&self, old: NodeId<I>) -> Option<NodeId<I>> {
        self.map.get(&old).copied()
    }

    /// The number of mapped node ids.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(old, new)` pairs in ascending order of the old id.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId<I>, NodeId<I>)> + '_ {
        self.map.iter().map(|(&old, &new)| (old, new))
    }

    /// Substitute every id in `source` with its image under this map,
    /// preserving position.
    ///
    /// This is the substitution primitive used by [`renumber`]; it carries
    /// no mesh semantics and works for any id sequence and any map. Fails
    /// with [`MeshError::UnmappedNode`] if a value in `source` is absent
    /// from the map; the unmapped value is never passed through.
    ///
    /// # Example
    /// ```
    /// use densify::algo::renumber::NodeMap;
    /// use densify::mesh::NodeId;
    ///
    /// let old: Vec<NodeId> = [10, 20, 30].iter().map(|&v| NodeId::new(v)).collect();
    /// let new: Vec<NodeId> = [1, 2, 3].iter().map(|&v| NodeId::new(v)).collect();
    /// let map = NodeMap::from_pairs(&old, &new).unwrap();
    ///
    /// let source = vec![NodeId::new(30), NodeId::new(10), NodeId::new(30)];
    /// let result = map.remap(&source).unwrap();
    /// assert_eq!(result, vec![NodeId::new(3), NodeId::new(1), NodeId::new(3)]);
    /// ```
    pub fn remap(&self, source: &[NodeId<I>]) -> Result<Vec<NodeId<I>>> {
        let mut result = Vec::with_capacity(source.len());
        for &old in source {
            let new = self
                .get(old)
                .ok_or(MeshError::UnmappedNode { node: old.index() })?;
            result.push(new);
        }
        Ok(result)
    }
}

/// Renumber a lattice-form mesh into element form.
///
/// Every node id in every element is replaced by its rank among the
/// distinct used ids, so the output mesh references exactly the ids
/// `1..=k`. The mesh structure (block count, block labels, block order,
/// element order, element arity) is identical to the input; only node id
/// values change. The operation is a pure function of the input: renumbering
/// the same mesh twice produces identical output.
///
/// # Errors
///
/// Propagates [`MeshError::UnmappedNode`] if an element references an id
/// absent from the freshly built map. This cannot happen when map and mesh
/// agree, so hitting it signals a defect rather than bad user input; it is
/// guarded rather than assumed away.
pub fn renumber<I: MeshIndex>(mesh: &Mesh<I>) -> Result<Mesh<I>> {
    let (dense, _) = renumber_with_map(mesh)?;
    Ok(dense)
}

/// Renumber a lattice-form mesh, also returning the node map.
///
/// Identical to [`renumber`], but hands back the old-to-new [`NodeMap`]
/// for inspection or for remapping data associated with the old ids.
pub fn renumber_with_map<I: MeshIndex>(mesh: &Mesh<I>) -> Result<(Mesh<I>, NodeMap<I>)> {
    let map = NodeMap::from_mesh(mesh);

    // Rebuild block by block; all output sizes are known up front
    let mut dense = Mesh::with_capacity(mesh.num_blocks());
    for block in mesh.blocks() {
        let mut elements = Vec::with_capacity(block.num_elements());
        for element in &block.elements {
            elements.push(Element::new(map.remap(&element.nodes)?));
        }
        dense.push_block(Block::new(block.id, elements));
    }

    Ok((dense, map))
}
