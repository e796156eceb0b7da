//! Block-structured connectivity data.
//!
//! This module provides the value types that make up a mesh: an [`Element`]
//! is an ordered sequence of node ids, a [`Block`] is a labeled group of
//! elements, and a [`Mesh`] is an ordered sequence of blocks.
//!
//! The same types serve both the lattice form (node ids drawn from a
//! sparse, possibly non-contiguous numbering space) and the element form
//! (node ids compacted to the dense range `1..=k`); only the stored id
//! values differ between the two forms.

use super::index::{BlockId, MeshIndex, NodeId};

/// A single element: an ordered sequence of node ids.
///
/// Element arity is arbitrary (8 for a hexahedron, 4 for a quadrilateral,
/// and so on) and may vary between elements of the same mesh. The order of
/// node ids is significant: it encodes local node numbering and winding,
/// and is preserved exactly by every operation in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<I: MeshIndex = u64> {
    /// Node ids in local connectivity order.
    pub nodes: Vec<NodeId<I>>,
}

impl<I: MeshIndex> Element<I> {
    /// Create an element from node ids.
    pub fn new(nodes: Vec<NodeId<I>>) -> Self {
        Self { nodes }
    }

    /// Create an element from raw id values.
    ///
    /// # Example
    /// ```
    /// use densify::mesh::Element;
    ///
    /// let hex: Element = Element::from_ids(&[2, 3, 6, 5, 11, 12, 15, 14]);
    /// assert_eq!(hex.arity(), 8);
    /// ```
    pub fn from_ids(ids: &[usize]) -> Self {
        Self {
            nodes: ids.iter().map(|&v| NodeId::new(v)).collect(),
        }
    }

    /// The number of node ids in this element.
    pub fn arity(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether this element has no node ids.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A labeled group of elements, e.g. a material region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<I: MeshIndex = u64> {
    /// The block label. Labels are never part of element connectivity.
    pub id: BlockId<I>,

    /// The elements of this block, in order.
    pub elements: Vec<Element<I>>,
}

impl<I: MeshIndex> Block<I> {
    /// Create a block from a label and its elements.
    pub fn new(id: BlockId<I>, elements: Vec<Element<I>>) -> Self {
        Self { id, elements }
    }

    /// The number of elements in this block.
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }
}

/// A mesh: an ordered sequence of blocks.
///
/// Block order is significant and preserved by every operation in this
/// crate, as are element order within a block and node order within an
/// element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mesh<I: MeshIndex = u64> {
    pub(crate) blocks: Vec<Block<I>>,
}

impl<I: MeshIndex> Mesh<I> {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Create an empty mesh with room for the given number of blocks.
    pub fn with_capacity(num_blocks: usize) -> Self {
        Self {
            blocks: Vec::with_capacity(num_blocks),
        }
    }

    /// Create a mesh from blocks, preserving their order.
    pub fn from_blocks(blocks: Vec<Block<I>>) -> Self {
        Self { blocks }
    }

    /// Append a block after the existing blocks.
    pub fn push_block(&mut self, block: Block<I>) {
        self.blocks.push(block);
    }

    /// The number of blocks in the mesh.
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// The total number of elements across all blocks.
    pub fn num_elements(&self) -> usize {
        self.blocks.iter().map(Block::num_elements).sum()
    }

    /// The total number of node references across all elements.
    ///
    /// A node shared by several elements is counted once per reference.
    pub fn num_node_refs(&self) -> usize {
        self.blocks
            .iter()
            .flat_map(|b| b.elements.iter())
            .map(Element::arity)
            .sum()
    }

    /// Check whether the mesh has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the blocks in order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block<I>> {
        self.blocks.iter()
    }

    /// Iterate over all elements, in block order then in-block order.
    pub fn elements(&self) -> impl Iterator<Item = &Element<I>> {
        self.blocks.iter().flat_map(|b| b.elements.iter())
    }

    /// Flatten the mesh into a plain element list, dropping block labels.
    ///
    /// The result is the concatenation, in block order then in-block
    /// element order, of every block's elements. The mesh itself is not
    /// modified, and no renumbering invariants are checked: the view
    /// applies equally to lattice-form and element-form meshes.
    ///
    /// # Example
    /// ```
    /// use densify::mesh::{Block, BlockId, Element, Mesh};
    ///
    /// let mesh: Mesh = Mesh::from_blocks(vec![
    ///     Block::new(BlockId::new(2), vec![Element::from_ids(&[1, 2, 4, 3])]),
    ///     Block::new(BlockId::new(5), vec![Element::from_ids(&[3, 4, 6, 5])]),
    /// ]);
    ///
    /// let flat = mesh.flatten_elements();
    /// assert_eq!(flat.len(), 2);
    /// assert_eq!(flat[0], Element::from_ids(&[1, 2, 4, 3]));
    /// ```
    pub fn flatten_elements(&self) -> Vec<Element<I>> {
        let mut flat = Vec::with_capacity(self.num_elements());
        for block in &self.blocks {
            flat.extend(block.elements.iter().cloned());
        }
        flat
    }
}
