//! Mesh construction from raw records.
//!
//! This module builds typed meshes from the raw per-block integer records
//! produced by mesh generators and file readers: each record is one block,
//! its first row holds exactly the block label, and every following row is
//! one element's node ids.
//!
//! Once a [`Mesh`] has been built, every block carries its label by
//! construction; the missing-label state only exists at this boundary.

use super::block::{Block, Element, Mesh};
use super::index::{BlockId, MeshIndex, NodeId};
use crate::error::{MeshError, Result};

/// Build a mesh from raw per-block records.
///
/// # Arguments
/// * `records` - One record per block. Row 0 must hold exactly the block
///   id; rows 1.. are elements, each an ordered sequence of node ids.
///   Element rows may be empty.
///
/// # Returns
/// A mesh with blocks in record order, or an error if a record is empty
/// (no block id available) or its header row does not hold a single id.
///
/// # Example
/// ```
/// use densify::mesh::{build_from_records, Mesh};
///
/// let records = vec![
///     vec![vec![2], vec![1, 2, 4, 3], vec![3, 4, 6, 5]],
///     vec![vec![31], vec![5, 6, 8, 7]],
/// ];
///
/// let mesh: Mesh = build_from_records(&records).unwrap();
/// assert_eq!(mesh.num_blocks(), 2);
/// assert_eq!(mesh.num_elements(), 3);
/// ```
pub fn build_from_records<I: MeshIndex>(records: &[Vec<Vec<usize>>]) -> Result<Mesh<I>> {
    // Validate record shapes before building anything
    for (bi, record) in records.iter().enumerate() {
        match record.first() {
            None => return Err(MeshError::MissingBlockId { block: bi }),
            Some(header) if header.len() != 1 => {
                return Err(MeshError::MalformedBlockHeader {
                    block: bi,
                    found: header.len(),
                })
            }
            Some(_) => {}
        }
    }

    let mut mesh = Mesh::with_capacity(records.len());
    for record in records {
        let id = BlockId::new(record[0][0]);
        let elements = record[1..]
            .iter()
            .map(|row| Element::new(row.iter().map(|&v| NodeId::new(v)).collect()))
            .collect();
        mesh.push_block(Block::new(id, elements));
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_two_blocks() {
        let records = vec![
            vec![vec![2], vec![1, 2, 4, 3], vec![3, 4, 6, 5]],
            vec![vec![31], vec![5, 6, 8, 7]],
        ];

        let mesh: Mesh = build_from_records(&records).unwrap();

        assert_eq!(mesh.num_blocks(), 2);
        assert_eq!(mesh.num_elements(), 3);

        let blocks: Vec<_> = mesh.blocks().collect();
        assert_eq!(blocks[0].id, BlockId::new(2));
        assert_eq!(blocks[0].elements[1], Element::from_ids(&[3, 4, 6, 5]));
        assert_eq!(blocks[1].id, BlockId::new(31));
    }

    #[test]
    fn test_block_with_no_elements() {
        // A record holding only its header is a labeled empty block
        let records = vec![vec![vec![7]]];

        let mesh: Mesh = build_from_records(&records).unwrap();
        assert_eq!(mesh.num_blocks(), 1);
        assert_eq!(mesh.num_elements(), 0);
    }

    #[test]
    fn test_missing_block_id() {
        let records = vec![vec![vec![2], vec![1, 2, 4, 3]], vec![]];

        let err = build_from_records::<u64>(&records).unwrap_err();
        assert!(matches!(err, MeshError::MissingBlockId { block: 1 }));
    }

    #[test]
    fn test_malformed_header() {
        // Header row holding an element instead of a single id
        let records = vec![vec![vec![1, 2, 4, 3]]];

        let err = build_from_records::<u64>(&records).unwrap_err();
        assert!(matches!(
            err,
            MeshError::MalformedBlockHeader { block: 0, found: 4 }
        ));
    }

    #[test]
    fn test_nothing_built_on_invalid_input() {
        // The first record is valid but the second is not; validation runs
        // up front so the error carries the offending position.
        let records = vec![vec![vec![2], vec![1, 2]], vec![vec![]]];

        let err = build_from_records::<u64>(&records).unwrap_err();
        assert!(matches!(
            err,
            MeshError::MalformedBlockHeader { block: 1, found: 0 }
        ));
    }
}
