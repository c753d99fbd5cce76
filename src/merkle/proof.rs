use serde::{Deserialize, Serialize};

use super::traits::MerkleHasher;
use super::tree::convert_digest;
use super::types::{Digest, MerkleError};

/// Inclusion proof for a single chunk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// Root of the tree the proof was opened from.
    pub root: Digest,
    /// Sibling digests ordered from the leaf level towards the root.
    pub path: Vec<Digest>,
    pub leaf_index: usize,
    pub leaf_count: usize,
}

impl MerkleProof {
    pub fn path(&self) -> &[Digest] {
        &self.path
    }

    /// Recomputes the root from `chunk` and checks it against `expected_root`.
    ///
    /// The root carried inside the proof must match as well; a proof is only
    /// meaningful relative to a root the verifier obtained independently.
    pub fn verify<H: MerkleHasher>(
        &self,
        expected_root: &Digest,
        chunk: &[u8],
    ) -> Result<(), MerkleError> {
        if expected_root.len() != H::digest_size() {
            return Err(MerkleError::DigestSizeMismatch {
                expected: H::digest_size(),
                got: expected_root.len(),
            });
        }
        let computed =
            compute_root_from_path::<H>(chunk, self.leaf_index, self.leaf_count, &self.path)?;
        if &computed == expected_root && &self.root == expected_root {
            Ok(())
        } else {
            Err(MerkleError::VerificationFailed)
        }
    }
}

/// Number of siblings a proof for `leaf_index` carries in a tree of
/// `leaf_count` leaves.
pub fn expected_path_len(leaf_index: usize, leaf_count: usize) -> usize {
    let mut position = leaf_index;
    let mut width = leaf_count;
    let mut siblings = 0;
    while width > 1 {
        if !is_carried(position, width) {
            siblings += 1;
        }
        position /= 2;
        width = width.div_ceil(2);
    }
    siblings
}

/// A node is carried to the next level when it is the unpaired last node.
fn is_carried(position: usize, width: usize) -> bool {
    position % 2 == 0 && position + 1 == width
}

/// Recomputes a Merkle root from a chunk and its authentication path.
///
/// * `chunk`: raw chunk bytes, hashed with the leaf domain tag.
/// * `leaf_index`: position of the chunk among the committed leaves.
/// * `leaf_count`: total number of committed leaves.
/// * `path`: sibling digests, leaf to root.
pub fn compute_root_from_path<H: MerkleHasher>(
    chunk: &[u8],
    leaf_index: usize,
    leaf_count: usize,
    path: &[Digest],
) -> Result<Digest, MerkleError> {
    if leaf_index >= leaf_count {
        return Err(MerkleError::IndexOutOfRange {
            index: leaf_index,
            leaf_count,
        });
    }
    let expected = expected_path_len(leaf_index, leaf_count);
    if path.len() != expected {
        return Err(MerkleError::InvalidPathLength {
            expected,
            got: path.len(),
        });
    }

    let mut current = H::hash_leaf(chunk);
    let mut position = leaf_index;
    let mut width = leaf_count;
    let mut siblings = path.iter();

    while width > 1 {
        if !is_carried(position, width) {
            let raw = siblings.next().ok_or(MerkleError::InvalidPathLength {
                expected,
                got: path.len(),
            })?;
            let sibling = H::from_bytes(raw.as_bytes()).ok_or(MerkleError::DigestSizeMismatch {
                expected: H::digest_size(),
                got: raw.len(),
            })?;
            current = if position % 2 == 0 {
                H::hash_nodes(&current, &sibling)
            } else {
                H::hash_nodes(&sibling, &current)
            };
        }
        position /= 2;
        width = width.div_ceil(2);
    }

    Ok(convert_digest::<H>(&current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{Blake3Hasher, Sha256Hasher};
    use crate::merkle::tree::MerkleTree;

    fn chunks(count: usize) -> Vec<Vec<u8>> {
        (0..count).map(|i| vec![0x40 + i as u8; 16]).collect()
    }

    #[test]
    fn path_lengths_follow_carry_rule() {
        assert_eq!(expected_path_len(0, 1), 0);
        assert_eq!(expected_path_len(0, 2), 1);
        assert_eq!(expected_path_len(2, 3), 1);
        assert_eq!(expected_path_len(4, 5), 1);
        assert_eq!(expected_path_len(0, 5), 3);
        assert_eq!(expected_path_len(6, 7), 2);
        assert_eq!(expected_path_len(3, 8), 3);
    }

    #[test]
    fn tampered_sibling_fails() {
        let data = chunks(6);
        let tree = MerkleTree::<Sha256Hasher>::from_chunks(&data).unwrap();
        let mut proof = tree.open(3).unwrap();
        proof.path[0].as_bytes_mut()[0] ^= 0x01;
        let err = proof.verify::<Sha256Hasher>(&tree.root(), &data[3]).unwrap_err();
        assert_eq!(err, MerkleError::VerificationFailed);
    }

    #[test]
    fn wrong_chunk_fails() {
        let data = chunks(4);
        let tree = MerkleTree::<Sha256Hasher>::from_chunks(&data).unwrap();
        let proof = tree.open(1).unwrap();
        let err = proof.verify::<Sha256Hasher>(&tree.root(), &data[2]).unwrap_err();
        assert_eq!(err, MerkleError::VerificationFailed);
    }

    #[test]
    fn shifted_index_fails() {
        let data = chunks(8);
        let tree = MerkleTree::<Sha256Hasher>::from_chunks(&data).unwrap();
        let mut proof = tree.open(4).unwrap();
        proof.leaf_index = 5;
        assert!(proof.verify::<Sha256Hasher>(&tree.root(), &data[4]).is_err());
    }

    #[test]
    fn truncated_path_reports_length() {
        let data = chunks(5);
        let tree = MerkleTree::<Sha256Hasher>::from_chunks(&data).unwrap();
        let mut proof = tree.open(0).unwrap();
        proof.path.pop();
        let err = proof.verify::<Sha256Hasher>(&tree.root(), &data[0]).unwrap_err();
        assert_eq!(
            err,
            MerkleError::InvalidPathLength {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn root_from_another_hasher_fails() {
        let data = chunks(4);
        let tree = MerkleTree::<Blake3Hasher>::from_chunks(&data).unwrap();
        let proof = tree.open(2).unwrap();
        proof.verify::<Blake3Hasher>(&tree.root(), &data[2]).unwrap();
        let err = proof.verify::<Sha256Hasher>(&tree.root(), &data[2]).unwrap_err();
        assert_eq!(err, MerkleError::VerificationFailed);
    }

    #[test]
    fn short_root_is_rejected() {
        let data = chunks(2);
        let tree = MerkleTree::<Sha256Hasher>::from_chunks(&data).unwrap();
        let proof = tree.open(0).unwrap();
        let err = proof
            .verify::<Sha256Hasher>(&Digest::new(vec![0u8; 20]), &data[0])
            .unwrap_err();
        assert_eq!(
            err,
            MerkleError::DigestSizeMismatch {
                expected: 32,
                got: 20
            }
        );
    }
}
