use std::marker::PhantomData;

use super::proof::MerkleProof;
use super::traits::MerkleHasher;
use super::types::{Digest, MerkleError};

/// Binary Merkle tree over an ordered sequence of chunks.
///
/// All levels are kept so that openings do not rehash the leaves. Level `0`
/// holds the leaf digests and the last level holds the root alone.
pub struct MerkleTree<H: MerkleHasher> {
    levels: Vec<Vec<H::Digest>>,
    root: H::Digest,
    marker: PhantomData<H>,
}

impl<H: MerkleHasher> MerkleTree<H> {
    /// Hashes `chunks` in order and builds every level up to the root.
    pub fn from_chunks<I, B>(chunks: I) -> Result<Self, MerkleError>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let leaves: Vec<H::Digest> = chunks
            .into_iter()
            .map(|chunk| H::hash_leaf(chunk.as_ref()))
            .collect();
        if leaves.is_empty() {
            return Err(MerkleError::EmptyLeaves);
        }

        let mut levels = vec![leaves];
        loop {
            let current = match levels.last() {
                Some(level) if level.len() > 1 => level,
                _ => break,
            };
            let next = reduce_level::<H>(current);
            levels.push(next);
        }

        let root = levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .ok_or(MerkleError::EmptyLeaves)?;

        Ok(Self {
            levels,
            root,
            marker: PhantomData,
        })
    }

    /// Returns the root digest.
    pub fn root(&self) -> Digest {
        convert_digest::<H>(&self.root)
    }

    /// Number of leaves committed by the tree.
    pub fn leaf_count(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }

    /// Number of levels including the leaf level and the root level.
    pub fn height(&self) -> usize {
        self.levels.len()
    }

    /// Produces the inclusion proof for the leaf at `index`.
    ///
    /// Levels where the node on the path has no right neighbour contribute no
    /// sibling, mirroring how [`reduce_level`] carries such nodes upward.
    pub fn open(&self, index: usize) -> Result<MerkleProof, MerkleError> {
        let leaf_count = self.leaf_count();
        if index >= leaf_count {
            return Err(MerkleError::IndexOutOfRange { index, leaf_count });
        }

        let inner = match self.levels.split_last() {
            Some((_, inner)) => inner,
            None => return Err(MerkleError::EmptyLeaves),
        };

        let mut path = Vec::with_capacity(inner.len());
        let mut position = index;
        for level in inner {
            if let Some(sibling) = level.get(position ^ 1) {
                path.push(convert_digest::<H>(sibling));
            }
            position /= 2;
        }

        Ok(MerkleProof {
            root: self.root(),
            path,
            leaf_index: index,
            leaf_count,
        })
    }
}

/// Combines adjacent nodes pairwise. A trailing unpaired node moves up to the
/// next level unchanged.
fn reduce_level<H: MerkleHasher>(level: &[H::Digest]) -> Vec<H::Digest> {
    level
        .chunks(2)
        .map(|pair| match pair {
            [left, right] => H::hash_nodes(left, right),
            _ => pair[0],
        })
        .collect()
}

pub(crate) fn convert_digest<H: MerkleHasher>(digest: &H::Digest) -> Digest {
    Digest::new(digest.as_ref().to_vec())
}

/// Computes the Merkle root of `chunks`.
pub fn compute_root<H, I, B>(chunks: I) -> Result<Digest, MerkleError>
where
    H: MerkleHasher,
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    MerkleTree::<H>::from_chunks(chunks).map(|tree| tree.root())
}

/// Builds the tree over `chunks` and opens the leaf at `index`.
pub fn prove<H, I, B>(chunks: I, index: usize) -> Result<MerkleProof, MerkleError>
where
    H: MerkleHasher,
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    MerkleTree::<H>::from_chunks(chunks)?.open(index)
}
