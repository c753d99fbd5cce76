use blake2::{Blake2s256, Digest};

use super::{to_digest_array, HashFamily, DIGEST_SIZE};
use crate::merkle::MerkleHasher;

/// Blake2s-256 backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake2sHasher;

impl MerkleHasher for Blake2sHasher {
    type Digest = [u8; DIGEST_SIZE];

    fn hash_leaf_with_tag(leaf_domain_tag: u8, chunk: &[u8]) -> Self::Digest {
        let mut hasher = Blake2s256::new();
        hasher.update([leaf_domain_tag]);
        hasher.update(chunk);
        to_digest_array(&hasher.finalize())
    }

    fn hash_nodes_with_tag(
        node_domain_tag: u8,
        left: &Self::Digest,
        right: &Self::Digest,
    ) -> Self::Digest {
        let mut hasher = Blake2s256::new();
        hasher.update([node_domain_tag]);
        hasher.update(left);
        hasher.update(right);
        to_digest_array(&hasher.finalize())
    }

    fn digest_size() -> usize {
        DIGEST_SIZE
    }

    fn from_bytes(bytes: &[u8]) -> Option<Self::Digest> {
        bytes.try_into().ok()
    }

    fn hash_family() -> HashFamily {
        HashFamily::Blake2s
    }
}
