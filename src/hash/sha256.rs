//! SHA-256 Merkle hasher.

use sha2::{Digest, Sha256};

use super::{to_digest_array, HashFamily, DIGEST_SIZE};
use crate::merkle::MerkleHasher;

/// SHA-256 backend, the default for [`DataSquare`](crate::DataSquare).
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl MerkleHasher for Sha256Hasher {
    type Digest = [u8; DIGEST_SIZE];

    fn hash_leaf_with_tag(leaf_domain_tag: u8, chunk: &[u8]) -> Self::Digest {
        let mut hasher = Sha256::new();
        hasher.update([leaf_domain_tag]);
        hasher.update(chunk);
        to_digest_array(&hasher.finalize())
    }

    fn hash_nodes_with_tag(
        node_domain_tag: u8,
        left: &Self::Digest,
        right: &Self::Digest,
    ) -> Self::Digest {
        let mut hasher = Sha256::new();
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
        HashFamily::Sha256
    }
}
