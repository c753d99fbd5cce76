//! BLAKE3 Merkle hasher.
//!
//! The leaf and node framing is applied on top of the plain BLAKE3 hash
//! rather than through BLAKE3's keyed or derive-key modes, so the three
//! backends share one construction.

use super::{HashFamily, DIGEST_SIZE};
use crate::merkle::MerkleHasher;

/// BLAKE3 backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl MerkleHasher for Blake3Hasher {
    type Digest = [u8; DIGEST_SIZE];

    fn hash_leaf_with_tag(leaf_domain_tag: u8, chunk: &[u8]) -> Self::Digest {
        let mut hasher = ::blake3::Hasher::new();
        hasher.update(&[leaf_domain_tag]);
        hasher.update(chunk);
        *hasher.finalize().as_bytes()
    }

    fn hash_nodes_with_tag(
        node_domain_tag: u8,
        left: &Self::Digest,
        right: &Self::Digest,
    ) -> Self::Digest {
        let mut hasher = ::blake3::Hasher::new();
        hasher.update(&[node_domain_tag]);
        hasher.update(left);
        hasher.update(right);
        *hasher.finalize().as_bytes()
    }

    fn digest_size() -> usize {
        DIGEST_SIZE
    }

    fn from_bytes(bytes: &[u8]) -> Option<Self::Digest> {
        bytes.try_into().ok()
    }

    fn hash_family() -> HashFamily {
        HashFamily::Blake3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_hash_matches_framed_blake3() {
        let expected = ::blake3::hash(&[0x00, 0xaa, 0xbb]);
        assert_eq!(&Blake3Hasher::hash_leaf(&[0xaa, 0xbb]), expected.as_bytes());
    }
}
