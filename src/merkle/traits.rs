use crate::hash::{HashFamily, LEAF_DOMAIN_TAG, NODE_DOMAIN_TAG};

/// Hash abstraction used by the Merkle commitment engine.
///
/// Implementors only provide the tagged primitives; the untagged helpers fix
/// the leaf and node domain tags used everywhere in the crate.
pub trait MerkleHasher {
    type Digest: AsRef<[u8]> + Eq + Copy + Clone + Send + Sync;

    fn hash_leaf(chunk: &[u8]) -> Self::Digest {
        Self::hash_leaf_with_tag(LEAF_DOMAIN_TAG, chunk)
    }

    fn hash_nodes(left: &Self::Digest, right: &Self::Digest) -> Self::Digest {
        Self::hash_nodes_with_tag(NODE_DOMAIN_TAG, left, right)
    }

    fn hash_leaf_with_tag(leaf_domain_tag: u8, chunk: &[u8]) -> Self::Digest;

    fn hash_nodes_with_tag(
        node_domain_tag: u8,
        left: &Self::Digest,
        right: &Self::Digest,
    ) -> Self::Digest;

    fn digest_size() -> usize;

    fn from_bytes(bytes: &[u8]) -> Option<Self::Digest>;

    fn hash_family() -> HashFamily;
}
