//! Hash backends for the square's Merkle commitments.
//!
//! Every backend implements [`MerkleHasher`](crate::merkle::MerkleHasher) and
//! applies the same framing:
//!
//! * leaves are hashed as `H(LEAF_DOMAIN_TAG || chunk)`,
//! * internal nodes are hashed as `H(NODE_DOMAIN_TAG || left || right)`.
//!
//! The one byte tags keep a 64 byte chunk from ever colliding with the
//! concatenation of two child digests.
//!
//! * [`sha256`] – SHA-256 through the `sha2` crate. This is the default.
//! * [`blake2s`] – Blake2s-256 through the `blake2` crate.
//! * [`blake3`] – BLAKE3 through the `blake3` crate.

pub mod blake2s;
pub mod blake3;
pub mod sha256;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use self::blake2s::Blake2sHasher;
pub use self::blake3::Blake3Hasher;
pub use self::sha256::Sha256Hasher;

/// Domain tag prepended to every leaf before hashing.
pub const LEAF_DOMAIN_TAG: u8 = 0x00;

/// Domain tag prepended to every pair of children before hashing.
pub const NODE_DOMAIN_TAG: u8 = 0x01;

/// Size in bytes of the digests produced by the bundled backends.
pub const DIGEST_SIZE: usize = 32;

/// Hash families known to the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashFamily {
    /// SHA-256.
    #[default]
    Sha256,
    /// Blake2s with a 256 bit output.
    Blake2s,
    /// BLAKE3 with a 256 bit output.
    Blake3,
}

impl HashFamily {
    /// Lower-case name used in logs and configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            HashFamily::Sha256 => "sha256",
            HashFamily::Blake2s => "blake2s",
            HashFamily::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for HashFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Copies a 32 byte hash output into a fixed array.
///
/// Backends whose output type is not already `[u8; 32]` funnel through here.
pub(crate) fn to_digest_array(output: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut bytes = [0u8; DIGEST_SIZE];
    bytes.copy_from_slice(&output[..DIGEST_SIZE]);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_names_match_serde_representation() {
        for family in [HashFamily::Sha256, HashFamily::Blake2s, HashFamily::Blake3] {
            let encoded = serde_json::to_string(&family).unwrap();
            assert_eq!(encoded, format!("\"{}\"", family.name()));
        }
    }

    #[test]
    fn leaf_and_node_tags_differ() {
        assert_ne!(LEAF_DOMAIN_TAG, NODE_DOMAIN_TAG);
    }
}
