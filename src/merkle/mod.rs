//! Binary Merkle commitment engine for rows and columns of the square.
//!
//! The module fixes the following convention, shared by root computation,
//! proof generation and proof verification:
//!
//! * **Leaf encoding:** a chunk becomes the leaf `H(0x00 || chunk)`. No
//!   length prefix or index tag is added; chunk sizes are fixed per square.
//! * **Internal nodes:** `H(0x01 || left || right)`.
//! * **Odd levels:** nodes are paired left to right. When a level has an odd
//!   number of nodes the last one is carried to the next level as is, without
//!   hashing or duplication.
//! * **Proof path:** sibling digests from the leaf level upward. Levels where
//!   the path node was carried contribute no sibling, so the path length is a
//!   function of `leaf_index` and `leaf_count` alone.
//!
//! The [`MerkleHasher`] trait keeps the engine independent of the hash
//! family; concrete backends live in [`crate::hash`].

mod proof;
pub mod traits;
mod tree;
mod types;

pub use proof::{compute_root_from_path, expected_path_len, MerkleProof};
pub use traits::MerkleHasher;
pub use tree::{compute_root, prove, MerkleTree};
pub use types::{Digest, MerkleError};
