//! Committed data square.
//!
//! A [`DataSquare`] is a `width × width` grid of equal-sized chunks. It can be
//! grown by appending filler chunks, read and written one row or column
//! slice at a time, and committed to with one Merkle root per row and per
//! column. Inclusion proofs for individual chunks are produced on demand from
//! the live data.
//!
//! The square is the storage layer of a data-availability scheme. Computing
//! parity for the filler cells and distributing chunks and proofs are left to
//! the caller.
//!
//! ```
//! use data_square::{DataSquare, Sha256Hasher};
//!
//! let chunks = vec![vec![1u8; 8], vec![2u8; 8], vec![3u8; 8], vec![4u8; 8]];
//! let mut square: DataSquare = DataSquare::new(chunks)?;
//! square.extend(2, &[0u8; 8])?;
//!
//! let roots = square.row_roots()?.to_vec();
//! let proof = square.row_proof(0, 1)?;
//! proof.verify::<Sha256Hasher>(&roots[0], square.cell(0, 1)?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod hash;
pub mod merkle;
pub mod square;
mod utils;

pub use config::{ConfigError, SquareConfig, SquareConfigBuilder};
pub use hash::{Blake2sHasher, Blake3Hasher, HashFamily, Sha256Hasher};
pub use merkle::{Digest, MerkleError, MerkleHasher, MerkleProof};
pub use square::{Axis, Chunk, DataSquare, SquareError, SquareResult};
