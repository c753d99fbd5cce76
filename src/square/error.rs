use crate::config::ConfigError;
use crate::hash::HashFamily;
use crate::merkle::MerkleError;

use super::Axis;

/// Result type used by every fallible square operation.
pub type SquareResult<T> = Result<T, SquareError>;

/// Errors surfaced by the data square.
///
/// Every variant is raised before any cell is modified, so a failed call
/// leaves the square exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// The chunk count is zero or not a perfect square, the chunks are
    /// empty, or an extension would not grow the square.
    #[error("invalid square shape: {reason}")]
    InvalidShape { reason: &'static str },
    /// A chunk does not have the square's fixed length.
    #[error("invalid chunk size: expected {expected} bytes, got {got}")]
    InvalidChunkSize { expected: usize, got: usize },
    /// A row, column or slice bound falls outside `[0, width)`.
    #[error("{axis} index {index} out of range for width {width}")]
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        width: usize,
    },
    #[error("width {requested} exceeds the configured maximum of {max}")]
    WidthLimitExceeded { requested: usize, max: usize },
    #[error("hash family mismatch: configured {expected}, hasher is {got}")]
    HashFamilyMismatch {
        expected: HashFamily,
        got: HashFamily,
    },
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Merkle(#[from] MerkleError),
}
