//! The committed data square.
//!
//! Cells are stored once, row-major. Row access borrows a contiguous slice of
//! the backing vector; column access strides across rows and therefore
//! returns a vector of references instead.
//!
//! Every public accessor validates its indices and every write validates
//! chunk sizes before touching a cell, so a rejected call leaves the square
//! unchanged.

mod axis;
mod cache;
mod error;
mod extend;

use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use crate::config::SquareConfig;
use crate::hash::Sha256Hasher;
use crate::merkle::MerkleHasher;

pub use axis::Axis;
pub use error::{SquareError, SquareResult};

use cache::RootCache;

/// Fixed-length opaque byte buffer, the square's unit of data.
pub type Chunk = Vec<u8>;

/// Square grid of equal-sized chunks with lazily computed row and column
/// Merkle roots.
///
/// The hasher `H` defaults to SHA-256.
pub struct DataSquare<H: MerkleHasher = Sha256Hasher> {
    cells: Vec<Chunk>,
    width: usize,
    chunk_size: usize,
    config: SquareConfig,
    roots: RootCache,
    marker: PhantomData<fn() -> H>,
}

impl<H: MerkleHasher> Clone for DataSquare<H> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            width: self.width,
            chunk_size: self.chunk_size,
            config: self.config.clone(),
            roots: self.roots.clone(),
            marker: PhantomData,
        }
    }
}

impl<H: MerkleHasher> fmt::Debug for DataSquare<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSquare")
            .field("width", &self.width)
            .field("chunk_size", &self.chunk_size)
            .field("hash", &H::hash_family())
            .field("row_roots_cached", &self.roots_cached(Axis::Row))
            .field("column_roots_cached", &self.roots_cached(Axis::Column))
            .finish()
    }
}

impl<H: MerkleHasher> DataSquare<H> {
    /// Lays `chunks` out row-major using the default configuration.
    pub fn new(chunks: Vec<Chunk>) -> SquareResult<Self> {
        Self::with_config(chunks, SquareConfig::default())
    }

    /// Lays `chunks` out row-major: row `i` holds
    /// `chunks[i * width..(i + 1) * width]`.
    pub fn with_config(chunks: Vec<Chunk>, config: SquareConfig) -> SquareResult<Self> {
        config.validate()?;
        if let Some(expected) = config.hash_family {
            if expected != H::hash_family() {
                return Err(SquareError::HashFamilyMismatch {
                    expected,
                    got: H::hash_family(),
                });
            }
        }

        let count = chunks.len();
        if count == 0 {
            return Err(SquareError::InvalidShape {
                reason: "no chunks supplied",
            });
        }
        let width = integer_sqrt(count);
        if width * width != count {
            return Err(SquareError::InvalidShape {
                reason: "chunk count is not a perfect square",
            });
        }
        if width > config.width_limit() {
            return Err(SquareError::WidthLimitExceeded {
                requested: width,
                max: config.width_limit(),
            });
        }

        let chunk_size = chunks[0].len();
        if chunk_size == 0 {
            return Err(SquareError::InvalidShape {
                reason: "chunks must not be empty",
            });
        }
        if let Some(chunk) = chunks.iter().find(|chunk| chunk.len() != chunk_size) {
            return Err(SquareError::InvalidChunkSize {
                expected: chunk_size,
                got: chunk.len(),
            });
        }

        debug!(width, chunk_size, hash = %H::hash_family(), "constructed data square");
        Ok(Self {
            cells: chunks,
            width,
            chunk_size,
            config,
            roots: RootCache::default(),
            marker: PhantomData,
        })
    }

    /// Number of chunks per row and per column.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Byte length of every chunk.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn config(&self) -> &SquareConfig {
        &self.config
    }

    /// Returns `len` chunks of `row` starting at column `start`.
    pub fn row_slice(&self, row: usize, start: usize, len: usize) -> SquareResult<&[Chunk]> {
        self.check_index(Axis::Row, row)?;
        self.check_range(Axis::Column, start, len)?;
        let base = row * self.width + start;
        Ok(&self.cells[base..base + len])
    }

    /// Returns `len` chunks of `col` starting at row `start`.
    pub fn column_slice(
        &self,
        col: usize,
        start: usize,
        len: usize,
    ) -> SquareResult<Vec<&Chunk>> {
        self.check_index(Axis::Column, col)?;
        self.check_range(Axis::Row, start, len)?;
        Ok(self.column_chunks(col).skip(start).take(len).collect())
    }

    /// Axis-generic form of [`row_slice`](Self::row_slice) and
    /// [`column_slice`](Self::column_slice).
    pub fn axis_slice(
        &self,
        axis: Axis,
        index: usize,
        start: usize,
        len: usize,
    ) -> SquareResult<Vec<&Chunk>> {
        match axis {
            Axis::Row => Ok(self.row_slice(index, start, len)?.iter().collect()),
            Axis::Column => self.column_slice(index, start, len),
        }
    }

    pub fn row(&self, row: usize) -> SquareResult<&[Chunk]> {
        self.row_slice(row, 0, self.width)
    }

    pub fn column(&self, col: usize) -> SquareResult<Vec<&Chunk>> {
        self.column_slice(col, 0, self.width)
    }

    pub fn cell(&self, row: usize, col: usize) -> SquareResult<&Chunk> {
        self.check_index(Axis::Row, row)?;
        self.check_index(Axis::Column, col)?;
        Ok(&self.cells[row * self.width + col])
    }

    /// Row-major copy of every cell.
    pub fn flattened(&self) -> Vec<Chunk> {
        self.cells.clone()
    }

    /// Consumes the square and returns its cells in row-major order.
    pub fn into_flattened(self) -> Vec<Chunk> {
        self.cells
    }

    /// Overwrites cells `start..start + chunks.len()` of `row`.
    ///
    /// Cached roots are cleared even when the new content equals the old.
    pub fn set_row_slice(
        &mut self,
        row: usize,
        start: usize,
        chunks: Vec<Chunk>,
    ) -> SquareResult<()> {
        self.check_index(Axis::Row, row)?;
        self.check_range(Axis::Column, start, chunks.len())?;
        self.check_chunk_sizes(&chunks)?;

        let base = row * self.width + start;
        for (cell, chunk) in self.cells[base..base + chunks.len()].iter_mut().zip(chunks) {
            *cell = chunk;
        }
        self.roots.invalidate();
        Ok(())
    }

    /// Overwrites cells `start..start + chunks.len()` of `col`.
    pub fn set_column_slice(
        &mut self,
        col: usize,
        start: usize,
        chunks: Vec<Chunk>,
    ) -> SquareResult<()> {
        self.check_index(Axis::Column, col)?;
        self.check_range(Axis::Row, start, chunks.len())?;
        self.check_chunk_sizes(&chunks)?;

        let width = self.width;
        for (offset, chunk) in chunks.into_iter().enumerate() {
            self.cells[(start + offset) * width + col] = chunk;
        }
        self.roots.invalidate();
        Ok(())
    }

    pub fn set_axis_slice(
        &mut self,
        axis: Axis,
        index: usize,
        start: usize,
        chunks: Vec<Chunk>,
    ) -> SquareResult<()> {
        match axis {
            Axis::Row => self.set_row_slice(index, start, chunks),
            Axis::Column => self.set_column_slice(index, start, chunks),
        }
    }

    pub fn set_cell(&mut self, row: usize, col: usize, chunk: Chunk) -> SquareResult<()> {
        self.set_row_slice(row, col, vec![chunk])
    }

    /// Iterates the chunks of `row`. The index must already be validated.
    pub(crate) fn row_chunks(&self, row: usize) -> std::slice::Iter<'_, Chunk> {
        let base = row * self.width;
        self.cells[base..base + self.width].iter()
    }

    /// Iterates the chunks of `col` by striding across rows. The index must
    /// already be validated.
    pub(crate) fn column_chunks(&self, col: usize) -> impl Iterator<Item = &Chunk> + '_ {
        self.cells.iter().skip(col).step_by(self.width)
    }

    pub(crate) fn check_index(&self, axis: Axis, index: usize) -> SquareResult<()> {
        if index >= self.width {
            return Err(SquareError::IndexOutOfRange {
                axis,
                index,
                width: self.width,
            });
        }
        Ok(())
    }

    fn check_range(&self, axis: Axis, start: usize, len: usize) -> SquareResult<()> {
        match start.checked_add(len) {
            Some(end) if end <= self.width => Ok(()),
            _ => {
                let index = if start >= self.width {
                    start
                } else {
                    start.saturating_add(len - 1)
                };
                Err(SquareError::IndexOutOfRange {
                    axis,
                    index,
                    width: self.width,
                })
            }
        }
    }

    fn check_chunk_sizes(&self, chunks: &[Chunk]) -> SquareResult<()> {
        match chunks.iter().find(|chunk| chunk.len() != self.chunk_size) {
            Some(chunk) => Err(SquareError::InvalidChunkSize {
                expected: self.chunk_size,
                got: chunk.len(),
            }),
            None => Ok(()),
        }
    }
}

/// Largest `r` with `r * r <= n`.
fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root.checked_mul(root).map_or(true, |square| square > n) {
        root -= 1;
    }
    while (root + 1)
        .checked_mul(root + 1)
        .is_some_and(|square| square <= n)
    {
        root += 1;
    }
    root
}
