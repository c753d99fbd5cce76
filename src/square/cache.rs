//! Lazily computed row and column commitments.
//!
//! Roots are cached per axis in a [`OnceLock`]. Readers take `&self` and only
//! ever observe a complete vector. Every mutation goes through `&mut self`
//! and clears both caches before returning.

use std::sync::OnceLock;

use tracing::{debug, trace};

use super::{Axis, DataSquare, SquareResult};
use crate::merkle::{compute_root, prove, Digest, MerkleHasher, MerkleProof};
use crate::utils::parallel::map_indices;

#[derive(Debug, Clone, Default)]
pub(crate) struct RootCache {
    rows: OnceLock<Vec<Digest>>,
    columns: OnceLock<Vec<Digest>>,
}

impl RootCache {
    fn slot(&self, axis: Axis) -> &OnceLock<Vec<Digest>> {
        match axis {
            Axis::Row => &self.rows,
            Axis::Column => &self.columns,
        }
    }

    pub(crate) fn get(&self, axis: Axis) -> Option<&[Digest]> {
        self.slot(axis).get().map(Vec::as_slice)
    }

    /// Stores freshly computed roots. If another reader won the race its
    /// vector is kept; both were computed from the same cells.
    fn store(&self, axis: Axis, roots: Vec<Digest>) -> &[Digest] {
        self.slot(axis).get_or_init(|| roots)
    }

    pub(crate) fn invalidate(&mut self) {
        let had_rows = self.rows.take().is_some();
        let had_columns = self.columns.take().is_some();
        if had_rows || had_columns {
            trace!(had_rows, had_columns, "invalidated cached roots");
        }
    }
}

impl<H: MerkleHasher> DataSquare<H> {
    /// Merkle roots of every row, top to bottom.
    pub fn row_roots(&self) -> SquareResult<&[Digest]> {
        self.axis_roots(Axis::Row)
    }

    /// Merkle roots of every column, left to right.
    pub fn column_roots(&self) -> SquareResult<&[Digest]> {
        self.axis_roots(Axis::Column)
    }

    /// Roots along `axis`, computed on first use after construction or the
    /// last mutation.
    pub fn axis_roots(&self, axis: Axis) -> SquareResult<&[Digest]> {
        if let Some(roots) = self.roots.get(axis) {
            return Ok(roots);
        }
        let computed = self.compute_axis_roots(axis)?;
        Ok(self.roots.store(axis, computed))
    }

    /// Reports whether roots along `axis` are currently cached.
    pub fn roots_cached(&self, axis: Axis) -> bool {
        self.roots.get(axis).is_some()
    }

    fn compute_axis_roots(&self, axis: Axis) -> SquareResult<Vec<Digest>> {
        debug!(
            %axis,
            width = self.width,
            hash = %H::hash_family(),
            "computing axis roots"
        );
        map_indices(self.width, self.config.parallel_roots, |index| {
            self.axis_root(axis, index)
        })
        .into_iter()
        .collect()
    }

    fn axis_root(&self, axis: Axis, index: usize) -> SquareResult<Digest> {
        let root = match axis {
            Axis::Row => compute_root::<H, _, _>(self.row_chunks(index))?,
            Axis::Column => compute_root::<H, _, _>(self.column_chunks(index))?,
        };
        Ok(root)
    }

    /// Inclusion proof of cell `(row, col)` against the root of `row`.
    ///
    /// Always built from the live row, never from the cache.
    pub fn row_proof(&self, row: usize, col: usize) -> SquareResult<MerkleProof> {
        self.check_index(Axis::Row, row)?;
        self.check_index(Axis::Column, col)?;
        Ok(prove::<H, _, _>(self.row_chunks(row), col)?)
    }

    /// Inclusion proof of cell `(row, col)` against the root of `col`.
    pub fn column_proof(&self, row: usize, col: usize) -> SquareResult<MerkleProof> {
        self.check_index(Axis::Row, row)?;
        self.check_index(Axis::Column, col)?;
        Ok(prove::<H, _, _>(self.column_chunks(col), row)?)
    }

    /// Proof of cell `(row, col)` against the root of its row or column.
    pub fn axis_proof(&self, axis: Axis, row: usize, col: usize) -> SquareResult<MerkleProof> {
        match axis {
            Axis::Row => self.row_proof(row, col),
            Axis::Column => self.column_proof(row, col),
        }
    }
}
