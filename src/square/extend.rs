use std::iter;

use tracing::debug;

use super::{DataSquare, SquareError, SquareResult};
use crate::merkle::MerkleHasher;

impl<H: MerkleHasher> DataSquare<H> {
    /// Grows the square from `width` to `width + by`, filling every new cell
    /// with a copy of `filler`.
    ///
    /// Existing cells keep their `(row, col)` coordinates. The filler cells
    /// are placeholders only; callers overwrite them with parity through
    /// [`set_row_slice`](Self::set_row_slice) and
    /// [`set_column_slice`](Self::set_column_slice). The square does not
    /// remember which cells still hold filler.
    pub fn extend(&mut self, by: usize, filler: &[u8]) -> SquareResult<()> {
        if by == 0 {
            return Err(SquareError::InvalidShape {
                reason: "extension must grow the square",
            });
        }
        if filler.len() != self.chunk_size {
            return Err(SquareError::InvalidChunkSize {
                expected: self.chunk_size,
                got: filler.len(),
            });
        }
        let max = self.config.width_limit();
        let new_width = match self.width.checked_add(by) {
            Some(width) if width <= max => width,
            Some(width) => {
                return Err(SquareError::WidthLimitExceeded {
                    requested: width,
                    max,
                })
            }
            None => {
                return Err(SquareError::WidthLimitExceeded {
                    requested: usize::MAX,
                    max,
                })
            }
        };
        let total = new_width
            .checked_mul(new_width)
            .ok_or(SquareError::WidthLimitExceeded {
                requested: new_width,
                max,
            })?;

        let old_width = self.width;
        let mut old_cells = std::mem::take(&mut self.cells).into_iter();
        let mut cells = Vec::with_capacity(total);
        for _ in 0..old_width {
            cells.extend(old_cells.by_ref().take(old_width));
            cells.extend(iter::repeat_with(|| filler.to_vec()).take(by));
        }
        cells.extend(iter::repeat_with(|| filler.to_vec()).take(by * new_width));

        self.cells = cells;
        self.width = new_width;
        self.roots.invalidate();

        debug!(old_width, new_width, "extended data square");
        Ok(())
    }
}
