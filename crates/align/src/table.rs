//! Longest-common-subsequence table.
//!
//! [`LcsTable`] stores the full dynamic-programming grid, not just its final
//! cell: backtracking and the difference rate both read arbitrary cells.

/// Dense `(|A|+1) × (|B|+1)` LCS grid stored row-major.
///
/// Cell `(i, j)` holds the LCS length of the first `i` items of `A` and the
/// first `j` items of `B`. Row 0 and column 0 are zero. The table is
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    /// Builds the table for `a` and `b` in O(|A|·|B|) time and space.
    ///
    /// ```
    /// use align::LcsTable;
    ///
    /// let table = LcsTable::build(&["a", "b", "c"], &["a", "c"]);
    /// assert_eq!(table.lcs_len(), 2);
    /// assert_eq!(table.get(1, 1), 1);
    /// ```
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0u32; rows * cols];

        for i in 1..rows {
            // Borrow the previous row immutably and the current row mutably.
            let (before, rest) = cells.split_at_mut(i * cols);
            let prev = &before[(i - 1) * cols..];
            let cur = &mut rest[..cols];
            let left_item = &a[i - 1];

            for j in 1..cols {
                cur[j] = if *left_item == b[j - 1] {
                    prev[j - 1] + 1
                } else {
                    prev[j].max(cur[j - 1])
                };
            }
        }

        Self { rows, cols, cells }
    }

    /// Number of cells a table for sequences of these lengths would hold,
    /// or `None` if that count overflows `usize`.
    pub fn cell_count(a_len: usize, b_len: usize) -> Option<usize> {
        a_len.checked_add(1)?.checked_mul(b_len.checked_add(1)?)
    }

    /// `|A| + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `|B| + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value of cell `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({i}, {j}) out of bounds for {}x{} table",
            self.rows,
            self.cols
        );
        self.cells[i * self.cols + j]
    }

    /// LCS length of the complete sequences (the bottom-right cell).
    pub fn lcs_len(&self) -> usize {
        self.cells[self.cells.len() - 1] as usize
    }
}
