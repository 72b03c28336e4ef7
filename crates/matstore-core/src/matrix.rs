//! The [`Matrix`] entity.
//!
//! A matrix owns its name, its dimensions, and a row-major buffer of
//! `rows * cols` unsigned 32-bit elements. Construction either fully
//! succeeds or returns an error; there is no partially initialized state.
//! `Matrix` is not `Clone`: copies go through
//! `matstore_ops::duplicate`, and destruction is `Drop`.

use crate::error::MatrixError;
use crate::name::MatrixName;

/// A named, dense, row-major matrix of `u32` elements.
///
/// Element `(r, c)` lives at linear offset `r * cols + c`.
///
/// # Examples
///
/// ```
/// use matstore_core::Matrix;
///
/// let mut m = Matrix::new("grid", 2, 3).unwrap();
/// assert_eq!(m.len(), 6);
/// assert!(m.data().iter().all(|&v| v == 0));
///
/// m.set(1, 2, 7).unwrap();
/// assert_eq!(m.get(1, 2), Some(7));
/// assert_eq!(m.data()[5], 7);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Matrix {
    name: MatrixName,
    rows: u32,
    cols: u32,
    data: Vec<u32>,
}

impl Matrix {
    /// Create a zero-filled matrix.
    ///
    /// Fails with [`MatrixError::InvalidArgument`] for an invalid name, a
    /// zero dimension, or a shape whose element count overflows `usize`,
    /// and with [`MatrixError::AllocationFailure`] if the buffer cannot be
    /// reserved.
    pub fn new(name: impl AsRef<str>, rows: u32, cols: u32) -> Result<Self, MatrixError> {
        let name = MatrixName::new(name)?;
        let len = element_count(rows, cols)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrixError::AllocationFailure { elements: len })?;
        data.resize(len, 0);
        Ok(Self {
            name,
            rows,
            cols,
            data,
        })
    }

    /// Create a matrix from an existing row-major buffer.
    ///
    /// `data.len()` must equal `rows * cols`.
    pub fn from_data(
        name: impl AsRef<str>,
        rows: u32,
        cols: u32,
        data: Vec<u32>,
    ) -> Result<Self, MatrixError> {
        let name = MatrixName::new(name)?;
        let len = element_count(rows, cols)?;
        if data.len() != len {
            return Err(MatrixError::invalid(format!(
                "buffer holds {} elements, shape ({rows},{cols}) needs {len}",
                data.len()
            )));
        }
        Ok(Self {
            name,
            rows,
            cols,
            data,
        })
    }

    /// The matrix name.
    pub fn name(&self) -> &MatrixName {
        &self.name
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// Number of elements (`rows * cols`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: both dimensions are at least one.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major element buffer.
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Mutable row-major element buffer. Its length cannot change.
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Linear offset of `(row, col)`, or `None` if out of bounds.
    pub fn offset(&self, row: u32, col: u32) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    /// Element at `(row, col)`.
    pub fn get(&self, row: u32, col: u32) -> Option<u32> {
        self.offset(row, col).map(|i| self.data[i])
    }

    /// Overwrite the element at `(row, col)`.
    pub fn set(&mut self, row: u32, col: u32, value: u32) -> Result<(), MatrixError> {
        let i = self.offset(row, col).ok_or_else(|| {
            MatrixError::invalid(format!(
                "({row},{col}) is outside ({},{})",
                self.rows, self.cols
            ))
        })?;
        self.data[i] = value;
        Ok(())
    }

    /// One row as a slice.
    pub fn row(&self, row: u32) -> Option<&[u32]> {
        if row >= self.rows {
            return None;
        }
        let start = row as usize * self.cols as usize;
        Some(&self.data[start..start + self.cols as usize])
    }

    /// Rows in order, each as a slice of `cols` elements.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.data.chunks_exact(self.cols as usize)
    }
}

/// Validate a shape and return its element count.
fn element_count(rows: u32, cols: u32) -> Result<usize, MatrixError> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::invalid(format!(
            "dimensions must be positive, got ({rows},{cols})"
        )));
    }
    (rows as usize)
        .checked_mul(cols as usize)
        .ok_or_else(|| MatrixError::invalid(format!("shape ({rows},{cols}) overflows")))
}
