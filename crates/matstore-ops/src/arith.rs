//! Element-wise addition.

use matstore_core::{Matrix, MatrixError};

/// `a + b` into a new matrix called `name`.
///
/// Both dimensions must match exactly; otherwise the result is
/// [`MatrixError::DimensionMismatch`]. Sums wrap on `u32` overflow.
pub fn add(a: &Matrix, b: &Matrix, name: impl AsRef<str>) -> Result<Matrix, MatrixError> {
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    let mut c = Matrix::new(name, a.rows(), a.cols())?;
    for ((out, x), y) in c.data_mut().iter_mut().zip(a.data()).zip(b.data()) {
        *out = x.wrapping_add(*y);
    }
    Ok(c)
}
