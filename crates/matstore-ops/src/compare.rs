//! Equality and duplication.

use matstore_core::{Matrix, MatrixError};

/// Whether `a` and `b` hold the same elements.
///
/// Names are ignored. Matrices of different shape are never equal, even
/// when their element counts agree.
pub fn equal(a: &Matrix, b: &Matrix) -> bool {
    a.shape() == b.shape() && a.data() == b.data()
}

/// Copy `src` into a new matrix called `name`.
///
/// # Panics
///
/// If the copy does not compare [`equal`] to `src`. That can only be a
/// bug in the copy itself, never bad input.
pub fn duplicate(src: &Matrix, name: impl AsRef<str>) -> Result<Matrix, MatrixError> {
    let mut dst = Matrix::new(name, src.rows(), src.cols())?;
    dst.data_mut().copy_from_slice(src.data());
    assert!(equal(src, &dst), "duplicate of {} diverged", src.name());
    Ok(dst)
}
