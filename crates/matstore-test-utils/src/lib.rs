//! Test fixtures for matstore development.
//!
//! Matrix builders with predictable contents and a scratch directory
//! helper for codec tests that touch the filesystem.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use matstore_core::Matrix;
use tempfile::TempDir;

/// Matrix whose element `i` (row-major) holds `i`.
pub fn sequential_matrix(name: &str, rows: u32, cols: u32) -> Matrix {
    let data = (0..rows * cols).collect();
    Matrix::from_data(name, rows, cols, data).expect("fixture shape is valid")
}

/// Matrix with every element set to `value`.
pub fn constant_matrix(name: &str, rows: u32, cols: u32, value: u32) -> Matrix {
    let data = vec![value; (rows * cols) as usize];
    Matrix::from_data(name, rows, cols, data).expect("fixture shape is valid")
}

/// `count` 1x1 matrices named `{prefix}0`, `{prefix}1`, ...
///
/// Matrix `i` holds the single value `i`.
pub fn named_batch(prefix: &str, count: usize) -> Vec<Matrix> {
    (0..count)
        .map(|i| {
            Matrix::from_data(format!("{prefix}{i}"), 1, 1, vec![i as u32])
                .expect("fixture shape is valid")
        })
        .collect()
}

/// Fresh temporary directory, removed on drop.
pub fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("create scratch dir")
}
