//! Benchmark fixtures for the matstore crates.
//!
//! - [`random_matrix`]: a seeded, fully populated matrix of any shape
//! - [`SQUARE_SIZES`]: edge lengths the size-sweeping benches iterate over

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use matstore_core::{Matrix, MatrixError};
use matstore_ops::{random_fill, MatrixRng};

/// Square edge lengths swept by the encode/decode and arithmetic benches.
pub const SQUARE_SIZES: [u32; 3] = [8, 64, 256];

/// Build a `rows x cols` matrix filled from the full `u32` range.
///
/// The same `seed` always produces the same contents.
pub fn random_matrix(name: &str, rows: u32, cols: u32, seed: u64) -> Result<Matrix, MatrixError> {
    let mut m = Matrix::new(name, rows, cols)?;
    random_fill(&mut m, 0, u32::MAX, &mut MatrixRng::seeded(seed))?;
    Ok(m)
}
