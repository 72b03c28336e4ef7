//! Uniform random fill.
//!
//! Uses a seeded ChaCha8 generator so a given seed always produces the
//! same matrix contents.

use matstore_core::{Matrix, MatrixError};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{trace, warn};

/// Random source for [`random_fill`].
#[derive(Clone, Debug)]
pub struct MatrixRng(ChaCha8Rng);

impl MatrixRng {
    /// Deterministic generator for `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generator seeded from the thread-local RNG.
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

impl RngCore for MatrixRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.0.fill_bytes(dst)
    }
}

/// Overwrite every element of `m` with a uniform draw from `[low, high)`.
///
/// Inverted bounds are swapped once and the fill proceeds with the
/// corrected range, so `(5, 2)` behaves exactly like `(2, 5)`. Equal
/// bounds describe an empty range and are rejected with
/// [`MatrixError::InvalidArgument`].
pub fn random_fill<R: Rng>(
    m: &mut Matrix,
    low: u32,
    high: u32,
    rng: &mut R,
) -> Result<(), MatrixError> {
    let (low, high) = if low > high {
        warn!(low, high, "random range inverted, swapping bounds");
        (high, low)
    } else {
        (low, high)
    };
    if low == high {
        return Err(MatrixError::invalid(format!(
            "random range [{low}, {high}) is empty"
        )));
    }
    trace!(name = %m.name(), low, high, "filling matrix");
    for v in m.data_mut() {
        *v = rng.random_range(low..high);
    }
    Ok(())
}
