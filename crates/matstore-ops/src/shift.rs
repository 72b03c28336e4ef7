//! In-place bit shifts.

use std::fmt;
use std::str::FromStr;

use matstore_core::{Matrix, MatrixError};
use tracing::trace;

/// Direction of a [`bitwise_shift`].
///
/// Parsing accepts `l`/`left` and `r`/`right`, case-insensitively.
/// Anything else is rejected, so an unrecognized token can never reach
/// the shift itself.
///
/// # Examples
///
/// ```
/// use matstore_ops::ShiftDirection;
///
/// assert_eq!("l".parse::<ShiftDirection>().unwrap(), ShiftDirection::Left);
/// assert_eq!("Right".parse::<ShiftDirection>().unwrap(), ShiftDirection::Right);
/// assert!("x".parse::<ShiftDirection>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShiftDirection {
    /// `elem << amount`.
    Left,
    /// `elem >> amount`.
    Right,
}

impl FromStr for ShiftDirection {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(Self::Left),
            "r" | "right" => Ok(Self::Right),
            _ => Err(MatrixError::invalid(format!(
                "shift direction {s:?} is not one of l, r"
            ))),
        }
    }
}

impl TryFrom<char> for ShiftDirection {
    type Error = MatrixError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'l' => Ok(Self::Left),
            'r' => Ok(Self::Right),
            _ => Err(MatrixError::invalid(format!(
                "shift direction {c:?} is not one of l, r"
            ))),
        }
    }
}

impl fmt::Display for ShiftDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Shift every element of `m` by `amount` bits.
///
/// `amount` must be below 32; shifting a `u32` by its full width or more
/// is rejected with [`MatrixError::InvalidArgument`] and leaves `m`
/// untouched.
pub fn bitwise_shift(
    m: &mut Matrix,
    direction: ShiftDirection,
    amount: u32,
) -> Result<(), MatrixError> {
    if amount >= u32::BITS {
        return Err(MatrixError::invalid(format!(
            "shift amount {amount} must be below {}",
            u32::BITS
        )));
    }
    trace!(name = %m.name(), %direction, amount, "shifting matrix");
    let data = m.data_mut();
    match direction {
        ShiftDirection::Left => data.iter_mut().for_each(|v| *v <<= amount),
        ShiftDirection::Right => data.iter_mut().for_each(|v| *v >>= amount),
    }
    Ok(())
}
