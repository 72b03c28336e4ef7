//! Slot contents and slot positions.

use std::fmt;

use matstore_core::Matrix;

/// Position of a slot within the registry.
///
/// Not a stable identity: a later insert may place a different matrix at
/// the same index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(pub usize);

impl SlotIndex {
    /// The raw index.
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for SlotIndex {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

/// One registry position: empty, or the sole owner of a matrix.
#[derive(Debug, Default)]
pub enum Slot {
    /// Nothing stored here.
    #[default]
    Empty,
    /// The slot owns this matrix.
    Occupied(Matrix),
}

impl Slot {
    /// Whether the slot holds a matrix.
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }

    /// The resident matrix, if any.
    pub fn matrix(&self) -> Option<&Matrix> {
        match self {
            Self::Occupied(m) => Some(m),
            Self::Empty => None,
        }
    }

    /// The resident matrix, mutably.
    pub fn matrix_mut(&mut self) -> Option<&mut Matrix> {
        match self {
            Self::Occupied(m) => Some(m),
            Self::Empty => None,
        }
    }

    /// Store `matrix`, returning the previous occupant.
    pub(crate) fn replace(&mut self, matrix: Matrix) -> Option<Matrix> {
        match std::mem::replace(self, Self::Occupied(matrix)) {
            Self::Occupied(old) => Some(old),
            Self::Empty => None,
        }
    }

    /// Empty the slot, returning the previous occupant.
    pub(crate) fn take(&mut self) -> Option<Matrix> {
        match std::mem::take(self) {
            Self::Occupied(old) => Some(old),
            Self::Empty => None,
        }
    }
}
