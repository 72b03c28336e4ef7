//! The round-robin [`MatrixRegistry`].

use matstore_core::{Matrix, MatrixError};
use tracing::debug;

use crate::config::RegistryConfig;
use crate::slot::{Slot, SlotIndex};

/// Fixed-capacity table of matrices with round-robin overwrite.
///
/// # Examples
///
/// ```
/// use matstore_core::Matrix;
/// use matstore_registry::{MatrixRegistry, RegistryConfig, SlotIndex};
///
/// let mut reg = MatrixRegistry::new(RegistryConfig::new(2));
/// reg.insert(Matrix::new("a", 1, 1).unwrap()).unwrap();
/// reg.insert(Matrix::new("b", 1, 1).unwrap()).unwrap();
///
/// // Third insert wraps around and evicts "a".
/// let slot = reg.insert(Matrix::new("c", 1, 1).unwrap()).unwrap();
/// assert_eq!(slot, SlotIndex(0));
/// assert!(reg.find_by_name("a").is_err());
/// assert_eq!(reg.find_by_name("b").unwrap(), SlotIndex(1));
/// ```
#[derive(Debug)]
pub struct MatrixRegistry {
    slots: Vec<Slot>,
    insertions: u64,
}

impl MatrixRegistry {
    /// Create an empty registry.
    pub fn new(config: RegistryConfig) -> Self {
        let mut slots = Vec::with_capacity(config.capacity);
        slots.resize_with(config.capacity, Slot::default);
        Self {
            slots,
            insertions: 0,
        }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots currently holding a matrix.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_occupied()).count()
    }

    /// Total successful inserts since construction.
    pub fn insertions(&self) -> u64 {
        self.insertions
    }

    /// The slot the next insert will target, or `None` at zero capacity.
    pub fn next_slot(&self) -> Option<SlotIndex> {
        if self.slots.is_empty() {
            return None;
        }
        Some(SlotIndex((self.insertions % self.slots.len() as u64) as usize))
    }

    /// Take ownership of `matrix`, storing it at `counter % capacity`.
    ///
    /// Any previous occupant of that slot is destroyed. Fails with
    /// [`MatrixError::InvalidArgument`] when the capacity is zero, in which
    /// case `matrix` is dropped and the counter is unchanged.
    pub fn insert(&mut self, matrix: Matrix) -> Result<SlotIndex, MatrixError> {
        let slot = self
            .next_slot()
            .ok_or_else(|| MatrixError::invalid("registry capacity is zero"))?;

        debug!(
            slot = slot.0,
            counter = self.insertions,
            name = %matrix.name(),
            "inserting matrix"
        );
        if let Some(evicted) = self.slots[slot.0].replace(matrix) {
            debug!(slot = slot.0, name = %evicted.name(), "evicted matrix");
        }
        self.insertions += 1;
        Ok(slot)
    }

    /// First slot, in slot order, whose matrix name equals `name` exactly.
    ///
    /// An empty `name` never matches. A prefix of a resident name does not
    /// match it.
    pub fn find_by_name(&self, name: &str) -> Result<SlotIndex, MatrixError> {
        if !name.is_empty() {
            for (i, slot) in self.slots.iter().enumerate() {
                if let Some(m) = slot.matrix() {
                    if m.name().as_str() == name {
                        return Ok(SlotIndex(i));
                    }
                }
            }
        }
        Err(MatrixError::NotFound {
            name: name.to_owned(),
        })
    }

    /// The matrix at `slot`, if the slot exists and is occupied.
    pub fn get(&self, slot: SlotIndex) -> Option<&Matrix> {
        self.slots.get(slot.0).and_then(Slot::matrix)
    }

    /// The matrix at `slot`, mutably.
    pub fn get_mut(&mut self, slot: SlotIndex) -> Option<&mut Matrix> {
        self.slots.get_mut(slot.0).and_then(Slot::matrix_mut)
    }

    /// Look up a matrix by exact name.
    pub fn get_by_name(&self, name: &str) -> Result<&Matrix, MatrixError> {
        let slot = self.find_by_name(name)?;
        self.get(slot).ok_or_else(|| MatrixError::NotFound {
            name: name.to_owned(),
        })
    }

    /// Look up a matrix by exact name, mutably.
    pub fn get_by_name_mut(&mut self, name: &str) -> Result<&mut Matrix, MatrixError> {
        let slot = self.find_by_name(name)?;
        self.get_mut(slot).ok_or_else(|| MatrixError::NotFound {
            name: name.to_owned(),
        })
    }

    /// All slots in order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Occupied slots in order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, &Matrix)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.matrix().map(|m| (SlotIndex(i), m)))
    }

    /// Destroy every resident matrix. Returns how many were destroyed.
    ///
    /// The insertion counter is left as is, so round-robin placement
    /// continues from where it was.
    pub fn destroy_all(&mut self) -> usize {
        let destroyed = self.slots.iter_mut().filter_map(Slot::take).count();
        debug!(destroyed, "destroyed all matrices");
        destroyed
    }
}

impl Default for MatrixRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}
