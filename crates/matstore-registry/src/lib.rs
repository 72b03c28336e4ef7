//! Fixed-capacity slot table that owns every resident matrix.
//!
//! # Architecture
//!
//! ```text
//! MatrixRegistry
//! ├── RegistryConfig (capacity, fixed at construction)
//! ├── Slot × capacity (Empty | Occupied(Matrix))
//! └── insertion counter (u64, monotonic, owned by the instance)
//! ```
//!
//! # Eviction
//!
//! Insertion writes to slot `counter % capacity` and then bumps the
//! counter. Whatever occupied that slot is dropped. Reads never affect the
//! choice, so this is round-robin overwrite, not LRU. Slot indices are
//! positions, not identities: re-resolve by name after any insert.
//!
//! # Ownership
//!
//! A slot is the sole owner of its [`Matrix`](matstore_core::Matrix).
//! Mutation needs `&mut MatrixRegistry`; callers sharing a registry across
//! threads must wrap it in a lock, since the counter bump and slot write
//! are not one atomic step.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod registry;
pub mod slot;

pub use config::RegistryConfig;
pub use registry::MatrixRegistry;
pub use slot::{Slot, SlotIndex};
