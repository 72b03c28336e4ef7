//! matstore: an in-process store of small integer matrices.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all matstore sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use matstore::prelude::*;
//!
//! let mut reg = MatrixRegistry::new(RegistryConfig::default());
//!
//! let mut a = Matrix::new("a", 2, 2).unwrap();
//! random_fill(&mut a, 1, 10, &mut MatrixRng::seeded(42)).unwrap();
//! let b = duplicate(&a, "b").unwrap();
//! assert!(equal(&a, &b));
//!
//! let c = add(&a, &b, "c").unwrap();
//! reg.insert(a).unwrap();
//! reg.insert(b).unwrap();
//! reg.insert(c).unwrap();
//!
//! let c = reg.get_by_name("c").unwrap();
//! let bytes = matstore::codec::encode(c);
//! let back = matstore::codec::decode(&mut bytes.as_slice()).unwrap();
//! assert!(equal(c, &back));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `matstore-core` | `Matrix`, `MatrixName`, `MatrixError` |
//! | [`registry`] | `matstore-registry` | Round-robin slot table |
//! | [`codec`] | `matstore-codec` | Binary file format |
//! | [`ops`] | `matstore-ops` | Equality, add, shift, random fill |
//! | [`command`] | `matstore-command` | Text commands and dispatcher |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Matrix entity, names, and errors (`matstore-core`).
pub use matstore_core as types;

/// Fixed-capacity round-robin registry (`matstore-registry`).
pub use matstore_registry as registry;

/// Binary record encode/decode and file I/O (`matstore-codec`).
pub use matstore_codec as codec;

/// Stateless element-wise operations (`matstore-ops`).
pub use matstore_ops as ops;

/// Command parsing and dispatch (`matstore-command`).
pub use matstore_command as command;

/// Common imports for typical matstore usage.
pub mod prelude {
    // Core types
    pub use matstore_core::{IoReason, Matrix, MatrixError, MatrixName};

    // Registry
    pub use matstore_registry::{MatrixRegistry, RegistryConfig, Slot, SlotIndex};

    // Codec
    pub use matstore_codec::{read_matrix, write_matrix};

    // Ops
    pub use matstore_ops::{
        add, bitwise_shift, display, duplicate, equal, random_fill, MatrixRng, ShiftDirection,
    };

    // Commands
    pub use matstore_command::{Command, DispatchConfig, Dispatcher, Outcome};
}
