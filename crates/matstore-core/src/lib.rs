//! Core types for the matstore matrix store.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the [`Matrix`] entity, the validated [`MatrixName`], and the single
//! [`MatrixError`] taxonomy shared by the registry, codec, and ops crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod matrix;
pub mod name;

pub use error::{IoReason, MatrixError};
pub use matrix::Matrix;
pub use name::MatrixName;

/// Size in bytes of the fixed name field, terminator included.
///
/// A name may hold at most `NAME_FIELD_LEN - 1` bytes.
pub const NAME_FIELD_LEN: usize = 50;

/// Number of registry slots used by the command surface.
pub const DEFAULT_CAPACITY: usize = 10;
