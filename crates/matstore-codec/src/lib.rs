//! Binary matrix file format for matstore.
//!
//! One file holds one matrix. The layout is fixed and byte-exact so that
//! files written by earlier tools stay readable:
//!
//! ```text
//! [name_length u32] [name bytes + NUL] [rows u32] [cols u32]
//! [data u32 × rows*cols, row-major] [sentinel u8 = 0xFF]
//! ```
//!
//! Integers use the host's native byte order. Files are therefore only
//! portable between hosts of the same endianness.
//!
//! - [`encode`] assembles a complete record in memory
//! - [`decode`] parses a record from any `Read` source
//! - [`write_matrix`] and [`read_matrix`] do the same against a path

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod file;

pub use codec::{decode, encode, record_len};
pub use file::{read_matrix, write_matrix};

/// Trailing marker byte: C's `EOF` (-1) truncated to a byte.
pub const SENTINEL: u8 = 0xFF;
