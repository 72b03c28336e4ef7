//! Stateless operations over [`Matrix`](matstore_core::Matrix) values.
//!
//! Nothing here touches the registry: callers resolve operands by name,
//! run an operation, and insert any newly produced matrix themselves.
//!
//! | Operation | Result |
//! |-----------|--------|
//! | [`equal`] | `bool`, element-wise comparison |
//! | [`duplicate`] | new matrix, verified copy |
//! | [`add`] | new matrix, wrapping element-wise sum |
//! | [`bitwise_shift`] | in place, `<<` or `>>` on every element |
//! | [`random_fill`] | in place, uniform draws from `[low, high)` |
//! | [`display`] | one formatted string per row |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arith;
pub mod compare;
pub mod display;
pub mod random;
pub mod shift;

pub use arith::add;
pub use compare::{duplicate, equal};
pub use display::display;
pub use random::{random_fill, MatrixRng};
pub use shift::{bitwise_shift, ShiftDirection};
