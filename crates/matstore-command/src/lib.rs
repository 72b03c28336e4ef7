//! Text command surface for matstore.
//!
//! Turns one line of input into a [`Command`], then runs it against a
//! [`Dispatcher`] that owns the registry. Each command maps to exactly one
//! core operation:
//!
//! ```text
//! create <name> <rows> <cols>     display <name>
//! add <a> <b> <result>            duplicate <src> <dst>
//! equal <a> <b>                   shift <name> <l|r> <amount>
//! read <path>                     write <name>
//! random <name> <low> <high>      exit
//! ```
//!
//! Failures come back as [`MatrixError`](matstore_core::MatrixError);
//! successes as an [`Outcome`] whose `Display` is the user-facing message.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod config;
pub mod dispatch;
pub mod outcome;

pub use command::Command;
pub use config::DispatchConfig;
pub use dispatch::{Dispatcher, SCRATCH_NAME};
pub use outcome::Outcome;
