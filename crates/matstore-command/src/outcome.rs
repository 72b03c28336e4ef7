//! Successful command results.

use std::fmt;
use std::path::PathBuf;

use matstore_ops::ShiftDirection;
use matstore_registry::SlotIndex;

/// What a command did. `Display` renders the message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A new matrix was created and stored.
    Created {
        /// Matrix name.
        name: String,
        /// Row count.
        rows: u32,
        /// Column count.
        cols: u32,
        /// Slot it landed in.
        slot: SlotIndex,
    },
    /// A matrix dump.
    Displayed {
        /// Matrix name.
        name: String,
        /// `(rows, cols)`.
        shape: (u32, u32),
        /// One formatted line per row.
        rows: Vec<String>,
    },
    /// `a + b` was stored as `result`.
    Added {
        /// Left operand.
        a: String,
        /// Right operand.
        b: String,
        /// Name of the sum.
        result: String,
    },
    /// `src` was copied into `dst`.
    Duplicated {
        /// Source name.
        src: String,
        /// Copy name.
        dst: String,
    },
    /// Result of an element-wise comparison.
    Compared {
        /// Whether both matrices hold the same data.
        same: bool,
    },
    /// A matrix was shifted in place.
    Shifted {
        /// Matrix name.
        name: String,
        /// Shift direction.
        direction: ShiftDirection,
        /// Bits shifted.
        amount: u32,
    },
    /// A matrix was loaded from disk and stored.
    Loaded {
        /// Name recorded in the file.
        name: String,
        /// File it came from.
        path: PathBuf,
    },
    /// A matrix was saved to disk.
    Saved {
        /// Matrix name.
        name: String,
        /// File written.
        path: PathBuf,
    },
    /// A matrix was filled with random values.
    Randomized {
        /// Matrix name.
        name: String,
        /// Lower bound actually used.
        low: u32,
        /// Upper bound actually used.
        high: u32,
    },
    /// The session should end.
    Exit,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created {
                name, rows, cols, ..
            } => write!(f, "Created Matrix ({name},{rows},{cols})"),
            Self::Displayed { name, shape, rows } => {
                writeln!(f, "Matrix Contents ({name}):")?;
                write!(f, "DIM = ({},{})", shape.0, shape.1)?;
                for row in rows {
                    write!(f, "\n{row}")?;
                }
                Ok(())
            }
            Self::Added { a, b, result } => write!(f, "Added {a} with {b} into {result}"),
            Self::Duplicated { src, dst } => {
                write!(f, "Duplication of {src} into {dst} finished")
            }
            Self::Compared { same: true } => f.write_str("SAME DATA IN BOTH"),
            Self::Compared { same: false } => f.write_str("DIFFERENT DATA IN BOTH"),
            Self::Shifted {
                name,
                direction,
                amount,
            } => write!(f, "Matrix ({name}) has been shifted {direction} by {amount}"),
            Self::Loaded { name, path } => write!(
                f,
                "Matrix ({name}) is read from the filesystem ({})",
                path.display()
            ),
            Self::Saved { name, path } => write!(
                f,
                "Matrix ({name}) is written out to the filesystem ({})",
                path.display()
            ),
            Self::Randomized { name, low, high } => {
                write!(f, "Matrix ({name}) is randomized between {low} {high}")
            }
            Self::Exit => f.write_str("Goodbye"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_message() {
        let o = Outcome::Created {
            name: "m".into(),
            rows: 2,
            cols: 3,
            slot: SlotIndex(0),
        };
        assert_eq!(o.to_string(), "Created Matrix (m,2,3)");
    }

    #[test]
    fn displayed_message() {
        let o = Outcome::Displayed {
            name: "m".into(),
            shape: (2, 2),
            rows: vec!["1 2".into(), "3 4".into()],
        };
        assert_eq!(o.to_string(), "Matrix Contents (m):\nDIM = (2,2)\n1 2\n3 4");
    }

    #[test]
    fn compared_messages() {
        assert_eq!(Outcome::Compared { same: true }.to_string(), "SAME DATA IN BOTH");
        assert_eq!(
            Outcome::Compared { same: false }.to_string(),
            "DIFFERENT DATA IN BOTH"
        );
    }
}
