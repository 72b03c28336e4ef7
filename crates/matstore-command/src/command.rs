//! Command parsing.

use std::path::PathBuf;

use matstore_core::MatrixError;
use matstore_ops::ShiftDirection;
use smallvec::SmallVec;

/// A parsed command.
///
/// Every variant carries exactly the arguments its operation needs; the
/// parser rejects lines with too few or too many tokens.
///
/// # Examples
///
/// ```
/// use matstore_command::Command;
///
/// let cmd = Command::parse("create weights 3 4").unwrap();
/// assert_eq!(
///     cmd,
///     Command::Create { name: "weights".into(), rows: 3, cols: 4 }
/// );
///
/// // `equal` needs both operand names.
/// assert!(Command::parse("equal a").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `create <name> <rows> <cols>`
    Create {
        /// Name of the new matrix.
        name: String,
        /// Row count.
        rows: u32,
        /// Column count.
        cols: u32,
    },
    /// `display <name>`
    Display {
        /// Matrix to print.
        name: String,
    },
    /// `add <a> <b> <result>`
    Add {
        /// Left operand.
        a: String,
        /// Right operand.
        b: String,
        /// Name of the sum.
        result: String,
    },
    /// `duplicate <src> <dst>`
    Duplicate {
        /// Matrix to copy.
        src: String,
        /// Name of the copy.
        dst: String,
    },
    /// `equal <a> <b>`
    Equal {
        /// Left operand.
        a: String,
        /// Right operand.
        b: String,
    },
    /// `shift <name> <l|r> <amount>`
    Shift {
        /// Matrix to shift in place.
        name: String,
        /// Shift direction.
        direction: ShiftDirection,
        /// Bits to shift by.
        amount: u32,
    },
    /// `read <path>`
    Read {
        /// File to load.
        path: PathBuf,
    },
    /// `write <name>`
    Write {
        /// Matrix to save; also the file name.
        name: String,
    },
    /// `random <name> <low> <high>`
    Random {
        /// Matrix to fill in place.
        name: String,
        /// Inclusive lower bound.
        low: u32,
        /// Exclusive upper bound.
        high: u32,
    },
    /// `exit` or `quit`
    Exit,
}

type Tokens<'a> = SmallVec<[&'a str; 4]>;

/// Fail unless the line has exactly `expected` tokens, verb included.
fn expect_arity(tokens: &Tokens<'_>, expected: usize, usage: &str) -> Result<(), MatrixError> {
    if tokens.len() != expected {
        return Err(MatrixError::invalid(format!(
            "expected {} argument(s), got {}; usage: {usage}",
            expected - 1,
            tokens.len() - 1
        )));
    }
    Ok(())
}

fn parse_u32(token: &str, what: &str) -> Result<u32, MatrixError> {
    token
        .parse()
        .map_err(|e| MatrixError::invalid(format!("{what} {token:?} is not a valid number: {e}")))
}

impl Command {
    /// Tokenize `line` on whitespace and build a command.
    pub fn parse(line: &str) -> Result<Self, MatrixError> {
        let tokens: Tokens<'_> = line.split_whitespace().collect();
        let Some(&verb) = tokens.first() else {
            return Err(MatrixError::invalid("command is empty"));
        };

        let cmd = match verb {
            "create" => {
                expect_arity(&tokens, 4, "create <name> <rows> <cols>")?;
                Self::Create {
                    name: tokens[1].to_owned(),
                    rows: parse_u32(tokens[2], "rows")?,
                    cols: parse_u32(tokens[3], "cols")?,
                }
            }
            "display" => {
                expect_arity(&tokens, 2, "display <name>")?;
                Self::Display {
                    name: tokens[1].to_owned(),
                }
            }
            "add" => {
                expect_arity(&tokens, 4, "add <a> <b> <result>")?;
                Self::Add {
                    a: tokens[1].to_owned(),
                    b: tokens[2].to_owned(),
                    result: tokens[3].to_owned(),
                }
            }
            "duplicate" => {
                expect_arity(&tokens, 3, "duplicate <src> <dst>")?;
                Self::Duplicate {
                    src: tokens[1].to_owned(),
                    dst: tokens[2].to_owned(),
                }
            }
            "equal" => {
                expect_arity(&tokens, 3, "equal <a> <b>")?;
                Self::Equal {
                    a: tokens[1].to_owned(),
                    b: tokens[2].to_owned(),
                }
            }
            "shift" => {
                expect_arity(&tokens, 4, "shift <name> <l|r> <amount>")?;
                Self::Shift {
                    name: tokens[1].to_owned(),
                    direction: tokens[2].parse()?,
                    amount: parse_u32(tokens[3], "shift amount")?,
                }
            }
            "read" => {
                expect_arity(&tokens, 2, "read <path>")?;
                Self::Read {
                    path: PathBuf::from(tokens[1]),
                }
            }
            "write" => {
                expect_arity(&tokens, 2, "write <name>")?;
                Self::Write {
                    name: tokens[1].to_owned(),
                }
            }
            "random" => {
                expect_arity(&tokens, 4, "random <name> <low> <high>")?;
                Self::Random {
                    name: tokens[1].to_owned(),
                    low: parse_u32(tokens[2], "low")?,
                    high: parse_u32(tokens[3], "high")?,
                }
            }
            "exit" | "quit" => {
                expect_arity(&tokens, 1, verb)?;
                Self::Exit
            }
            other => {
                return Err(MatrixError::invalid(format!(
                    "{other:?} is not a command in this application"
                )))
            }
        };
        Ok(cmd)
    }
}
