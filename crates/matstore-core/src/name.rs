//! Validated matrix names.

use std::fmt;

use crate::error::MatrixError;
use crate::NAME_FIELD_LEN;

/// A matrix name that fits the fixed 50-byte name field.
///
/// The field stores the name followed by a NUL terminator, so a valid
/// name is 1 to `NAME_FIELD_LEN - 1` bytes long and contains no NUL.
///
/// # Examples
///
/// ```
/// use matstore_core::MatrixName;
///
/// let name = MatrixName::new("weights").unwrap();
/// assert_eq!(name.as_str(), "weights");
/// assert_eq!(name.encoded_len(), 8);
///
/// assert!(MatrixName::new("").is_err());
/// assert!(MatrixName::new("x".repeat(50)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatrixName(String);

impl MatrixName {
    /// Validate and wrap a name.
    pub fn new(name: impl AsRef<str>) -> Result<Self, MatrixError> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(MatrixError::invalid("matrix name is empty"));
        }
        if name.contains('\0') {
            return Err(MatrixError::invalid(format!(
                "matrix name {name:?} contains a NUL byte"
            )));
        }
        if name.len() + 1 > NAME_FIELD_LEN {
            return Err(MatrixError::invalid(format!(
                "matrix name is {} bytes, limit is {}",
                name.len(),
                NAME_FIELD_LEN - 1
            )));
        }
        Ok(Self(name.to_owned()))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length on disk: name bytes plus the terminator.
    pub fn encoded_len(&self) -> usize {
        self.0.len() + 1
    }
}

impl AsRef<str> for MatrixName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatrixName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for MatrixName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MatrixName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
