//! Error types shared by every matstore crate.
//!
//! One taxonomy covers the whole store: bad caller input, allocation
//! failure, lookup misses, shape violations, and categorized I/O failures.
//! Failures never leave a partially constructed [`Matrix`](crate::Matrix)
//! behind.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors returned by matrix construction, registry, codec, and ops calls.
#[derive(Debug)]
pub enum MatrixError {
    /// Malformed or out-of-range caller input.
    InvalidArgument {
        /// Human-readable description of what was rejected.
        reason: String,
    },
    /// The element buffer could not be reserved.
    AllocationFailure {
        /// Number of `u32` elements requested.
        elements: usize,
    },
    /// No registry slot holds a matrix with this name.
    NotFound {
        /// The name that was looked up.
        name: String,
    },
    /// Operand shapes disagree for an elementwise operation.
    DimensionMismatch {
        /// `(rows, cols)` of the left operand.
        left: (u32, u32),
        /// `(rows, cols)` of the right operand.
        right: (u32, u32),
    },
    /// An open, read, or write failed.
    Io {
        /// Category of the failure.
        reason: IoReason,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl MatrixError {
    /// Shorthand for [`MatrixError::InvalidArgument`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Build an [`MatrixError::Io`] from a raw I/O error, classifying it.
    pub fn io(source: io::Error) -> Self {
        Self::Io {
            reason: IoReason::classify(&source),
            source,
        }
    }

    /// The I/O category, if this is an I/O failure.
    pub fn io_reason(&self) -> Option<IoReason> {
        match self {
            Self::Io { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::AllocationFailure { elements } => {
                write!(f, "failed to allocate {elements} matrix elements")
            }
            Self::NotFound { name } => write!(f, "matrix ({name}) doesn't exist"),
            Self::DimensionMismatch { left, right } => write!(
                f,
                "dimension mismatch: ({},{}) vs ({},{})",
                left.0, left.1, right.0, right.1
            ),
            Self::Io { reason, source } => write!(f, "I/O error ({reason}): {source}"),
        }
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Category of an I/O failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IoReason {
    /// The process lacks permission for the path.
    PermissionDenied,
    /// The descriptor was invalid for the attempted operation.
    BadDescriptor,
    /// The target already exists.
    AlreadyExists,
    /// A read or write moved fewer bytes than the record requires.
    ShortTransfer,
    /// The path does not exist.
    Missing,
    /// Any other failure reported by the operating system.
    Other,
}

/// `EBADF` on every Unix the store targets.
const EBADF: i32 = 9;

impl IoReason {
    /// Map an [`io::Error`] onto a category.
    pub fn classify(err: &io::Error) -> Self {
        if err.raw_os_error() == Some(EBADF) {
            return Self::BadDescriptor;
        }
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::AlreadyExists => Self::AlreadyExists,
            io::ErrorKind::UnexpectedEof | io::ErrorKind::WriteZero => Self::ShortTransfer,
            io::ErrorKind::NotFound => Self::Missing,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for IoReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PermissionDenied => "permission denied",
            Self::BadDescriptor => "bad file descriptor",
            Self::AlreadyExists => "already exists",
            Self::ShortTransfer => "short transfer",
            Self::Missing => "no such file",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_kind() {
        let cases = [
            (io::ErrorKind::PermissionDenied, IoReason::PermissionDenied),
            (io::ErrorKind::AlreadyExists, IoReason::AlreadyExists),
            (io::ErrorKind::UnexpectedEof, IoReason::ShortTransfer),
            (io::ErrorKind::WriteZero, IoReason::ShortTransfer),
            (io::ErrorKind::NotFound, IoReason::Missing),
            (io::ErrorKind::InvalidData, IoReason::Other),
        ];
        for (kind, expected) in cases {
            let err = io::Error::from(kind);
            assert_eq!(IoReason::classify(&err), expected, "{kind:?}");
        }
    }

    #[test]
    fn classify_bad_descriptor_from_os_code() {
        let err = io::Error::from_raw_os_error(EBADF);
        assert_eq!(IoReason::classify(&err), IoReason::BadDescriptor);
    }

    #[test]
    fn io_error_exposes_source() {
        let err = MatrixError::io(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert_eq!(err.io_reason(), Some(IoReason::ShortTransfer));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("short transfer"));
    }

    #[test]
    fn non_io_errors_have_no_reason() {
        let err = MatrixError::NotFound { name: "a".into() };
        assert_eq!(err.io_reason(), None);
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "matrix (a) doesn't exist");
    }

    #[test]
    fn dimension_mismatch_display() {
        let err = MatrixError::DimensionMismatch {
            left: (2, 3),
            right: (2, 4),
        };
        assert_eq!(err.to_string(), "dimension mismatch: (2,3) vs (2,4)");
    }
}
