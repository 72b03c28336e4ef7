//! Path-level read and write.
//!
//! Every `std::io::Error` raised here is classified exactly once, via
//! [`MatrixError::io`], before it leaves the crate.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::Path;

use matstore_core::{Matrix, MatrixError};
use tracing::{debug, warn};

use crate::codec::{decode, encode};

/// Classify an I/O failure on `path` and log it.
fn io_failure(op: &'static str, path: &Path, err: std::io::Error) -> MatrixError {
    let err = MatrixError::io(err);
    warn!(op, path = %path.display(), error = %err, "matrix file I/O failed");
    err
}

/// Write `m` to `path`, creating or truncating the file.
///
/// The whole record is assembled before anything touches the file, then
/// handed to the OS in one `write_all`. A write that stops early surfaces
/// as `IoReason::ShortTransfer`.
pub fn write_matrix(path: impl AsRef<Path>, m: &Matrix) -> Result<(), MatrixError> {
    let path = path.as_ref();
    let record = encode(m);

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options
        .open(path)
        .map_err(|e| io_failure("open", path, e))?;
    file.write_all(&record)
        .map_err(|e| io_failure("write", path, e))?;
    file.flush().map_err(|e| io_failure("flush", path, e))?;

    debug!(path = %path.display(), name = %m.name(), bytes = record.len(), "wrote matrix");
    Ok(())
}

/// Read one matrix from `path`.
///
/// Open failures and short reads are `MatrixError::Io`; a record whose
/// name or dimensions would not pass [`Matrix::from_data`] is
/// `MatrixError::InvalidArgument`.
pub fn read_matrix(path: impl AsRef<Path>) -> Result<Matrix, MatrixError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_failure("open", path, e))?;
    let mut reader = BufReader::new(file);

    let m = decode(&mut reader)?;
    debug!(path = %path.display(), name = %m.name(), rows = m.rows(), cols = m.cols(), "read matrix");
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use matstore_core::IoReason;
    use matstore_test_utils::{scratch_dir, sequential_matrix};

    #[test]
    fn write_then_read() {
        let dir = scratch_dir();
        let path = dir.path().join("seq");
        let m = sequential_matrix("seq", 4, 5);
        write_matrix(&path, &m).unwrap();
        assert_eq!(read_matrix(&path).unwrap(), m);
    }

    #[test]
    fn write_truncates_existing_file() {
        let dir = scratch_dir();
        let path = dir.path().join("t");
        write_matrix(&path, &sequential_matrix("big", 8, 8)).unwrap();
        let small = sequential_matrix("small", 1, 1);
        write_matrix(&path, &small).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, encode(&small));
    }

    #[test]
    fn missing_file_is_classified() {
        let dir = scratch_dir();
        let err = read_matrix(dir.path().join("absent")).unwrap_err();
        assert_eq!(err.io_reason(), Some(IoReason::Missing));
    }

    #[test]
    fn truncated_file_is_short_transfer() {
        let dir = scratch_dir();
        let path = dir.path().join("cut");
        let full = encode(&sequential_matrix("cut", 3, 3));
        std::fs::write(&path, &full[..full.len() - 5]).unwrap();
        let err = read_matrix(&path).unwrap_err();
        assert_eq!(err.io_reason(), Some(IoReason::ShortTransfer));
    }

    #[test]
    fn writing_into_missing_directory_fails() {
        let dir = scratch_dir();
        let path = dir.path().join("no/such/dir/m");
        let err = write_matrix(&path, &sequential_matrix("m", 1, 1)).unwrap_err();
        assert_eq!(err.io_reason(), Some(IoReason::Missing));
    }

    #[test]
    fn reading_a_directory_fails_with_io() {
        let dir = scratch_dir();
        let err = read_matrix(dir.path()).unwrap_err();
        assert!(matches!(err, MatrixError::Io { .. }));
    }
}
