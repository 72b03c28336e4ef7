//! Record encode/decode.
//!
//! All integers are native-endian `u32`. The name is stored with its NUL
//! terminator and the terminator is counted in `name_length`. There is no
//! magic number, version byte, or padding.

use std::io::Read;

use matstore_core::{Matrix, MatrixError, NAME_FIELD_LEN};

use crate::SENTINEL;

/// Elements decoded per `read_exact` call while loading the data block.
const DATA_CHUNK: usize = 1024;

/// Size in bytes of the record [`encode`] produces for `m`.
pub fn record_len(m: &Matrix) -> usize {
    4 + m.name().encoded_len() + 4 + 4 + 4 * m.len() + 1
}

// ── Encode ──────────────────────────────────────────────────────

/// Assemble the complete on-disk record for `m`.
///
/// The buffer is sized up front with [`record_len`] so callers can hand
/// it to a single write.
pub fn encode(m: &Matrix) -> Vec<u8> {
    let mut buf = Vec::with_capacity(record_len(m));

    buf.extend_from_slice(&(m.name().encoded_len() as u32).to_ne_bytes());
    buf.extend_from_slice(m.name().as_str().as_bytes());
    buf.push(0);

    buf.extend_from_slice(&m.rows().to_ne_bytes());
    buf.extend_from_slice(&m.cols().to_ne_bytes());
    for v in m.data() {
        buf.extend_from_slice(&v.to_ne_bytes());
    }

    buf.push(SENTINEL);
    debug_assert_eq!(buf.len(), record_len(m));
    buf
}

// ── Decode ──────────────────────────────────────────────────────

/// Fill `buf` completely or fail with a categorized I/O error.
///
/// Running out of input is reported as `IoReason::ShortTransfer`.
fn read_exact(r: &mut dyn Read, buf: &mut [u8]) -> Result<(), MatrixError> {
    r.read_exact(buf).map_err(MatrixError::io)
}

/// Read a native-endian u32.
fn read_u32_ne(r: &mut dyn Read) -> Result<u32, MatrixError> {
    let mut buf = [0u8; 4];
    read_exact(r, &mut buf)?;
    Ok(u32::from_ne_bytes(buf))
}

/// Read the length-prefixed, NUL-terminated name field.
fn read_name(r: &mut dyn Read) -> Result<String, MatrixError> {
    let name_len = read_u32_ne(r)? as usize;
    if !(2..=NAME_FIELD_LEN).contains(&name_len) {
        return Err(MatrixError::invalid(format!(
            "name length {name_len} outside 2..={NAME_FIELD_LEN}"
        )));
    }

    let mut field = [0u8; NAME_FIELD_LEN];
    let field = &mut field[..name_len];
    read_exact(r, field)?;

    let (body, terminator) = field.split_at(name_len - 1);
    if terminator[0] != 0 {
        return Err(MatrixError::invalid("name field is not NUL-terminated"));
    }
    let name = std::str::from_utf8(body)
        .map_err(|e| MatrixError::invalid(format!("name is not UTF-8: {e}")))?;
    Ok(name.to_owned())
}

/// Validate a decoded shape and return its element count.
fn data_len(rows: u32, cols: u32) -> Result<usize, MatrixError> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::invalid(format!(
            "dimensions must be positive, got ({rows},{cols})"
        )));
    }
    (rows as usize)
        .checked_mul(cols as usize)
        .ok_or_else(|| MatrixError::invalid(format!("shape ({rows},{cols}) overflows")))
}

/// Decode one record from `r`.
///
/// The matrix is built through [`Matrix::from_data`], so the decoded name
/// and dimensions are held to the same rules as a freshly created matrix.
/// The data block is buffered one chunk at a time as input arrives, so a
/// header declaring a huge shape over a short stream costs at most one
/// chunk before failing. Every field must be read in full; a truncated
/// stream fails with `IoReason::ShortTransfer`. Bytes after the sentinel
/// are not consumed.
pub fn decode(r: &mut dyn Read) -> Result<Matrix, MatrixError> {
    let name = read_name(r)?;
    let rows = read_u32_ne(r)?;
    let cols = read_u32_ne(r)?;
    let len = data_len(rows, cols)?;

    let mut data: Vec<u32> = Vec::new();
    let mut bytes = [0u8; DATA_CHUNK * 4];
    while data.len() < len {
        let n = (len - data.len()).min(DATA_CHUNK);
        let bytes = &mut bytes[..n * 4];
        read_exact(r, bytes)?;
        data.try_reserve(n)
            .map_err(|_| MatrixError::AllocationFailure { elements: len })?;
        data.extend(
            bytes
                .chunks_exact(4)
                .map(|b| u32::from_ne_bytes([b[0], b[1], b[2], b[3]])),
        );
    }

    let mut sentinel = [0u8; 1];
    read_exact(r, &mut sentinel)?;
    if sentinel[0] != SENTINEL {
        return Err(MatrixError::invalid(format!(
            "trailing byte is {:#04x}, expected {SENTINEL:#04x}",
            sentinel[0]
        )));
    }

    Matrix::from_data(name, rows, cols, data)
}
