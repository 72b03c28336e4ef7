//! Row-oriented text dump.

use matstore_core::Matrix;

/// One line per row, elements separated by single spaces.
///
/// Pure read. The full dump with name and dimensions is rendered by
/// `matstore_command::Outcome::Displayed` from these rows.
pub fn display(m: &Matrix) -> Vec<String> {
    m.rows_iter()
        .map(|row| {
            row.iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
