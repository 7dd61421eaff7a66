//! Binary-content heuristic used to skip files before scanning.
//!
//! Mirrors `git grep -I -e .`: a file is binary when a NUL byte appears in
//! its first 8000 bytes, and a text file is only listed when at least one of
//! its lines is non-empty.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Number of leading bytes inspected for a NUL, as git does.
const FIRST_FEW_BYTES: usize = 8000;

#[must_use]
pub fn is_binary(bytes: &[u8]) -> bool {
    bytes[..bytes.len().min(FIRST_FEW_BYTES)].contains(&0)
}

/// True when some line has at least one character.
#[must_use]
pub fn has_nonempty_line(bytes: &[u8]) -> bool {
    bytes.iter().any(|&b| b != b'\n')
}

#[must_use]
pub fn is_searchable_text(bytes: &[u8]) -> bool {
    !is_binary(bytes) && has_nonempty_line(bytes)
}

/// Apply [`is_searchable_text`] to the file at `path`, reading no further
/// than the first `FIRST_FEW_BYTES` and then the first non-newline byte.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn is_searchable_text_file(path: &Path) -> io::Result<bool> {
    let mut reader = BufReader::new(File::open(path)?);

    let mut head = Vec::with_capacity(FIRST_FEW_BYTES);
    reader
        .by_ref()
        .take(FIRST_FEW_BYTES as u64)
        .read_to_end(&mut head)?;
    if is_binary(&head) {
        return Ok(false);
    }
    if has_nonempty_line(&head) {
        return Ok(true);
    }

    for byte in reader.bytes() {
        if byte? != b'\n' {
            return Ok(true);
        }
    }
    Ok(false)
}
