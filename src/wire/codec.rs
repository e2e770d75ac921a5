//! Field-level helpers shared by the record codecs.

use std::io::{Cursor, Read};
use std::str;

use super::wire_error::WireError;

// ---- Frame shape ----------------------------------------------------------

/// Check that `frame` leads with `tag` and is exactly `len` bytes long.
///
/// A frame whose length does not match the size its tag announces is
/// ill-formed and must be rejected before any field is read.
pub(crate) fn check_frame(frame: &[u8], tag: u8, len: usize) -> Result<(), WireError> {
    if frame.is_empty() {
        return Err(WireError::Truncated);
    }
    if frame[0] != tag {
        return Err(WireError::WrongMsgType {
            expected: tag,
            actual: frame[0],
        });
    }
    if frame.len() != len {
        return Err(WireError::LengthMismatch {
            expected: len,
            actual: frame.len(),
        });
    }
    Ok(())
}

// ---- Fixed-width strings --------------------------------------------------

/// Write `s` into a `width`-byte field, NUL-padding the tail.
pub(crate) fn put_fixed_str(out: &mut Vec<u8>, s: &str, width: usize) -> Result<(), WireError> {
    let bytes = s.as_bytes();
    if bytes.len() > width {
        return Err(WireError::StringTooLong {
            max: width,
            actual: bytes.len(),
        });
    }
    out.extend_from_slice(bytes);
    out.extend(std::iter::repeat(0u8).take(width - bytes.len()));
    Ok(())
}

/// Read a `width`-byte field; bytes from the first NUL onward are padding,
/// not data.
pub(crate) fn get_fixed_str(
    cursor: &mut Cursor<&[u8]>,
    width: usize,
) -> Result<String, WireError> {
    let mut buf = vec![0u8; width];
    cursor.read_exact(&mut buf)?;
    let end = buf.iter().position(|&b| b == 0).unwrap_or(width);
    let s = str::from_utf8(&buf[..end]).map_err(|_| WireError::InvalidUtf8)?;
    Ok(s.to_owned())
}
