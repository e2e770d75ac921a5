use std::{fmt, io};

/// Encode/decode failures for the wire records.
///
/// The frame-size invariant itself (every layout ≤ 250 bytes) is checked at
/// build time and never surfaces here.
#[derive(Debug)]
pub enum WireError {
    /// Frame too short to carry a tag byte.
    Truncated,
    /// Frame length does not match the fixed size its tag announces.
    LengthMismatch { expected: usize, actual: usize },
    /// Leading byte is not an assigned record tag.
    UnknownMsgType(u8),
    /// Typed decode attempted on a frame carrying another tag.
    WrongMsgType { expected: u8, actual: u8 },
    /// A string does not fit its fixed-width field.
    StringTooLong { max: usize, actual: usize },
    /// Chunk payload (actual or declared) longer than the 240-byte buffer.
    ChunkTooLong(usize),
    /// Timestamp field holds non-UTF-8 bytes.
    InvalidUtf8,
    /// Buffer plumbing error.
    Io(io::Error),
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use WireError::*;
        match self {
            Truncated => write!(f, "frame too short to carry a tag"),
            LengthMismatch { expected, actual } => {
                write!(f, "frame is {actual} bytes, layout requires exactly {expected}")
            }
            UnknownMsgType(tag) => write!(f, "unknown record tag: {tag:#04x}"),
            WrongMsgType { expected, actual } => {
                write!(f, "expected record tag {expected:#04x}, got {actual:#04x}")
            }
            StringTooLong { max, actual } => {
                write!(f, "string of {actual} bytes exceeds its {max}-byte field")
            }
            ChunkTooLong(len) => write!(f, "chunk length {len} exceeds payload capacity"),
            InvalidUtf8 => write!(f, "timestamp field is not valid UTF-8"),
            Io(e) => write!(f, "buffer I/O error: {e}"),
        }
    }
}

impl std::error::Error for WireError {}

impl From<io::Error> for WireError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
