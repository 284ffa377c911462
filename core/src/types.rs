//! types.rs
//! Unified decode error for every primitive reader.
//!
//! Design notes:
//! - Write-side operations return the sink's `io::Error` unchanged; only reads use `WireError`.
//! - Exhaustion of the source is always `UnexpectedEndOfInput`, never a generic I/O error.
//! - Errors are terminal for the current read: no retries, no resynchronisation.

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Result alias for decode operations.
pub type WireResult<T> = Result<T, WireError>;

#[derive(Debug, Error)]
pub enum WireError {
    /// Source exhausted before a complete value was decoded.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// Continuation bit still set after the widest legal varint.
    #[error("malformed varint: no terminating byte within {max_groups} groups")]
    MalformedVarint { max_groups: usize },

    /// String payload is not valid UTF-8.
    #[error("invalid string encoding: {0}")]
    InvalidEncoding(#[from] FromUtf8Error),

    /// Decoded name is not a member of the target symbol set.
    #[error("unknown {enum_name} member: {name:?}")]
    UnknownEnumMember { name: String, enum_name: &'static str },

    /// Decoded `char` is a surrogate or above U+10FFFF.
    #[error("invalid unicode scalar value: 0x{0:x}")]
    InvalidCodepoint(u32),

    /// Decoded timestamp ticks fall outside 0001-01-01 ..= 9999-12-31.
    #[error("invalid timestamp binary: 0x{0:016x}")]
    InvalidTimestamp(i64),

    /// Declared string/buffer length exceeds the configured bound.
    #[error("length limit exceeded: {len} > {max}")]
    LengthLimitExceeded { len: usize, max: usize },

    /// Source failure other than exhaustion.
    #[error("I/O error: {0}")]
    Io(io::Error),
}

impl From<io::Error> for WireError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => WireError::UnexpectedEndOfInput,
            _ => WireError::Io(e),
        }
    }
}

impl WireError {
    /// True when the source simply ran dry, as opposed to holding corrupt data.
    pub fn is_truncation(&self) -> bool {
        matches!(self, WireError::UnexpectedEndOfInput)
    }
}
