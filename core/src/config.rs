//! config.rs
//! Decode-side configuration.
//!
//! Design notes:
//! - The default accepts every length the 32-bit prefix can express.
//! - A bound is checked against the declared length before any payload byte is read.

use crate::types::{WireError, WireResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecConfig {
    /// Largest string/buffer payload accepted on decode, in bytes. `None` = unbounded.
    pub max_len: Option<usize>,
}

impl CodecConfig {
    pub const fn unbounded() -> Self {
        Self { max_len: None }
    }

    pub const fn with_max_len(max_len: usize) -> Self {
        Self { max_len: Some(max_len) }
    }

    /// Reject `len` if it exceeds the configured bound.
    pub fn check_len(&self, len: usize) -> WireResult<()> {
        match self.max_len {
            Some(max) if len > max => Err(WireError::LengthLimitExceeded { len, max }),
            _ => Ok(()),
        }
    }
}
