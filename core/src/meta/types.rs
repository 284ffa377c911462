use crate::constants::prefix;

/// Decoded meaning of a length prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthPrefix {
    /// Null reference / no value (`0`).
    Absent,
    /// Value present with this many payload bytes (`len + 1`).
    Present(usize),
}

impl LengthPrefix {
    /// Interpret a raw prefix magnitude.
    #[inline]
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            prefix::ABSENT => LengthPrefix::Absent,
            p => LengthPrefix::Present((p - prefix::LEN_BIAS) as usize),
        }
    }

    /// Prefix for an optional payload length.
    #[inline]
    pub fn of(len: Option<usize>) -> Self {
        match len {
            None => LengthPrefix::Absent,
            Some(n) => LengthPrefix::Present(n),
        }
    }

    /// Raw prefix magnitude, or `None` when `len + 1` does not fit in 32 bits.
    #[inline]
    pub fn to_raw(self) -> Option<u32> {
        match self {
            LengthPrefix::Absent => Some(prefix::ABSENT),
            LengthPrefix::Present(n) => u32::try_from(n).ok()?.checked_add(prefix::LEN_BIAS),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, LengthPrefix::Absent)
    }

    /// Payload bytes that follow the prefix.
    pub fn payload_len(&self) -> usize {
        match self {
            LengthPrefix::Absent => 0,
            LengthPrefix::Present(n) => *n,
        }
    }
}

/// Nullable byte buffer carrying one extra boolean in its prefix sign.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetaBuffer {
    pub data: Option<Vec<u8>>,
    /// Stored as a negative prefix. Always `false` when `data` is `None`.
    pub flag: bool,
}

impl MetaBuffer {
    pub fn new(data: Option<Vec<u8>>, flag: bool) -> Self {
        Self { data, flag }
    }

    pub fn absent() -> Self {
        Self { data: None, flag: false }
    }

    pub fn is_absent(&self) -> bool {
        self.data.is_none()
    }

    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Signed meta prefix: `+(len + 1)` for flag `false`, `-(len + 1)` for `true`, `0` for null.
///
/// Returns `None` when `len + 1` exceeds `i32::MAX`.
pub fn encode_meta_prefix(len: Option<usize>, flag: bool) -> Option<i32> {
    let Some(len) = len else {
        return Some(0);
    };
    let magnitude = i32::try_from(len).ok()?.checked_add(prefix::LEN_BIAS as i32)?;
    Some(if flag { -magnitude } else { magnitude })
}

/// Split a signed meta prefix into its length prefix and flag.
///
/// A null prefix reports the flag as `false`.
pub fn decode_meta_prefix(raw: i32) -> (LengthPrefix, bool) {
    let flag = raw < 0;
    (LengthPrefix::from_raw(raw.unsigned_abs()), flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_prefix_convention() {
        assert_eq!(LengthPrefix::from_raw(0), LengthPrefix::Absent);
        assert_eq!(LengthPrefix::from_raw(1), LengthPrefix::Present(0));
        assert_eq!(LengthPrefix::from_raw(6), LengthPrefix::Present(5));
        assert_eq!(LengthPrefix::Present(5).to_raw(), Some(6));
        assert_eq!(LengthPrefix::Absent.to_raw(), Some(0));
        assert_eq!(LengthPrefix::Present(u32::MAX as usize).to_raw(), None);
    }

    #[test]
    fn meta_prefix_sign_carries_flag() {
        assert_eq!(encode_meta_prefix(Some(5), true), Some(-6));
        assert_eq!(encode_meta_prefix(Some(5), false), Some(6));
        assert_eq!(encode_meta_prefix(Some(0), false), Some(1));
        assert_eq!(encode_meta_prefix(Some(0), true), Some(-1));
        assert_eq!(encode_meta_prefix(None, true), Some(0));
        assert_eq!(encode_meta_prefix(Some(i32::MAX as usize), false), None);

        assert_eq!(decode_meta_prefix(-6), (LengthPrefix::Present(5), true));
        assert_eq!(decode_meta_prefix(1), (LengthPrefix::Present(0), false));
        assert_eq!(decode_meta_prefix(0), (LengthPrefix::Absent, false));
    }

    #[test]
    fn meta_prefix_extreme_negative() {
        // |i32::MIN| = 2^31 is still a valid magnitude.
        let (prefix, flag) = decode_meta_prefix(i32::MIN);
        assert!(flag);
        assert_eq!(prefix, LengthPrefix::Present((1usize << 31) - 1));
    }
}
