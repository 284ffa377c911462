//! zigzag.rs
//! Signed <-> unsigned bijection that keeps small magnitudes small.
//!
//! `0 -> 0, -1 -> 1, 1 -> 2, -2 -> 3, ...` so that composing with the varint
//! codec stores values near zero in a single byte regardless of sign.

/// `(n << 1) ^ (n >> 31)` with an arithmetic right shift.
#[inline]
pub const fn zigzag_encode32(n: i32) -> u32 {
    ((n << 1) ^ (n >> 31)) as u32
}

/// `(n >> 1) ^ -(n & 1)`.
#[inline]
pub const fn zigzag_decode32(n: u32) -> i32 {
    ((n >> 1) as i32) ^ -((n & 1) as i32)
}

/// `(n << 1) ^ (n >> 63)` with an arithmetic right shift.
#[inline]
pub const fn zigzag_encode64(n: i64) -> u64 {
    ((n << 1) ^ (n >> 63)) as u64
}

/// `(n >> 1) ^ -(n & 1)`.
#[inline]
pub const fn zigzag_decode64(n: u64) -> i64 {
    ((n >> 1) as i64) ^ -((n & 1) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_interleave() {
        assert_eq!(zigzag_encode32(0), 0);
        assert_eq!(zigzag_encode32(-1), 1);
        assert_eq!(zigzag_encode32(1), 2);
        assert_eq!(zigzag_encode32(-2), 3);
        assert_eq!(zigzag_encode64(-64), 127);
        assert_eq!(zigzag_encode64(63), 126);
    }

    #[test]
    fn extremes() {
        assert_eq!(zigzag_encode32(i32::MAX), u32::MAX - 1);
        assert_eq!(zigzag_encode32(i32::MIN), u32::MAX);
        assert_eq!(zigzag_decode32(u32::MAX), i32::MIN);
        assert_eq!(zigzag_encode64(i64::MIN), u64::MAX);
        assert_eq!(zigzag_decode64(u64::MAX - 1), i64::MAX);
    }
}
