use std::io::{self, Write};

use crate::constants::{MAX_VARINT64_GROUPS, VARINT_CONTINUATION, VARINT_GROUP_BITS};

/// Pack `value` into `buf`, returning the number of bytes used.
///
/// Layout: low group first, continuation bit set on every byte but the last.
///
/// ```text
/// 300 = 0b10_0101100 -> [ 1_0101100 ][ 0_0000010 ] -> [0xAC, 0x02]
/// ```
#[inline]
fn pack(mut value: u64, buf: &mut [u8; MAX_VARINT64_GROUPS]) -> usize {
    let mut i = 0usize;
    while value >= u64::from(VARINT_CONTINUATION) {
        buf[i] = (value as u8) | VARINT_CONTINUATION;
        value >>= VARINT_GROUP_BITS;
        i += 1;
    }
    buf[i] = value as u8;
    i + 1
}

/// Write a 32-bit magnitude as a varint (1..=5 bytes).
#[inline]
pub fn write_varint32<W: Write + ?Sized>(sink: &mut W, value: u32) -> io::Result<()> {
    write_varint64(sink, u64::from(value))
}

/// Write a 64-bit magnitude as a varint (1..=10 bytes).
///
/// The whole group sequence is handed to the sink in one `write_all`.
#[inline]
pub fn write_varint64<W: Write + ?Sized>(sink: &mut W, value: u64) -> io::Result<()> {
    let mut buf = [0u8; MAX_VARINT64_GROUPS];
    let n = pack(value, &mut buf);
    sink.write_all(&buf[..n])
}

pub fn encode_varint32(value: u32) -> Vec<u8> {
    encode_varint64(u64::from(value))
}

pub fn encode_varint64(value: u64) -> Vec<u8> {
    let mut buf = [0u8; MAX_VARINT64_GROUPS];
    let n = pack(value, &mut buf);
    buf[..n].to_vec()
}

/// Encoded size of `value` without writing it.
#[inline]
pub const fn varint32_len(value: u32) -> usize {
    varint64_len(value as u64)
}

#[inline]
pub const fn varint64_len(value: u64) -> usize {
    let bits = 64 - (value | 1).leading_zeros() as usize;
    (bits + 6) / 7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_single_byte() {
        assert_eq!(encode_varint32(0), vec![0x00]);
        assert_eq!(varint32_len(0), 1);
    }

    #[test]
    fn group_boundaries() {
        assert_eq!(encode_varint32(127), vec![0x7F]);
        assert_eq!(encode_varint32(128), vec![0x80, 0x01]);
        assert_eq!(encode_varint32(300), vec![0xAC, 0x02]);
        assert_eq!(encode_varint32(u32::MAX), vec![0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
        assert_eq!(encode_varint64(u64::MAX).len(), MAX_VARINT64_GROUPS);
    }

    #[test]
    fn len_matches_encoding() {
        for v in [0u64, 1, 127, 128, 16_383, 16_384, u32::MAX as u64, u64::MAX] {
            assert_eq!(varint64_len(v), encode_varint64(v).len(), "value {v}");
        }
    }
}
