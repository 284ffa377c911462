use std::io::Read;

use byteorder::ReadBytesExt;
use tracing::debug;

use crate::constants::{
    MAX_VARINT32_GROUPS, MAX_VARINT64_GROUPS, VARINT_CONTINUATION, VARINT_GROUP_BITS,
    VARINT_PAYLOAD_MASK,
};
use crate::types::{WireError, WireResult};

/// Read a 32-bit varint.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the source runs dry mid-sequence.
/// - `MalformedVarint` if five groups pass without a terminating byte.
///
/// Bits of the fifth group above bit 31 are discarded.
pub fn read_varint32<R: Read + ?Sized>(source: &mut R) -> WireResult<u32> {
    let mut result = 0u32;
    for group in 0..MAX_VARINT32_GROUPS {
        let b = source.read_u8()?;
        result |= u32::from(b & VARINT_PAYLOAD_MASK) << (group as u32 * VARINT_GROUP_BITS);
        if b & VARINT_CONTINUATION == 0 {
            return Ok(result);
        }
    }
    debug!(max_groups = MAX_VARINT32_GROUPS, "varint32 did not terminate");
    Err(WireError::MalformedVarint { max_groups: MAX_VARINT32_GROUPS })
}

/// Read a 64-bit varint (at most ten groups).
pub fn read_varint64<R: Read + ?Sized>(source: &mut R) -> WireResult<u64> {
    let mut result = 0u64;
    for group in 0..MAX_VARINT64_GROUPS {
        let b = source.read_u8()?;
        result |= u64::from(b & VARINT_PAYLOAD_MASK) << (group as u32 * VARINT_GROUP_BITS);
        if b & VARINT_CONTINUATION == 0 {
            return Ok(result);
        }
    }
    debug!(max_groups = MAX_VARINT64_GROUPS, "varint64 did not terminate");
    Err(WireError::MalformedVarint { max_groups: MAX_VARINT64_GROUPS })
}

/// Decode a 32-bit varint from the front of `buf`.
///
/// Returns the value and the number of bytes consumed.
pub fn decode_varint32(buf: &[u8]) -> WireResult<(u32, usize)> {
    let mut cursor = buf;
    let value = read_varint32(&mut cursor)?;
    Ok((value, buf.len() - cursor.len()))
}

/// Decode a 64-bit varint from the front of `buf`.
pub fn decode_varint64(buf: &[u8]) -> WireResult<(u64, usize)> {
    let mut cursor = buf;
    let value = read_varint64(&mut cursor)?;
    Ok((value, buf.len() - cursor.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_multi_group() {
        assert_eq!(decode_varint32(&[0xAC, 0x02]).unwrap(), (300, 2));
        assert_eq!(decode_varint64(&[0x80, 0x01, 0xFF]).unwrap(), (128, 2));
    }

    #[test]
    fn truncated_is_end_of_input() {
        assert!(matches!(decode_varint32(&[0xAC]), Err(WireError::UnexpectedEndOfInput)));
        assert!(matches!(decode_varint64(&[]), Err(WireError::UnexpectedEndOfInput)));
    }

    #[test]
    fn overlong_is_malformed() {
        let six = [0x80u8, 0x80, 0x80, 0x80, 0x80, 0x00];
        assert!(matches!(
            decode_varint32(&six),
            Err(WireError::MalformedVarint { max_groups: 5 })
        ));

        let eleven = [0xFFu8; 11];
        assert!(matches!(
            decode_varint64(&eleven),
            Err(WireError::MalformedVarint { max_groups: 10 })
        ));
    }

    #[test]
    fn excess_bits_of_last_group_are_dropped() {
        // 0x7F in the fifth group carries bits 28..35; only 28..31 survive.
        let (v, n) = decode_varint32(&[0xFF, 0xFF, 0xFF, 0xFF, 0x7F]).unwrap();
        assert_eq!(v, u32::MAX);
        assert_eq!(n, 5);
    }
}
