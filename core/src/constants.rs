//! constants.rs
//! Wire-level constants shared by every codec module.

/// Payload bits carried by one varint group.
pub const VARINT_GROUP_BITS: u32 = 7;
/// Low seven bits of a varint group.
pub const VARINT_PAYLOAD_MASK: u8 = 0x7F;
/// Continuation bit: set when more groups follow.
pub const VARINT_CONTINUATION: u8 = 0x80;

/// Maximum groups a 32-bit varint may span (5 * 7 >= 32).
pub const MAX_VARINT32_GROUPS: usize = 5;
/// Maximum groups a 64-bit varint may span (10 * 7 >= 64).
pub const MAX_VARINT64_GROUPS: usize = 10;

/// Boolean byte values.
pub const BOOL_TRUE: u8 = 1;
pub const BOOL_FALSE: u8 = 0;

/// Length-prefix convention shared by strings and byte buffers.
///
/// `0` = absent, `1` = present and empty, `n + 1` = present with `n` bytes.
pub mod prefix {
    pub const ABSENT: u32 = 0;
    pub const EMPTY: u32 = 1;
    /// Offset added to a byte length to form its prefix.
    pub const LEN_BIAS: u32 = 1;
}

/// .NET `DateTime.ToBinary` layout used for timestamps.
pub mod ticks {
    /// 100 ns ticks per second.
    pub const PER_SECOND: i64 = 10_000_000;
    /// Nanoseconds per tick.
    pub const NANOS_PER_TICK: i64 = 100;
    /// Ticks per day, used by the local-kind wrap-around rule.
    pub const PER_DAY: i64 = 86_400 * PER_SECOND;
    /// Ticks between 0001-01-01T00:00:00Z and 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: i64 = 621_355_968_000_000_000;
    /// Ticks of 9999-12-31T23:59:59.9999999Z.
    pub const MAX: i64 = 3_155_378_975_999_999_999;

    /// Low 62 bits carry the tick count.
    pub const MASK: u64 = 0x3FFF_FFFF_FFFF_FFFF;
    /// Top two bits carry the kind.
    pub const KIND_SHIFT: u32 = 62;
    /// Wrap-around ceiling for local-kind values.
    pub const CEILING: i64 = 0x4000_0000_0000_0000;

    pub const KIND_UNSPECIFIED: u64 = 0;
    pub const KIND_UTC: u64 = 1;
    pub const KIND_LOCAL: u64 = 2;
    pub const KIND_LOCAL_AMBIGUOUS_DST: u64 = 3;
}
