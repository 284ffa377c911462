//! Base-128 variable-length integers.
//!
//! Responsibilities:
//! - Pack `u32`/`u64` magnitudes into 7-bit little-endian groups
//! - Unpack them from any `Read` source with strict group limits
//!
//! Non-responsibilities:
//! - Sign handling (see `zigzag`)
//! - Length prefixes (see `meta`)

pub mod encode;
pub mod decode;

pub use encode::{
    encode_varint32,
    encode_varint64,
    varint32_len,
    varint64_len,
    write_varint32,
    write_varint64,
};
pub use decode::{
    decode_varint32,
    decode_varint64,
    read_varint32,
    read_varint64,
};
