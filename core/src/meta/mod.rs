//! Length/meta prefixes shared by strings and byte buffers.
//!
//! Wire rules:
//! - Plain prefix `p` (unsigned varint): `0` absent, `1` empty, `n + 1` = `n` bytes follow.
//! - Meta prefix (zigzag + varint `int32`): same magnitude rule, sign carries one flag.
//!
//! The sign arithmetic lives only in `encode_meta_prefix` / `decode_meta_prefix`.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{
    LengthPrefix,
    MetaBuffer,
    encode_meta_prefix,
    decode_meta_prefix,
};
pub use encode::{
    write_len_prefix,
    write_bytes,
    write_bytes_range,
    write_str,
    write_meta,
    write_meta_range,
};
pub use decode::{
    read_len_prefix,
    read_bytes,
    read_bytes_with,
    read_string,
    read_string_with,
    read_meta,
    read_meta_with,
};
