//! Per-type primitive codec.
//!
//! Wire rules (writer and reader are mirror images):
//!
//! ```text
//! bool             1 raw byte, 1 = true
//! u8 / i8          1 raw byte
//! u16 / u32 / char varint32
//! i16 / i32        zigzag + varint32
//! u64              varint64
//! i64              zigzag + varint64
//! f32 / f64        raw IEEE-754 bits as varint32 / varint64
//! Timestamp        .NET ToBinary() as i64
//! strings, bytes   length prefix + raw bytes (see `meta`)
//! enums            member name as a string
//! ```
//!
//! No type tags are written: both ends must agree on the sequence of types.

pub mod encode;
pub mod decode;

use std::io::{self, Read, Write};

use crate::config::CodecConfig;
use crate::types::WireResult;

/// A value that can be written to any byte sink.
pub trait WireEncode {
    /// Write the value. Fails only when the sink does (or a length cannot be prefixed).
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()>;

    /// Encode into a fresh buffer.
    fn to_wire_bytes(&self) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        self.encode(&mut out)?;
        Ok(out)
    }
}

/// A value that can be read back from any byte source.
pub trait WireDecode: Sized {
    fn decode<R: Read + ?Sized>(source: &mut R) -> WireResult<Self>;

    /// Decode under `cfg`. Only length-prefixed types consult it.
    fn decode_with<R: Read + ?Sized>(source: &mut R, cfg: &CodecConfig) -> WireResult<Self> {
        let _ = cfg;
        Self::decode(source)
    }

    /// Decode from the front of `buf`.
    fn from_wire_bytes(buf: &[u8]) -> WireResult<Self> {
        let mut cursor = buf;
        Self::decode(&mut cursor)
    }
}

pub use encode::write_enum;
pub use decode::{read_enum, read_enum_with};
