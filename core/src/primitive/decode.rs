use std::io::Read;

use byteorder::ReadBytesExt;
use tracing::debug;

use crate::config::CodecConfig;
use crate::constants::BOOL_TRUE;
use crate::enums::{WireEnum, parse_enum};
use crate::meta::{MetaBuffer, read_bytes_with, read_meta_with, read_string_with};
use crate::primitive::WireDecode;
use crate::time::Timestamp;
use crate::types::{WireError, WireResult};
use crate::varint::{read_varint32, read_varint64};
use crate::zigzag::{zigzag_decode32, zigzag_decode64};

/// Read an enum member written by name.
///
/// # Errors
/// `UnknownEnumMember` when the name is not in `E`'s symbol set. A null
/// string is reported as an unknown member with an empty name.
pub fn read_enum<R: Read + ?Sized, E: WireEnum>(source: &mut R) -> WireResult<E> {
    read_enum_with(source, &CodecConfig::default())
}

/// Read an enum member written by name, bounding the name length by `cfg`.
pub fn read_enum_with<R: Read + ?Sized, E: WireEnum>(source: &mut R, cfg: &CodecConfig) -> WireResult<E> {
    match read_string_with(source, cfg)? {
        Some(name) => parse_enum(&name),
        None => {
            debug!(enum_name = E::ENUM_NAME, "null enum member");
            Err(WireError::UnknownEnumMember { name: String::new(), enum_name: E::ENUM_NAME })
        }
    }
}

impl WireDecode for bool {
    /// Only `1` is true; every other byte reads as false.
    fn decode<R: Read + ?Sized>(source: &mut R) -> WireResult<Self> {
        Ok(source.read_u8()? == BOOL_TRUE)
    }
}

impl WireDecode for u8 {
    fn decode<R: Read + ?Sized>(source: &mut R) -> WireResult<Self> {
        Ok(source.read_u8()?)
    }
}

impl WireDecode for i8 {
    fn decode<R: Read + ?Sized>(source: &mut R) -> WireResult<Self> {
        Ok(source.read_i8()?)
    }
}

// 16-bit values ride the 32-bit varint and are truncated back on read.
impl WireDecode for u16 {
    fn decode<R: Read + ?Sized>(source: &mut R) -> WireResult<Self> {
        Ok(read_varint32(source)? as u16)
    }
}

impl WireDecode for i16 {
    fn decode<R: Read + ?Sized>(source: &mut R) -> WireResult<Self> {
        Ok(zigzag_decode32(read_varint32(source)?) as i16)
    }
}

impl WireDecode for u32 {
    fn decode<R: Read + ?Sized>(source: &mut R) -> WireResult<Self> {
        read_varint32(source)
    }
}

impl WireDecode for i32 {
    fn decode<R: Read + ?Sized>(source: &mut R) -> WireResult<Self> {
        Ok(zigzag_decode32(read_varint32(source)?))
    }
}

impl WireDecode for u64 {
    fn decode<R: Read + ?Sized>(source: &mut R) -> WireResult<Self> {
        read_varint64(source)
    }
}

impl WireDecode for i64 {
    fn decode<R: Read + ?Sized>(source: &mut R) -> WireResult<Self> {
        Ok(zigzag_decode64(read_varint64(source)?))
    }
}

impl WireDecode for f32 {
    fn decode<R: Read + ?Sized>(source: &mut R) -> WireResult<Self> {
        Ok(f32::from_bits(read_varint32(source)?))
    }
}

impl WireDecode for f64 {
    fn decode<R: Read + ?Sized>(source: &mut R) -> WireResult<Self> {
        Ok(f64::from_bits(read_varint64(source)?))
    }
}

/// Peers that send UTF-16 code units may emit lone surrogates (`0xD800..=0xDFFF`);
/// those are rejected here. Read such fields as `u16`, which shares the layout.
impl WireDecode for char {
    fn decode<R: Read + ?Sized>(source: &mut R) -> WireResult<Self> {
        let raw = read_varint32(source)?;
        char::from_u32(raw).ok_or_else(|| {
            debug!(raw, "not a unicode scalar value");
            WireError::InvalidCodepoint(raw)
        })
    }
}

impl WireDecode for Timestamp {
    fn decode<R: Read + ?Sized>(source: &mut R) -> WireResult<Self> {
        Timestamp::from_binary(i64::decode(source)?)
    }
}

impl WireDecode for Option<String> {
    fn decode<R: Read + ?Sized>(source: &mut R) -> WireResult<Self> {
        Self::decode_with(source, &CodecConfig::default())
    }

    fn decode_with<R: Read + ?Sized>(source: &mut R, cfg: &CodecConfig) -> WireResult<Self> {
        read_string_with(source, cfg)
    }
}

impl WireDecode for Option<Vec<u8>> {
    fn decode<R: Read + ?Sized>(source: &mut R) -> WireResult<Self> {
        Self::decode_with(source, &CodecConfig::default())
    }

    fn decode_with<R: Read + ?Sized>(source: &mut R, cfg: &CodecConfig) -> WireResult<Self> {
        read_bytes_with(source, cfg)
    }
}

impl WireDecode for MetaBuffer {
    fn decode<R: Read + ?Sized>(source: &mut R) -> WireResult<Self> {
        Self::decode_with(source, &CodecConfig::default())
    }

    fn decode_with<R: Read + ?Sized>(source: &mut R, cfg: &CodecConfig) -> WireResult<Self> {
        read_meta_with(source, cfg)
    }
}
