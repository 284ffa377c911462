use std::io::{self, Write};

use crate::meta::types::{LengthPrefix, encode_meta_prefix};
use crate::varint::write_varint32;
use crate::zigzag::zigzag_encode32;

fn too_long(len: usize) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("payload of {} bytes does not fit a length prefix", len),
    )
}

fn bad_range(offset: usize, count: usize, have: usize) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("range {}..{} out of bounds for {} bytes", offset, offset.saturating_add(count), have),
    )
}

#[inline]
fn slice_range(value: &[u8], offset: usize, count: usize) -> io::Result<&[u8]> {
    offset
        .checked_add(count)
        .and_then(|end| value.get(offset..end))
        .ok_or_else(|| bad_range(offset, count, value.len()))
}

/// Write a plain (unsigned) length prefix.
pub fn write_len_prefix<W: Write + ?Sized>(sink: &mut W, prefix: LengthPrefix) -> io::Result<()> {
    let raw = prefix.to_raw().ok_or_else(|| too_long(prefix.payload_len()))?;
    write_varint32(sink, raw)
}

/// Write a nullable byte buffer: prefix, then the raw bytes.
pub fn write_bytes<W: Write + ?Sized>(sink: &mut W, value: Option<&[u8]>) -> io::Result<()> {
    write_len_prefix(sink, LengthPrefix::of(value.map(<[u8]>::len)))?;
    match value {
        Some(bytes) if !bytes.is_empty() => sink.write_all(bytes),
        _ => Ok(()),
    }
}

/// Write `count` bytes of `value` starting at `offset`.
///
/// The range is validated before anything reaches the sink.
pub fn write_bytes_range<W: Write + ?Sized>(
    sink: &mut W,
    value: Option<&[u8]>,
    offset: usize,
    count: usize,
) -> io::Result<()> {
    let sub = value.map(|v| slice_range(v, offset, count)).transpose()?;
    write_bytes(sink, sub)
}

/// Write a nullable UTF-8 string.
pub fn write_str<W: Write + ?Sized>(sink: &mut W, value: Option<&str>) -> io::Result<()> {
    write_bytes(sink, value.map(str::as_bytes))
}

/// Write a nullable byte buffer with `flag` stored in the prefix sign.
///
/// A null buffer writes prefix `0`; the flag is not representable and is dropped.
pub fn write_meta<W: Write + ?Sized>(sink: &mut W, value: Option<&[u8]>, flag: bool) -> io::Result<()> {
    let len = value.map(<[u8]>::len);
    let raw = encode_meta_prefix(len, flag).ok_or_else(|| too_long(len.unwrap_or(0)))?;
    write_varint32(sink, zigzag_encode32(raw))?;
    match value {
        Some(bytes) if !bytes.is_empty() => sink.write_all(bytes),
        _ => Ok(()),
    }
}

pub fn write_meta_range<W: Write + ?Sized>(
    sink: &mut W,
    value: Option<&[u8]>,
    offset: usize,
    count: usize,
    flag: bool,
) -> io::Result<()> {
    let sub = value.map(|v| slice_range(v, offset, count)).transpose()?;
    write_meta(sink, sub, flag)
}
