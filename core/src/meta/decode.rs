use std::io::Read;

use tracing::debug;

use crate::config::CodecConfig;
use crate::meta::types::{LengthPrefix, MetaBuffer, decode_meta_prefix};
use crate::types::{WireError, WireResult};
use crate::utils::hex_preview;
use crate::varint::read_varint32;
use crate::zigzag::zigzag_decode32;

/// Upper bound on the up-front allocation for one payload.
/// Larger payloads grow as bytes actually arrive.
const PREALLOC_LIMIT: usize = 64 * 1024;

/// Read a plain (unsigned) length prefix.
pub fn read_len_prefix<R: Read + ?Sized>(source: &mut R) -> WireResult<LengthPrefix> {
    Ok(LengthPrefix::from_raw(read_varint32(source)?))
}

/// Read exactly `len` payload bytes.
fn read_payload<R: Read + ?Sized>(source: &mut R, len: usize, cfg: &CodecConfig) -> WireResult<Vec<u8>> {
    cfg.check_len(len)?;
    let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
    (&mut *source).take(len as u64).read_to_end(&mut buf)?;
    if buf.len() < len {
        debug!(expected = len, got = buf.len(), "payload truncated");
        return Err(WireError::UnexpectedEndOfInput);
    }
    Ok(buf)
}

fn read_prefixed<R: Read + ?Sized>(
    source: &mut R,
    prefix: LengthPrefix,
    cfg: &CodecConfig,
) -> WireResult<Option<Vec<u8>>> {
    match prefix {
        LengthPrefix::Absent => Ok(None),
        LengthPrefix::Present(0) => Ok(Some(Vec::new())),
        LengthPrefix::Present(len) => read_payload(source, len, cfg).map(Some),
    }
}

pub fn read_bytes<R: Read + ?Sized>(source: &mut R) -> WireResult<Option<Vec<u8>>> {
    read_bytes_with(source, &CodecConfig::default())
}

/// Read a nullable byte buffer, bounded by `cfg`.
pub fn read_bytes_with<R: Read + ?Sized>(source: &mut R, cfg: &CodecConfig) -> WireResult<Option<Vec<u8>>> {
    let prefix = read_len_prefix(source)?;
    read_prefixed(source, prefix, cfg)
}

pub fn read_string<R: Read + ?Sized>(source: &mut R) -> WireResult<Option<String>> {
    read_string_with(source, &CodecConfig::default())
}

/// Read a nullable UTF-8 string, bounded by `cfg`.
///
/// # Errors
/// `InvalidEncoding` if the payload is not valid UTF-8.
pub fn read_string_with<R: Read + ?Sized>(source: &mut R, cfg: &CodecConfig) -> WireResult<Option<String>> {
    let Some(bytes) = read_bytes_with(source, cfg)? else {
        return Ok(None);
    };
    match String::from_utf8(bytes) {
        Ok(s) => Ok(Some(s)),
        Err(e) => {
            debug!(bytes = %hex_preview(e.as_bytes(), 16), "string payload is not UTF-8");
            Err(WireError::InvalidEncoding(e))
        }
    }
}

pub fn read_meta<R: Read + ?Sized>(source: &mut R) -> WireResult<MetaBuffer> {
    read_meta_with(source, &CodecConfig::default())
}

/// Read a nullable byte buffer whose prefix sign carries a flag.
pub fn read_meta_with<R: Read + ?Sized>(source: &mut R, cfg: &CodecConfig) -> WireResult<MetaBuffer> {
    let raw = zigzag_decode32(read_varint32(source)?);
    let (prefix, flag) = decode_meta_prefix(raw);
    let data = read_prefixed(source, prefix, cfg)?;
    Ok(MetaBuffer { data, flag })
}
