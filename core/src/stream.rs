//! stream.rs
//! Sink/source extension traits.
//!
//! Design notes:
//! - Blanket impls over every `Write` / `Read`, in the style of `byteorder::{WriteBytesExt, ReadBytesExt}`.
//! - Stateless: each call writes or reads exactly one value and holds nothing afterwards.
//! - `&mut self` serialises access to one sink/source; independent streams need no locking.

use std::io::{self, Read, Write};

use crate::config::CodecConfig;
use crate::enums::WireEnum;
use crate::meta::{self, MetaBuffer};
use crate::primitive::{self, WireDecode, WireEncode};
use crate::types::WireResult;
use crate::varint;

pub trait WriteWire: Write {
    /// Write one primitive value.
    #[inline]
    fn write_primitive<T: WireEncode + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        value.encode(self)
    }

    #[inline]
    fn write_enum<E: WireEnum>(&mut self, value: E) -> io::Result<()> {
        primitive::write_enum(self, value)
    }

    /// Nullable byte buffer with `flag` stored in the length sign.
    #[inline]
    fn write_meta(&mut self, value: Option<&[u8]>, flag: bool) -> io::Result<()> {
        meta::write_meta(self, value, flag)
    }

    #[inline]
    fn write_bytes_range(&mut self, value: Option<&[u8]>, offset: usize, count: usize) -> io::Result<()> {
        meta::write_bytes_range(self, value, offset, count)
    }

    #[inline]
    fn write_meta_range(
        &mut self,
        value: Option<&[u8]>,
        offset: usize,
        count: usize,
        flag: bool,
    ) -> io::Result<()> {
        meta::write_meta_range(self, value, offset, count, flag)
    }

    #[inline]
    fn write_varint32(&mut self, value: u32) -> io::Result<()> {
        varint::write_varint32(self, value)
    }

    #[inline]
    fn write_varint64(&mut self, value: u64) -> io::Result<()> {
        varint::write_varint64(self, value)
    }
}

impl<W: Write + ?Sized> WriteWire for W {}

pub trait ReadWire: Read {
    /// Read one primitive value of the agreed type.
    #[inline]
    fn read_primitive<T: WireDecode>(&mut self) -> WireResult<T> {
        T::decode(self)
    }

    /// Read one primitive value, bounding string/buffer lengths by `cfg`.
    #[inline]
    fn read_primitive_with<T: WireDecode>(&mut self, cfg: &CodecConfig) -> WireResult<T> {
        T::decode_with(self, cfg)
    }

    #[inline]
    fn read_enum<E: WireEnum>(&mut self) -> WireResult<E> {
        primitive::read_enum(self)
    }

    #[inline]
    fn read_enum_with<E: WireEnum>(&mut self, cfg: &CodecConfig) -> WireResult<E> {
        primitive::read_enum_with(self, cfg)
    }

    #[inline]
    fn read_meta(&mut self) -> WireResult<MetaBuffer> {
        meta::read_meta(self)
    }

    #[inline]
    fn read_meta_with(&mut self, cfg: &CodecConfig) -> WireResult<MetaBuffer> {
        meta::read_meta_with(self, cfg)
    }

    #[inline]
    fn read_varint32(&mut self) -> WireResult<u32> {
        varint::read_varint32(self)
    }

    #[inline]
    fn read_varint64(&mut self) -> WireResult<u64> {
        varint::read_varint64(self)
    }
}

impl<R: Read + ?Sized> ReadWire for R {}
