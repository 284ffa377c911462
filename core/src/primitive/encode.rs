use std::io::{self, Write};

use byteorder::WriteBytesExt;

use crate::constants::{BOOL_FALSE, BOOL_TRUE};
use crate::enums::WireEnum;
use crate::meta::{MetaBuffer, write_bytes, write_meta, write_str};
use crate::primitive::WireEncode;
use crate::time::Timestamp;
use crate::varint::{write_varint32, write_varint64};
use crate::zigzag::{zigzag_encode32, zigzag_encode64};

/// Write an enum member as its name.
pub fn write_enum<W: Write + ?Sized, E: WireEnum>(sink: &mut W, value: E) -> io::Result<()> {
    write_str(sink, Some(value.name()))
}

impl<T: WireEncode + ?Sized> WireEncode for &T {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        (**self).encode(sink)
    }
}

impl WireEncode for bool {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_u8(if *self { BOOL_TRUE } else { BOOL_FALSE })
    }
}

impl WireEncode for u8 {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_u8(*self)
    }
}

impl WireEncode for i8 {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_i8(*self)
    }
}

impl WireEncode for u16 {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write_varint32(sink, u32::from(*self))
    }
}

impl WireEncode for i16 {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write_varint32(sink, zigzag_encode32(i32::from(*self)))
    }
}

impl WireEncode for u32 {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write_varint32(sink, *self)
    }
}

impl WireEncode for i32 {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write_varint32(sink, zigzag_encode32(*self))
    }
}

impl WireEncode for u64 {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write_varint64(sink, *self)
    }
}

impl WireEncode for i64 {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write_varint64(sink, zigzag_encode64(*self))
    }
}

// Floats travel as their exact bit pattern: NaN payloads and -0.0 survive.
impl WireEncode for f32 {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write_varint32(sink, self.to_bits())
    }
}

impl WireEncode for f64 {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write_varint64(sink, self.to_bits())
    }
}

impl WireEncode for char {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write_varint32(sink, u32::from(*self))
    }
}

impl WireEncode for Timestamp {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        self.to_binary().encode(sink)
    }
}

impl WireEncode for str {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write_str(sink, Some(self))
    }
}

impl WireEncode for String {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write_str(sink, Some(self))
    }
}

impl WireEncode for Option<&str> {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write_str(sink, *self)
    }
}

impl WireEncode for Option<String> {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write_str(sink, self.as_deref())
    }
}

impl WireEncode for [u8] {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write_bytes(sink, Some(self))
    }
}

impl WireEncode for Vec<u8> {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write_bytes(sink, Some(self))
    }
}

impl WireEncode for Option<&[u8]> {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write_bytes(sink, *self)
    }
}

impl WireEncode for Option<Vec<u8>> {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write_bytes(sink, self.as_deref())
    }
}

impl WireEncode for MetaBuffer {
    fn encode<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write_meta(sink, self.data.as_deref(), self.flag)
    }
}
