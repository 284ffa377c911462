//! bitpool-wire
//!
//! Primitive wire codec: varints, zigzag, length/meta prefixes.
//! A flat sequence of untagged values; both ends agree on the order of types.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;
pub mod utils;

// Codec layers, leaves first
pub mod varint;
pub mod zigzag;
pub mod meta;
pub mod time;
pub mod enums;
pub mod primitive;
pub mod stream;

pub mod telemetry;

pub use config::CodecConfig;
pub use enums::{MessageEncoding, WireEnum};
pub use meta::{LengthPrefix, MetaBuffer};
pub use primitive::{WireDecode, WireEncode};
pub use stream::{ReadWire, WriteWire};
pub use time::Timestamp;
pub use types::{WireError, WireResult};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::CodecConfig;
    pub use crate::enums::WireEnum;
    pub use crate::meta::MetaBuffer;
    pub use crate::primitive::{WireDecode, WireEncode};
    pub use crate::stream::{ReadWire, WriteWire};
    pub use crate::time::Timestamp;
    pub use crate::types::{WireError, WireResult};
}
