//! enums.rs
//! Closed symbol sets transported by member name.
//!
//! Design notes:
//! - Members travel as their symbolic name under the string rule, never as an ordinal,
//!   so reordering members is wire-compatible while renaming one is not.
//! - A symbol set publishes its names through `WireEnum::VARIANTS`; decoding a name
//!   outside that set fails with `UnknownEnumMember`.
//! - `wire_enum!` declares the enum together with its `WireEnum`, `Display`, `FromStr`
//!   and wire codec impls.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use tracing::debug;

use crate::types::{WireError, WireResult};

pub trait WireEnum: Sized + Copy + 'static {
    /// Type name used in error messages.
    const ENUM_NAME: &'static str;
    /// Every member, in declaration order.
    const VARIANTS: &'static [Self];

    /// Symbolic name written on the wire.
    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.name() == name)
    }
}

/// Resolve a member name, case-sensitively.
pub fn parse_enum<E: WireEnum>(name: &str) -> WireResult<E> {
    E::from_name(name).ok_or_else(|| {
        debug!(enum_name = E::ENUM_NAME, name, "unknown enum member");
        WireError::UnknownEnumMember { name: name.to_owned(), enum_name: E::ENUM_NAME }
    })
}

/// Published member names of a symbol set.
pub fn member_names<E: WireEnum>() -> Vec<&'static str> {
    E::VARIANTS.iter().map(|v| v.name()).collect()
}

/// Declare a fieldless enum usable as a wire enum.
///
/// Derives `Debug, Clone, Copy, PartialEq, Eq, Hash`; extra attributes are passed through.
///
/// ```
/// bitpool_wire::wire_enum! {
///     pub enum Colour: u8 { Red = 1, Green = 2 }
/// }
/// assert_eq!("Green".parse::<Colour>().unwrap(), Colour::Green);
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident $(: $repr:ident)? {
            $( $(#[$vmeta:meta])* $variant:ident $(= $disc:expr)? ),+ $(,)?
        }
    ) => {
        $( #[repr($repr)] )?
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant $(= $disc)? ),+
        }

        impl $crate::enums::WireEnum for $name {
            const ENUM_NAME: &'static str = stringify!($name);
            const VARIANTS: &'static [Self] = &[ $( $name::$variant ),+ ];

            fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant) ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::enums::WireEnum::name(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::types::WireError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $crate::enums::parse_enum(s)
            }
        }

        impl $crate::primitive::WireEncode for $name {
            fn encode<W: ::std::io::Write + ?Sized>(&self, sink: &mut W) -> ::std::io::Result<()> {
                $crate::primitive::write_enum(sink, *self)
            }
        }

        impl $crate::primitive::WireDecode for $name {
            fn decode<R: ::std::io::Read + ?Sized>(source: &mut R) -> $crate::types::WireResult<Self> {
                $crate::primitive::read_enum(source)
            }

            fn decode_with<R: ::std::io::Read + ?Sized>(
                source: &mut R,
                cfg: &$crate::config::CodecConfig,
            ) -> $crate::types::WireResult<Self> {
                $crate::primitive::read_enum_with(source, cfg)
            }
        }
    };
}

wire_enum! {
    /// Payload encoding of a pool message.
    #[derive(TryFromPrimitive, IntoPrimitive)]
    pub enum MessageEncoding: i32 {
        /// Data may be ignored; the sender may only be sharing its public key.
        Ignore = 0,
        /// UTF-8 without subject/body sections (URIs, magnet links).
        Trivial = 1,
        /// UTF-8 with subject and body sections, no MIME.
        Simple = 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_published() {
        assert_eq!(member_names::<MessageEncoding>(), vec!["Ignore", "Trivial", "Simple"]);
        assert_eq!(MessageEncoding::Simple.to_string(), "Simple");
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(parse_enum::<MessageEncoding>("Trivial").unwrap(), MessageEncoding::Trivial);
        let err = parse_enum::<MessageEncoding>("trivial").unwrap_err();
        match err {
            WireError::UnknownEnumMember { name, enum_name } => {
                assert_eq!(name, "trivial");
                assert_eq!(enum_name, "MessageEncoding");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn ordinals_still_available() {
        assert_eq!(i32::from(MessageEncoding::Simple), 2);
        assert_eq!(MessageEncoding::try_from(1).unwrap(), MessageEncoding::Trivial);
        assert!(MessageEncoding::try_from(9).is_err());
    }
}
