//! Closed value sets carried inside packets.
//!
//! Every sub type, command, mode and status enum implements [`ProtocolEnum`]:
//! bytes outside the set are rejected with [`RfxError::UnsupportedValue`]
//! naming the enum, and symbol names can be parsed from configuration text.

use crate::error::RfxError;
use std::str::FromStr;

pub trait ProtocolEnum: Copy + TryFrom<u8> + Into<u8> + FromStr {
    /// Name reported in [`RfxError::UnsupportedValue`].
    const NAME: &'static str;

    fn from_byte(byte: u8) -> Result<Self, RfxError> {
        Self::try_from(byte).map_err(|_| RfxError::unsupported_value(Self::NAME, byte))
    }

    fn to_byte(self) -> u8 {
        self.into()
    }

    /// Looks up a symbol by name (`"GROUP_ON"`, case-insensitive), falling
    /// back to its numeric byte value (`"2"`).
    fn from_name(name: &str) -> Result<Self, RfxError> {
        let name = name.trim();
        if let Ok(symbol) = name.parse::<Self>() {
            return Ok(symbol);
        }
        match name.parse::<i64>() {
            Ok(number) => u8::try_from(number)
                .map_err(|_| RfxError::unsupported_value(Self::NAME, number))
                .and_then(Self::from_byte),
            Err(_) => Err(RfxError::unsupported_value(Self::NAME, name)),
        }
    }
}

/// Declares a byte-valued closed enum with its [`ProtocolEnum`] impl.
macro_rules! protocol_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            num_enum::IntoPrimitive,
            num_enum::TryFromPrimitive,
            strum_macros::Display,
            strum_macros::EnumString,
            strum_macros::EnumIter,
        )]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $crate::enums::ProtocolEnum for $name {
            const NAME: &'static str = stringify!($name);
        }
    };
}

pub(crate) use protocol_enum;
