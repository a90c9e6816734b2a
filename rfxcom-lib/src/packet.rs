use crate::constants::{HEADER_SIZE, LIGHTING6_SIZE, THERMOSTAT1_SIZE};
use crate::error::RfxError;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::Display;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every packet type tag the transceiver can emit or accept.
///
/// A tag listed here but without a codec decodes to
/// [`RfxError::UnsupportedPacketType`]; a byte not listed at all is
/// [`RfxError::UnknownPacketType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum PacketType {
    InterfaceControl = 0x00,
    InterfaceMessage = 0x01,
    TransmitterMessage = 0x02,
    UndecodedRfMessage = 0x03,
    #[strum(to_string = "LIGHTING1")]
    Lighting1 = 0x10,
    #[strum(to_string = "LIGHTING2")]
    Lighting2 = 0x11,
    #[strum(to_string = "LIGHTING3")]
    Lighting3 = 0x12,
    #[strum(to_string = "LIGHTING4")]
    Lighting4 = 0x13,
    #[strum(to_string = "LIGHTING5")]
    Lighting5 = 0x14,
    #[strum(to_string = "LIGHTING6")]
    Lighting6 = 0x15,
    Chime = 0x16,
    Fan = 0x17,
    #[strum(to_string = "CURTAIN1")]
    Curtain1 = 0x18,
    #[strum(to_string = "BLINDS1")]
    Blinds1 = 0x19,
    Rfy = 0x1A,
    HomeConfort = 0x1B,
    #[strum(to_string = "SECURITY1")]
    Security1 = 0x20,
    #[strum(to_string = "SECURITY2")]
    Security2 = 0x21,
    #[strum(to_string = "CAMERA1")]
    Camera1 = 0x28,
    RemoteControl = 0x30,
    #[strum(to_string = "THERMOSTAT1")]
    Thermostat1 = 0x40,
    #[strum(to_string = "THERMOSTAT2")]
    Thermostat2 = 0x41,
    #[strum(to_string = "THERMOSTAT3")]
    Thermostat3 = 0x42,
    Bbq = 0x4E,
    TemperatureRain = 0x4F,
    Temperature = 0x50,
    Humidity = 0x51,
    TemperatureHumidity = 0x52,
    Barometric = 0x53,
    TemperatureHumidityBarometric = 0x54,
    Rain = 0x55,
    Wind = 0x56,
    Uv = 0x57,
    DateTime = 0x58,
    Current = 0x59,
    Energy = 0x5A,
    CurrentEnergy = 0x5B,
    Power = 0x5C,
    Weight = 0x5D,
    Gas = 0x5E,
    Water = 0x5F,
    Rfxsensor = 0x70,
    Rfxmeter = 0x71,
    #[strum(to_string = "FS20")]
    Fs20 = 0x72,
    IoLines = 0x80,
}

impl PacketType {
    /// Total frame size (length byte included) for packet types this crate can decode.
    pub fn frame_size(&self) -> Option<usize> {
        match self {
            PacketType::Lighting6 => Some(LIGHTING6_SIZE),
            PacketType::Thermostat1 => Some(THERMOSTAT1_SIZE),
            _ => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.frame_size().is_some()
    }

    /// Value of the leading length byte for a frame of this type.
    pub fn declared_length(&self) -> Option<u8> {
        self.frame_size().map(|size| (size - 1) as u8)
    }
}

/// Raw 4-byte prefix shared by every packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
#[repr(C)]
pub struct HeaderRaw {
    pub length: u8,      // Frame size minus the length byte itself
    pub packet_type: u8, // PacketType tag
    pub sub_type: u8,    // Per-kind sub type, validated by the codec
    pub seq_nbr: u8,     // Sequence number
}

/// Decoded packet header.
///
/// The sub type is kept raw here: which values are valid depends on the
/// packet type and is checked by the codec for that type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketHeader {
    pub length: u8,
    pub packet_type: PacketType,
    pub sub_type: u8,
    pub seq_nbr: u8,
}

impl PacketHeader {
    /// Builds the header of an outbound frame.
    ///
    /// The length byte comes from the packet type's fixed frame size; packet
    /// types without a codec get a length of zero.
    pub fn new(packet_type: PacketType, sub_type: u8, seq_nbr: u8) -> Self {
        PacketHeader {
            length: packet_type.declared_length().unwrap_or(0),
            packet_type,
            sub_type,
            seq_nbr,
        }
    }

    /// Parses the header at the start of `data`.
    ///
    /// Fails when `data` is shorter than the header or than the frame the
    /// length byte declares, or when the type tag is not a known packet type.
    pub fn decode(data: &[u8]) -> Result<Self, RfxError> {
        let (raw, _) = HeaderRaw::read_from_prefix(data).map_err(|_| RfxError::InsufficientData {
            expected: HEADER_SIZE,
            actual: data.len(),
        })?;

        let frame_size = raw.length as usize + 1;
        if data.len() < frame_size {
            return Err(RfxError::InsufficientData {
                expected: frame_size,
                actual: data.len(),
            });
        }

        let packet_type =
            PacketType::try_from_primitive(raw.packet_type).map_err(|e| RfxError::UnknownPacketType(e.number))?;

        Ok(PacketHeader {
            length: raw.length,
            packet_type,
            sub_type: raw.sub_type,
            seq_nbr: raw.seq_nbr,
        })
    }

    /// Checks that this header belongs to a `packet_type` frame of the expected length.
    pub fn expect(&self, packet_type: PacketType) -> Result<(), RfxError> {
        if self.packet_type != packet_type {
            return Err(RfxError::PacketTypeMismatch {
                expected: packet_type,
                actual: self.packet_type,
            });
        }
        let expected = packet_type
            .declared_length()
            .ok_or(RfxError::UnsupportedPacketType(packet_type))?;
        if self.length != expected {
            return Err(RfxError::LengthMismatch {
                packet_type,
                expected,
                actual: self.length,
            });
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        [self.length, self.packet_type.into(), self.sub_type, self.seq_nbr]
    }
}

impl From<PacketHeader> for HeaderRaw {
    fn from(header: PacketHeader) -> Self {
        HeaderRaw {
            length: header.length,
            packet_type: header.packet_type.into(),
            sub_type: header.sub_type,
            seq_nbr: header.seq_nbr,
        }
    }
}
