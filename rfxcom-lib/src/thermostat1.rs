//! THERMOSTAT1 messages sent by Digimax 210 room thermostats.
//!
//! Frame layout, 10 bytes:
//!
//! | byte | field                                            |
//! |------|--------------------------------------------------|
//! | 0    | length (0x09)                                    |
//! | 1    | packet type (0x40)                               |
//! | 2    | sub type                                         |
//! | 3    | sequence number                                  |
//! | 4-5  | sensor id, big-endian                            |
//! | 6    | temperature, signed degrees                      |
//! | 7    | set point, signed degrees                        |
//! | 8    | bit 7 mode, bits 0-1 status, bits 2-6 unused     |
//! | 9    | signal level in the high nibble                  |
//!
//! The thermostat is receive-only: its id, sub type and channels cannot be
//! changed through the message.

use crate::bits;
use crate::channel::{Channel, ChannelValue, OpenClosed};
use crate::constants::THERMOSTAT1_SIZE;
use crate::device_id::DeviceId;
use crate::enums::{ProtocolEnum, protocol_enum};
use crate::error::RfxError;
use crate::message::{RfxMessage, SignalLevel, parse_channel, unsupported_channel};
use crate::packet::{HeaderRaw, PacketHeader, PacketType};
use bytes::Bytes;
use modular_bitfield::prelude::*;
use std::fmt;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

protocol_enum! {
    Thermostat1SubType {
        Digimax = 0x00,
        DigimaxShort = 0x01,
    }
}

protocol_enum! {
    Thermostat1Mode {
        Heating = 0x00,
        Cooling = 0x01,
    }
}

protocol_enum! {
    Thermostat1Status {
        NoStatus = 0x00,
        Demand = 0x01,
        NoDemand = 0x02,
        Initializing = 0x03,
    }
}

impl Thermostat1Status {
    /// Contact view of the heating demand; only a known demand state maps.
    pub fn open_closed(&self) -> Option<OpenClosed> {
        match self {
            Thermostat1Status::Demand => Some(OpenClosed::Closed),
            Thermostat1Status::NoDemand => Some(OpenClosed::Open),
            Thermostat1Status::NoStatus | Thermostat1Status::Initializing => None,
        }
    }
}

/// Byte 8 of the frame.
#[bitfield(bytes = 1)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thermostat1Control {
    pub status: B2,
    #[skip]
    unused: B5,
    pub mode: B1,
}

#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
#[repr(C)]
pub struct Thermostat1Raw {
    pub header: HeaderRaw,
    pub sensor_id: [u8; 2], // Big-endian
    pub temperature: i8,    // Degrees Celsius
    pub set_point: i8,      // Degrees Celsius
    pub control: u8,        // Thermostat1Control
    pub rssi: u8,           // Signal level in the high nibble
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Thermostat1Message {
    pub sub_type: Thermostat1SubType,
    pub seq_nbr: u8,
    pub sensor_id: u16,
    pub temperature: i8,
    pub set_point: i8,
    pub mode: Thermostat1Mode,
    pub status: Thermostat1Status,
    pub signal_level: SignalLevel,
}

impl Thermostat1Message {
    pub fn new(
        sub_type: Thermostat1SubType,
        sensor_id: u16,
        temperature: i8,
        set_point: i8,
        mode: Thermostat1Mode,
        status: Thermostat1Status,
    ) -> Self {
        Thermostat1Message {
            sub_type,
            seq_nbr: 0,
            sensor_id,
            temperature,
            set_point,
            mode,
            status,
            signal_level: SignalLevel::default(),
        }
    }
}

impl TryFrom<Thermostat1Raw> for Thermostat1Message {
    type Error = RfxError;

    fn try_from(raw: Thermostat1Raw) -> Result<Self, Self::Error> {
        let control = Thermostat1Control::from_bytes([raw.control]);
        Ok(Thermostat1Message {
            sub_type: Thermostat1SubType::from_byte(raw.header.sub_type)?,
            seq_nbr: raw.header.seq_nbr,
            sensor_id: bits::read_u16_be(raw.sensor_id),
            temperature: raw.temperature,
            set_point: raw.set_point,
            mode: Thermostat1Mode::from_byte(control.mode())?,
            status: Thermostat1Status::from_byte(control.status())?,
            signal_level: SignalLevel::from_high_nibble(raw.rssi),
        })
    }
}

impl From<&Thermostat1Message> for Thermostat1Raw {
    fn from(message: &Thermostat1Message) -> Self {
        let header = PacketHeader::new(PacketType::Thermostat1, message.sub_type.to_byte(), message.seq_nbr);
        let control = Thermostat1Control::new()
            .with_mode(message.mode.to_byte())
            .with_status(message.status.to_byte());
        Thermostat1Raw {
            header: header.into(),
            sensor_id: bits::write_u16_be(message.sensor_id),
            temperature: message.temperature,
            set_point: message.set_point,
            control: control.into_bytes()[0],
            rssi: message.signal_level.to_high_nibble(),
        }
    }
}

impl RfxMessage for Thermostat1Message {
    const PACKET_TYPE: PacketType = PacketType::Thermostat1;
    const DEVICE_ID_WRITABLE: bool = false;
    const SUB_TYPE_WRITABLE: bool = false;
    const READABLE_CHANNELS: &'static [Channel] = &[
        Channel::SignalLevel,
        Channel::Temperature,
        Channel::SetPoint,
        Channel::Contact,
    ];
    const WRITABLE_CHANNELS: &'static [Channel] = &[];

    type SubType = Thermostat1SubType;

    fn decode(data: &[u8]) -> Result<Self, RfxError> {
        let header = PacketHeader::decode(data)?;
        header.expect(Self::PACKET_TYPE)?;

        let (raw, _) = Thermostat1Raw::read_from_prefix(data).map_err(|_| RfxError::InsufficientData {
            expected: THERMOSTAT1_SIZE,
            actual: data.len(),
        })?;

        Thermostat1Message::try_from(raw)
    }

    fn encode(&self) -> Bytes {
        Bytes::copy_from_slice(Thermostat1Raw::from(self).as_bytes())
    }

    fn seq_nbr(&self) -> u8 {
        self.seq_nbr
    }

    fn signal_level(&self) -> SignalLevel {
        self.signal_level
    }

    fn sub_type(&self) -> Thermostat1SubType {
        self.sub_type
    }

    fn device_id(&self) -> DeviceId {
        DeviceId::new([self.sensor_id])
    }

    fn convert_to_state(&self, channel: &str) -> Result<ChannelValue, RfxError> {
        match parse_channel(channel, Self::PACKET_TYPE)? {
            Channel::SignalLevel => Ok(ChannelValue::Decimal(self.signal_level.get().into())),
            Channel::Temperature => Ok(ChannelValue::Decimal(self.temperature.into())),
            Channel::SetPoint => Ok(ChannelValue::Decimal(self.set_point.into())),
            Channel::Contact => Ok(self
                .status
                .open_closed()
                .map_or(ChannelValue::Undefined, ChannelValue::OpenClosed)),
            _ => Err(unsupported_channel(channel, Self::PACKET_TYPE)),
        }
    }
}

impl fmt::Display for Thermostat1Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Packet type = {}, Seq number = {}, Sub type = {}, Device Id = {}, Temperature = {}, Set = {}, Mode = {}, Status = {}, Signal level = {}",
            Self::PACKET_TYPE,
            self.seq_nbr,
            self.sub_type,
            self.device_id(),
            self.temperature,
            self.set_point,
            self.mode,
            self.status,
            self.signal_level
        )
    }
}
