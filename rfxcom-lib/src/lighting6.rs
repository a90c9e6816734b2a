//! LIGHTING6 (Blyss) switch and group messages.
//!
//! Frame layout, 12 bytes:
//!
//! | byte | field                                     |
//! |------|-------------------------------------------|
//! | 0    | length (0x0B)                             |
//! | 1    | packet type (0x15)                        |
//! | 2    | sub type                                  |
//! | 3    | sequence number                           |
//! | 4-5  | sensor id, big-endian                     |
//! | 6    | group code (ASCII letter)                 |
//! | 7    | unit code                                 |
//! | 8    | command                                   |
//! | 9-10 | command sequence counters, sent as zero   |
//! | 11   | signal level in the high nibble           |

use crate::bits;
use crate::channel::{Channel, ChannelValue, OnOff, OpenClosed};
use crate::constants::LIGHTING6_SIZE;
use crate::device_id::DeviceId;
use crate::enums::{ProtocolEnum, protocol_enum};
use crate::error::RfxError;
use crate::message::{RfxMessage, SignalLevel, parse_channel, unsupported_channel};
use crate::packet::{HeaderRaw, PacketHeader, PacketType};
use bytes::Bytes;
use std::fmt;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

protocol_enum! {
    Lighting6SubType {
        Blyss = 0x00,
    }
}

protocol_enum! {
    Lighting6Command {
        On = 0x00,
        Off = 0x01,
        GroupOn = 0x02,
        GroupOff = 0x03,
    }
}

impl Lighting6Command {
    pub fn is_on(&self) -> bool {
        matches!(self, Lighting6Command::On | Lighting6Command::GroupOn)
    }

    /// Switch view: group commands read as their single-unit equivalent.
    pub fn on_off(&self) -> OnOff {
        if self.is_on() { OnOff::On } else { OnOff::Off }
    }

    /// Contact view: an "on" command reads as an open contact.
    pub fn open_closed(&self) -> OpenClosed {
        if self.is_on() { OpenClosed::Open } else { OpenClosed::Closed }
    }
}

#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
#[repr(C)]
pub struct Lighting6Raw {
    pub header: HeaderRaw,
    pub sensor_id: [u8; 2], // Big-endian
    pub group_code: u8,
    pub unit_code: u8,
    pub command: u8,
    pub cmd_seq_nbr1: u8, // 0-4, ignored by the receivers
    pub cmd_seq_nbr2: u8, // 0-145, ignored by the receivers
    pub rssi: u8,         // Signal level in the high nibble
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lighting6Message {
    pub sub_type: Lighting6SubType,
    pub seq_nbr: u8,
    pub sensor_id: u16,
    /// Group letter as sent on the wire, usually `b'A'`..=`b'P'`
    pub group_code: u8,
    pub unit_code: u8,
    pub command: Lighting6Command,
    pub signal_level: SignalLevel,
}

impl Lighting6Message {
    pub fn new(sensor_id: u16, group_code: u8, unit_code: u8, command: Lighting6Command) -> Self {
        Lighting6Message {
            sub_type: Lighting6SubType::Blyss,
            seq_nbr: 0,
            sensor_id,
            group_code,
            unit_code,
            command,
            signal_level: SignalLevel::default(),
        }
    }

    /// Builds an outbound message addressed to `device_id` (`sensor.group.unit`).
    pub fn for_device(device_id: &str, command: Lighting6Command) -> Result<Self, RfxError> {
        let mut message = Lighting6Message::new(0, 0, 0, command);
        message.set_device_id(&device_id.parse()?)?;
        Ok(message)
    }

    pub fn group_char(&self) -> char {
        char::from(self.group_code)
    }
}

impl TryFrom<Lighting6Raw> for Lighting6Message {
    type Error = RfxError;

    fn try_from(raw: Lighting6Raw) -> Result<Self, Self::Error> {
        Ok(Lighting6Message {
            sub_type: Lighting6SubType::from_byte(raw.header.sub_type)?,
            seq_nbr: raw.header.seq_nbr,
            sensor_id: bits::read_u16_be(raw.sensor_id),
            group_code: raw.group_code,
            unit_code: raw.unit_code,
            command: Lighting6Command::from_byte(raw.command)?,
            signal_level: SignalLevel::from_high_nibble(raw.rssi),
        })
    }
}

impl From<&Lighting6Message> for Lighting6Raw {
    fn from(message: &Lighting6Message) -> Self {
        let header = PacketHeader::new(PacketType::Lighting6, message.sub_type.to_byte(), message.seq_nbr);
        Lighting6Raw {
            header: header.into(),
            sensor_id: bits::write_u16_be(message.sensor_id),
            group_code: message.group_code,
            unit_code: message.unit_code,
            command: message.command.to_byte(),
            cmd_seq_nbr1: 0,
            cmd_seq_nbr2: 0,
            rssi: message.signal_level.to_high_nibble(),
        }
    }
}

impl RfxMessage for Lighting6Message {
    const PACKET_TYPE: PacketType = PacketType::Lighting6;
    const DEVICE_ID_WRITABLE: bool = true;
    const SUB_TYPE_WRITABLE: bool = true;
    const READABLE_CHANNELS: &'static [Channel] = &[Channel::SignalLevel, Channel::Command, Channel::Contact];
    const WRITABLE_CHANNELS: &'static [Channel] = &[Channel::Command];

    type SubType = Lighting6SubType;

    fn decode(data: &[u8]) -> Result<Self, RfxError> {
        let header = PacketHeader::decode(data)?;
        header.expect(Self::PACKET_TYPE)?;

        let (raw, _) = Lighting6Raw::read_from_prefix(data).map_err(|_| RfxError::InsufficientData {
            expected: LIGHTING6_SIZE,
            actual: data.len(),
        })?;

        Lighting6Message::try_from(raw)
    }

    fn encode(&self) -> Bytes {
        Bytes::copy_from_slice(Lighting6Raw::from(self).as_bytes())
    }

    fn seq_nbr(&self) -> u8 {
        self.seq_nbr
    }

    fn signal_level(&self) -> SignalLevel {
        self.signal_level
    }

    fn sub_type(&self) -> Lighting6SubType {
        self.sub_type
    }

    fn set_sub_type(&mut self, sub_type: Lighting6SubType) -> Result<(), RfxError> {
        self.sub_type = sub_type;
        Ok(())
    }

    fn device_id(&self) -> DeviceId {
        DeviceId::new([
            self.sensor_id.to_string(),
            self.group_char().to_string(),
            self.unit_code.to_string(),
        ])
    }

    fn set_device_id(&mut self, device_id: &DeviceId) -> Result<(), RfxError> {
        device_id.expect_arity(3)?;
        let sensor_id = device_id.number::<u16>(0)?;
        let group_code = device_id.byte_char(1)?;
        let unit_code = device_id.number::<u8>(2)?;

        self.sensor_id = sensor_id;
        self.group_code = group_code;
        self.unit_code = unit_code;
        Ok(())
    }

    fn convert_to_state(&self, channel: &str) -> Result<ChannelValue, RfxError> {
        match parse_channel(channel, Self::PACKET_TYPE)? {
            Channel::SignalLevel => Ok(ChannelValue::Decimal(self.signal_level.get().into())),
            Channel::Command => Ok(self.command.on_off().into()),
            Channel::Contact => Ok(self.command.open_closed().into()),
            _ => Err(unsupported_channel(channel, Self::PACKET_TYPE)),
        }
    }

    fn convert_from_state(&mut self, channel: &str, value: ChannelValue) -> Result<(), RfxError> {
        match parse_channel(channel, Self::PACKET_TYPE)? {
            Channel::Command => match value {
                ChannelValue::OnOff(OnOff::On) => {
                    self.command = Lighting6Command::On;
                    Ok(())
                }
                ChannelValue::OnOff(OnOff::Off) => {
                    self.command = Lighting6Command::Off;
                    Ok(())
                }
                other => Err(RfxError::TypeMismatch {
                    channel: channel.to_string(),
                    value: other.to_string(),
                }),
            },
            _ => Err(unsupported_channel(channel, Self::PACKET_TYPE)),
        }
    }
}

impl fmt::Display for Lighting6Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Packet type = {}, Seq number = {}, Sub type = {}, Device Id = {}, Command = {}, Signal level = {}",
            Self::PACKET_TYPE,
            self.seq_nbr,
            self.sub_type,
            self.device_id(),
            self.command,
            self.signal_level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const BLYSS_FRAME: [u8; 12] = [0x0B, 0x15, 0x00, 0x02, 0x01, 0x01, 0x41, 0x01, 0x00, 0x04, 0x8E, 0x00];

    fn message(command: Lighting6Command) -> Lighting6Message {
        Lighting6Message::new(257, b'A', 1, command)
    }

    #[test]
    fn test_raw_layout_size() {
        assert_eq!(std::mem::size_of::<Lighting6Raw>(), LIGHTING6_SIZE);
    }

    #[test]
    fn test_command_byte_8_is_decoded() {
        let mut data = BLYSS_FRAME;
        data[8] = 0x01;
        let message = Lighting6Message::decode(&data).unwrap();
        assert_eq!(message.command, Lighting6Command::Off);

        data[8] = 0x04;
        assert_eq!(
            Lighting6Message::decode(&data),
            Err(RfxError::UnsupportedValue {
                enumeration: "Lighting6Command",
                value: "4".to_string()
            })
        );
    }

    #[test]
    fn test_command_and_contact_views() {
        let cases = [
            (Lighting6Command::On, OnOff::On, OpenClosed::Open),
            (Lighting6Command::GroupOn, OnOff::On, OpenClosed::Open),
            (Lighting6Command::Off, OnOff::Off, OpenClosed::Closed),
            (Lighting6Command::GroupOff, OnOff::Off, OpenClosed::Closed),
        ];
        for (command, on_off, open_closed) in cases {
            let m = message(command);
            assert_eq!(m.convert_to_state("command"), Ok(ChannelValue::OnOff(on_off)));
            assert_eq!(m.convert_to_state("contact"), Ok(ChannelValue::OpenClosed(open_closed)));
        }
    }

    #[test]
    fn test_unknown_channels_rejected() {
        let m = message(Lighting6Command::On);
        for channel in ["temperature", "setpoint", "battery", ""] {
            let err = m.convert_to_state(channel).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedChannel, "channel {:?}", channel);
        }
    }

    #[test]
    fn test_command_write() {
        let mut m = message(Lighting6Command::GroupOff);
        m.convert_from_state("command", OnOff::On.into()).unwrap();
        assert_eq!(m.command, Lighting6Command::On);
        m.convert_from_state("command", OnOff::Off.into()).unwrap();
        assert_eq!(m.command, Lighting6Command::Off);
    }

    #[test]
    fn test_command_write_type_mismatch() {
        let mut m = message(Lighting6Command::On);
        assert_eq!(
            m.convert_from_state("command", OpenClosed::Open.into()),
            Err(RfxError::TypeMismatch {
                channel: "command".to_string(),
                value: "OPEN".to_string()
            })
        );
        assert_eq!(m.command, Lighting6Command::On);
    }

    #[test]
    fn test_read_only_channels_rejected_on_write() {
        let mut m = message(Lighting6Command::On);
        for channel in ["contact", "signalLevel", "nonsense"] {
            let err = m.convert_from_state(channel, OnOff::Off.into()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedChannel);
        }
        assert_eq!(m.command, Lighting6Command::On);
    }

    #[test]
    fn test_device_id() {
        let m = message(Lighting6Command::On);
        assert_eq!(m.device_id().to_string(), "257.A.1");

        let m = Lighting6Message::for_device("65535.P.16", Lighting6Command::Off).unwrap();
        assert_eq!(m.sensor_id, 65535);
        assert_eq!(m.group_code, b'P');
        assert_eq!(m.unit_code, 16);
    }

    #[test]
    fn test_device_id_errors_leave_message_untouched() {
        let mut m = message(Lighting6Command::On);
        for id in ["257.A", "257.A.1.2", "x.A.1", "257.AB.1", "257.A.256", "70000.A.1", "257.Ω.1"] {
            let err = m.set_device_id(&id.parse().unwrap()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidIdentity, "id {:?}", id);
        }
        assert_eq!(m, message(Lighting6Command::On));
    }

    #[test]
    fn test_sub_type_is_writable() {
        let mut m = message(Lighting6Command::On);
        let sub_type = Lighting6Message::convert_sub_type("BLYSS").unwrap();
        assert!(m.set_sub_type(sub_type).is_ok());
        assert!(Lighting6Message::convert_sub_type("1").is_err());
    }

    #[test]
    fn test_display() {
        let m = Lighting6Message::decode(&BLYSS_FRAME).unwrap();
        assert_eq!(
            m.to_string(),
            "Packet type = LIGHTING6, Seq number = 2, Sub type = BLYSS, Device Id = 257.A.1, Command = ON, Signal level = 0"
        );
    }
}
