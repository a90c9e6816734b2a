use crate::bits;
use crate::channel::{Channel, ChannelValue};
use crate::device_id::DeviceId;
use crate::enums::ProtocolEnum;
use crate::error::RfxError;
use crate::lighting6::Lighting6Message;
use crate::packet::{PacketHeader, PacketType};
use crate::thermostat1::Thermostat1Message;
use bytes::Bytes;
use std::fmt;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Received signal level, 0 (weakest) to 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "u8", into = "u8"))]
pub struct SignalLevel(u8);

impl SignalLevel {
    pub const MAX: u8 = 0x0F;

    pub fn new(level: u8) -> Result<Self, RfxError> {
        if level > Self::MAX {
            return Err(RfxError::unsupported_value("SignalLevel", level));
        }
        Ok(SignalLevel(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Reads the level from the high nibble of `byte`.
    pub(crate) fn from_high_nibble(byte: u8) -> Self {
        SignalLevel(bits::high_nibble(byte))
    }

    /// Byte carrying the level in its high nibble, low nibble zero.
    pub(crate) fn to_high_nibble(self) -> u8 {
        bits::with_high_nibble(0, self.0)
    }
}

impl TryFrom<u8> for SignalLevel {
    type Error = RfxError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        SignalLevel::new(level)
    }
}

impl From<SignalLevel> for u8 {
    fn from(level: SignalLevel) -> Self {
        level.0
    }
}

impl fmt::Display for SignalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Behaviour shared by every packet type codec.
///
/// Operations a packet type does not allow default to
/// [`RfxError::UnsupportedOperation`]; the capability constants let callers
/// check up front instead of probing.
pub trait RfxMessage: fmt::Display + Sized {
    const PACKET_TYPE: PacketType;

    /// Whether [`RfxMessage::set_device_id`] is allowed.
    const DEVICE_ID_WRITABLE: bool;

    /// Whether [`RfxMessage::set_sub_type`] is allowed.
    const SUB_TYPE_WRITABLE: bool;

    /// Channels answered by [`RfxMessage::convert_to_state`].
    const READABLE_CHANNELS: &'static [Channel];

    /// Channels accepted by [`RfxMessage::convert_from_state`].
    const WRITABLE_CHANNELS: &'static [Channel];

    type SubType: ProtocolEnum + fmt::Display;

    /// Decodes one frame of this packet type from the start of `data`.
    fn decode(data: &[u8]) -> Result<Self, RfxError>;

    /// Encodes the message into a frame of the packet type's fixed size.
    fn encode(&self) -> Bytes;

    fn seq_nbr(&self) -> u8;

    fn signal_level(&self) -> SignalLevel;

    fn sub_type(&self) -> Self::SubType;

    fn set_sub_type(&mut self, _sub_type: Self::SubType) -> Result<(), RfxError> {
        Err(unsupported_operation("set_sub_type", Self::PACKET_TYPE))
    }

    /// Resolves a sub type from configuration text, by name or by number.
    fn convert_sub_type(name: &str) -> Result<Self::SubType, RfxError> {
        Self::SubType::from_name(name)
    }

    fn device_id(&self) -> DeviceId;

    fn set_device_id(&mut self, _device_id: &DeviceId) -> Result<(), RfxError> {
        Err(unsupported_operation("set_device_id", Self::PACKET_TYPE))
    }

    fn convert_to_state(&self, channel: &str) -> Result<ChannelValue, RfxError>;

    fn convert_from_state(&mut self, _channel: &str, _value: ChannelValue) -> Result<(), RfxError> {
        Err(unsupported_operation("convert_from_state", Self::PACKET_TYPE))
    }
}

pub(crate) fn unsupported_operation(operation: &'static str, packet_type: PacketType) -> RfxError {
    RfxError::UnsupportedOperation {
        operation,
        packet_type,
    }
}

/// Resolves a channel id, failing for ids unknown to `packet_type`.
pub(crate) fn parse_channel(channel: &str, packet_type: PacketType) -> Result<Channel, RfxError> {
    channel.parse::<Channel>().map_err(|_| unsupported_channel(channel, packet_type))
}

pub(crate) fn unsupported_channel(channel: &str, packet_type: PacketType) -> RfxError {
    RfxError::UnsupportedChannel {
        channel: channel.to_string(),
        packet_type,
    }
}

/// A decoded packet of any supported type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Message {
    Lighting6(Lighting6Message),
    Thermostat1(Thermostat1Message),
}

impl Message {
    /// Decodes a frame, selecting the codec by its packet type tag.
    pub fn decode(data: &[u8]) -> Result<Self, RfxError> {
        let header = PacketHeader::decode(data)?;
        trace!("Decoding {} frame ({} bytes)", header.packet_type, data.len());

        match header.packet_type {
            PacketType::Lighting6 => Lighting6Message::decode(data).map(Message::Lighting6),
            PacketType::Thermostat1 => Thermostat1Message::decode(data).map(Message::Thermostat1),
            other => {
                debug!("No codec for packet type {}", other);
                Err(RfxError::UnsupportedPacketType(other))
            }
        }
    }

    pub fn encode(&self) -> Bytes {
        match self {
            Message::Lighting6(m) => m.encode(),
            Message::Thermostat1(m) => m.encode(),
        }
    }

    pub fn packet_type(&self) -> PacketType {
        match self {
            Message::Lighting6(_) => Lighting6Message::PACKET_TYPE,
            Message::Thermostat1(_) => Thermostat1Message::PACKET_TYPE,
        }
    }

    pub fn seq_nbr(&self) -> u8 {
        match self {
            Message::Lighting6(m) => m.seq_nbr(),
            Message::Thermostat1(m) => m.seq_nbr(),
        }
    }

    pub fn signal_level(&self) -> SignalLevel {
        match self {
            Message::Lighting6(m) => m.signal_level(),
            Message::Thermostat1(m) => m.signal_level(),
        }
    }

    /// Sub type symbol name, e.g. `BLYSS`.
    pub fn sub_type_name(&self) -> String {
        match self {
            Message::Lighting6(m) => m.sub_type().to_string(),
            Message::Thermostat1(m) => m.sub_type().to_string(),
        }
    }

    pub fn device_id(&self) -> DeviceId {
        match self {
            Message::Lighting6(m) => m.device_id(),
            Message::Thermostat1(m) => m.device_id(),
        }
    }

    /// Parses `device_id` and stores its components in the message.
    pub fn set_device_id(&mut self, device_id: &str) -> Result<(), RfxError> {
        if !self.device_id_writable() {
            return Err(unsupported_operation("set_device_id", self.packet_type()));
        }
        let device_id: DeviceId = device_id.parse()?;
        match self {
            Message::Lighting6(m) => m.set_device_id(&device_id),
            Message::Thermostat1(m) => m.set_device_id(&device_id),
        }
    }

    pub fn device_id_writable(&self) -> bool {
        match self {
            Message::Lighting6(_) => Lighting6Message::DEVICE_ID_WRITABLE,
            Message::Thermostat1(_) => Thermostat1Message::DEVICE_ID_WRITABLE,
        }
    }

    pub fn readable_channels(&self) -> &'static [Channel] {
        match self {
            Message::Lighting6(_) => Lighting6Message::READABLE_CHANNELS,
            Message::Thermostat1(_) => Thermostat1Message::READABLE_CHANNELS,
        }
    }

    pub fn writable_channels(&self) -> &'static [Channel] {
        match self {
            Message::Lighting6(_) => Lighting6Message::WRITABLE_CHANNELS,
            Message::Thermostat1(_) => Thermostat1Message::WRITABLE_CHANNELS,
        }
    }

    pub fn convert_to_state(&self, channel: &str) -> Result<ChannelValue, RfxError> {
        match self {
            Message::Lighting6(m) => m.convert_to_state(channel),
            Message::Thermostat1(m) => m.convert_to_state(channel),
        }
    }

    pub fn convert_from_state(&mut self, channel: &str, value: ChannelValue) -> Result<(), RfxError> {
        match self {
            Message::Lighting6(m) => m.convert_from_state(channel, value),
            Message::Thermostat1(m) => m.convert_from_state(channel, value),
        }
    }
}

impl TryFrom<&[u8]> for Message {
    type Error = RfxError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Message::decode(data)
    }
}

impl TryFrom<Bytes> for Message {
    type Error = RfxError;

    fn try_from(bytes: Bytes) -> Result<Self, Self::Error> {
        Message::decode(&bytes)
    }
}

impl From<Message> for Bytes {
    fn from(message: Message) -> Self {
        message.encode()
    }
}

impl From<Lighting6Message> for Message {
    fn from(message: Lighting6Message) -> Self {
        Message::Lighting6(message)
    }
}

impl From<Thermostat1Message> for Message {
    fn from(message: Thermostat1Message) -> Self {
        Message::Thermostat1(message)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Lighting6(m) => fmt::Display::fmt(m, f),
            Message::Thermostat1(m) => fmt::Display::fmt(m, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_level_bounds() {
        for level in 0..=SignalLevel::MAX {
            assert_eq!(SignalLevel::new(level).unwrap().get(), level);
        }
        for level in 16..=u8::MAX {
            assert_eq!(
                SignalLevel::new(level),
                Err(RfxError::UnsupportedValue {
                    enumeration: "SignalLevel",
                    value: level.to_string()
                })
            );
        }
    }

    #[test]
    fn test_signal_level_nibble() {
        assert_eq!(SignalLevel::from_high_nibble(0x8E).get(), 8);
        assert_eq!(SignalLevel::new(8).unwrap().to_high_nibble(), 0x80);
        assert_eq!(SignalLevel::new(15).unwrap().to_high_nibble(), 0xF0);
    }
}
