use crate::packet::PacketType;
use thiserror::Error;

/// The primary error type for the `rfxcom-lib` library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RfxError {
    #[error("Insufficient data: expected at least {expected} bytes, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    #[error("Length mismatch for {packet_type}: expected declared length {expected:#04x}, got {actual:#04x}")]
    LengthMismatch {
        packet_type: PacketType,
        expected: u8,
        actual: u8,
    },

    #[error("Unknown packet type {0:#04x}")]
    UnknownPacketType(u8),

    #[error("Packet type mismatch: expected {expected}, got {actual}")]
    PacketTypeMismatch { expected: PacketType, actual: PacketType },

    #[error("Packet type {0} is not supported")]
    UnsupportedPacketType(PacketType),

    #[error("Unsupported value '{value}' for {enumeration}")]
    UnsupportedValue { enumeration: &'static str, value: String },

    #[error("Channel '{channel}' is not supported by {packet_type}")]
    UnsupportedChannel { channel: String, packet_type: PacketType },

    #[error("Channel '{channel}' does not accept {value}")]
    TypeMismatch { channel: String, value: String },

    #[error("Invalid device id '{id}': {reason}")]
    InvalidDeviceId { id: String, reason: String },

    #[error("Operation '{operation}' is not supported by {packet_type}")]
    UnsupportedOperation {
        operation: &'static str,
        packet_type: PacketType,
    },
}

/// Coarse classification of [`RfxError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedMessage,
    UnsupportedValue,
    UnsupportedChannel,
    TypeMismatch,
    InvalidIdentity,
    UnsupportedOperation,
}

impl RfxError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RfxError::InsufficientData { .. }
            | RfxError::LengthMismatch { .. }
            | RfxError::UnknownPacketType(_)
            | RfxError::PacketTypeMismatch { .. }
            | RfxError::UnsupportedPacketType(_) => ErrorKind::MalformedMessage,
            RfxError::UnsupportedValue { .. } => ErrorKind::UnsupportedValue,
            RfxError::UnsupportedChannel { .. } => ErrorKind::UnsupportedChannel,
            RfxError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            RfxError::InvalidDeviceId { .. } => ErrorKind::InvalidIdentity,
            RfxError::UnsupportedOperation { .. } => ErrorKind::UnsupportedOperation,
        }
    }

    pub(crate) fn unsupported_value(enumeration: &'static str, value: impl ToString) -> Self {
        RfxError::UnsupportedValue {
            enumeration,
            value: value.to_string(),
        }
    }

    pub(crate) fn invalid_device_id(id: &str, reason: impl Into<String>) -> Self {
        RfxError::InvalidDeviceId {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}
