//! Abstract channel states exchanged with the automation layer.

use crate::constants::*;
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Channels a packet type may expose. Parsing is exact and uses the
/// automation layer's channel ids (`"signalLevel"`, `"setpoint"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Channel {
    #[strum(serialize = "command")]
    Command,
    #[strum(serialize = "contact")]
    Contact,
    #[strum(serialize = "signalLevel")]
    SignalLevel,
    #[strum(serialize = "temperature")]
    Temperature,
    #[strum(serialize = "setpoint")]
    SetPoint,
}

impl Channel {
    pub fn id(&self) -> &'static str {
        match self {
            Channel::Command => CHANNEL_COMMAND,
            Channel::Contact => CHANNEL_CONTACT,
            Channel::SignalLevel => CHANNEL_SIGNAL_LEVEL,
            Channel::Temperature => CHANNEL_TEMPERATURE,
            Channel::SetPoint => CHANNEL_SET_POINT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[strum(serialize_all = "UPPERCASE")]
pub enum OnOff {
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[strum(serialize_all = "UPPERCASE")]
pub enum OpenClosed {
    Open,
    Closed,
}

/// A channel state, either read from a message or applied to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChannelValue {
    OnOff(OnOff),
    OpenClosed(OpenClosed),
    Decimal(i32),
    /// The message carries the channel but its current value has no state.
    Undefined,
}

impl From<OnOff> for ChannelValue {
    fn from(value: OnOff) -> Self {
        ChannelValue::OnOff(value)
    }
}

impl From<OpenClosed> for ChannelValue {
    fn from(value: OpenClosed) -> Self {
        ChannelValue::OpenClosed(value)
    }
}

impl fmt::Display for ChannelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelValue::OnOff(v) => write!(f, "{}", v),
            ChannelValue::OpenClosed(v) => write!(f, "{}", v),
            ChannelValue::Decimal(v) => write!(f, "{}", v),
            ChannelValue::Undefined => write!(f, "UNDEF"),
        }
    }
}
