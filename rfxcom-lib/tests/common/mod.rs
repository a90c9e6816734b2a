//! Common test utilities and shared imports

// Allow unused imports and dead code since this is a shared module
// used across multiple test files - not all items are used in every test file
#[allow(unused_imports)]
pub use bytes::Bytes;
#[allow(unused_imports)]
pub use rfxcom_lib::error::{ErrorKind, RfxError};
#[allow(unused_imports)]
pub use rfxcom_lib::lighting6::{Lighting6Command, Lighting6Message, Lighting6SubType};
#[allow(unused_imports)]
pub use rfxcom_lib::message::{Message, RfxMessage, SignalLevel};
#[allow(unused_imports)]
pub use rfxcom_lib::packet::PacketType;
#[allow(unused_imports)]
pub use rfxcom_lib::thermostat1::{Thermostat1Message, Thermostat1Mode, Thermostat1Status, Thermostat1SubType};
#[allow(unused_imports)]
pub use rfxcom_lib::{ChannelValue, DeviceId, OnOff, OpenClosed, ProtocolEnum};

/// Decode hex string to bytes for testing
#[allow(dead_code)]
pub fn hex_to_bytes(hex_data: &str) -> Bytes {
    let compact: String = hex_data.split_whitespace().collect();
    Bytes::from(hex::decode(compact).expect("Failed to decode hex"))
}

/// Blyss frame from a wall switch, command byte ON
#[allow(dead_code)]
pub const BLYSS_SWITCH_ON: &str = "0B 15 00 02 01 01 41 01 00 04 8E 00";

/// Same switch, command byte OFF
#[allow(dead_code)]
pub const BLYSS_SWITCH_OFF: &str = "0B 15 00 02 01 01 41 01 01 04 8E 00";

/// Digimax 210 reporting 22 C, set point 20 C, heating, demand, signal level 5
#[allow(dead_code)]
pub const DIGIMAX_DEMAND: &str = "09 40 00 11 6A 2F 16 14 01 50";
