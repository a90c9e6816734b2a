pub mod bits;
pub mod channel;
pub mod constants;
pub mod device_id;
pub mod enums;
pub mod error;
pub mod lighting6;
pub mod message;
pub mod packet;
pub mod thermostat1;


// Re-export the types most callers need
pub use channel::{Channel, ChannelValue, OnOff, OpenClosed};
pub use device_id::DeviceId;
pub use enums::ProtocolEnum;
pub use error::{ErrorKind, RfxError};
pub use lighting6::{Lighting6Command, Lighting6Message, Lighting6SubType};
pub use message::{Message, RfxMessage, SignalLevel};
pub use packet::{PacketHeader, PacketType};
pub use thermostat1::{Thermostat1Message, Thermostat1Mode, Thermostat1Status, Thermostat1SubType};
