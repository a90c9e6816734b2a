// Protocol constants for RFXCOM packets

/// Size of the common packet header (length, type, sub type, sequence number)
pub const HEADER_SIZE: usize = 4;

/// Separator between the components of a device id, e.g. `257.A.1`
pub const ID_DELIMITER: char = '.';

/// Total frame size of a LIGHTING6 packet (12 bytes)
pub const LIGHTING6_SIZE: usize = 12;

/// Total frame size of a THERMOSTAT1 packet (10 bytes)
pub const THERMOSTAT1_SIZE: usize = 10;

/// Channel carrying an on/off command
pub const CHANNEL_COMMAND: &str = "command";

/// Channel carrying an open/closed contact state
pub const CHANNEL_CONTACT: &str = "contact";

/// Channel carrying the received signal level (0-15)
pub const CHANNEL_SIGNAL_LEVEL: &str = "signalLevel";

/// Channel carrying a measured temperature
pub const CHANNEL_TEMPERATURE: &str = "temperature";

/// Channel carrying a thermostat set point
pub const CHANNEL_SET_POINT: &str = "setpoint";
