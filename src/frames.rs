use anyhow::{Context, Result, bail};
use rfxcom_lib::Message;
use serde::Serialize;
use std::collections::BTreeMap;

/// Parses a frame written as hex, e.g. `0B 15 00 02 ...` or `0b150002...`.
///
/// Whitespace, `:` and `-` separators and a leading `0x` are accepted.
pub fn parse_hex_frame(text: &str) -> Result<Vec<u8>> {
    let text = text.trim();
    let text = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-')
        .collect();
    if compact.is_empty() {
        bail!("empty frame");
    }
    hex::decode(&compact).with_context(|| format!("'{}' is not a hex frame", text))
}

/// Upper-case hex with a space between bytes, the way frames are usually logged.
pub fn format_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Everything `rfx-decode` reports about one frame.
#[derive(Debug, Serialize)]
pub struct FrameReport {
    pub raw: String,
    pub packet_type: String,
    pub device_id: String,
    pub message: Message,
    /// Channel id to state, or to the error text when the channel has none
    pub channels: BTreeMap<String, String>,
}

impl FrameReport {
    pub fn new(raw: &[u8], message: Message) -> Self {
        let channels = message
            .readable_channels()
            .iter()
            .map(|channel| {
                let state = match message.convert_to_state(channel.id()) {
                    Ok(value) => value.to_string(),
                    Err(e) => format!("error: {}", e),
                };
                (channel.id().to_string(), state)
            })
            .collect();

        FrameReport {
            raw: format_hex(raw),
            packet_type: message.packet_type().to_string(),
            device_id: message.device_id().to_string(),
            message,
            channels,
        }
    }
}
