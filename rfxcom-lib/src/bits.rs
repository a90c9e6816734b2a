//! Sub-byte and multi-byte field helpers shared by every packet layout.
//!
//! Offsets count from the least significant bit. Callers validate widths and
//! values up front; a field that does not fit its byte trips a debug assertion.

/// Mask covering the lowest `width` bits.
const fn mask(width: u8) -> u8 {
    if width >= 8 { 0xFF } else { (1u8 << width) - 1 }
}

/// Reads a `width`-bit unsigned field starting at bit `offset` of `byte`.
pub const fn extract(byte: u8, offset: u8, width: u8) -> u8 {
    debug_assert!(offset + width <= 8);
    (byte >> offset) & mask(width)
}

/// Writes `value` into the `width`-bit field at bit `offset` of `byte`.
///
/// Only the bits of that field are cleared; every other bit of `byte` is kept.
pub const fn pack(byte: u8, offset: u8, width: u8, value: u8) -> u8 {
    debug_assert!(offset + width <= 8);
    debug_assert!(value <= mask(width));
    let field = mask(width) << offset;
    (byte & !field) | ((value << offset) & field)
}

/// Upper four bits of `byte`.
pub const fn high_nibble(byte: u8) -> u8 {
    extract(byte, 4, 4)
}

/// `byte` with its upper four bits replaced by `value`.
pub const fn with_high_nibble(byte: u8, value: u8) -> u8 {
    pack(byte, 4, 4, value)
}

pub const fn read_u16_be(bytes: [u8; 2]) -> u16 {
    u16::from_be_bytes(bytes)
}

pub const fn write_u16_be(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}
