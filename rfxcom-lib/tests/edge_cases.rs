//! Tests for edge cases and error handling

mod common;

use common::*;

#[test]
fn test_packet_too_short_for_header() {
    let test_cases = vec![
        (vec![], "Empty packet"),
        (vec![0x0B], "1 byte packet"),
        (vec![0x0B, 0x15], "2 byte packet"),
        (vec![0x0B, 0x15, 0x00], "3 byte packet"),
    ];

    for (bytes_vec, description) in test_cases {
        let len = bytes_vec.len();
        match Message::decode(&bytes_vec) {
            Err(RfxError::InsufficientData { expected, actual }) => {
                assert_eq!(expected, 4, "{}", description);
                assert_eq!(actual, len, "{}", description);
            }
            Ok(m) => panic!("{}: Expected error but got {:?}", description, m),
            Err(other) => panic!("{}: Expected InsufficientData error, got: {:?}", description, other),
        }
    }
}

#[test]
fn test_truncated_frames() {
    let full = hex_to_bytes(BLYSS_SWITCH_ON);
    for len in 4..full.len() {
        let err = Message::decode(&full[..len]).unwrap_err();
        assert_eq!(err, RfxError::InsufficientData { expected: 12, actual: len });
        assert_eq!(err.kind(), ErrorKind::MalformedMessage);
    }
}

#[test]
fn test_declared_length_mismatch() {
    // A LIGHTING6 tag with a THERMOSTAT1-sized length byte
    let data = hex_to_bytes("09 15 00 02 01 01 41 01 00 00");
    assert_eq!(
        Message::decode(&data),
        Err(RfxError::LengthMismatch {
            packet_type: PacketType::Lighting6,
            expected: 0x0B,
            actual: 0x09
        })
    );

    let data = hex_to_bytes("0B 40 00 11 6A 2F 16 14 01 50 00 00");
    assert_eq!(Message::decode(&data).unwrap_err().kind(), ErrorKind::MalformedMessage);
}

#[test]
fn test_wrong_kind_for_codec() {
    let data = hex_to_bytes(DIGIMAX_DEMAND);
    assert_eq!(
        Lighting6Message::decode(&data),
        Err(RfxError::PacketTypeMismatch {
            expected: PacketType::Lighting6,
            actual: PacketType::Thermostat1
        })
    );
}

#[test]
fn test_unknown_sub_type() {
    let data = hex_to_bytes("0B 15 05 02 01 01 41 01 00 04 8E 00");
    let err = Message::decode(&data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedValue);
    assert_eq!(
        err,
        RfxError::UnsupportedValue {
            enumeration: "Lighting6SubType",
            value: "5".to_string()
        }
    );
    assert!(err.to_string().contains("Lighting6SubType"));
}

#[test]
fn test_sub_type_closed_for_every_byte() {
    for byte in 0..=u8::MAX {
        let mut data = hex_to_bytes(DIGIMAX_DEMAND).to_vec();
        data[2] = byte;
        let result = Message::decode(&data);
        if byte <= 1 {
            assert!(result.is_ok(), "sub type {:#04x}", byte);
        } else {
            assert_eq!(
                result,
                Err(RfxError::UnsupportedValue {
                    enumeration: "Thermostat1SubType",
                    value: byte.to_string()
                })
            );
        }
    }
}

#[test]
fn test_trailing_bytes_ignored() {
    let mut data = hex_to_bytes(DIGIMAX_DEMAND).to_vec();
    data.extend_from_slice(&[0xDE, 0xAD]);
    let message = Message::decode(&data).unwrap();
    assert_eq!(message.encode().len(), 10);
}

#[test]
fn test_identical_input_identical_error() {
    let data = hex_to_bytes("0B 15 00 02 01 01 41 01 07 04 8E 00");
    let first = Message::decode(&data).unwrap_err();
    let second = Message::decode(&data).unwrap_err();
    assert_eq!(first, second);
    assert_eq!(
        first,
        RfxError::UnsupportedValue {
            enumeration: "Lighting6Command",
            value: "7".to_string()
        }
    );
}

#[test]
fn test_device_id_arity() {
    let mut message: Message = Lighting6Message::new(1, b'A', 1, Lighting6Command::On).into();
    for id in ["1", "1.A", "1.A.1.1", ""] {
        let err = message.set_device_id(id).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidIdentity, "id {:?}", id);
    }
    assert_eq!(message.device_id().to_string(), "1.A.1");
}

#[test]
fn test_command_channel_type_mismatch() {
    let mut message = Message::decode(&hex_to_bytes(BLYSS_SWITCH_ON)).unwrap();
    for value in [
        ChannelValue::OpenClosed(OpenClosed::Closed),
        ChannelValue::Decimal(1),
        ChannelValue::Undefined,
    ] {
        let err = message.convert_from_state("command", value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }
}
