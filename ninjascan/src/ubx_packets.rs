//! UBX navigation messages carried inside the G page sub-stream.
//!
//! Every message is decoded from its payload at fixed offsets. Multi-byte
//! fields are little-endian, as the receiver sends them.

mod packets;
mod types;

pub use packets::*;
pub use types::*;

use crate::error::ParserError;

/// Information about a concrete UBX message
pub trait UbxPacketMeta {
    const CLASS: u8;
    const ID: u8;
    /// Smallest payload that holds every field we decode
    const PAYLOAD_LEN: usize;
    const PACKET_NAME: &'static str;
}

/// A decoded UBX message. Each variant only ever holds the latest value of its
/// kind; there is no history.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UbxPacket {
    NavPosLlh(NavPosLlh),
    NavStatus(NavStatus),
    NavSolution(NavSolution),
    NavVelNed(NavVelNed),
    NavTimeUtc(NavTimeUtc),
}

impl UbxPacket {
    pub const fn class_and_msg_id(&self) -> (u8, u8) {
        match self {
            UbxPacket::NavPosLlh(_) => (NavPosLlh::CLASS, NavPosLlh::ID),
            UbxPacket::NavStatus(_) => (NavStatus::CLASS, NavStatus::ID),
            UbxPacket::NavSolution(_) => (NavSolution::CLASS, NavSolution::ID),
            UbxPacket::NavVelNed(_) => (NavVelNed::CLASS, NavVelNed::ID),
            UbxPacket::NavTimeUtc(_) => (NavTimeUtc::CLASS, NavTimeUtc::ID),
        }
    }
}

/// Message ids the logger is known to emit. Only some of them are decoded.
pub const KNOWN_MESSAGES: [(u8, u8, &str); 11] = [
    (0x01, 0x02, "NAV-POSLLH"),
    (0x01, 0x03, "NAV-STATUS"),
    (0x01, 0x04, "NAV-DOP"),
    (0x01, 0x06, "NAV-SOL"),
    (0x01, 0x12, "NAV-VELNED"),
    (0x01, 0x20, "NAV-TIMEGPS"),
    (0x01, 0x21, "NAV-TIMEUTC"),
    (0x01, 0x30, "NAV-SVINFO"),
    (0x02, 0x10, "RXM-RAW"),
    (0x02, 0x11, "RXM-SFRB"),
    (0x0b, 0x02, "AID-HUI"),
];

/// Human readable name of a message id, if it is one the logger emits
pub fn message_name(class: u8, msg_id: u8) -> Option<&'static str> {
    KNOWN_MESSAGES
        .iter()
        .find(|(c, i, _)| *c == class && *i == msg_id)
        .map(|(_, _, name)| *name)
}

/// Dispatch a payload to its decoder. `None` means the id is not one we decode.
pub(crate) fn match_packet(
    class: u8,
    msg_id: u8,
    payload: &[u8],
) -> Option<Result<UbxPacket, ParserError>> {
    let packet = match (class, msg_id) {
        (NavPosLlh::CLASS, NavPosLlh::ID) => NavPosLlh::from_payload(payload).map(UbxPacket::NavPosLlh),
        (NavStatus::CLASS, NavStatus::ID) => NavStatus::from_payload(payload).map(UbxPacket::NavStatus),
        (NavSolution::CLASS, NavSolution::ID) => {
            NavSolution::from_payload(payload).map(UbxPacket::NavSolution)
        },
        (NavVelNed::CLASS, NavVelNed::ID) => NavVelNed::from_payload(payload).map(UbxPacket::NavVelNed),
        (NavTimeUtc::CLASS, NavTimeUtc::ID) => {
            NavTimeUtc::from_payload(payload).map(UbxPacket::NavTimeUtc)
        },
        _ => return None,
    };
    Some(packet)
}

pub(crate) fn check_payload_len<P: UbxPacketMeta>(payload: &[u8]) -> Result<(), ParserError> {
    if payload.len() < P::PAYLOAD_LEN {
        return Err(ParserError::InvalidPacketLen {
            packet: P::PACKET_NAME,
            expect: P::PAYLOAD_LEN,
            got: payload.len(),
        });
    }
    Ok(())
}

#[inline]
pub(crate) fn le_u16(payload: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([payload[offset], payload[offset + 1]])
}

#[inline]
pub(crate) fn le_i16(payload: &[u8], offset: usize) -> i16 {
    i16::from_le_bytes([payload[offset], payload[offset + 1]])
}

#[inline]
pub(crate) fn le_u32(payload: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        payload[offset],
        payload[offset + 1],
        payload[offset + 2],
        payload[offset + 3],
    ])
}

#[inline]
pub(crate) fn le_i32(payload: &[u8], offset: usize) -> i32 {
    le_u32(payload, offset) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_are_not_matched() {
        assert!(match_packet(0x01, 0x30, &[0; 8]).is_none());
        assert!(match_packet(0x05, 0x01, &[0x06, 0x01]).is_none());
    }

    #[test]
    fn short_payload_is_rejected() {
        assert_eq!(
            match_packet(0x01, 0x02, &[0; 10]),
            Some(Err(ParserError::InvalidPacketLen {
                packet: "NAV-POSLLH",
                expect: 28,
                got: 10
            }))
        );
    }

    #[test]
    fn names() {
        assert_eq!(message_name(0x01, 0x12), Some("NAV-VELNED"));
        assert_eq!(message_name(0x0b, 0x02), Some("AID-HUI"));
        assert_eq!(message_name(0x06, 0x00), None);
    }

    #[test]
    fn little_endian_helpers() {
        let bytes = [0x78, 0x56, 0x34, 0x12, 0xff, 0xff];
        assert_eq!(le_u32(&bytes, 0), 0x1234_5678);
        assert_eq!(le_u16(&bytes, 0), 0x5678);
        assert_eq!(le_i16(&bytes, 4), -1);
        assert_eq!(le_i32(&[0xff, 0xff, 0xff, 0xff], 0), -1);
    }
}
