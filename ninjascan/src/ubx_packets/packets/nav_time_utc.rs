use bitflags::bitflags;
use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    error::{DateTimeError, ParserError},
    ubx_packets::{check_payload_len, le_i32, le_u16, le_u32},
    UbxPacketMeta,
};

/// UTC Time Solution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavTimeUtc {
    /// GPS Millisecond Time of Week
    pub itow: u32,
    /// Time Accuracy Estimate, ns
    pub time_accuracy: u32,
    /// Nanoseconds of second, range -1e9 .. 1e9
    pub nanos: i32,
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub min: u8,
    pub sec: u8,
    pub valid: NavTimeUtcFlags,
}

bitflags! {
    /// Validity Flags
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct NavTimeUtcFlags: u8 {
        /// Valid Time of Week
        const VALID_TOW = 1;
        /// Valid Week Number
        const VALID_WKN = 2;
        /// Valid UTC (Leap Seconds already known)
        const VALID_UTC = 4;
    }
}

impl UbxPacketMeta for NavTimeUtc {
    const CLASS: u8 = 0x01;
    const ID: u8 = 0x21;
    const PAYLOAD_LEN: usize = 20;
    const PACKET_NAME: &'static str = "NAV-TIMEUTC";
}

impl NavTimeUtc {
    pub fn from_payload(payload: &[u8]) -> Result<Self, ParserError> {
        check_payload_len::<Self>(payload)?;
        Ok(Self {
            itow: le_u32(payload, 0),
            time_accuracy: le_u32(payload, 4),
            nanos: le_i32(payload, 8),
            year: le_u16(payload, 12),
            month: payload[14],
            day: payload[15],
            hour: payload[16],
            min: payload[17],
            sec: payload[18],
            valid: NavTimeUtcFlags::from_bits_retain(payload[19]),
        })
    }

    /// Calendar time at whole-second resolution
    pub fn datetime(&self) -> Result<NaiveDateTime, DateTimeError> {
        let date = NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
        .ok_or(DateTimeError::InvalidDate)?;
        date.and_hms_opt(
            u32::from(self.hour),
            u32::from(self.min),
            u32::from(self.sec),
        )
        .ok_or(DateTimeError::InvalidTime)
    }
}
