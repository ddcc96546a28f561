use crate::{
    error::ParserError,
    ubx_packets::{check_payload_len, le_i32, le_u32},
    UbxPacketMeta,
};

/// Geodetic Position Solution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavPosLlh {
    /// GPS Millisecond Time of Week
    pub itow: u32,
    /// Longitude, 1e-7 degrees
    pub lon: i32,
    /// Latitude, 1e-7 degrees
    pub lat: i32,
    /// Height above Ellipsoid, mm
    pub height: i32,
    /// Height above mean sea level, mm
    pub height_msl: i32,
    /// Horizontal Accuracy Estimate, mm
    pub h_acc: u32,
    /// Vertical Accuracy Estimate, mm
    pub v_acc: u32,
}

impl UbxPacketMeta for NavPosLlh {
    const CLASS: u8 = 0x01;
    const ID: u8 = 0x02;
    const PAYLOAD_LEN: usize = 28;
    const PACKET_NAME: &'static str = "NAV-POSLLH";
}

impl NavPosLlh {
    pub fn from_payload(payload: &[u8]) -> Result<Self, ParserError> {
        check_payload_len::<Self>(payload)?;
        Ok(Self {
            itow: le_u32(payload, 0),
            lon: le_i32(payload, 4),
            lat: le_i32(payload, 8),
            height: le_i32(payload, 12),
            height_msl: le_i32(payload, 16),
            h_acc: le_u32(payload, 20),
            v_acc: le_u32(payload, 24),
        })
    }

    pub fn lon_degrees(&self) -> f64 {
        f64::from(self.lon) * 1e-7
    }

    pub fn lat_degrees(&self) -> f64 {
        f64::from(self.lat) * 1e-7
    }

    pub fn height_meters(&self) -> f64 {
        f64::from(self.height) * 1e-3
    }

    pub fn height_msl_meters(&self) -> f64 {
        f64::from(self.height_msl) * 1e-3
    }

    pub fn h_acc_meters(&self) -> f64 {
        f64::from(self.h_acc) * 1e-3
    }

    pub fn v_acc_meters(&self) -> f64 {
        f64::from(self.v_acc) * 1e-3
    }
}
