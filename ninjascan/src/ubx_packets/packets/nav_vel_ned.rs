use crate::{
    error::ParserError,
    ubx_packets::{check_payload_len, le_i32, le_u32},
    UbxPacketMeta,
};

/// Velocity Solution in NED
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavVelNed {
    /// GPS Millisecond Time of Week
    pub itow: u32,
    /// north velocity, cm/s
    pub vel_north: i32,
    /// east velocity, cm/s
    pub vel_east: i32,
    /// down velocity, cm/s
    pub vel_down: i32,
    /// Speed (3-D), cm/s
    pub speed_3d: u32,
    /// Ground speed (2-D), cm/s
    pub ground_speed: u32,
    /// Heading of motion 2-D, 1e-5 degrees
    pub heading: i32,
    /// Speed Accuracy Estimate, cm/s
    pub speed_accuracy: u32,
    /// Course / Heading Accuracy Estimate, 1e-5 degrees
    pub course_accuracy: u32,
}

impl UbxPacketMeta for NavVelNed {
    const CLASS: u8 = 0x01;
    const ID: u8 = 0x12;
    const PAYLOAD_LEN: usize = 36;
    const PACKET_NAME: &'static str = "NAV-VELNED";
}

impl NavVelNed {
    pub fn from_payload(payload: &[u8]) -> Result<Self, ParserError> {
        check_payload_len::<Self>(payload)?;
        Ok(Self {
            itow: le_u32(payload, 0),
            vel_north: le_i32(payload, 4),
            vel_east: le_i32(payload, 8),
            vel_down: le_i32(payload, 12),
            speed_3d: le_u32(payload, 16),
            ground_speed: le_u32(payload, 20),
            heading: le_i32(payload, 24),
            speed_accuracy: le_u32(payload, 28),
            course_accuracy: le_u32(payload, 32),
        })
    }

    /// North, east, down velocity in m/s
    pub fn velocity_ned(&self) -> [f64; 3] {
        [self.vel_north, self.vel_east, self.vel_down].map(|v| f64::from(v) * 1e-2)
    }

    pub fn speed_3d_mps(&self) -> f64 {
        f64::from(self.speed_3d) * 1e-2
    }

    pub fn ground_speed_mps(&self) -> f64 {
        f64::from(self.ground_speed) * 1e-2
    }

    pub fn heading_degrees(&self) -> f64 {
        f64::from(self.heading) * 1e-5
    }

    pub fn course_accuracy_degrees(&self) -> f64 {
        f64::from(self.course_accuracy) * 1e-5
    }
}
