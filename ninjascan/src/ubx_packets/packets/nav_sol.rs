use crate::{
    error::ParserError,
    ubx_packets::{check_payload_len, le_i16, le_i32, le_u16, le_u32, GpsFix, NavSolFlags},
    UbxPacketMeta,
};

/// Navigation Solution Information
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavSolution {
    /// GPS Millisecond Time of Week
    pub itow: u32,
    /// Fractional part of iTOW (range: +/-500000), ns
    pub ftow_ns: i32,
    /// GPS week number of the navigation epoch
    pub week: i16,
    pub fix_type: GpsFix,
    pub flags: NavSolFlags,
    /// ECEF position, cm
    pub ecef_x: i32,
    pub ecef_y: i32,
    pub ecef_z: i32,
    /// 3D Position Accuracy Estimate, cm
    pub position_accuracy: u32,
    /// ECEF velocity, cm/s
    pub ecef_vx: i32,
    pub ecef_vy: i32,
    pub ecef_vz: i32,
    /// Speed Accuracy Estimate, cm/s
    pub speed_accuracy: u32,
    /// Position DOP, scaled by 100
    pub pdop: u16,
    /// Number of SVs used in Nav Solution
    pub num_sv: u8,
}

impl UbxPacketMeta for NavSolution {
    const CLASS: u8 = 0x01;
    const ID: u8 = 0x06;
    const PAYLOAD_LEN: usize = 52;
    const PACKET_NAME: &'static str = "NAV-SOL";
}

impl NavSolution {
    pub fn from_payload(payload: &[u8]) -> Result<Self, ParserError> {
        check_payload_len::<Self>(payload)?;
        Ok(Self {
            itow: le_u32(payload, 0),
            ftow_ns: le_i32(payload, 4),
            week: le_i16(payload, 8),
            fix_type: GpsFix::from(payload[10]),
            flags: NavSolFlags::from_bits_retain(payload[11]),
            ecef_x: le_i32(payload, 12),
            ecef_y: le_i32(payload, 16),
            ecef_z: le_i32(payload, 20),
            position_accuracy: le_u32(payload, 24),
            ecef_vx: le_i32(payload, 28),
            ecef_vy: le_i32(payload, 32),
            ecef_vz: le_i32(payload, 36),
            speed_accuracy: le_u32(payload, 40),
            pdop: le_u16(payload, 44),
            num_sv: payload[47],
        })
    }

    pub fn ecef_meters(&self) -> [f64; 3] {
        [self.ecef_x, self.ecef_y, self.ecef_z].map(|v| f64::from(v) * 1e-2)
    }

    pub fn ecef_velocity(&self) -> [f64; 3] {
        [self.ecef_vx, self.ecef_vy, self.ecef_vz].map(|v| f64::from(v) * 1e-2)
    }

    pub fn position_accuracy_meters(&self) -> f64 {
        f64::from(self.position_accuracy) * 1e-2
    }

    pub fn speed_accuracy_mps(&self) -> f64 {
        f64::from(self.speed_accuracy) * 1e-2
    }

    pub fn pdop(&self) -> f64 {
        f64::from(self.pdop) * 1e-2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_solution_keeps_every_ecef_axis() {
        let mut payload = [0u8; 52];
        payload[0..4].copy_from_slice(&345_600_000u32.to_le_bytes());
        payload[4..8].copy_from_slice(&(-1234i32).to_le_bytes());
        payload[8..10].copy_from_slice(&2000i16.to_le_bytes());
        payload[10] = 3;
        payload[11] = 0x0d;
        payload[12..16].copy_from_slice(&(-395_861_234i32).to_le_bytes());
        payload[16..20].copy_from_slice(&333_722_100i32.to_le_bytes());
        payload[20..24].copy_from_slice(&370_281_500i32.to_le_bytes());
        payload[28..32].copy_from_slice(&150i32.to_le_bytes());
        payload[44..46].copy_from_slice(&185u16.to_le_bytes());
        payload[47] = 9;

        let sol = NavSolution::from_payload(&payload).unwrap();
        assert_eq!(sol.week, 2000);
        assert_eq!(sol.ftow_ns, -1234);
        assert_eq!(sol.fix_type, GpsFix::Fix3D);
        assert!(sol.flags.contains(NavSolFlags::GPS_FIX_OK | NavSolFlags::TOW_SET));
        assert_eq!(sol.ecef_x, -395_861_234);
        assert_eq!(sol.ecef_y, 333_722_100);
        assert_eq!(sol.ecef_z, 370_281_500);
        assert_eq!(sol.ecef_vx, 150);
        assert_eq!(sol.num_sv, 9);
        assert!((sol.pdop() - 1.85).abs() < 1e-9);
        assert!((sol.ecef_velocity()[0] - 1.5).abs() < 1e-9);
    }

    #[test]
    fn truncated_solution() {
        assert!(matches!(
            NavSolution::from_payload(&[0; 51]),
            Err(ParserError::InvalidPacketLen {
                packet: "NAV-SOL",
                expect: 52,
                got: 51
            })
        ));
    }
}
