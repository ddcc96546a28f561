use crate::{
    error::ParserError,
    ubx_packets::{check_payload_len, le_u32, GpsFix, NavStatusFlags},
    UbxPacketMeta,
};

///  Receiver Navigation Status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavStatus {
    /// GPS Millisecond Time of Week
    pub itow: u32,
    /// GPS fix Type, this value does not qualify a fix as valid and within the limits
    pub fix_type: GpsFix,
    /// Navigation Status Flags
    pub flags: NavStatusFlags,
    /// Fix Status Information
    pub fix_stat: u8,
    /// further information about navigation output
    pub flags2: u8,
    /// Time to first fix (millisecond time tag)
    pub time_to_first_fix: u32,
    /// Milliseconds since Startup / Reset
    pub uptime_ms: u32,
}

impl UbxPacketMeta for NavStatus {
    const CLASS: u8 = 0x01;
    const ID: u8 = 0x03;
    const PAYLOAD_LEN: usize = 16;
    const PACKET_NAME: &'static str = "NAV-STATUS";
}

impl NavStatus {
    pub fn from_payload(payload: &[u8]) -> Result<Self, ParserError> {
        check_payload_len::<Self>(payload)?;
        Ok(Self {
            itow: le_u32(payload, 0),
            fix_type: GpsFix::from(payload[4]),
            flags: NavStatusFlags::from_bits_retain(payload[5]),
            fix_stat: payload[6],
            flags2: payload[7],
            time_to_first_fix: le_u32(payload, 8),
            uptime_ms: le_u32(payload, 12),
        })
    }

    /// Position and velocity valid and within DOP and ACC masks
    pub fn is_fix_ok(&self) -> bool {
        self.flags.contains(NavStatusFlags::GPS_FIX_OK)
    }
}
