use crate::{
    error::ParserError,
    sylphide::{check_page_len, FieldReader},
};

/// N page: navigation solution computed on board, all little-endian
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationPage {
    pub sequence: u32,
    pub gps_time: u32,
    pub latitude: u32,
    pub longitude: u32,
    pub altitude: u32,
    pub velocity_north: u16,
    pub velocity_east: u16,
    pub velocity_down: u16,
    pub heading: u16,
    pub roll: u16,
    pub pitch: u16,
}

impl NavigationPage {
    pub const NAME: &'static str = "N page";

    pub fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_page_len(Self::NAME, payload)?;
        let mut r = FieldReader::new(payload);
        let sequence = u32::from(r.u8());
        r.skip(2);
        Ok(Self {
            sequence,
            gps_time: r.u32_le(),
            latitude: r.u32_le(),
            longitude: r.u32_le(),
            altitude: r.u32_le(),
            velocity_north: r.u16_le(),
            velocity_east: r.u16_le(),
            velocity_down: r.u16_le(),
            heading: r.u16_le(),
            roll: r.u16_le(),
            pitch: r.u16_le(),
        })
    }
}
