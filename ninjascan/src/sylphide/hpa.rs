use crate::{
    error::ParserError,
    sylphide::{check_page_len, FieldReader},
};

/// H page: human-powered aircraft instruments and controls, all little-endian
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HpaPage {
    pub inner_time: u32,
    pub gps_time: u32,
    pub cadence_counter: u16,
    pub airspeed_counter: u16,
    pub altimeter: u16,
    pub control_stick: [u16; 3],
    pub aux: [u16; 4],
}

impl HpaPage {
    pub const NAME: &'static str = "H page";

    pub fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_page_len(Self::NAME, payload)?;
        let mut r = FieldReader::new(payload);
        r.skip(2);
        Ok(Self {
            inner_time: u32::from(r.u8()),
            gps_time: r.u32_le(),
            cadence_counter: r.u16_le(),
            airspeed_counter: r.u16_le(),
            altimeter: r.u16_le(),
            control_stick: [r.u16_le(), r.u16_le(), r.u16_le()],
            aux: [r.u16_le(), r.u16_le(), r.u16_le(), r.u16_le()],
        })
    }
}
