use crate::{
    calibration::MagneticCalibration,
    error::ParserError,
    sylphide::{check_page_len, FieldReader},
};

/// M page: three-axis magnetometer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagneticPage {
    pub inner_time: u32,
    /// GPS time, ms
    pub gps_time: u32,
    /// Raw x, y, z counts
    pub mag: [i16; 3],
    /// x, y, z in µT
    pub cal_mag: [f64; 3],
}

impl MagneticPage {
    pub const NAME: &'static str = "M page";

    pub fn decode(payload: &[u8], calibration: &MagneticCalibration) -> Result<Self, ParserError> {
        check_page_len(Self::NAME, payload)?;
        let mut r = FieldReader::new(payload);
        r.skip(2);
        let inner_time = u32::from(r.u8());
        let gps_time = r.u32_le();
        let mag = [r.i16_be(), r.i16_be(), r.i16_be()];
        Ok(Self {
            inner_time,
            gps_time,
            mag,
            cal_mag: calibration.calibrate(mag),
        })
    }

    pub fn gps_time_seconds(&self) -> f64 {
        f64::from(self.gps_time) / 1000.0
    }
}
