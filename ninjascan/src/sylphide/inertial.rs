use crate::{
    calibration::InertialCalibration,
    error::ParserError,
    sylphide::{check_page_len, FieldReader},
};

/// A page: accelerometer, gyroscope and the (often absent) pressure sensor
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InertialPage {
    pub inner_time: u32,
    /// GPS time, ms
    pub gps_time: u32,
    /// Raw x, y, z counts
    pub accel: [u32; 3],
    pub gyro: [u32; 3],
    pub pressure: u32,
    pub temp_pressure: u32,
    pub temp_gyro: i16,
    /// x, y, z in G
    pub cal_accel: [f64; 3],
    /// x, y, z in deg/s
    pub cal_gyro: [f64; 3],
}

impl InertialPage {
    pub const NAME: &'static str = "A page";

    pub fn decode(payload: &[u8], calibration: &InertialCalibration) -> Result<Self, ParserError> {
        check_page_len(Self::NAME, payload)?;
        let mut r = FieldReader::new(payload);
        let inner_time = u32::from(r.u8());
        let gps_time = r.u32_le();
        let accel = [r.u24_be(), r.u24_be(), r.u24_be()];
        let gyro = [r.u24_be(), r.u24_be(), r.u24_be()];
        let pressure = r.u24_be();
        let temp_pressure = r.u24_be();
        let temp_gyro = r.i16_be();
        Ok(Self {
            inner_time,
            gps_time,
            accel,
            gyro,
            pressure,
            temp_pressure,
            temp_gyro,
            cal_accel: calibration.calibrate_accel(accel),
            cal_gyro: calibration.calibrate_gyro(gyro),
        })
    }

    pub fn gps_time_seconds(&self) -> f64 {
        f64::from(self.gps_time) / 1000.0
    }
}
