use crate::{
    error::ParserError,
    sylphide::{check_page_len, FieldReader},
};

/// P page: MS5611 barometer conversions and its factory coefficients
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PressurePage {
    pub inner_time: u32,
    pub gps_time: u32,
    /// Digital pressure value
    pub d1: u32,
    /// Digital temperature value
    pub d2: u32,
    /// C1..C6 from the sensor PROM
    pub coefficients: [u16; 6],
    /// Pa, i.e. hPa * 100
    pub pressure: i32,
    /// Degrees Celsius * 100
    pub temperature: i32,
}

impl PressurePage {
    pub const NAME: &'static str = "P page";

    pub fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_page_len(Self::NAME, payload)?;
        let mut r = FieldReader::new(payload);
        r.skip(2);
        let inner_time = u32::from(r.u8());
        let gps_time = r.u32_le();
        let d1 = r.u24_be();
        let d2 = r.u24_be();
        r.skip(6);
        let coefficients = [
            r.u16_be(),
            r.u16_be(),
            r.u16_be(),
            r.u16_be(),
            r.u16_be(),
            r.u16_be(),
        ];
        let (pressure, temperature) = ms5611_compensate(d1, d2, &coefficients);
        Ok(Self {
            inner_time,
            gps_time,
            d1,
            d2,
            coefficients,
            pressure,
            temperature,
        })
    }

    pub fn pressure_hpa(&self) -> f64 {
        f64::from(self.pressure) / 100.0
    }

    pub fn temperature_celsius(&self) -> f64 {
        f64::from(self.temperature) / 100.0
    }
}

/// MS5611 datasheet conversion with second order temperature compensation.
/// Returns `(pressure, temperature)` in Pa and centi-degrees.
pub fn ms5611_compensate(d1: u32, d2: u32, coefficients: &[u16; 6]) -> (i32, i32) {
    let [c1, c2, c3, c4, c5, c6] = coefficients.map(i64::from);
    let d1 = i64::from(d1);
    let d2 = i64::from(d2);

    let dt = d2 - (c5 << 8);
    let mut temp = 2000 + dt * c6 / (1 << 23);
    let mut off = (c2 << 16) + c4 * dt / (1 << 7);
    let mut sens = (c1 << 15) + c3 * dt / (1 << 8);

    if temp < 2000 {
        let t2 = dt * dt / (1 << 31);
        let cold = (temp - 2000) * (temp - 2000);
        let mut off2 = 5 * cold / 2;
        let mut sens2 = 5 * cold / 4;
        if temp < -1500 {
            let very_cold = (temp + 1500) * (temp + 1500);
            off2 += 7 * very_cold;
            sens2 += 11 * very_cold / 2;
        }
        temp -= t2;
        off -= off2;
        sens -= sens2;
    }

    let pressure = (d1 * sens / (1 << 21) - off) / (1 << 15);
    (pressure as i32, temp as i32)
}
