//! Raw sensor counts to physical units.
//!
//! Every axis is calibrated independently with
//! `calibrated = (raw - zero) * lsb - drift`. A [`Calibration`] value is owned by
//! whoever drives the decoding (usually a [`PageParser`](crate::PageParser)) and
//! passed by reference into each decode call, so changing it affects every
//! later decode and nothing before it.

/// Range of the 16-bit unsigned sensor output the full scale is spread over
const RAW_RANGE: f64 = 65536.0;

/// Offset, scale and drift of a single sensor axis
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisCalibration {
    /// Raw count that reads as zero
    pub zero: f64,
    /// Physical units per count
    pub lsb: f64,
    /// Subtracted after scaling, in physical units
    pub drift: f64,
}

impl AxisCalibration {
    pub const fn new(zero: f64, lsb: f64, drift: f64) -> Self {
        Self { zero, lsb, drift }
    }

    /// Axis centred on the middle of the unsigned 16-bit range, spanning
    /// `-full_scale..full_scale`
    pub fn centered(full_scale: f64) -> Self {
        Self::new(RAW_RANGE / 2.0, full_scale * 2.0 / RAW_RANGE, 0.0)
    }

    #[inline]
    pub fn apply(&self, raw: f64) -> f64 {
        (raw - self.zero) * self.lsb - self.drift
    }
}

/// Accelerometer and gyroscope calibration of the A page
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InertialCalibration {
    /// x, y, z in G
    pub accel: [AxisCalibration; 3],
    /// x, y, z in deg/s
    pub gyro: [AxisCalibration; 3],
    /// ±G
    pub accel_full_scale: f64,
    /// ±deg/s
    pub gyro_full_scale: f64,
}

impl InertialCalibration {
    pub const DEFAULT_ACCEL_FULL_SCALE: f64 = 8.0;
    pub const DEFAULT_GYRO_FULL_SCALE: f64 = 2000.0;

    pub fn with_full_scale(accel_full_scale: f64, gyro_full_scale: f64) -> Self {
        Self {
            accel: [AxisCalibration::centered(accel_full_scale); 3],
            gyro: [AxisCalibration::centered(gyro_full_scale); 3],
            accel_full_scale,
            gyro_full_scale,
        }
    }

    pub fn calibrate_accel(&self, raw: [u32; 3]) -> [f64; 3] {
        apply_axes(&self.accel, raw.map(f64::from))
    }

    pub fn calibrate_gyro(&self, raw: [u32; 3]) -> [f64; 3] {
        apply_axes(&self.gyro, raw.map(f64::from))
    }
}

impl Default for InertialCalibration {
    fn default() -> Self {
        Self::with_full_scale(Self::DEFAULT_ACCEL_FULL_SCALE, Self::DEFAULT_GYRO_FULL_SCALE)
    }
}

/// Magnetometer calibration of the M page
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagneticCalibration {
    /// x, y, z in µT
    pub mag: [AxisCalibration; 3],
    /// ±µT, for display scaling only
    pub full_scale: f64,
}

impl MagneticCalibration {
    pub const DEFAULT_LSB: f64 = 0.1;
    pub const DEFAULT_FULL_SCALE: f64 = 1000.0;

    pub fn calibrate(&self, raw: [i16; 3]) -> [f64; 3] {
        apply_axes(&self.mag, raw.map(f64::from))
    }
}

impl Default for MagneticCalibration {
    fn default() -> Self {
        Self {
            mag: [AxisCalibration::new(0.0, Self::DEFAULT_LSB, 0.0); 3],
            full_scale: Self::DEFAULT_FULL_SCALE,
        }
    }
}

/// Calibration of every sensor-bearing page type
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Calibration {
    pub inertial: InertialCalibration,
    pub magnetic: MagneticCalibration,
}

fn apply_axes(axes: &[AxisCalibration; 3], raw: [f64; 3]) -> [f64; 3] {
    [
        axes[0].apply(raw[0]),
        axes[1].apply(raw[1]),
        axes[2].apply(raw[2]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inertial_lsb() {
        let cal = InertialCalibration::default();
        assert_eq!(cal.accel[0].zero, 32768.0);
        assert_eq!(cal.accel[0].lsb, 8.0 * 2.0 / 65536.0);
        assert_eq!(cal.gyro[2].lsb, 2000.0 * 2.0 / 65536.0);
    }

    #[test]
    fn centred_raw_reads_zero() {
        let cal = InertialCalibration::default();
        assert_eq!(cal.calibrate_accel([32768; 3]), [0.0; 3]);
        assert_eq!(cal.calibrate_gyro([32768 + 16384, 32768, 0]), [1000.0, 0.0, -2000.0]);
    }

    #[test]
    fn drift_is_subtracted_after_scaling() {
        let mut cal = InertialCalibration::default();
        cal.gyro[1].drift = 1.5;
        let out = cal.calibrate_gyro([32768; 3]);
        assert_eq!(out, [0.0, -1.5, 0.0]);
    }

    #[test]
    fn magnetic_default() {
        let cal = MagneticCalibration::default();
        assert_eq!(cal.full_scale, 1000.0);
        let out = cal.calibrate([100, -250, 0]);
        assert!((out[0] - 10.0).abs() < 1e-12);
        assert!((out[1] + 25.0).abs() < 1e-12);
        assert_eq!(out[2], 0.0);
    }
}
