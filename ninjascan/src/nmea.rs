//! GGA and ZDA sentences rebuilt from the latest UBX navigation messages.

use alloc::{format, string::String};
use chrono::{Datelike, NaiveDateTime, Timelike};
use num_traits::float::FloatCore;

use crate::{
    constants::{NMEA_CHECKSUM_CHAR, NMEA_SYNC_CHAR},
    error::DateTimeError,
    ubx_packets::{gps_to_utc, NavPosLlh, NavSolution, NavStatus},
};

/// GGA sentence sent while no satellite is used
pub const GGA_NO_DATA: &str = "$GPGGA,,N,,E,0,00,,,M,,M,,*41";
/// ZDA sentence sent while the receiver has no GPS time yet
pub const ZDA_NO_TIME: &str = "$GPZDA,,,,,,*48";

/// Everything the two sentences are built from, plus the sentences
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NmeaState {
    /// Solution epoch, GPS time scale
    pub time: NaiveDateTime,
    /// hhmmss.ss packed into a number
    pub utc: f64,
    /// ddmm.mmmmmm, negative in the southern hemisphere
    pub lat: f64,
    /// dddmm.mmmmmm, negative west of Greenwich
    pub lon: f64,
    /// 0 without a position fix, 1 otherwise
    pub fix_quality: u8,
    pub num_sv: u8,
    pub hdop: f64,
    /// Above mean sea level, m
    pub alt: f64,
    /// Geoid separation, m
    pub height_geoid: f64,
    pub gpgga: String,
    pub gpzda: String,
}

impl NmeaState {
    pub fn synthesize(
        llh: &NavPosLlh,
        sol: &NavSolution,
        status: &NavStatus,
    ) -> Result<Self, DateTimeError> {
        let time = gps_to_utc(sol.week, sol.itow)?;
        let utc = f64::from(time.hour() * 10000 + time.minute() * 100 + time.second())
            + f64::from(time.nanosecond() / 1_000_000) / 1000.0;

        let mut state = Self {
            time,
            utc,
            lat: degrees_to_nmea(llh.lat_degrees()),
            lon: degrees_to_nmea(llh.lon_degrees()),
            fix_quality: u8::from(status.fix_type.has_position()),
            num_sv: sol.num_sv,
            // the receiver reports position DOP only
            hdop: f64::from(sol.pdop) / 100.0,
            alt: f64::from(llh.height_msl) / 1000.0,
            height_geoid: (i64::from(llh.height) - i64::from(llh.height_msl)) as f64 / 1000.0,
            gpgga: String::new(),
            gpzda: String::new(),
        };
        state.gpgga = state.make_gga();
        state.gpzda = state.make_zda();
        Ok(state)
    }

    fn make_gga(&self) -> String {
        if self.num_sv == 0 {
            return String::from(GGA_NO_DATA);
        }
        let ns = if self.lat >= 0.0 { 'N' } else { 'S' };
        let ew = if self.lon >= 0.0 { 'E' } else { 'W' };
        with_checksum(format!(
            "$GPGGA,{:09.2},{:011.6},{ns},{:012.6},{ew},{},{:02},{:.1},{:.2},M,{:.2},M,,*",
            self.utc,
            FloatCore::abs(self.lat),
            FloatCore::abs(self.lon),
            self.fix_quality,
            self.num_sv,
            self.hdop,
            self.alt,
            self.height_geoid,
        ))
    }

    fn make_zda(&self) -> String {
        if self.time.year() == 1980 {
            return String::from(ZDA_NO_TIME);
        }
        with_checksum(format!(
            "$GPZDA,{:09.2},{:02},{:02},{:04},{:02},{:02}*",
            self.utc,
            self.time.day(),
            self.time.month(),
            self.time.year(),
            self.time.hour(),
            self.time.minute(),
        ))
    }
}

/// Decimal degrees to the NMEA `[d]ddmm.mmmm` form. The sign of the input is
/// kept on the result.
pub fn degrees_to_nmea(degrees: f64) -> f64 {
    let whole = FloatCore::trunc(degrees);
    whole * 100.0 + (degrees - whole) * 60.0
}

/// XOR of every byte between the leading `$` and the `*`
pub fn nmea_checksum(sentence: &str) -> u8 {
    let bytes = sentence.as_bytes();
    let start = usize::from(bytes.first() == Some(&NMEA_SYNC_CHAR));
    bytes[start..]
        .iter()
        .take_while(|&&b| b != NMEA_CHECKSUM_CHAR)
        .fold(0, |acc, b| acc ^ b)
}

/// Append the checksum to a sentence that ends with `*`
fn with_checksum(mut sentence: String) -> String {
    let checksum = nmea_checksum(&sentence);
    sentence.push_str(&format!("{checksum:02X}"));
    sentence
}
