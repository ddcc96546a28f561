use bitflags::bitflags;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use core::fmt;

use crate::error::DateTimeError;

/// GPS fix Type
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GpsFix {
    #[default]
    NoFix,
    DeadReckoningOnly,
    Fix2D,
    Fix3D,
    GpsPlusDeadReckoning,
    TimeOnlyFix,
    /// Reserved value sent by the receiver
    Unknown(u8),
}

impl From<u8> for GpsFix {
    fn from(value: u8) -> Self {
        match value {
            0 => GpsFix::NoFix,
            1 => GpsFix::DeadReckoningOnly,
            2 => GpsFix::Fix2D,
            3 => GpsFix::Fix3D,
            4 => GpsFix::GpsPlusDeadReckoning,
            5 => GpsFix::TimeOnlyFix,
            other => GpsFix::Unknown(other),
        }
    }
}

impl From<GpsFix> for u8 {
    fn from(value: GpsFix) -> Self {
        match value {
            GpsFix::NoFix => 0,
            GpsFix::DeadReckoningOnly => 1,
            GpsFix::Fix2D => 2,
            GpsFix::Fix3D => 3,
            GpsFix::GpsPlusDeadReckoning => 4,
            GpsFix::TimeOnlyFix => 5,
            GpsFix::Unknown(other) => other,
        }
    }
}

impl GpsFix {
    /// Whether the fix carries a usable position
    pub const fn has_position(self) -> bool {
        !matches!(self, GpsFix::NoFix | GpsFix::TimeOnlyFix)
    }
}

impl fmt::Display for GpsFix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpsFix::NoFix => f.write_str("No Fix"),
            GpsFix::DeadReckoningOnly => f.write_str("Dead Reckoning only"),
            GpsFix::Fix2D => f.write_str("2D Fix"),
            GpsFix::Fix3D => f.write_str("3D Fix"),
            GpsFix::GpsPlusDeadReckoning => f.write_str("GPS + dead reckoning"),
            GpsFix::TimeOnlyFix => f.write_str("Time Only Fix"),
            GpsFix::Unknown(v) => write!(f, "Reserved({v})"),
        }
    }
}

bitflags! {
    /// Navigation Status Flags
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct NavStatusFlags: u8 {
        /// position and velocity valid and within DOP and ACC Masks
        const GPS_FIX_OK = 1;
        /// DGPS used
        const DIFF_SOLN = 2;
        /// Week Number valid
        const WKN_SET = 4;
        /// Time of Week valid
        const TOW_SET = 8;
    }
}

bitflags! {
    /// Navigation Solution Flags
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct NavSolFlags: u8 {
        /// Fix within limits (e.g. DOP & accuracy)
        const GPS_FIX_OK = 1;
        /// DGPS used
        const DIFF_SOLN = 2;
        /// Valid GPS week number
        const WKN_SET = 4;
        /// Valid GPS time of week (iTOW & fTOW)
        const TOW_SET = 8;
    }
}

const MS_PER_MINUTE: u32 = 60 * 1000;
const MS_PER_HOUR: u32 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u32 = 24 * MS_PER_HOUR;

/// Start of GPS time
pub fn gps_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1980, 1, 6)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Convert a GPS week number and time of week into a calendar timestamp.
///
/// Leap seconds are not applied: the result is GPS time, which is what the
/// logger's NMEA output has always carried.
pub fn gps_to_utc(week: i16, itow: u32) -> Result<NaiveDateTime, DateTimeError> {
    let days = TimeDelta::try_days(i64::from(week) * 7).ok_or(DateTimeError::InvalidDate)?;
    let tow = TimeDelta::try_milliseconds(i64::from(itow)).ok_or(DateTimeError::InvalidTime)?;
    gps_epoch()
        .checked_add_signed(days)
        .ok_or(DateTimeError::InvalidDate)?
        .checked_add_signed(tow)
        .ok_or(DateTimeError::InvalidTime)
}

/// Time of week split into day of week and wall clock time
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TowTime {
    /// 0 is Sunday
    pub day: u32,
    pub hour: u32,
    pub min: u32,
    pub sec: f64,
}

impl TowTime {
    pub fn from_itow(itow: u32) -> Self {
        let in_day = itow % MS_PER_DAY;
        let in_hour = in_day % MS_PER_HOUR;
        Self {
            day: itow / MS_PER_DAY,
            hour: in_day / MS_PER_HOUR,
            min: in_hour / MS_PER_MINUTE,
            sec: f64::from(in_hour % MS_PER_MINUTE) / 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fix_round_trip_through_u8() {
        for v in 0..=u8::MAX {
            assert_eq!(u8::from(GpsFix::from(v)), v);
        }
    }

    #[test]
    fn fix_names() {
        use alloc::string::ToString;
        assert_eq!(GpsFix::NoFix.to_string(), "No Fix");
        assert_eq!(GpsFix::Fix2D.to_string(), "2D Fix");
        assert_eq!(GpsFix::Fix3D.to_string(), "3D Fix");
        assert_eq!(GpsFix::TimeOnlyFix.to_string(), "Time Only Fix");
        assert!(!GpsFix::TimeOnlyFix.has_position());
        assert!(GpsFix::DeadReckoningOnly.has_position());
    }

    #[test]
    fn week_2000_start() {
        let t = gps_to_utc(2000, 0).unwrap();
        assert_eq!(t, NaiveDate::from_ymd_opt(2018, 5, 6).unwrap().and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn week_2000_thursday() {
        let t = gps_to_utc(2000, 345_600_123).unwrap();
        assert_eq!(
            t,
            NaiveDate::from_ymd_opt(2018, 5, 10)
                .unwrap()
                .and_hms_milli_opt(0, 0, 0, 123)
                .unwrap()
        );
    }

    #[test]
    fn tow_breakdown() {
        // Tuesday 13:05:07.250
        let itow = 2 * MS_PER_DAY + 13 * MS_PER_HOUR + 5 * MS_PER_MINUTE + 7_250;
        let t = TowTime::from_itow(itow);
        assert_eq!((t.day, t.hour, t.min), (2, 13, 5));
        assert!((t.sec - 7.25).abs() < 1e-12);
    }
}
