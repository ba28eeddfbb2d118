use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DecodeError, TalkerSystem,
    fields::{Fields, degrees_minutes, hms_to_seconds},
};

/// Quality of the GPS fix, from the GGA fix-quality flag (0-8).
///
/// Flags outside the defined range decode to [`FixQuality::Unknown`] rather
/// than failing the sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixQuality {
    /// 0 - Fix not available
    Invalid,
    /// 1 - GPS fix (Standard Positioning Service)
    GpsSps,
    /// 2 - Differential GPS fix
    Dgps,
    /// 3 - PPS fix
    Pps,
    /// 4 - Real Time Kinematic
    Rtk,
    /// 5 - Float RTK
    FloatRtk,
    /// 6 - Estimated (dead reckoning)
    DeadReckoning,
    /// 7 - Manual input mode
    ManualInput,
    /// 8 - Simulation mode
    Simulation,
    /// Any other or absent flag
    Unknown,
}

impl FixQuality {
    /// Maps the raw flag field to a quality; anything but `0`-`8` is
    /// [`FixQuality::Unknown`].
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "0" => FixQuality::Invalid,
            "1" => FixQuality::GpsSps,
            "2" => FixQuality::Dgps,
            "3" => FixQuality::Pps,
            "4" => FixQuality::Rtk,
            "5" => FixQuality::FloatRtk,
            "6" => FixQuality::DeadReckoning,
            "7" => FixQuality::ManualInput,
            "8" => FixQuality::Simulation,
            _ => FixQuality::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FixQuality::Invalid => "INVALID",
            FixQuality::GpsSps => "GPS (SPS)",
            FixQuality::Dgps => "DGPS",
            FixQuality::Pps => "PPS",
            FixQuality::Rtk => "RTK",
            FixQuality::FloatRtk => "FLOAT RTK",
            FixQuality::DeadReckoning => "DEAD RECKONING",
            FixQuality::ManualInput => "MANUAL INPUT",
            FixQuality::Simulation => "SIMULATION",
            FixQuality::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for FixQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GGA {
    pub system: TalkerSystem,
    pub valid: bool,
    /// Fix time, seconds since midnight UTC
    pub time: f64,
    /// Latitude in decimal degrees, negative south
    pub latitude: f64,
    /// Longitude in decimal degrees, negative west
    pub longitude: f64,
    /// GPS quality indicator
    pub fix_quality: FixQuality,
    /// Number of satellites in use
    pub num_sats: u8,
    /// Horizontal Dilution of Precision
    pub hdop: f64,
    /// Altitude above mean sea level (geoid) in meters
    pub altitude: f64,
    /// Geoidal separation in meters, negative when the geoid is below the
    /// WGS-84 ellipsoid
    pub geoidal_separation: f64,
    /// Age of Differential GPS data in seconds
    pub age_of_differential: f64,
    /// Differential reference station ID
    pub diff_reference_id: u16,
}

impl GGA {
    pub(crate) fn from_fields(
        fields: Fields<'_>,
        system: TalkerSystem,
        valid: bool,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            system,
            valid,
            time: hms_to_seconds(fields.raw(1))?,
            latitude: degrees_minutes(fields.raw(2), fields.raw(3))?,
            longitude: degrees_minutes(fields.raw(4), fields.raw(5))?,
            fix_quality: FixQuality::from_flag(fields.raw(6)),
            num_sats: fields.num(7),
            hdop: fields.num(8),
            altitude: fields.num(9),
            geoidal_separation: fields.num(11),
            age_of_differential: fields.num(13),
            diff_reference_id: fields.num(14),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gga_from_fields() {
        let raw = [
            "GPGGA",
            "134740.000",
            "5540.3248",
            "N",
            "01231.2992",
            "E",
            "1",
            "09",
            "0.9",
            "20.2",
            "M",
            "41.5",
            "M",
            "",
            "0000",
        ];
        let gga = GGA::from_fields(Fields::new(&raw), TalkerSystem::Gps, true).unwrap();

        assert!((gga.time - 49660.0).abs() < 1e-9);
        assert!((gga.latitude - 55.67208).abs() < 1e-6);
        assert!((gga.longitude - 12.521_653_333).abs() < 1e-6);
        assert_eq!(gga.fix_quality, FixQuality::GpsSps);
        assert_eq!(gga.fix_quality.as_str(), "GPS (SPS)");
        assert_eq!(gga.num_sats, 9);
        assert_eq!(gga.hdop, 0.9);
        assert_eq!(gga.altitude, 20.2);
        assert_eq!(gga.geoidal_separation, 41.5);
        assert_eq!(gga.age_of_differential, 0.0);
        assert_eq!(gga.diff_reference_id, 0);
    }

    #[test]
    fn test_gga_unknown_quality() {
        let raw = [
            "GPGGA",
            "134740.000",
            "5540.3248",
            "N",
            "01231.2992",
            "E",
            "9",
            "09",
            "0.9",
            "20.2",
            "M",
            "41.5",
            "M",
            "",
            "0000",
        ];
        let gga = GGA::from_fields(Fields::new(&raw), TalkerSystem::Gps, true).unwrap();
        assert_eq!(gga.fix_quality, FixQuality::Unknown);
        assert_eq!(gga.fix_quality.as_str(), "UNKNOWN");
    }

    #[test]
    fn test_gga_empty_latitude_fails() {
        let raw = ["GPGGA", "134740.000", "", "N", "01231.2992", "E", "1"];
        let result = GGA::from_fields(Fields::new(&raw), TalkerSystem::Gps, true);
        assert!(matches!(result, Err(DecodeError::InvalidFormat { .. })));
    }
}
