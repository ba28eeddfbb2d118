#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DecodeError, TalkerSystem,
    fields::{Fields, hms_to_seconds},
};

/// GBS - GPS Satellite Fault Detection
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gbs_gps_satellite_fault_detection>
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GBS {
    pub system: TalkerSystem,
    pub valid: bool,
    /// UTC time of the GGA fix this estimate belongs to, seconds since midnight
    pub time: f64,
    /// Expected 1-sigma latitude error in meters
    pub lat_error: f64,
    /// Expected 1-sigma longitude error in meters
    pub long_error: f64,
    /// Expected 1-sigma altitude error in meters
    pub alt_error: f64,
    /// PRN of the most likely failed satellite
    pub failed_prn: u16,
    /// Probability of missed detection for the most likely failed satellite
    pub prob_of_missed: f64,
    /// Estimate of bias on the most likely failed satellite, meters
    pub excluded_meas_err: f64,
    /// Standard deviation of the bias estimate
    pub standard_deviation: f64,
}

impl GBS {
    pub(crate) fn from_fields(
        fields: Fields<'_>,
        system: TalkerSystem,
        valid: bool,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            system,
            valid,
            time: hms_to_seconds(fields.raw(1))?,
            lat_error: fields.num(2),
            long_error: fields.num(3),
            alt_error: fields.num(4),
            failed_prn: fields.num(5),
            prob_of_missed: fields.num(6),
            excluded_meas_err: fields.num(7),
            standard_deviation: fields.num(8),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gbs_from_fields() {
        let raw = [
            "GPGBS",
            "015509.00",
            "-0.031",
            "-0.186",
            "0.219",
            "19",
            "0.000",
            "-0.354",
            "6.972",
        ];
        let gbs = GBS::from_fields(Fields::new(&raw), TalkerSystem::Gps, true).unwrap();

        assert!((gbs.time - 6909.0).abs() < 1e-9);
        assert_eq!(gbs.lat_error, -0.031);
        assert_eq!(gbs.long_error, -0.186);
        assert_eq!(gbs.alt_error, 0.219);
        assert_eq!(gbs.failed_prn, 19);
        assert_eq!(gbs.prob_of_missed, 0.0);
        assert_eq!(gbs.excluded_meas_err, -0.354);
        assert_eq!(gbs.standard_deviation, 6.972);
    }
}
