#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DecodeError, TalkerSystem,
    fields::{Fields, hms_to_seconds},
};

/// GST - Pseudorange Noise Statistics
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gst_gps_pseudorange_noise_statistics>
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GST {
    pub system: TalkerSystem,
    pub valid: bool,
    /// UTC time of the associated fix, seconds since midnight
    pub time: f64,
    /// RMS value of the standard deviation of the range inputs
    pub rms: f64,
    /// Standard deviation of the semi-major axis of the error ellipse, meters
    pub semi_major_error: f64,
    /// Standard deviation of the semi-minor axis of the error ellipse, meters
    pub semi_minor_error: f64,
    /// Orientation of the semi-major axis, degrees from true north
    pub orientation_error: f64,
    /// Standard deviation of latitude error, meters
    pub latitude_error: f64,
    /// Standard deviation of longitude error, meters
    pub longitude_error: f64,
    /// Standard deviation of height error, meters
    pub height_error: f64,
}

impl GST {
    pub(crate) fn from_fields(
        fields: Fields<'_>,
        system: TalkerSystem,
        valid: bool,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            system,
            valid,
            time: hms_to_seconds(fields.raw(1))?,
            rms: fields.num(2),
            semi_major_error: fields.num(3),
            semi_minor_error: fields.num(4),
            orientation_error: fields.num(5),
            latitude_error: fields.num(6),
            longitude_error: fields.num(7),
            height_error: fields.num(8),
        })
    }
}
