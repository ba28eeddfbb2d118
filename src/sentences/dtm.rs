#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DecodeError, TalkerSystem,
    fields::{Fields, parse_or_default},
};

/// DTM - Datum Reference
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dtm_datum_reference>
///
/// ```text
///           1  2  3   4  5   6  7  8
///           |  |  |   |  |   |  |  |
///  $--DTM,ref,x,llll,c,llll,c,aaa,ref*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DTM {
    pub system: TalkerSystem,
    pub valid: bool,
    /// Local datum code, e.g. `W84`
    pub local_datum_code: String,
    /// Local datum subdivision code
    pub local_datum_subcode: String,
    /// Latitude offset in minutes, negative south
    pub lat_offset: f64,
    /// Longitude offset in minutes, negative west
    pub long_offset: f64,
    /// Altitude offset in meters
    pub alt_offset: f64,
    /// Reference datum code
    pub ref_datum: String,
}

impl DTM {
    pub(crate) fn from_fields(
        fields: Fields<'_>,
        system: TalkerSystem,
        valid: bool,
    ) -> Result<Self, DecodeError> {
        let signed = |value_index: usize, hemi_index: usize| -> f64 {
            let magnitude: f64 = parse_or_default(fields.raw(value_index));
            match fields.raw(hemi_index) {
                "S" | "W" => -magnitude,
                _ => magnitude,
            }
        };

        Ok(Self {
            system,
            valid,
            local_datum_code: fields.text(1),
            local_datum_subcode: fields.text(2),
            lat_offset: signed(3, 4),
            long_offset: signed(5, 6),
            alt_offset: fields.num(7),
            ref_datum: fields.text(8),
        })
    }
}
