#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DecodeError, TalkerSystem,
    fields::{Fields, degrees_minutes, hms_to_seconds},
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitude_longitude>
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GLL {
    pub system: TalkerSystem,
    pub valid: bool,
    /// Latitude in decimal degrees, negative south
    pub latitude: f64,
    /// Longitude in decimal degrees, negative west
    pub longitude: f64,
    /// UTC time of the position, seconds since midnight
    pub time: f64,
    /// True when the status field is `A` (data valid)
    pub status: bool,
    /// FAA mode indicator, `N` when absent
    pub mode: char,
}

impl GLL {
    pub(crate) fn from_fields(
        fields: Fields<'_>,
        system: TalkerSystem,
        valid: bool,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            system,
            valid,
            latitude: degrees_minutes(fields.raw(1), fields.raw(2))?,
            longitude: degrees_minutes(fields.raw(3), fields.raw(4))?,
            time: hms_to_seconds(fields.raw(5))?,
            status: fields.flag(6, "A"),
            mode: fields.ch(7, 'N'),
        })
    }
}
