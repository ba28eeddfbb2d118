#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DecodeError, TalkerSystem,
    fields::{Fields, hms_to_seconds},
};

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ZDA {
    pub system: TalkerSystem,
    pub valid: bool,
    /// UTC time, seconds since midnight
    pub time: f64,
    pub day: u8,
    pub month: u8,
    pub year: u16,
    /// Local zone hours offset from UTC, signed
    pub zone_hrs: i8,
    /// Local zone minutes offset from UTC, signed
    pub zone_mins: i8,
}

impl ZDA {
    pub(crate) fn from_fields(
        fields: Fields<'_>,
        system: TalkerSystem,
        valid: bool,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            system,
            valid,
            time: hms_to_seconds(fields.raw(1))?,
            day: fields.num(2),
            month: fields.num(3),
            year: fields.num(4),
            zone_hrs: fields.num(5),
            zone_mins: fields.num(6),
        })
    }
}
