#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DecodeError, TalkerSystem,
    fields::{Fields, degrees_minutes, hms_to_seconds, parse_or_default},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10  11 12 13
///         |         | |       | |        |  |   |   |     |  |  |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxxxx,x.x,a,m,s*hh<CR><LF>
/// ```
///
/// The date field is a single `ddmmyy` value sliced into three 2-character
/// substrings; a shorter or non-numeric date fails the sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RMC {
    pub system: TalkerSystem,
    pub valid: bool,
    /// Fix time, seconds since midnight UTC
    pub time: f64,
    /// True when the status field is `A` (data valid)
    pub status: bool,
    /// Latitude in decimal degrees, negative south
    pub latitude: f64,
    /// Longitude in decimal degrees, negative west
    pub longitude: f64,
    /// Speed over ground in knots
    pub sog: f64,
    /// Course over ground in degrees true
    pub cog: f64,
    pub day: u8,
    pub month: u8,
    /// Two-digit year, as transmitted
    pub year: u8,
    /// Magnetic variation in degrees, negative for W
    pub magvar: f64,
    /// FAA mode indicator, `N` when absent
    pub mode: char,
    /// Navigation status (NMEA 4.1), `V` when absent
    pub navstatus: char,
}

impl RMC {
    pub(crate) fn from_fields(
        fields: Fields<'_>,
        system: TalkerSystem,
        valid: bool,
    ) -> Result<Self, DecodeError> {
        let date = fields.raw(9);
        if date.len() < 6 || !date.is_ascii() {
            return Err(DecodeError::invalid("date", date));
        }
        let slice = |range: std::ops::Range<usize>| -> Result<u8, DecodeError> {
            date[range]
                .parse()
                .map_err(|_| DecodeError::invalid("date", date))
        };

        let magnitude: f64 = parse_or_default(fields.raw(10));
        let magvar = match fields.raw(11) {
            "W" | "S" => -magnitude,
            _ => magnitude,
        };

        Ok(Self {
            system,
            valid,
            time: hms_to_seconds(fields.raw(1))?,
            status: fields.flag(2, "A"),
            latitude: degrees_minutes(fields.raw(3), fields.raw(4))?,
            longitude: degrees_minutes(fields.raw(5), fields.raw(6))?,
            sog: fields.num(7),
            cog: fields.num(8),
            day: slice(0..2)?,
            month: slice(2..4)?,
            year: slice(4..6)?,
            magvar,
            mode: fields.ch(12, 'N'),
            navstatus: fields.ch(13, 'V'),
        })
    }
}
