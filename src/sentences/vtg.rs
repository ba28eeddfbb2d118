#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DecodeError, TalkerSystem, fields::Fields};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct VTG {
    pub system: TalkerSystem,
    pub valid: bool,
    /// Course over ground in degrees true
    pub cog_true: f64,
    /// Course over ground in degrees magnetic
    pub cog_mag: f64,
    /// Speed over ground in knots
    pub sog_knots: f64,
    /// Speed over ground in km/h
    pub sog_kmhr: f64,
    /// FAA mode indicator, `N` when absent
    pub mode: char,
}

impl VTG {
    pub(crate) fn from_fields(
        fields: Fields<'_>,
        system: TalkerSystem,
        valid: bool,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            system,
            valid,
            cog_true: fields.num(1),
            cog_mag: fields.num(3),
            sog_knots: fields.num(5),
            sog_kmhr: fields.num(7),
            mode: fields.ch(9, 'N'),
        })
    }
}
