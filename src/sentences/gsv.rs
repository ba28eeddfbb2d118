#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DecodeError, TalkerSystem, fields::Fields};

/// One satellite entry of a [`GSV`] sentence.
///
/// Empty entry fields default to 0.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Satellite {
    /// Satellite PRN number
    pub prn: u16,
    /// Elevation in degrees, 90 maximum
    pub elevation: i16,
    /// Azimuth in degrees from true north, 000 through 359
    pub azimuth: u16,
    /// Signal-to-noise ratio in dB, 00 through 99
    pub snr: u8,
}

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// Satellite entries are 4-field blocks starting at field 4 and stepping by
/// 4 while a complete block remains. The entry count is derived from the
/// field-array length at parse time, never from the satellite total.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSV {
    pub system: TalkerSystem,
    pub valid: bool,
    /// Total number of GSV sentences in this group
    pub msg_total: u8,
    /// Number of this sentence within the group
    pub msg_num: u8,
    /// Total number of satellites in view
    pub sat_total: u8,
    /// Satellite entries carried by this sentence, up to 4
    pub satellites: heapless::Vec<Satellite, 4>,
}

impl GSV {
    pub(crate) fn from_fields(
        fields: Fields<'_>,
        system: TalkerSystem,
        valid: bool,
    ) -> Result<Self, DecodeError> {
        let mut satellites = heapless::Vec::new();
        let mut index = 4;
        while index + 4 <= fields.len() {
            let entry = Satellite {
                prn: fields.num(index),
                elevation: fields.num(index + 1),
                azimuth: fields.num(index + 2),
                snr: fields.num(index + 3),
            };
            if satellites.push(entry).is_err() {
                break;
            }
            index += 4;
        }

        Ok(Self {
            system,
            valid,
            msg_total: fields.num(1),
            msg_num: fields.num(2),
            sat_total: fields.num(3),
            satellites,
        })
    }
}
