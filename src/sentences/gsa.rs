#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DecodeError, TalkerSystem, fields::Fields};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                      15 16  17
///         | | |                       | |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x*hh<CR><LF>
/// ```
///
/// The PRN list occupies the fields between the fix mode and the DOP
/// triplet. It is sliced by fixed offsets from both ends of the field
/// array, stopping at the first empty field; sentences with a non-standard
/// trailing field count may mis-slice (known boundary limitation).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSA {
    pub system: TalkerSystem,
    pub valid: bool,
    /// Selection mode: `A` automatic, `M` manual
    pub mode: char,
    /// Fix mode: 1 no fix, 2 = 2D, 3 = 3D
    pub current_mode: u8,
    /// PRN numbers of the satellites used in the fix, up to 12
    pub sat_ids: heapless::Vec<u16, 12>,
    /// Position Dilution of Precision
    pub pdop: f64,
    /// Horizontal Dilution of Precision
    pub hdop: f64,
    /// Vertical Dilution of Precision
    pub vdop: f64,
}

impl GSA {
    pub(crate) fn from_fields(
        fields: Fields<'_>,
        system: TalkerSystem,
        valid: bool,
    ) -> Result<Self, DecodeError> {
        let mut sat_ids = heapless::Vec::new();
        let end = fields.len().saturating_sub(3);
        for index in 3..end {
            let field = fields.raw(index);
            if field.is_empty() {
                break;
            }
            if sat_ids.push(fields.num(index)).is_err() {
                break;
            }
        }

        let len = fields.len();
        Ok(Self {
            system,
            valid,
            mode: fields.ch(1, 'A'),
            current_mode: fields.num(2),
            sat_ids,
            pdop: fields.num(len.saturating_sub(3)),
            hdop: fields.num(len.saturating_sub(2)),
            vdop: fields.num(len.saturating_sub(1)),
        })
    }
}
