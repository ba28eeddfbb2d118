#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DecodeError, TalkerSystem,
    fields::{Fields, hms_to_seconds},
};

/// PASHR - Ashtech attitude and heave
///
/// Proprietary inertial sensor output carrying vessel attitude, heave and
/// the per-axis accuracy estimates.
///
/// ```text
///           1         2   3   4    5    6    7   8   9   10 11
///           |         |   |   |    |    |    |   |   |    | |
///  $PASHR,hhmmss.sss,x.x,T,x.x,x.x,x.x,x.x,x.x,x.x,x,x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PASHR {
    pub system: TalkerSystem,
    pub valid: bool,
    /// UTC time, seconds since midnight
    pub time: f64,
    /// Heading in degrees
    pub heading: f64,
    /// True when the heading is relative to true north (`T` flag)
    pub heading_type: bool,
    /// Roll in degrees
    pub roll: f64,
    /// Pitch in degrees
    pub pitch: f64,
    /// Heave in meters
    pub heave: f64,
    /// Roll accuracy estimate in degrees
    pub roll_accuracy: f64,
    /// Pitch accuracy estimate in degrees
    pub pitch_accuracy: f64,
    /// Heading accuracy estimate in degrees
    pub heading_accuracy: f64,
    /// GPS aiding status code
    pub aiding_code: u8,
    /// IMU status code, 0 when absent
    pub ins_code: u8,
}

impl PASHR {
    pub(crate) fn from_fields(
        fields: Fields<'_>,
        system: TalkerSystem,
        valid: bool,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            system,
            valid,
            time: hms_to_seconds(fields.raw(1))?,
            heading: fields.num(2),
            heading_type: fields.flag(3, "T"),
            roll: fields.num(4),
            pitch: fields.num(5),
            heave: fields.num(6),
            roll_accuracy: fields.num(7),
            pitch_accuracy: fields.num(8),
            heading_accuracy: fields.num(9),
            aiding_code: fields.num(10),
            ins_code: fields.num(11),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pashr_from_fields() {
        let raw = [
            "PASHR",
            "085335.000",
            "224.19",
            "T",
            "-01.26",
            "+00.83",
            "+00.00",
            "0.101",
            "0.113",
            "0.267",
            "1",
            "0",
        ];
        let pashr =
            PASHR::from_fields(Fields::new(&raw), TalkerSystem::Proprietary, true).unwrap();

        assert!((pashr.time - 32015.0).abs() < 1e-9);
        assert_eq!(pashr.heading, 224.19);
        assert!(pashr.heading_type);
        assert_eq!(pashr.roll, -1.26);
        assert_eq!(pashr.pitch, 0.83);
        assert_eq!(pashr.heave, 0.0);
        assert_eq!(pashr.roll_accuracy, 0.101);
        assert_eq!(pashr.pitch_accuracy, 0.113);
        assert_eq!(pashr.heading_accuracy, 0.267);
        assert_eq!(pashr.aiding_code, 1);
        assert_eq!(pashr.ins_code, 0);
    }

    #[test]
    fn test_pashr_ins_code_optional() {
        let raw = [
            "PASHR",
            "085335.000",
            "224.19",
            "T",
            "-01.26",
            "+00.83",
            "+00.00",
            "0.101",
            "0.113",
            "0.267",
            "1",
        ];
        let pashr =
            PASHR::from_fields(Fields::new(&raw), TalkerSystem::Proprietary, true).unwrap();
        assert_eq!(pashr.ins_code, 0);
    }
}
