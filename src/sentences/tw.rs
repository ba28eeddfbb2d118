//! The `PTW*` vendor family: position, velocity, odometry and inertial
//! sensor readings.
//!
//! These sentences pair each measured value with a unit-flag field. The
//! flags are run through the unit converters, so every stored value is in
//! SI units (meters, m/s) regardless of what the device transmitted. Unlike
//! the lenient numeric fields, a flag outside the defined set hard-fails
//! the whole sentence with [`DecodeError::UnsupportedUnit`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DecodeError, TalkerSystem,
    fields::{Fields, hms_to_seconds, orientation_to_true, position_to_meters, velocity_to_mps},
};

/// PTWPOS - position-sensor reading, converted to meters per axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TWPOS {
    pub system: TalkerSystem,
    pub valid: bool,
    /// UTC time, seconds since midnight
    pub time: f64,
    /// Easting in meters
    pub x: f64,
    /// Northing in meters
    pub y: f64,
    /// Height in meters
    pub z: f64,
}

impl TWPOS {
    pub(crate) fn from_fields(
        fields: Fields<'_>,
        system: TalkerSystem,
        valid: bool,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            system,
            valid,
            time: hms_to_seconds(fields.raw(1))?,
            x: position_to_meters(fields.raw(3), fields.num(2))?,
            y: position_to_meters(fields.raw(5), fields.num(4))?,
            z: position_to_meters(fields.raw(7), fields.num(6))?,
        })
    }
}

/// PTWVCT - velocity-vector reading, converted to m/s per axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TWVCT {
    pub system: TalkerSystem,
    pub valid: bool,
    /// UTC time, seconds since midnight
    pub time: f64,
    /// East velocity in m/s
    pub vx: f64,
    /// North velocity in m/s
    pub vy: f64,
    /// Up velocity in m/s
    pub vz: f64,
}

impl TWVCT {
    pub(crate) fn from_fields(
        fields: Fields<'_>,
        system: TalkerSystem,
        valid: bool,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            system,
            valid,
            time: hms_to_seconds(fields.raw(1))?,
            vx: velocity_to_mps(fields.raw(3), fields.num(2))?,
            vy: velocity_to_mps(fields.raw(5), fields.num(4))?,
            vz: velocity_to_mps(fields.raw(7), fields.num(6))?,
        })
    }
}

/// PTWPLS - odometer pulse reading: raw pulse count plus the distance the
/// pulses cover, converted to meters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TWPLS {
    pub system: TalkerSystem,
    pub valid: bool,
    /// UTC time, seconds since midnight
    pub time: f64,
    /// Accumulated pulse count
    pub count: u32,
    /// Distance covered, meters
    pub distance: f64,
}

impl TWPLS {
    pub(crate) fn from_fields(
        fields: Fields<'_>,
        system: TalkerSystem,
        valid: bool,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            system,
            valid,
            time: hms_to_seconds(fields.raw(1))?,
            count: fields.num(2),
            distance: position_to_meters(fields.raw(4), fields.num(3))?,
        })
    }
}

/// PTWWHE - wheel-speed reading, converted to m/s per wheel.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TWWHE {
    pub system: TalkerSystem,
    pub valid: bool,
    /// UTC time, seconds since midnight
    pub time: f64,
    /// Left wheel speed in m/s
    pub left: f64,
    /// Right wheel speed in m/s
    pub right: f64,
}

impl TWWHE {
    pub(crate) fn from_fields(
        fields: Fields<'_>,
        system: TalkerSystem,
        valid: bool,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            system,
            valid,
            time: hms_to_seconds(fields.raw(1))?,
            left: velocity_to_mps(fields.raw(3), fields.num(2))?,
            right: velocity_to_mps(fields.raw(5), fields.num(4))?,
        })
    }
}

/// PTWHPR - heading/pitch/roll reading in degrees, with a reference-frame
/// flag validated by the orientation converter.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TWHPR {
    pub system: TalkerSystem,
    pub valid: bool,
    /// UTC time, seconds since midnight
    pub time: f64,
    /// Heading in degrees, true-north frame
    pub heading: f64,
    /// Pitch in degrees
    pub pitch: f64,
    /// Roll in degrees
    pub roll: f64,
}

impl TWHPR {
    pub(crate) fn from_fields(
        fields: Fields<'_>,
        system: TalkerSystem,
        valid: bool,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            system,
            valid,
            time: hms_to_seconds(fields.raw(1))?,
            heading: orientation_to_true(fields.raw(5), fields.num(2))?,
            pitch: fields.num(3),
            roll: fields.num(4),
        })
    }
}

/// PTWACC - accelerometer reading in m/s² per axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TWACC {
    pub system: TalkerSystem,
    pub valid: bool,
    /// UTC time, seconds since midnight
    pub time: f64,
    pub ax: f64,
    pub ay: f64,
    pub az: f64,
}

impl TWACC {
    pub(crate) fn from_fields(
        fields: Fields<'_>,
        system: TalkerSystem,
        valid: bool,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            system,
            valid,
            time: hms_to_seconds(fields.raw(1))?,
            ax: fields.num(2),
            ay: fields.num(3),
            az: fields.num(4),
        })
    }
}

/// PTWGYR - gyroscope reading in degrees/s per axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TWGYR {
    pub system: TalkerSystem,
    pub valid: bool,
    /// UTC time, seconds since midnight
    pub time: f64,
    pub gx: f64,
    pub gy: f64,
    pub gz: f64,
}

impl TWGYR {
    pub(crate) fn from_fields(
        fields: Fields<'_>,
        system: TalkerSystem,
        valid: bool,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            system,
            valid,
            time: hms_to_seconds(fields.raw(1))?,
            gx: fields.num(2),
            gy: fields.num(3),
            gz: fields.num(4),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIME: f64 = 10.0 * 3600.0 + 45.0 * 60.0 + 32.0;

    #[test]
    fn test_twpos_converts_units() {
        let raw = ["PTWPOS", "104532.00", "12.50", "M", "8.20", "M", "1.10", "M"];
        let pos = TWPOS::from_fields(Fields::new(&raw), TalkerSystem::Proprietary, true).unwrap();
        assert!((pos.time - TIME).abs() < 1e-9);
        assert_eq!(pos.x, 12.5);
        assert_eq!(pos.y, 8.2);
        assert_eq!(pos.z, 1.1);

        let raw = ["PTWPOS", "104532.00", "10.0", "F", "1.0", "N", "5.0", "K"];
        let pos = TWPOS::from_fields(Fields::new(&raw), TalkerSystem::Proprietary, true).unwrap();
        assert!((pos.x - 3.048).abs() < 1e-9);
        assert_eq!(pos.y, 1852.0);
        assert_eq!(pos.z, 5000.0);
    }

    #[test]
    fn test_twpos_bad_unit_fails() {
        let raw = ["PTWPOS", "104532.00", "12.50", "X", "8.20", "M", "1.10", "M"];
        let result = TWPOS::from_fields(Fields::new(&raw), TalkerSystem::Proprietary, true);
        assert_eq!(result, Err(DecodeError::UnsupportedUnit("X".to_string())));
    }

    #[test]
    fn test_twvct_converts_units() {
        let raw = ["PTWVCT", "104532.00", "3.60", "K", "0.00", "K", "0.10", "K"];
        let vct = TWVCT::from_fields(Fields::new(&raw), TalkerSystem::Proprietary, true).unwrap();
        assert!((vct.vx - 1.0).abs() < 1e-9);
        assert_eq!(vct.vy, 0.0);
        assert!((vct.vz - 0.1 / 3.6).abs() < 1e-9);
    }

    #[test]
    fn test_twpls_from_fields() {
        let raw = ["PTWPLS", "104532.00", "1842", "150.0", "F"];
        let pls = TWPLS::from_fields(Fields::new(&raw), TalkerSystem::Proprietary, true).unwrap();
        assert_eq!(pls.count, 1842);
        assert!((pls.distance - 45.72).abs() < 1e-9);
    }

    #[test]
    fn test_twwhe_from_fields() {
        let raw = ["PTWWHE", "104532.00", "10.0", "N", "10.2", "N"];
        let whe = TWWHE::from_fields(Fields::new(&raw), TalkerSystem::Proprietary, true).unwrap();
        assert!((whe.left - 10.0 * 1852.0 / 3600.0).abs() < 1e-9);
        assert!((whe.right - 10.2 * 1852.0 / 3600.0).abs() < 1e-9);
    }

    #[test]
    fn test_twhpr_frame_flag() {
        let raw = ["PTWHPR", "104532.00", "224.5", "-1.2", "0.8", "T"];
        let hpr = TWHPR::from_fields(Fields::new(&raw), TalkerSystem::Proprietary, true).unwrap();
        assert_eq!(hpr.heading, 224.5);
        assert_eq!(hpr.pitch, -1.2);
        assert_eq!(hpr.roll, 0.8);

        let raw = ["PTWHPR", "104532.00", "224.5", "-1.2", "0.8", "M"];
        let result = TWHPR::from_fields(Fields::new(&raw), TalkerSystem::Proprietary, true);
        assert_eq!(result, Err(DecodeError::UnsupportedUnit("M".to_string())));
    }

    #[test]
    fn test_twacc_twgyr_plain_axes() {
        let raw = ["PTWACC", "104532.00", "0.02", "-0.01", "9.81"];
        let acc = TWACC::from_fields(Fields::new(&raw), TalkerSystem::Proprietary, true).unwrap();
        assert_eq!((acc.ax, acc.ay, acc.az), (0.02, -0.01, 9.81));

        let raw = ["PTWGYR", "104532.00", "0.30", "0.10", "-0.05"];
        let gyr = TWGYR::from_fields(Fields::new(&raw), TalkerSystem::Proprietary, true).unwrap();
        assert_eq!((gyr.gx, gyr.gy, gyr.gz), (0.3, 0.1, -0.05));
    }

    #[test]
    fn test_tw_missing_time_fails() {
        let raw = ["PTWACC", "", "0.02", "-0.01", "9.81"];
        let result = TWACC::from_fields(Fields::new(&raw), TalkerSystem::Proprietary, true);
        assert!(matches!(result, Err(DecodeError::InvalidFormat { .. })));
    }
}
