//! # Field Micro-Parsers
//!
//! Pure conversions from raw sentence fields to typed values.
//!
//! Two distinct behaviors coexist here and must not be unified:
//!
//! - **Default on failure** ([`parse_or_default`], the [`Fields`] getters):
//!   optional numeric fields decode to `0`/`0.0` when empty or malformed.
//! - **Propagate failure** ([`degrees_minutes`], [`hms_to_seconds`], the
//!   unit converters): structurally required fields abort the sentence with
//!   [`DecodeError::InvalidFormat`] or [`DecodeError::UnsupportedUnit`].

use std::str::FromStr;

use crate::DecodeError;

/// Parses a numeric field, falling back to the type's default on failure.
///
/// Covers the int-or-zero and float-or-zero contracts for optional fields:
/// an empty or non-numeric field yields `0` / `0.0` rather than an error.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::fields::parse_or_default;
///
/// assert_eq!(parse_or_default::<u8>("09"), 9);
/// assert_eq!(parse_or_default::<u8>(""), 0);
/// assert_eq!(parse_or_default::<f64>("0.9"), 0.9);
/// assert_eq!(parse_or_default::<f64>("x"), 0.0);
/// ```
pub fn parse_or_default<T: FromStr + Default>(field: &str) -> T {
    field.trim().parse().unwrap_or_default()
}

/// Converts a `[D]DDMM.MMMM` coordinate with a separate hemisphere field to
/// signed decimal degrees.
///
/// Degrees are all digits before the two immediately preceding the decimal
/// point; the rest, fraction included, are minutes. The result is negated
/// for the `S` and `W` hemispheres.
///
/// Fails with [`DecodeError::InvalidFormat`] when either field is empty,
/// when there is no decimal point, or when fewer than two digits precede it.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::fields::degrees_minutes;
///
/// let lat = degrees_minutes("4807.038", "N").unwrap();
/// assert!((lat - 48.1173).abs() < 1e-9);
/// ```
pub fn degrees_minutes(dm: &str, hemisphere: &str) -> Result<f64, DecodeError> {
    if dm.is_empty() || !dm.is_ascii() {
        return Err(DecodeError::invalid("degrees-minutes", dm));
    }
    if hemisphere.is_empty() {
        return Err(DecodeError::invalid("hemisphere", hemisphere));
    }

    let point = dm
        .find('.')
        .ok_or_else(|| DecodeError::invalid("degrees-minutes", dm))?;
    if point < 2 {
        return Err(DecodeError::invalid("degrees-minutes", dm));
    }

    let (degrees, minutes) = dm.split_at(point - 2);
    let degrees: f64 = if degrees.is_empty() {
        0.0
    } else {
        degrees
            .parse()
            .map_err(|_| DecodeError::invalid("degrees-minutes", dm))?
    };
    let minutes: f64 = minutes
        .parse()
        .map_err(|_| DecodeError::invalid("degrees-minutes", dm))?;

    let value = degrees + minutes / 60.0;
    match hemisphere {
        "S" | "W" => Ok(-value),
        _ => Ok(value),
    }
}

/// Converts an `HHMMSS[.ffff]` timestamp to seconds since midnight.
///
/// Fails with [`DecodeError::InvalidFormat`] when the field is shorter than
/// six characters or any component is non-numeric.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::fields::hms_to_seconds;
///
/// assert_eq!(hms_to_seconds("123519").unwrap(), 45319.0);
/// ```
pub fn hms_to_seconds(hms: &str) -> Result<f64, DecodeError> {
    if hms.len() < 6 || !hms.is_ascii() {
        return Err(DecodeError::invalid("hours-minutes-seconds", hms));
    }

    let hours: f64 = hms[0..2]
        .parse()
        .map_err(|_| DecodeError::invalid("hours-minutes-seconds", hms))?;
    let minutes: f64 = hms[2..4]
        .parse()
        .map_err(|_| DecodeError::invalid("hours-minutes-seconds", hms))?;
    let seconds: f64 = hms[4..]
        .parse()
        .map_err(|_| DecodeError::invalid("hours-minutes-seconds", hms))?;

    Ok(hours * 3600.0 + minutes * 60.0 + seconds)
}

/// Converts a position value to meters according to its unit flag.
///
/// Accepted flags: `F` feet, `N` nautical miles, `K` kilometers, `M` meters.
/// Any other flag fails with [`DecodeError::UnsupportedUnit`].
pub fn position_to_meters(flag: &str, value: f64) -> Result<f64, DecodeError> {
    match flag {
        "F" => Ok(value * 0.3048),
        "N" => Ok(value * 1852.0),
        "K" => Ok(value * 1000.0),
        "M" => Ok(value),
        _ => Err(DecodeError::UnsupportedUnit(flag.to_string())),
    }
}

/// Converts a velocity value to meters per second according to its unit flag.
///
/// Accepted flags: `N` knots, `K` km/h, `M` m/s.
/// Any other flag fails with [`DecodeError::UnsupportedUnit`].
pub fn velocity_to_mps(flag: &str, value: f64) -> Result<f64, DecodeError> {
    match flag {
        "N" => Ok(value * 1852.0 / 3600.0),
        "K" => Ok(value / 3.6),
        "M" => Ok(value),
        _ => Err(DecodeError::UnsupportedUnit(flag.to_string())),
    }
}

/// Validates an orientation reference-frame flag.
///
/// `T` (true-north frame) is the identity; any other flag fails with
/// [`DecodeError::UnsupportedUnit`].
pub fn orientation_to_true(flag: &str, value: f64) -> Result<f64, DecodeError> {
    match flag {
        "T" => Ok(value),
        _ => Err(DecodeError::UnsupportedUnit(flag.to_string())),
    }
}

/// Read-only view over the split field array of one sentence.
///
/// Index 0 is the header. Out-of-range indices read as the empty string, so
/// sentences with trailing fields omitted decode with defaults instead of
/// panicking.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a> {
    inner: &'a [&'a str],
}

impl<'a> Fields<'a> {
    pub fn new(inner: &'a [&'a str]) -> Self {
        Self { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Raw field text; empty string when the index is out of range.
    pub fn raw(&self, index: usize) -> &'a str {
        self.inner.get(index).copied().unwrap_or("")
    }

    /// Numeric field, defaulting on empty or malformed input.
    pub fn num<T: FromStr + Default>(&self, index: usize) -> T {
        parse_or_default(self.raw(index))
    }

    /// Owned copy of a text field; empty string when absent.
    pub fn text(&self, index: usize) -> String {
        self.raw(index).to_string()
    }

    /// First character of a field, or `default` when the field is empty.
    pub fn ch(&self, index: usize, default: char) -> char {
        self.raw(index).chars().next().unwrap_or(default)
    }

    /// True when the field equals the given flag letter exactly.
    pub fn flag(&self, index: usize, on: &str) -> bool {
        self.raw(index) == on
    }
}
