//! # Sentence Framing
//!
//! This module splits a raw line into its payload and declared checksum:
//! `$HHH,D1,D2,...,Dn*CC` becomes the payload `HHH,D1,D2,...,Dn` plus the
//! two-hex-digit suffix `CC`, if one is present.
//!
//! Framing never rejects a sentence over its checksum. The decoder compares
//! the declared value against [`checksum`] and clears the `valid` flag on the
//! decoded record instead.

use nom::{
    Parser,
    bytes::complete::take_while_m_n,
    combinator::{all_consuming, map_res},
};

/// The checksum suffix of a framed sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChecksumField {
    /// No `*` delimiter was present; the sentence is treated as unchecked.
    Absent,
    /// A `*` delimiter was present but not followed by exactly two hex
    /// digits. The sentence decodes with `valid = false`.
    Malformed,
    /// A well-formed `*CC` suffix.
    Declared(u8),
}

/// One line split into its checksummed payload and checksum suffix.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame<'a> {
    /// Text between `$` and `*` (both exclusive). This is exactly the byte
    /// range the XOR checksum covers.
    pub payload: &'a str,
    pub declared: ChecksumField,
}

/// Splits a line on the last `*` into payload and checksum suffix.
///
/// A leading `$` and any trailing CR/LF are stripped first. Payloads never
/// legally contain `*`, so splitting on the last occurrence keeps a stray
/// `*` inside a malformed payload out of the checksum range.
pub(crate) fn split_frame(line: &str) -> Frame<'_> {
    let line = line.trim_end_matches(['\r', '\n']);
    let line = line.strip_prefix('$').unwrap_or(line);

    match line.rsplit_once('*') {
        None => Frame {
            payload: line,
            declared: ChecksumField::Absent,
        },
        Some((payload, suffix)) => Frame {
            payload,
            declared: match all_consuming(hex_byte).parse(suffix) {
                Ok((_, cc)) => ChecksumField::Declared(cc),
                Err(_) => ChecksumField::Malformed,
            },
        },
    }
}

/// Calculates the NMEA 0183 checksum for the given payload.
///
/// The checksum is the XOR fold of every byte between the `$` prefix and the
/// `*` delimiter, excluding both delimiters.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::checksum;
///
/// assert_eq!(checksum("GPGGA,123456,data"), 0x41);
/// ```
pub fn checksum(payload: &str) -> u8 {
    payload.bytes().fold(0u8, |acc, byte| acc ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::format_checksum;
///
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

fn hex_byte(i: &str) -> nom::IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |digits: &str| u8::from_str_radix(digits, 16),
    )
    .parse(i)
}
