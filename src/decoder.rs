//! # Sentence Decoder
//!
//! The orchestration layer: framing, checksum comparison, talker
//! classification, and dispatch to the per-type builders.

use log::warn;

use crate::{
    DecodeError, LatestSentences, TalkerSystem,
    fields::Fields,
    frame::{ChecksumField, checksum, split_frame},
    sentences::{self, Sentence, SentenceType},
};

/// Defines whether [`decode_with`] compares the declared checksum.
///
/// A checksum mismatch never aborts decoding; it only clears the `valid`
/// flag on the decoded record. `Skip` leaves the flag set regardless.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumMode {
    /// Compare a declared `*CC` suffix against the computed checksum and
    /// flag the record invalid on mismatch. Sentences without a suffix
    /// decode as unchecked and stay valid.
    #[default]
    Validate,
    /// Ignore the checksum entirely.
    Skip,
}

/// Decodes one sentence line with checksum validation.
///
/// Shorthand for [`decode_with`] in [`ChecksumMode::Validate`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Sentence, decode};
///
/// let line = "$GPGLL,4916.45,N,12311.12,W,225444,A,A*5C";
/// match decode(line).unwrap() {
///     Sentence::GLL(gll) => {
///         assert!(gll.valid);
///         assert!(gll.status);
///     }
///     _ => unreachable!(),
/// }
/// ```
pub fn decode(line: &str) -> Result<Sentence, DecodeError> {
    decode_with(line, ChecksumMode::Validate)
}

/// Decodes one sentence line.
///
/// Pipeline: empty check, framing split on the last `*`, checksum
/// comparison (per `mode`), field split on `,` with empty fields preserved,
/// talker classification, dispatch-table lookup by header suffix, and
/// finally the variant builder.
///
/// # Errors
///
/// - [`DecodeError::EmptyInput`] for an empty line
/// - [`DecodeError::UnsupportedSentenceType`] when the header matches no
///   dispatch entry
/// - [`DecodeError::InvalidFormat`] / [`DecodeError::UnsupportedUnit`]
///   propagated from the builder
pub fn decode_with(line: &str, mode: ChecksumMode) -> Result<Sentence, DecodeError> {
    if line.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let frame = split_frame(line);
    let valid = match mode {
        ChecksumMode::Skip => true,
        ChecksumMode::Validate => match frame.declared {
            ChecksumField::Absent => true,
            ChecksumField::Malformed => false,
            ChecksumField::Declared(cc) => cc == checksum(frame.payload),
        },
    };

    let split: Vec<&str> = frame.payload.split(',').collect();
    let fields = Fields::new(&split);
    let header = fields.raw(0);
    let system = TalkerSystem::classify(header);

    let (_, _, builder) = sentences::lookup(header)
        .ok_or_else(|| DecodeError::UnsupportedSentenceType(header.to_string()))?;

    builder(fields, system, valid)
}

/// Decodes one line and records the result in the store.
///
/// Unsupported sentence types are downgraded to a logged skip and reported
/// as `Ok(None)`; every other decode failure propagates. On success the
/// decoded record overwrites the store slot for its variant and the variant
/// tag is returned.
pub fn decode_and_record(
    store: &mut LatestSentences,
    line: &str,
) -> Result<Option<SentenceType>, DecodeError> {
    match decode(line) {
        Ok(sentence) => {
            let sentence_type = sentence.sentence_type();
            store.update(sentence);
            Ok(Some(sentence_type))
        }
        Err(DecodeError::UnsupportedSentenceType(header)) => {
            warn!("skipping unsupported sentence type `{header}`");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// True when the line's header names a supported sentence type, standard or
/// proprietary.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::is_supported;
///
/// assert!(is_supported("$GPGGA,134740.000,5540.3248,N,..."));
/// assert!(is_supported("$PASHR,085335.000,224.19,T,..."));
/// assert!(!is_supported("$GPXTE,A,A,0.67,L,N"));
/// ```
pub fn is_supported(line: &str) -> bool {
    sentences::lookup(header_of(line)).is_some()
}

/// True when the line's header names a supported proprietary sentence type.
pub fn is_proprietary(line: &str) -> bool {
    sentences::lookup(header_of(line))
        .is_some_and(|(_, sentence_type, _)| sentence_type.is_proprietary())
}

/// The header of a line: the text between `$` and the first comma.
fn header_of(line: &str) -> &str {
    let line = line.strip_prefix('$').unwrap_or(line);
    line.split([',', '*']).next().unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_of() {
        assert_eq!(header_of("$GPGGA,134740.000,5540.3248"), "GPGGA");
        assert_eq!(header_of("GPGGA,134740.000"), "GPGGA");
        assert_eq!(header_of("$PASHR*00"), "PASHR");
        assert_eq!(header_of(""), "");
    }
}
