//! # Error Types
//!
//! This module defines the error taxonomy used throughout the decoder.
//!
//! A checksum mismatch is deliberately *not* part of this taxonomy: a
//! sentence with a bad checksum is still fully decoded and returned with its
//! `valid` flag cleared. Everything in [`DecodeError`] aborts decoding of the
//! offending line.

use thiserror::Error;

use crate::sentences::SentenceType;

/// Represents all fatal failure modes of the decoder.
///
/// All variants propagate synchronously to the immediate caller; nothing is
/// retried internally. The only non-fatal conditions are checksum mismatch
/// (reported via the `valid` flag on the decoded record) and, for
/// [`decode_and_record`](crate::decode_and_record) only, an unsupported
/// sentence type (downgraded to a logged skip).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input line was empty.
    #[error("empty sentence")]
    EmptyInput,

    /// The header suffix does not name a supported sentence type.
    ///
    /// Carries the header that failed the lookup.
    #[error("unsupported sentence type `{0}`")]
    UnsupportedSentenceType(String),

    /// A structurally required field failed its micro-parser.
    ///
    /// Raised by the degrees-minutes and hours-minutes-seconds parsers and
    /// by date-substring slicing. Optional fields never raise this; they
    /// default instead.
    #[error("invalid {context} field `{value}`")]
    InvalidFormat {
        /// What the field was expected to hold (e.g. `"latitude"`).
        context: &'static str,
        /// The offending raw field text.
        value: String,
    },

    /// A unit-flag field held a value outside its defined set.
    #[error("unsupported unit flag `{0}`")]
    UnsupportedUnit(String),

    /// [`LatestSentences::take`](crate::LatestSentences::take) was called on
    /// an empty slot.
    #[error("no {0} sentence has been recorded")]
    MissingValue(SentenceType),
}

impl DecodeError {
    pub(crate) fn invalid(context: &'static str, value: &str) -> Self {
        DecodeError::InvalidFormat {
            context,
            value: value.to_string(),
        }
    }
}
