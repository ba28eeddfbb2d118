//! # Latest-Sentence Store
//!
//! A keyed table holding at most one decoded record per sentence type.
//!
//! The store carries no internal synchronization; callers sharing one
//! instance across threads must serialize access themselves (typically one
//! store per logical connection).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DecodeError,
    sentences::{Sentence, SentenceType},
};

/// One optional slot per supported sentence type.
///
/// Created empty; [`update`](LatestSentences::update) overwrites the slot
/// matching the record's variant, and [`take`](LatestSentences::take) moves
/// a record out, leaving the slot empty.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{DecodeError, LatestSentences, SentenceType, decode};
///
/// let mut store = LatestSentences::new();
/// let gll = decode("$GPGLL,4916.45,N,12311.12,W,225444,A,A*5C").unwrap();
/// store.update(gll);
///
/// assert!(store.take(SentenceType::GLL).is_ok());
/// assert_eq!(
///     store.take(SentenceType::GLL),
///     Err(DecodeError::MissingValue(SentenceType::GLL))
/// );
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatestSentences {
    dtm: Option<Sentence>,
    gbs: Option<Sentence>,
    gga: Option<Sentence>,
    gll: Option<Sentence>,
    gsa: Option<Sentence>,
    gst: Option<Sentence>,
    gsv: Option<Sentence>,
    rmc: Option<Sentence>,
    vtg: Option<Sentence>,
    zda: Option<Sentence>,
    pashr: Option<Sentence>,
    twpos: Option<Sentence>,
    twvct: Option<Sentence>,
    twpls: Option<Sentence>,
    twwhe: Option<Sentence>,
    twhpr: Option<Sentence>,
    twacc: Option<Sentence>,
    twgyr: Option<Sentence>,
}

impl LatestSentences {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, sentence_type: SentenceType) -> &mut Option<Sentence> {
        match sentence_type {
            SentenceType::DTM => &mut self.dtm,
            SentenceType::GBS => &mut self.gbs,
            SentenceType::GGA => &mut self.gga,
            SentenceType::GLL => &mut self.gll,
            SentenceType::GSA => &mut self.gsa,
            SentenceType::GST => &mut self.gst,
            SentenceType::GSV => &mut self.gsv,
            SentenceType::RMC => &mut self.rmc,
            SentenceType::VTG => &mut self.vtg,
            SentenceType::ZDA => &mut self.zda,
            SentenceType::PASHR => &mut self.pashr,
            SentenceType::TWPOS => &mut self.twpos,
            SentenceType::TWVCT => &mut self.twvct,
            SentenceType::TWPLS => &mut self.twpls,
            SentenceType::TWWHE => &mut self.twwhe,
            SentenceType::TWHPR => &mut self.twhpr,
            SentenceType::TWACC => &mut self.twacc,
            SentenceType::TWGYR => &mut self.twgyr,
        }
    }

    /// Overwrites the slot matching the record's variant.
    pub fn update(&mut self, sentence: Sentence) {
        let sentence_type = sentence.sentence_type();
        *self.slot(sentence_type) = Some(sentence);
    }

    /// Moves the latest record of the given type out of the store, leaving
    /// the slot empty.
    ///
    /// # Errors
    ///
    /// [`DecodeError::MissingValue`] when the slot is empty.
    pub fn take(&mut self, sentence_type: SentenceType) -> Result<Sentence, DecodeError> {
        self.slot(sentence_type)
            .take()
            .ok_or(DecodeError::MissingValue(sentence_type))
    }
}
