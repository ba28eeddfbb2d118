//! # NMEA 0183 Decoder
//!
//! This library decodes NMEA 0183 sentences — ASCII, comma-delimited,
//! checksum-terminated messages from navigation and positioning equipment —
//! into strongly-typed records. One complete sentence string per call:
//! `$HHH,D1,D2,...,Dn*CC`
//!
//! The decoder is deliberately lenient where receivers are sloppy:
//! - A checksum mismatch never rejects a sentence. The record is fully
//!   decoded with its `valid` flag cleared, and the caller decides.
//! - Optional numeric fields default to `0`/`0.0` when empty or malformed.
//! - Structurally required fields (coordinates, timestamps, date slicing,
//!   unit flags) still fail hard with a typed [`DecodeError`].
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_decoder::{Sentence, decode};
//!
//! let line = "$GPGGA,134740.000,5540.3248,N,01231.2992,E,1,09,0.9,20.2,M,41.5,M,,0000*61";
//!
//! match decode(line).unwrap() {
//!     Sentence::GGA(gga) => {
//!         assert!(gga.valid);
//!         assert!((gga.latitude - 55.67208).abs() < 1e-6);
//!         assert_eq!(gga.fix_quality.as_str(), "GPS (SPS)");
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! ## Tracking the latest sentence per type
//!
//! ```rust
//! use nmea0183_decoder::{LatestSentences, SentenceType, decode_and_record};
//!
//! let mut store = LatestSentences::new();
//!
//! let tag = decode_and_record(
//!     &mut store,
//!     "$GPGLL,4916.45,N,12311.12,W,225444,A,A*5C",
//! )
//! .unwrap();
//! assert_eq!(tag, Some(SentenceType::GLL));
//!
//! // Unsupported types are skipped, not errors.
//! let tag = decode_and_record(&mut store, "$GPXTE,A,A,0.67,L,N*6F").unwrap();
//! assert_eq!(tag, None);
//!
//! let latest = store.take(SentenceType::GLL).unwrap();
//! assert_eq!(latest.sentence_type(), SentenceType::GLL);
//! ```

pub mod decoder;
pub mod error;
pub mod fields;
mod frame;
pub mod sentences;
pub mod store;
pub mod talker;

pub use decoder::{ChecksumMode, decode, decode_and_record, decode_with, is_proprietary, is_supported};
pub use error::DecodeError;
pub use frame::{checksum, format_checksum};
pub use sentences::{Sentence, SentenceType};
pub use store::LatestSentences;
pub use talker::TalkerSystem;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
