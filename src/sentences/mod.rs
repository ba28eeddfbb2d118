//! # Sentence Records
//!
//! One strongly-typed record per supported sentence type, a [`Sentence`] sum
//! type over the closed variant set, and the dispatch table the decoder
//! consults to route a classified header to its builder.
//!
//! Every record carries the classified [`TalkerSystem`] and the checksum
//! `valid` flag alongside its per-type fields, and is immutable once built.

mod dtm;
mod gbs;
mod gga;
mod gll;
mod gsa;
mod gst;
mod gsv;
mod pashr;
mod rmc;
mod tw;
mod vtg;
mod zda;

pub use dtm::DTM;
pub use gbs::GBS;
pub use gga::{FixQuality, GGA};
pub use gll::GLL;
pub use gsa::GSA;
pub use gst::GST;
pub use gsv::{GSV, Satellite};
pub use pashr::PASHR;
pub use rmc::RMC;
pub use tw::{TWACC, TWGYR, TWHPR, TWPLS, TWPOS, TWVCT, TWWHE};
pub use vtg::VTG;
pub use zda::ZDA;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DecodeError, TalkerSystem, fields::Fields};

/// Tag naming one supported sentence type.
///
/// Used as the key of the [`LatestSentences`](crate::LatestSentences) store
/// and as the return value of [`decode_and_record`](crate::decode_and_record).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceType {
    DTM,
    GBS,
    GGA,
    GLL,
    GSA,
    GST,
    GSV,
    RMC,
    VTG,
    ZDA,
    PASHR,
    TWPOS,
    TWVCT,
    TWPLS,
    TWWHE,
    TWHPR,
    TWACC,
    TWGYR,
}

impl SentenceType {
    /// The header code this type is matched by: the 3-letter suffix for
    /// standard sentences, the full proprietary header otherwise.
    pub fn code(&self) -> &'static str {
        match self {
            SentenceType::DTM => "DTM",
            SentenceType::GBS => "GBS",
            SentenceType::GGA => "GGA",
            SentenceType::GLL => "GLL",
            SentenceType::GSA => "GSA",
            SentenceType::GST => "GST",
            SentenceType::GSV => "GSV",
            SentenceType::RMC => "RMC",
            SentenceType::VTG => "VTG",
            SentenceType::ZDA => "ZDA",
            SentenceType::PASHR => "PASHR",
            SentenceType::TWPOS => "PTWPOS",
            SentenceType::TWVCT => "PTWVCT",
            SentenceType::TWPLS => "PTWPLS",
            SentenceType::TWWHE => "PTWWHE",
            SentenceType::TWHPR => "PTWHPR",
            SentenceType::TWACC => "PTWACC",
            SentenceType::TWGYR => "PTWGYR",
        }
    }

    /// True for the vendor-extension types (`PASHR` and the `PTW*` family).
    pub fn is_proprietary(&self) -> bool {
        matches!(
            self,
            SentenceType::PASHR
                | SentenceType::TWPOS
                | SentenceType::TWVCT
                | SentenceType::TWPLS
                | SentenceType::TWWHE
                | SentenceType::TWHPR
                | SentenceType::TWACC
                | SentenceType::TWGYR
        )
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A decoded sentence, one variant per supported type.
///
/// ## Supported Sentence Types
///
/// | Variant          | Sentence Type                                           |
/// |------------------|---------------------------------------------------------|
/// | DTM([`DTM`])     | Datum Reference                                         |
/// | GBS([`GBS`])     | GPS Satellite Fault Detection                           |
/// | GGA([`GGA`])     | Global Positioning System Fix Data                      |
/// | GLL([`GLL`])     | Geographic Position - Latitude/Longitude                |
/// | GSA([`GSA`])     | GPS DOP and active satellites                           |
/// | GST([`GST`])     | Pseudorange Noise Statistics                            |
/// | GSV([`GSV`])     | Satellites in View                                      |
/// | RMC([`RMC`])     | Recommended Minimum Navigation Information              |
/// | VTG([`VTG`])     | Track made good and Ground speed                        |
/// | ZDA([`ZDA`])     | Time & Date - UTC, day, month, year and local time zone |
/// | PASHR([`PASHR`]) | Ashtech attitude and heave                              |
/// | TWPOS([`TWPOS`]) | Vendor position-sensor reading                          |
/// | TWVCT([`TWVCT`]) | Vendor velocity-vector reading                          |
/// | TWPLS([`TWPLS`]) | Vendor odometer pulse reading                           |
/// | TWWHE([`TWWHE`]) | Vendor wheel-speed reading                              |
/// | TWHPR([`TWHPR`]) | Vendor heading/pitch/roll reading                       |
/// | TWACC([`TWACC`]) | Vendor accelerometer reading                            |
/// | TWGYR([`TWGYR`]) | Vendor gyroscope reading                                |
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Sentence {
    DTM(DTM),
    GBS(GBS),
    GGA(GGA),
    GLL(GLL),
    GSA(GSA),
    GST(GST),
    GSV(GSV),
    RMC(RMC),
    VTG(VTG),
    ZDA(ZDA),
    PASHR(PASHR),
    TWPOS(TWPOS),
    TWVCT(TWVCT),
    TWPLS(TWPLS),
    TWWHE(TWWHE),
    TWHPR(TWHPR),
    TWACC(TWACC),
    TWGYR(TWGYR),
}

impl Sentence {
    /// The tag naming this sentence's variant.
    pub fn sentence_type(&self) -> SentenceType {
        match self {
            Sentence::DTM(_) => SentenceType::DTM,
            Sentence::GBS(_) => SentenceType::GBS,
            Sentence::GGA(_) => SentenceType::GGA,
            Sentence::GLL(_) => SentenceType::GLL,
            Sentence::GSA(_) => SentenceType::GSA,
            Sentence::GST(_) => SentenceType::GST,
            Sentence::GSV(_) => SentenceType::GSV,
            Sentence::RMC(_) => SentenceType::RMC,
            Sentence::VTG(_) => SentenceType::VTG,
            Sentence::ZDA(_) => SentenceType::ZDA,
            Sentence::PASHR(_) => SentenceType::PASHR,
            Sentence::TWPOS(_) => SentenceType::TWPOS,
            Sentence::TWVCT(_) => SentenceType::TWVCT,
            Sentence::TWPLS(_) => SentenceType::TWPLS,
            Sentence::TWWHE(_) => SentenceType::TWWHE,
            Sentence::TWHPR(_) => SentenceType::TWHPR,
            Sentence::TWACC(_) => SentenceType::TWACC,
            Sentence::TWGYR(_) => SentenceType::TWGYR,
        }
    }

    /// The talker system the sentence was classified under.
    pub fn system(&self) -> TalkerSystem {
        match self {
            Sentence::DTM(s) => s.system,
            Sentence::GBS(s) => s.system,
            Sentence::GGA(s) => s.system,
            Sentence::GLL(s) => s.system,
            Sentence::GSA(s) => s.system,
            Sentence::GST(s) => s.system,
            Sentence::GSV(s) => s.system,
            Sentence::RMC(s) => s.system,
            Sentence::VTG(s) => s.system,
            Sentence::ZDA(s) => s.system,
            Sentence::PASHR(s) => s.system,
            Sentence::TWPOS(s) => s.system,
            Sentence::TWVCT(s) => s.system,
            Sentence::TWPLS(s) => s.system,
            Sentence::TWWHE(s) => s.system,
            Sentence::TWHPR(s) => s.system,
            Sentence::TWACC(s) => s.system,
            Sentence::TWGYR(s) => s.system,
        }
    }

    /// False when the declared checksum did not match the computed one.
    pub fn is_valid(&self) -> bool {
        match self {
            Sentence::DTM(s) => s.valid,
            Sentence::GBS(s) => s.valid,
            Sentence::GGA(s) => s.valid,
            Sentence::GLL(s) => s.valid,
            Sentence::GSA(s) => s.valid,
            Sentence::GST(s) => s.valid,
            Sentence::GSV(s) => s.valid,
            Sentence::RMC(s) => s.valid,
            Sentence::VTG(s) => s.valid,
            Sentence::ZDA(s) => s.valid,
            Sentence::PASHR(s) => s.valid,
            Sentence::TWPOS(s) => s.valid,
            Sentence::TWVCT(s) => s.valid,
            Sentence::TWPLS(s) => s.valid,
            Sentence::TWWHE(s) => s.valid,
            Sentence::TWHPR(s) => s.valid,
            Sentence::TWACC(s) => s.valid,
            Sentence::TWGYR(s) => s.valid,
        }
    }
}

pub(crate) type Builder =
    fn(Fields<'_>, TalkerSystem, bool) -> Result<Sentence, DecodeError>;

/// Static dispatch table: header code, variant tag, builder.
///
/// The decoder matches headers by suffix against the codes in order. The
/// codes are disjoint, so order does not affect which entry wins, but the
/// table keeps lookup deterministic and in one place.
pub(crate) const DISPATCH: &[(&str, SentenceType, Builder)] = &[
    ("DTM", SentenceType::DTM, |f, s, v| {
        DTM::from_fields(f, s, v).map(Sentence::DTM)
    }),
    ("GBS", SentenceType::GBS, |f, s, v| {
        GBS::from_fields(f, s, v).map(Sentence::GBS)
    }),
    ("GGA", SentenceType::GGA, |f, s, v| {
        GGA::from_fields(f, s, v).map(Sentence::GGA)
    }),
    ("GLL", SentenceType::GLL, |f, s, v| {
        GLL::from_fields(f, s, v).map(Sentence::GLL)
    }),
    ("GSA", SentenceType::GSA, |f, s, v| {
        GSA::from_fields(f, s, v).map(Sentence::GSA)
    }),
    ("GST", SentenceType::GST, |f, s, v| {
        GST::from_fields(f, s, v).map(Sentence::GST)
    }),
    ("GSV", SentenceType::GSV, |f, s, v| {
        GSV::from_fields(f, s, v).map(Sentence::GSV)
    }),
    ("RMC", SentenceType::RMC, |f, s, v| {
        RMC::from_fields(f, s, v).map(Sentence::RMC)
    }),
    ("VTG", SentenceType::VTG, |f, s, v| {
        VTG::from_fields(f, s, v).map(Sentence::VTG)
    }),
    ("ZDA", SentenceType::ZDA, |f, s, v| {
        ZDA::from_fields(f, s, v).map(Sentence::ZDA)
    }),
    ("PASHR", SentenceType::PASHR, |f, s, v| {
        PASHR::from_fields(f, s, v).map(Sentence::PASHR)
    }),
    ("PTWPOS", SentenceType::TWPOS, |f, s, v| {
        TWPOS::from_fields(f, s, v).map(Sentence::TWPOS)
    }),
    ("PTWVCT", SentenceType::TWVCT, |f, s, v| {
        TWVCT::from_fields(f, s, v).map(Sentence::TWVCT)
    }),
    ("PTWPLS", SentenceType::TWPLS, |f, s, v| {
        TWPLS::from_fields(f, s, v).map(Sentence::TWPLS)
    }),
    ("PTWWHE", SentenceType::TWWHE, |f, s, v| {
        TWWHE::from_fields(f, s, v).map(Sentence::TWWHE)
    }),
    ("PTWHPR", SentenceType::TWHPR, |f, s, v| {
        TWHPR::from_fields(f, s, v).map(Sentence::TWHPR)
    }),
    ("PTWACC", SentenceType::TWACC, |f, s, v| {
        TWACC::from_fields(f, s, v).map(Sentence::TWACC)
    }),
    ("PTWGYR", SentenceType::TWGYR, |f, s, v| {
        TWGYR::from_fields(f, s, v).map(Sentence::TWGYR)
    }),
];

/// Finds the dispatch entry whose code the header ends with.
pub(crate) fn lookup(header: &str) -> Option<&'static (&'static str, SentenceType, Builder)> {
    DISPATCH.iter().find(|(code, ty, _)| {
        if ty.is_proprietary() {
            header == *code
        } else {
            header.ends_with(code)
        }
    })
}
