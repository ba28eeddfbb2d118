//! # Talker Classification
//!
//! Maps the 2-character header prefix to the originating satellite system.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The satellite system (talker) a sentence originates from.
///
/// Classified purely from the header prefix; see [`TalkerSystem::classify`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalkerSystem {
    Gps,
    Glonass,
    Galileo,
    Beidou,
    /// Combined multi-constellation fix (`GN` talker).
    Combined,
    /// Vendor extension (`P` + vendor letters, e.g. `PASHR`).
    Proprietary,
    Unknown,
}

impl TalkerSystem {
    /// Classifies the system from a sentence header (the text between `$`
    /// and the first comma).
    ///
    /// Two-letter constellation prefixes are checked first; a `P` followed
    /// by vendor letters classifies as [`TalkerSystem::Proprietary`];
    /// anything else falls through to [`TalkerSystem::Unknown`].
    pub fn classify(header: &str) -> Self {
        if header.starts_with("GP") {
            TalkerSystem::Gps
        } else if header.starts_with("GL") {
            TalkerSystem::Glonass
        } else if header.starts_with("GA") {
            TalkerSystem::Galileo
        } else if header.starts_with("GB") || header.starts_with("BD") {
            TalkerSystem::Beidou
        } else if header.starts_with("GN") {
            TalkerSystem::Combined
        } else if header.len() >= 2
            && header.starts_with('P')
            && header[1..].bytes().all(|b| b.is_ascii_alphanumeric())
        {
            TalkerSystem::Proprietary
        } else {
            TalkerSystem::Unknown
        }
    }

    /// The conventional name of the system, as carried on decoded records.
    pub fn as_str(&self) -> &'static str {
        match self {
            TalkerSystem::Gps => "GPS",
            TalkerSystem::Glonass => "GLONASS",
            TalkerSystem::Galileo => "GALILEO",
            TalkerSystem::Beidou => "BEIDOU",
            TalkerSystem::Combined => "COMBINED",
            TalkerSystem::Proprietary => "PROPRIETARY",
            TalkerSystem::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TalkerSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(TalkerSystem::classify("GPGGA"), TalkerSystem::Gps);
        assert_eq!(TalkerSystem::classify("GLGSV"), TalkerSystem::Glonass);
        assert_eq!(TalkerSystem::classify("GAGSA"), TalkerSystem::Galileo);
        assert_eq!(TalkerSystem::classify("GBGGA"), TalkerSystem::Beidou);
        assert_eq!(TalkerSystem::classify("BDGGA"), TalkerSystem::Beidou);
        assert_eq!(TalkerSystem::classify("GNRMC"), TalkerSystem::Combined);
        assert_eq!(TalkerSystem::classify("PASHR"), TalkerSystem::Proprietary);
        assert_eq!(TalkerSystem::classify("PTWPOS"), TalkerSystem::Proprietary);
        assert_eq!(TalkerSystem::classify("XXGGA"), TalkerSystem::Unknown);
        assert_eq!(TalkerSystem::classify(""), TalkerSystem::Unknown);
        assert_eq!(TalkerSystem::classify("P"), TalkerSystem::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(TalkerSystem::Gps.to_string(), "GPS");
        assert_eq!(TalkerSystem::Combined.to_string(), "COMBINED");
        assert_eq!(TalkerSystem::Proprietary.to_string(), "PROPRIETARY");
    }
}
