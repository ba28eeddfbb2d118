//! Decoder-level tests over complete sentence lines with real checksums.

use crate::{
    ChecksumMode, DecodeError, Sentence, TalkerSystem, checksum, decode, decode_with,
    is_proprietary, is_supported,
    sentences::FixQuality,
};

#[test]
fn test_decode_is_total_over_valid_examples() {
    let lines = [
        "$GPGGA,134740.000,5540.3248,N,01231.2992,E,1,09,0.9,20.2,M,41.5,M,,0000*61",
        "$GPGSA,A,3,01,02,03,04,05,06,07,08,09,10,11,12,1.0,1.0,1.0*30",
        "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A",
        "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W,A,V*7D",
        "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*25",
        "$GPZDA,160012.71,11,03,2004,-05,00*49",
        "$GPGLL,4916.45,N,12311.12,W,225444,A,A*5C",
        "$GPGSV,2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45*75",
        "$GPGBS,015509.00,-0.031,-0.186,0.219,19,0.000,-0.354,6.972*4D",
        "$GPGST,172814.0,0.006,0.023,0.020,273.6,0.023,0.020,0.031*6A",
        "$GPDTM,W84,,0.0,N,0.0,E,0.0,W84*6F",
        "$PASHR,085335.000,224.19,T,-01.26,+00.83,+00.00,0.101,0.113,0.267,1,0*06",
        "$PTWPOS,104532.00,12.50,M,8.20,M,1.10,M*73",
        "$PTWVCT,104532.00,3.60,K,0.00,K,0.10,K*40",
        "$PTWPLS,104532.00,1842,150.0,F*50",
        "$PTWWHE,104532.00,10.0,N,10.2,N*08",
        "$PTWHPR,104532.00,224.5,-1.2,0.8,T*47",
        "$PTWACC,104532.00,0.02,-0.01,9.81*0D",
        "$PTWGYR,104532.00,0.30,0.10,-0.05*04",
    ];

    for line in lines {
        let decoded = decode(line);
        let sentence = decoded.unwrap_or_else(|e| panic!("failed to decode {line}: {e}"));
        assert!(sentence.is_valid(), "checksum flagged invalid: {line}");
    }
}

#[test]
fn test_checksum_matches_literal_suffixes() {
    assert_eq!(
        checksum("GPGGA,134740.000,5540.3248,N,01231.2992,E,1,09,0.9,20.2,M,41.5,M,,0000"),
        0x61
    );
    assert_eq!(
        checksum("GPGSA,A,3,01,02,03,04,05,06,07,08,09,10,11,12,1.0,1.0,1.0"),
        0x30
    );
    assert_eq!(
        checksum("GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W"),
        0x6A
    );
}

#[test]
fn test_decode_gga_example() {
    let line = "$GPGGA,134740.000,5540.3248,N,01231.2992,E,1,09,0.9,20.2,M,41.5,M,,0000*61";
    let Sentence::GGA(gga) = decode(line).unwrap() else {
        panic!("expected GGA");
    };

    assert_eq!(gga.system, TalkerSystem::Gps);
    assert!(gga.valid);
    assert!((gga.latitude - 55.67208).abs() < 1e-6);
    assert!((gga.longitude - 12.521_653_333).abs() < 1e-6);
    assert_eq!(gga.fix_quality, FixQuality::GpsSps);
    assert_eq!(gga.fix_quality.to_string(), "GPS (SPS)");
    assert_eq!(gga.num_sats, 9);
}

#[test]
fn test_decode_gsa_example() {
    let line = "$GPGSA,A,3,01,02,03,04,05,06,07,08,09,10,11,12,1.0,1.0,1.0*30";
    let Sentence::GSA(gsa) = decode(line).unwrap() else {
        panic!("expected GSA");
    };

    assert_eq!(gsa.current_mode, 3);
    assert_eq!(
        gsa.sat_ids.as_slice(),
        &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
    );
}

#[test]
fn test_checksum_mismatch_flags_but_decodes() {
    let line = "$GPGGA,134740.000,5540.3248,N,01231.2992,E,1,09,0.9,20.2,M,41.5,M,,0000*00";
    let Sentence::GGA(gga) = decode(line).unwrap() else {
        panic!("expected GGA");
    };

    assert!(!gga.valid);
    // still fully parsed
    assert!((gga.latitude - 55.67208).abs() < 1e-6);
    assert_eq!(gga.num_sats, 9);
}

#[test]
fn test_malformed_checksum_suffix_flags_invalid() {
    let line = "$GPGLL,4916.45,N,12311.12,W,225444,A,A*5";
    assert!(!decode(line).unwrap().is_valid());
}

#[test]
fn test_missing_checksum_decodes_as_unchecked() {
    let line = "$GPGLL,4916.45,N,12311.12,W,225444,A,A";
    assert!(decode(line).unwrap().is_valid());
}

#[test]
fn test_skip_mode_ignores_bad_checksum() {
    let line = "$GPGLL,4916.45,N,12311.12,W,225444,A,A*00";
    assert!(!decode(line).unwrap().is_valid());
    assert!(
        decode_with(line, ChecksumMode::Skip)
            .unwrap()
            .is_valid()
    );
}

#[test]
fn test_decode_empty_input() {
    assert_eq!(decode(""), Err(DecodeError::EmptyInput));
}

#[test]
fn test_decode_unsupported_type() {
    assert_eq!(
        decode("$GPXTE,A,A,0.67,L,N*6F"),
        Err(DecodeError::UnsupportedSentenceType("GPXTE".to_string()))
    );
}

#[test]
fn test_decode_unsupported_unit_hard_fails() {
    let line = "$PTWPOS,104532.00,12.50,X,8.20,M,1.10,M*66";
    assert_eq!(
        decode(line),
        Err(DecodeError::UnsupportedUnit("X".to_string()))
    );
}

#[test]
fn test_talker_classification_from_decode() {
    let cases = [
        (
            "$GNGGA,134740.000,5540.3248,N,01231.2992,E,1,09,0.9,20.2,M,41.5,M,,0000*7F",
            TalkerSystem::Combined,
        ),
        (
            "$BDGGA,134740.000,5540.3248,N,01231.2992,E,1,09,0.9,20.2,M,41.5,M,,0000*70",
            TalkerSystem::Beidou,
        ),
        (
            "$GLGSV,2,1,08,65,40,083,46,66,17,308,41,75,07,344,39,78,22,228,45*62",
            TalkerSystem::Glonass,
        ),
        (
            "$GAGSA,A,3,01,02,03,04,05,06,07,08,09,10,11,12,1.0,1.0,1.0*21",
            TalkerSystem::Galileo,
        ),
        (
            "$PTWHPR,104532.00,224.5,-1.2,0.8,T*47",
            TalkerSystem::Proprietary,
        ),
    ];

    for (line, system) in cases {
        let sentence = decode(line).unwrap_or_else(|e| panic!("failed to decode {line}: {e}"));
        assert_eq!(sentence.system(), system, "line: {line}");
    }
}

#[test]
fn test_is_supported() {
    assert!(is_supported(
        "$GPGGA,134740.000,5540.3248,N,01231.2992,E,1,09,0.9,20.2,M,41.5,M,,0000*61"
    ));
    assert!(is_supported("$PASHR,085335.000,224.19,T*00"));
    assert!(!is_supported("$GPXTE,A,A,0.67,L,N*6F"));
    assert!(!is_supported(""));
}

#[test]
fn test_is_proprietary() {
    assert!(is_proprietary("$PASHR,085335.000,224.19,T*00"));
    assert!(is_proprietary("$PTWGYR,104532.00,0.30,0.10,-0.05*04"));
    assert!(!is_proprietary(
        "$GPGGA,134740.000,5540.3248,N,01231.2992,E,1,09,0.9,20.2,M,41.5,M,,0000*61"
    ));
    assert!(!is_proprietary("$GPXTE,A,A,0.67,L,N*6F"));
}

#[test]
fn test_decode_crlf_tolerated() {
    let line = "$GPGLL,4916.45,N,12311.12,W,225444,A,A*5C\r\n";
    assert!(decode(line).unwrap().is_valid());
}
