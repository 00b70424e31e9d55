#[path = "../common/mod.rs"]
mod common;

use common::fixtures::*;
use idcard::{Error, IdCard, Version};

#[test]
fn known_cards_round_trip() {
    for expected in known_cards() {
        let card = idcard::decode(expected.code).unwrap();
        assert_eq!(card.raw_code(), expected.code);
        assert_eq!(card.birth_date(), Some(expected.birth_date()), "{}", expected.code);
        assert_eq!(card.gender(), Some(expected.gender), "{}", expected.code);
        assert_eq!(card.province(), Some(expected.province), "{}", expected.code);
        assert_eq!(card.city(), Some(expected.city), "{}", expected.code);
    }
}

#[test]
fn versions() {
    assert_eq!(idcard::decode(MODERN_MALE).unwrap().version(), Version::Modern);
    assert_eq!(idcard::decode(MODERN_FEMALE).unwrap().version(), Version::Modern);
    assert_eq!(idcard::decode(LEGACY_FEMALE).unwrap().version(), Version::Legacy);
    assert_eq!(idcard::decode(LEGACY_MALE).unwrap().version(), Version::Legacy);
    assert_eq!(Version::Legacy.generation(), 1);
    assert_eq!(Version::Modern.generation(), 2);
}

#[test]
fn rejected_codes() {
    match idcard::decode(WRONG_LENGTH) {
        Err(Error::StructuralMismatch { length }) => assert_eq!(length, 16),
        other => panic!("expected structural mismatch, got: {:?}", other),
    }
    match idcard::decode(MODERN_BAD_CHECKSUM) {
        Err(Error::ChecksumMismatch { expected, actual }) => {
            assert_eq!(expected, '9');
            assert_eq!(actual, '7');
        }
        other => panic!("expected checksum mismatch, got: {:?}", other),
    }
    assert!(!idcard::is_valid(WRONG_LENGTH));
    assert!(!idcard::is_valid(MODERN_BAD_CHECKSUM));
    assert!(idcard::is_valid(MODERN_MALE));
    assert!(idcard::is_valid(LEGACY_MALE));
}

#[test]
fn day_forty_never_decodes() {
    for code in [LEGACY_DAY_FORTY, MODERN_DAY_FORTY, "960381930340416", "110398930340416"] {
        let err = idcard::decode(code).unwrap_err();
        assert!(err.is_invalid_code());
        assert!(matches!(err, Error::StructuralMismatch { .. }), "{}", code);
    }
}

#[test]
fn unknown_province_still_decodes() {
    let card = idcard::decode(LEGACY_UNKNOWN_PROVINCE).unwrap();
    assert_eq!(card.version(), Version::Legacy);
    assert_eq!(card.province(), None);
    assert_eq!(card.city(), None);
    assert!(card.gender().is_some());
}

#[test]
fn calendar_failure_is_per_field() {
    let card: IdCard = MODERN_APRIL_31.parse().unwrap();
    assert_eq!(card.birth_date(), None);
    assert_eq!(card.age(), None);
    assert!(card.gender().is_some());
    assert_eq!(card.province(), Some("北京"));
}

#[test]
fn error_messages_share_one_prefix() {
    for code in [WRONG_LENGTH, MODERN_BAD_CHECKSUM, ""] {
        let msg = idcard::decode(code).unwrap_err().to_string();
        assert!(msg.starts_with("invalid identity code"), "{}", msg);
    }
}
