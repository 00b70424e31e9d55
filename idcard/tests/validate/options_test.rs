#[path = "../common/mod.rs"]
mod common;

use common::fixtures::*;
use idcard::validate::{self, Rejection, Stage};
use idcard::{is_valid_with_options, PlaceTable, ValidationOptions, Validator};

fn op() -> ValidationOptions {
    ValidationOptions::NONE
}

fn op1() -> ValidationOptions {
    ValidationOptions::new().birthday(true)
}

fn op2() -> ValidationOptions {
    ValidationOptions::new().birthday(true).province(true)
}

fn op3() -> ValidationOptions {
    ValidationOptions::ALL
}

#[test]
fn no_options() {
    assert!(is_valid_with_options(LEGACY_MALE, &op()));
    assert!(is_valid_with_options(MODERN_MALE, &op()));
    assert!(!is_valid_with_options(WRONG_LENGTH, &op()));
    assert!(!is_valid_with_options(MODERN_BAD_CHECKSUM, &op()));
}

#[test]
fn birthday_option() {
    assert!(is_valid_with_options(LEGACY_MALE, &op1()));
    assert!(is_valid_with_options(MODERN_MALE, &op1()));
    assert!(!is_valid_with_options(LEGACY_DAY_FORTY, &op1()));
    assert!(!is_valid_with_options(MODERN_DAY_FORTY, &op1()));
    assert!(!is_valid_with_options(LEGACY_APRIL_31, &op1()));
    assert!(!is_valid_with_options(MODERN_APRIL_31, &op1()));
}

#[test]
fn province_option() {
    assert!(is_valid_with_options(LEGACY_MALE, &op2()));
    assert!(is_valid_with_options(MODERN_MALE, &op2()));
    assert!(!is_valid_with_options("960381930340416", &op2()));
    assert!(!is_valid_with_options(LEGACY_UNKNOWN_PROVINCE, &op2()));
    assert!(!is_valid_with_options(MODERN_UNKNOWN_PROVINCE, &op2()));
}

#[test]
fn city_option() {
    assert!(is_valid_with_options(LEGACY_MALE, &op3()));
    assert!(is_valid_with_options(MODERN_MALE, &op3()));
    assert!(!is_valid_with_options("110398930340416", &op3()));
    assert!(!is_valid_with_options(LEGACY_UNKNOWN_CITY, &op3()));
    assert!(!is_valid_with_options(MODERN_UNKNOWN_CITY, &op3()));
}

#[test]
fn rejection_stages() {
    let v = Validator::new(op3());
    assert_eq!(v.validate(WRONG_LENGTH).unwrap_err().stage(), Stage::Unparsed);
    assert_eq!(
        v.validate(MODERN_BAD_CHECKSUM).unwrap_err().stage(),
        Stage::FormatChecked
    );
    assert_eq!(v.validate(MODERN_APRIL_31).unwrap_err(), Rejection::Birthday);
    assert_eq!(
        v.validate(MODERN_UNKNOWN_CITY).unwrap_err(),
        Rejection::City("110198".to_string())
    );
}

#[test]
fn custom_table_through_pipeline() {
    let table = PlaceTable::parse("96 测试省\n960381 测试县\n").unwrap();
    let card = validate::run(LEGACY_UNKNOWN_PROVINCE, &op3(), &table).unwrap();
    assert_eq!(card.province_in(&table), Some("测试省"));
    assert_eq!(card.city_in(&table), Some("测试县"));

    // the bundled table knows neither
    assert!(!is_valid_with_options(LEGACY_UNKNOWN_PROVINCE, &op3()));
}

#[test]
fn province_only_checked_without_city() {
    // city known, province unknown: city check alone decides
    let table = PlaceTable::new().insert_city("960381", "测试县");
    let v = Validator::builder().options(op3()).places(table).build();
    assert!(v.is_valid(LEGACY_UNKNOWN_PROVINCE));

    let table = PlaceTable::new().insert_city("960381", "测试县");
    let v = Validator::builder().options(op2()).places(table).build();
    assert!(!v.is_valid(LEGACY_UNKNOWN_PROVINCE));
}
