#[path = "../common/mod.rs"]
mod common;

use chrono::{Datelike, Duration, Local};
use common::fixtures::*;
use idcard::place::BundledPlaces;
use idcard::test_support::{modern_body, with_check_char};
use proptest::prelude::*;

#[test]
fn age_and_adulthood_agree_today() {
    for expected in known_cards() {
        let card = idcard::decode(expected.code).unwrap();
        let age = card.age().unwrap();
        assert_eq!(card.is_adult(), Some(age >= 18));

        // age matches a plain month/day comparison for non-leap births
        let birth = expected.birth_date();
        let today = Local::now().date_naive();
        let mut plain = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            plain -= 1;
        }
        let diff = (age as i32 - plain).abs();
        assert!(diff <= 1, "{}: age {} vs {}", expected.code, age, plain);
    }
}

#[test]
fn fixed_date_ages() {
    let card = idcard::decode(MODERN_FEMALE).unwrap();
    assert_eq!(card.age_at(date(2011, 8, 28)), Some(17));
    assert_eq!(card.is_adult_at(date(2011, 8, 28)), Some(false));
    assert_eq!(card.age_at(date(2011, 8, 29)), Some(18));
    assert_eq!(card.is_adult_at(date(2011, 8, 29)), Some(true));
}

#[test]
fn born_tomorrow_has_no_age() {
    let tomorrow = Local::now().date_naive() + Duration::days(1);
    let body = modern_body("110101", &tomorrow.format("%Y%m%d").to_string(), "001");
    let code = with_check_char(&body).unwrap();
    let card = idcard::decode(&code).unwrap();
    assert_eq!(card.birth_date(), Some(tomorrow));
    // a birthday tomorrow in the same year gives age -1
    if tomorrow.year() == Local::now().date_naive().year() {
        assert_eq!(card.age(), None);
        assert_eq!(card.is_adult(), None);
    }
}

#[test]
fn info_snapshot() {
    let card = idcard::decode(LEGACY_MALE).unwrap();
    let info = card.info_at(&BundledPlaces, date(2025, 1, 1));
    assert_eq!(info.code, LEGACY_MALE);
    assert_eq!(info.age, Some(31));
    assert_eq!(info.is_adult, Some(true));
    assert_eq!(info.city.as_deref(), Some("公主岭市"));
}

proptest! {
    #[test]
    fn adult_iff_age_at_least_18(
        y in 1900i32..2100,
        ordinal in 1u32..=365,
        ty in 1900i32..2100,
        tordinal in 1u32..=365,
    ) {
        let birth = chrono::NaiveDate::from_yo_opt(y, ordinal).unwrap();
        let today = chrono::NaiveDate::from_yo_opt(ty, tordinal).unwrap();
        let body = modern_body("110101", &birth.format("%Y%m%d").to_string(), "123");
        let card = idcard::decode(&with_check_char(&body).unwrap()).unwrap();

        match (card.age_at(today), card.is_adult_at(today)) {
            (Some(age), Some(adult)) => prop_assert_eq!(adult, age >= 18),
            (None, None) => prop_assert!(today < birth),
            other => prop_assert!(false, "inconsistent {:?}", other),
        }
    }
}
