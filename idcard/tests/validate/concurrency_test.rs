#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;
use std::thread;

use common::fixtures::*;
use idcard::{PlaceTable, ValidationOptions, Validator};

#[test]
fn validator_shared_across_threads() {
    let table = PlaceTable::parse("13 河北\n22 吉林\n130421 邯郸县\n220381 公主岭市\n").unwrap();
    let validator = Validator::builder()
        .options(ValidationOptions::ALL)
        .places(table)
        .build();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let v = validator.clone();
            thread::spawn(move || {
                let code = if i % 2 == 0 { MODERN_MALE } else { LEGACY_FEMALE };
                (0..200).all(|_| v.is_valid(code) && !v.is_valid(MODERN_BAD_CHECKSUM))
            })
        })
        .collect();

    for h in handles {
        assert!(h.join().unwrap());
    }
}

#[test]
fn decode_from_many_threads() {
    let codes: Arc<Vec<&'static str>> = Arc::new(vec![
        MODERN_MALE,
        MODERN_FEMALE,
        LEGACY_FEMALE,
        LEGACY_MALE,
    ]);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let codes = Arc::clone(&codes);
            thread::spawn(move || idcard::decode(codes[i]).map(|c| c.raw_code().to_string()))
        })
        .collect();

    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap().unwrap(), codes[i]);
    }
}
