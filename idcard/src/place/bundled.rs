// idcard/src/place/bundled.rs

use std::collections::HashMap;
use std::sync::LazyLock;

use super::data::{CITIES, PROVINCES};
use super::PlaceLookup;

static PROVINCE_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| PROVINCES.iter().copied().collect());

static CITY_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CITIES.iter().copied().collect());

/// Place table compiled into the crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BundledPlaces;

impl BundledPlaces {
    /// Same as [`PlaceLookup::province`] but with a `'static` result.
    pub fn province_static(prefix: &str) -> Option<&'static str> {
        PROVINCE_MAP.get(prefix).copied()
    }

    /// Same as [`PlaceLookup::city`] but with a `'static` result.
    pub fn city_static(code: &str) -> Option<&'static str> {
        CITY_MAP.get(code).copied()
    }
}

impl PlaceLookup for BundledPlaces {
    fn province(&self, prefix: &str) -> Option<&str> {
        Self::province_static(prefix)
    }

    fn city(&self, code: &str) -> Option<&str> {
        Self::city_static(code)
    }
}
