use chrono::NaiveDate;

use crate::card::IdCard;
use crate::place::PlaceLookup;
use crate::types::{Gender, Version};

/// Compact, owned summary of a decoded card evaluated on a given date.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardInfo {
    pub code: String,
    pub version: Version,
    pub region_code: String,
    pub province: Option<String>,
    pub city: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub age: Option<u32>,
    pub is_adult: Option<bool>,
    pub evaluated_on: NaiveDate,
}

impl CardInfo {
    pub fn collect<P: PlaceLookup + ?Sized>(card: &IdCard, places: &P, today: NaiveDate) -> Self {
        Self {
            code: card.raw_code().to_string(),
            version: card.version(),
            region_code: card.region_code().as_str().to_string(),
            province: card.province_in(places).map(str::to_string),
            city: card.city_in(places).map(str::to_string),
            birth_date: card.birth_date(),
            gender: card.gender(),
            age: card.age_at(today),
            is_adult: card.is_adult_at(today),
            evaluated_on: today,
        }
    }
}
