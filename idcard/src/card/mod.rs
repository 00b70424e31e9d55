// idcard/src/card/mod.rs

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use log::debug;

use crate::constants::ADULT_AGE;
use crate::format::{self, Fields};
use crate::place::{self, BundledPlaces, PlaceLookup};
use crate::types::{Gender, RegionCode, Version};
use crate::{Error, Result};

mod info;
pub use info::CardInfo;

/// A decoded identity code.
///
/// Only codes that matched one of the two layouts and passed the version
/// self-check (the checksum for modern codes) can be turned into an
/// `IdCard`. Age and adulthood are derived on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCard {
    code: String,
    region: RegionCode,
    fields: Fields,
}

impl IdCard {
    /// Decode and self-check `code`.
    pub fn decode(code: &str) -> Result<Self> {
        let Some(version) = format::classify(code) else {
            debug!("rejecting {:?}: no layout matched", code);
            return Err(Error::StructuralMismatch {
                length: code.chars().count(),
            });
        };
        let fields = Fields::extract(version, code).inspect_err(|e| {
            debug!("rejecting {:?}: {}", code, e);
        })?;
        Self::from_parts(code, fields)
    }

    /// Assemble a card from a matched code and its extracted fields.
    pub(crate) fn from_parts(code: &str, fields: Fields) -> Result<Self> {
        let region = RegionCode::from_code(code).ok_or(Error::StructuralMismatch {
            length: code.chars().count(),
        })?;
        Ok(Self {
            code: code.to_string(),
            region,
            fields,
        })
    }

    pub fn version(&self) -> Version {
        self.fields.version()
    }

    pub fn region_code(&self) -> &RegionCode {
        &self.region
    }

    /// The code exactly as it was given to `decode`.
    pub fn raw_code(&self) -> &str {
        &self.code
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.fields.birth_date()
    }

    pub fn sex_digit(&self) -> Option<u8> {
        self.fields.sex_digit()
    }

    pub fn gender(&self) -> Option<Gender> {
        self.sex_digit().map(Gender::from_sex_digit)
    }

    /// Age in whole years on `today`.
    ///
    /// One year is subtracted while today's day-of-year is still before the
    /// birth date's day-of-year. `None` when the birth date is unknown or in
    /// the future.
    pub fn age_at(&self, today: NaiveDate) -> Option<u32> {
        let birth = self.birth_date()?;
        let mut age = today.year() - birth.year();
        if today.ordinal0() < birth.ordinal0() {
            age -= 1;
        }
        u32::try_from(age).ok()
    }

    /// Age against the local calendar date.
    pub fn age(&self) -> Option<u32> {
        self.age_at(today())
    }

    pub fn is_adult_at(&self, today: NaiveDate) -> Option<bool> {
        self.age_at(today).map(|age| age >= ADULT_AGE)
    }

    /// 成年判定
    pub fn is_adult(&self) -> Option<bool> {
        self.is_adult_at(today())
    }

    /// Province from the bundled table.
    pub fn province(&self) -> Option<&'static str> {
        BundledPlaces::province_static(self.region.province_prefix())
    }

    /// City/county from the bundled table.
    pub fn city(&self) -> Option<&'static str> {
        BundledPlaces::city_static(self.region.as_str())
    }

    pub fn province_in<'p, P: PlaceLookup + ?Sized>(&self, places: &'p P) -> Option<&'p str> {
        place::province_of(places, self.region.as_str())
    }

    pub fn city_in<'p, P: PlaceLookup + ?Sized>(&self, places: &'p P) -> Option<&'p str> {
        place::city_of(places, self.region.as_str())
    }

    /// Snapshot of every field and derived fact.
    pub fn info_at<P: PlaceLookup + ?Sized>(&self, places: &P, today: NaiveDate) -> CardInfo {
        CardInfo::collect(self, places, today)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl FromStr for IdCard {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl fmt::Display for IdCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
