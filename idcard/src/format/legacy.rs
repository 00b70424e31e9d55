// idcard/src/format/legacy.rs

use chrono::NaiveDate;

use crate::constants::{LEGACY_BIRTH_RANGE, LEGACY_CENTURY, LEGACY_SEX_OFFSET};
use crate::format::parser::{digit_at, parse_ymd, slice_at};
use crate::Result;

/// Fields of a first-generation (15 digit) code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegacyFields {
    birth_date: Option<NaiveDate>,
    sex_digit: Option<u8>,
}

impl LegacyFields {
    /// Extract fields from a code the matcher accepted as legacy.
    ///
    /// Legacy codes carry no check digit, so this never fails for such
    /// input; the `Result` keeps the signature aligned with the modern
    /// extractor.
    pub fn extract(code: &str) -> Result<Self> {
        Ok(Self {
            birth_date: birth_date(code),
            sex_digit: digit_at(code, LEGACY_SEX_OFFSET),
        })
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn sex_digit(&self) -> Option<u8> {
        self.sex_digit
    }
}

/// "19" + YYMMDD at offsets 6..12.
fn birth_date(code: &str) -> Option<NaiveDate> {
    let yymmdd = slice_at(code, LEGACY_BIRTH_RANGE)?;
    parse_ymd(&format!("{LEGACY_CENTURY}{yymmdd}"))
}
