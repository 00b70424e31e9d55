// idcard/src/format/modern.rs

use chrono::NaiveDate;

use crate::constants::{MODERN_BIRTH_RANGE, MODERN_SEX_OFFSET};
use crate::format::checksum;
use crate::format::parser::{digit_at, parse_ymd, slice_at};
use crate::Result;

/// Fields of a second-generation (18 character) code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModernFields {
    birth_date: Option<NaiveDate>,
    sex_digit: Option<u8>,
    check_char: char,
}

impl ModernFields {
    /// Verify the check character and extract fields.
    ///
    /// Fails with `ChecksumMismatch` (or `InvalidDigit` for a non-digit
    /// body) before any field is read.
    pub fn extract(code: &str) -> Result<Self> {
        let check_char = checksum::verify(code)?;
        Ok(Self {
            birth_date: slice_at(code, MODERN_BIRTH_RANGE).and_then(parse_ymd),
            sex_digit: digit_at(code, MODERN_SEX_OFFSET),
            check_char,
        })
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn sex_digit(&self) -> Option<u8> {
        self.sex_digit
    }

    /// Verified check character, always upper case.
    pub fn check_char(&self) -> char {
        self.check_char
    }
}
