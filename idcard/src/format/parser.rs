// idcard/src/format/parser.rs

use chrono::NaiveDate;

use crate::{Error, Result};

/// Return a substring with bounds checking.
pub fn slice_at(code: &str, range: std::ops::Range<usize>) -> Option<&str> {
    code.get(range)
}

/// Read a single ASCII decimal digit at `idx`.
pub fn digit_at(code: &str, idx: usize) -> Option<u8> {
    let b = *code.as_bytes().get(idx)?;
    b.is_ascii_digit().then(|| b - b'0')
}

/// Like `digit_at` but reports what was found instead of collapsing to
/// `None`. Used by the checksum where a non-digit must be surfaced.
pub fn expect_digit_at(code: &str, idx: usize) -> Result<u8> {
    match code.chars().nth(idx) {
        Some(c) if c.is_ascii_digit() => Ok(c as u8 - b'0'),
        Some(found) => Err(Error::InvalidDigit { index: idx, found }),
        None => Err(Error::StructuralMismatch {
            length: code.chars().count(),
        }),
    }
}

/// Parse `YYYYMMDD` into a calendar date. Anything that is not a real date
/// (April 31, February 29 of a common year, month 13...) yields `None`.
pub fn parse_ymd(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[4..6].parse().ok()?;
    let day: u32 = s[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
