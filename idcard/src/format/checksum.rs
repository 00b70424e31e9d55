// idcard/src/format/checksum.rs

use crate::constants::{CHECKSUM_BODY_LEN, MODERN_LEN};
use crate::format::parser::expect_digit_at;
use crate::{Error, Result};

/// Positional weights: for offset `index`, `i = 18 - index` and the weight
/// is `2^(i-1) mod 11`.
pub const WEIGHTS: [u32; CHECKSUM_BODY_LEN] = weights();

/// Remainder (sum mod 11) to check value. 10 is written as 'X'.
pub const CHECK_VALUES: [u32; 11] = [1, 0, 10, 9, 8, 7, 6, 5, 4, 3, 2];

const fn weights() -> [u32; CHECKSUM_BODY_LEN] {
    let mut out = [0u32; CHECKSUM_BODY_LEN];
    let mut index = 0;
    while index < CHECKSUM_BODY_LEN {
        let i = (MODERN_LEN - index) as u32;
        out[index] = (1u32 << (i - 1)) % 11;
        index += 1;
    }
    out
}

/// Compute the check character for the first 17 characters of `code`.
///
/// Only the first 17 characters are read, so both a bare 17 digit body and
/// a full 18 character code are accepted.
pub fn compute(code: &str) -> Result<char> {
    let mut sum = 0u32;
    for (index, weight) in WEIGHTS.iter().enumerate() {
        let digit = expect_digit_at(code, index)?;
        sum += u32::from(digit) * weight;
    }
    Ok(check_char(CHECK_VALUES[(sum % 11) as usize]))
}

fn check_char(value: u32) -> char {
    match char::from_digit(value, 10) {
        Some(c) => c,
        None => 'X',
    }
}

/// Verify the trailing check character of an 18 character code and return
/// it upper-cased. A lowercase 'x' is treated as 'X'.
pub fn verify(code: &str) -> Result<char> {
    let upper = code.to_ascii_uppercase();
    let expected = compute(&upper)?;
    let actual = upper
        .chars()
        .nth(CHECKSUM_BODY_LEN)
        .ok_or(Error::StructuralMismatch {
            length: upper.chars().count(),
        })?;
    if actual != expected {
        return Err(Error::ChecksumMismatch { expected, actual });
    }
    Ok(actual)
}
