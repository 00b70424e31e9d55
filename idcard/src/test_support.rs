//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize sample codes and code construction so tests
//! across the crate and tests/ directory can reuse the same vectors.
#![allow(dead_code)]

use crate::format::checksum;
use crate::Result;

/// 18 character code, male, 1974-10-05, 河北 邯郸县.
#[doc(hidden)]
pub const MODERN_MALE: &str = "130421197410056037";

/// 18 character code, female, 1993-08-29, 吉林 公主岭市.
#[doc(hidden)]
pub const MODERN_FEMALE: &str = "220381199308294161";

/// 15 digit code, female, 1993-08-29, 吉林 公主岭市.
#[doc(hidden)]
pub const LEGACY_FEMALE: &str = "220381930829416";

/// 15 digit code, male, 1993-08-29, 吉林 公主岭市.
#[doc(hidden)]
pub const LEGACY_MALE: &str = "220381930829417";

/// `MODERN_MALE` with one sequence digit altered.
#[doc(hidden)]
pub const MODERN_BAD_CHECKSUM: &str = "130421197410053037";

/// 16 characters: neither layout.
#[doc(hidden)]
pub const WRONG_LENGTH: &str = "2203819308294171";

/// Append the computed check character to a 17 digit body.
#[doc(hidden)]
pub fn with_check_char(body: &str) -> Result<String> {
    let check = checksum::compute(body)?;
    let mut code = String::with_capacity(body.len() + 1);
    code.push_str(body);
    code.push(check);
    Ok(code)
}

/// Build a 17 digit body from its parts.
#[doc(hidden)]
pub fn modern_body(region: &str, yyyymmdd: &str, sequence: &str) -> String {
    format!("{region}{yyyymmdd}{sequence}")
}
