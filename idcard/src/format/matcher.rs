// idcard/src/format/matcher.rs

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Version;

// Month is 01-12. Day is 01-31 for every month; calendar validity is only
// checked when the birth date is extracted.
const MONTH: &str = "(0[1-9]|1[0-2])";
const DAY: &str = "([0-2][1-9]|10|20|30|31)";

static MODERN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^[0-9]{{6}}[0-9]{{4}}{MONTH}{DAY}[0-9]{{3}}[0-9Xx]$"
    ))
    .expect("modern identity code pattern is a valid regex")
});

static LEGACY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[0-9]{{6}}[0-9]{{2}}{MONTH}{DAY}[0-9]{{3}}$"))
        .expect("legacy identity code pattern is a valid regex")
});

/// Classify a raw code by its structural shape.
///
/// The modern pattern is tried before the legacy one. `None` means neither
/// matched.
pub fn classify(code: &str) -> Option<Version> {
    if MODERN_PATTERN.is_match(code) {
        Some(Version::Modern)
    } else if LEGACY_PATTERN.is_match(code) {
        Some(Version::Legacy)
    } else {
        None
    }
}
