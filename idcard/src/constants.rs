// idcard/src/constants.rs
//! Layout constants shared by the format matcher and the field extractors

/// Length of a first-generation (15 digit) code
pub const LEGACY_LEN: usize = 15;

/// Length of a second-generation (18 character) code
pub const MODERN_LEN: usize = 18;

/// Region code occupies offsets 0..6 in both formats
pub const REGION_LEN: usize = 6;

/// Province prefix length within the region code
pub const PROVINCE_PREFIX_LEN: usize = 2;

/// Legacy codes carry a two digit year assumed to be in the 1900s
pub const LEGACY_CENTURY: &str = "19";

/// Legacy birth date: YYMMDD at offsets 6..12
pub const LEGACY_BIRTH_RANGE: std::ops::Range<usize> = 6..12;

/// Modern birth date: YYYYMMDD at offsets 6..14
pub const MODERN_BIRTH_RANGE: std::ops::Range<usize> = 6..14;

/// Offset of the sex digit (last sequence digit) in a legacy code
pub const LEGACY_SEX_OFFSET: usize = 14;

/// Offset of the sex digit (last sequence digit) in a modern code
pub const MODERN_SEX_OFFSET: usize = 16;

/// Number of digits covered by the modern checksum
pub const CHECKSUM_BODY_LEN: usize = 17;

/// 成年年齢
pub const ADULT_AGE: u32 = 18;
