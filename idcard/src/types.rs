// idcard/src/types.rs

use derive_more::Display;

use crate::constants::{PROVINCE_PREFIX_LEN, REGION_LEN};

/// Identity-card generation
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Version {
    /// 15 digits, two digit year, no checksum
    #[display(fmt = "legacy")]
    Legacy,
    /// 18 characters, four digit year, trailing checksum character
    #[display(fmt = "modern")]
    Modern,
}

impl Version {
    /// Generation number: 1 for legacy, 2 for modern.
    pub fn generation(&self) -> u8 {
        match self {
            Version::Legacy => 1,
            Version::Modern => 2,
        }
    }

    /// Total code length for this version.
    pub fn code_len(&self) -> usize {
        match self {
            Version::Legacy => crate::constants::LEGACY_LEN,
            Version::Modern => crate::constants::MODERN_LEN,
        }
    }
}

/// Gender encoded by the parity of the sex digit
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    #[display(fmt = "female")]
    Female = 0,
    #[display(fmt = "male")]
    Male = 1,
}

impl Gender {
    /// Odd digits are male, even digits are female.
    pub fn from_sex_digit(digit: u8) -> Self {
        if digit % 2 == 1 {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

/// RegionCode - Newtype Pattern (6 digits)
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionCode(String);

impl RegionCode {
    /// Take the leading six characters of an already matched code.
    ///
    /// Returns `None` when the code is too short or the prefix is not
    /// six ASCII digits.
    pub fn from_code(code: &str) -> Option<Self> {
        let prefix = code.get(..REGION_LEN)?;
        if !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(prefix.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two digit key used by the province table.
    pub fn province_prefix(&self) -> &str {
        &self.0[..PROVINCE_PREFIX_LEN]
    }
}

impl AsRef<str> for RegionCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
