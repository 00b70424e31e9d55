// idcard/src/format/mod.rs

//! Structural matching and per-version field extraction.

pub mod checksum;
pub mod legacy;
pub mod matcher;
pub mod modern;
pub mod parser;

pub use legacy::LegacyFields;
pub use matcher::classify;
pub use modern::ModernFields;

use chrono::NaiveDate;

use crate::types::Version;
use crate::Result;

/// Version-specific fields, chosen once when a card is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fields {
    Legacy(LegacyFields),
    Modern(ModernFields),
}

impl Fields {
    /// Run the extractor (and self-check) for `version` over `code`.
    pub fn extract(version: Version, code: &str) -> Result<Self> {
        match version {
            Version::Legacy => LegacyFields::extract(code).map(Fields::Legacy),
            Version::Modern => ModernFields::extract(code).map(Fields::Modern),
        }
    }

    pub fn version(&self) -> Version {
        match self {
            Fields::Legacy(_) => Version::Legacy,
            Fields::Modern(_) => Version::Modern,
        }
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        match self {
            Fields::Legacy(f) => f.birth_date(),
            Fields::Modern(f) => f.birth_date(),
        }
    }

    pub fn sex_digit(&self) -> Option<u8> {
        match self {
            Fields::Legacy(f) => f.sex_digit(),
            Fields::Modern(f) => f.sex_digit(),
        }
    }

    /// Check character for modern codes; legacy codes have none.
    pub fn check_char(&self) -> Option<char> {
        match self {
            Fields::Legacy(_) => None,
            Fields::Modern(f) => Some(f.check_char()),
        }
    }
}
