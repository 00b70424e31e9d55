// idcard/src/place/table.rs

use std::collections::HashMap;

use log::debug;

use super::PlaceLookup;
use crate::constants::{PROVINCE_PREFIX_LEN, REGION_LEN};
use crate::{Error, Result};

/// Caller-owned place table.
///
/// Text form: one `code name` pair per line, separated by whitespace or a
/// comma. Two digit codes are provinces, six digit codes are cities or
/// counties. Blank lines and lines starting with `#` are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceTable {
    provinces: HashMap<String, String>,
    cities: HashMap<String, String>,
}

impl PlaceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_province(mut self, prefix: impl Into<String>, name: impl Into<String>) -> Self {
        self.provinces.insert(prefix.into(), name.into());
        self
    }

    pub fn insert_city(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.cities.insert(code.into(), name.into());
        self
    }

    /// Parse the text form described on the type.
    pub fn parse(text: &str) -> Result<Self> {
        let mut table = Self::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let (code, name) = split_entry(trimmed).ok_or_else(|| Error::PlaceTable {
                line,
                reason: format!("expected `code name`, got {:?}", trimmed),
            })?;

            if !code.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::PlaceTable {
                    line,
                    reason: format!("code {:?} is not numeric", code),
                });
            }

            match code.len() {
                PROVINCE_PREFIX_LEN => {
                    table.provinces.insert(code.to_string(), name.to_string());
                }
                REGION_LEN => {
                    table.cities.insert(code.to_string(), name.to_string());
                }
                n => {
                    return Err(Error::PlaceTable {
                        line,
                        reason: format!("code {:?} has {} digits, expected 2 or 6", code, n),
                    });
                }
            }
        }

        debug!(
            "parsed place table: {} provinces, {} cities",
            table.provinces.len(),
            table.cities.len()
        );
        Ok(table)
    }

    pub fn province_count(&self) -> usize {
        self.provinces.len()
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }
}

fn split_entry(line: &str) -> Option<(&str, &str)> {
    let (code, rest) = line.split_once(|c: char| c == ',' || c.is_whitespace())?;
    let name = rest.trim_start_matches(|c: char| c == ',' || c.is_whitespace()).trim_end();
    if code.is_empty() || name.is_empty() {
        return None;
    }
    Some((code, name))
}

impl PlaceLookup for PlaceTable {
    fn province(&self, prefix: &str) -> Option<&str> {
        self.provinces.get(prefix).map(String::as_str)
    }

    fn city(&self, code: &str) -> Option<&str> {
        self.cities.get(code).map(String::as_str)
    }
}

impl std::str::FromStr for PlaceTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
