// idcard/src/validate/options.rs

/// Optional checks layered on top of the structural/checksum validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationOptions {
    /// Birth date must be a real calendar date
    pub birthday: bool,
    /// Province prefix must be known. Ignored when `city` is set.
    pub province: bool,
    /// Full region code must be a known city/county
    pub city: bool,
}

impl ValidationOptions {
    /// Structure and checksum only.
    pub const NONE: Self = Self {
        birthday: false,
        province: false,
        city: false,
    };

    /// Every optional check.
    pub const ALL: Self = Self {
        birthday: true,
        province: true,
        city: true,
    };

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn birthday(mut self, on: bool) -> Self {
        self.birthday = on;
        self
    }

    pub fn province(mut self, on: bool) -> Self {
        self.province = on;
        self
    }

    pub fn city(mut self, on: bool) -> Self {
        self.city = on;
        self
    }

    pub fn is_empty(&self) -> bool {
        !(self.birthday || self.province || self.city)
    }
}
