// idcard/src/place/mod.rs

//! Region code to place name resolution.
//!
//! The administrative division table lives outside the decoding core and is
//! reached only through [`PlaceLookup`]. [`BundledPlaces`] ships with the
//! crate; [`PlaceTable`] lets callers bring their own data.

mod bundled;
mod data;
pub mod table;

pub use bundled::BundledPlaces;
pub use table::PlaceTable;

use crate::constants::{PROVINCE_PREFIX_LEN, REGION_LEN};

/// Read-only place lookup.
pub trait PlaceLookup {
    /// Province-level name for a 2 digit prefix.
    fn province(&self, prefix: &str) -> Option<&str>;

    /// City/county name for a full 6 digit region code.
    fn city(&self, code: &str) -> Option<&str>;
}

/// Resolve the province of a region code (or of any code starting with one).
pub fn province_of<'p, P: PlaceLookup + ?Sized>(places: &'p P, code: &str) -> Option<&'p str> {
    places.province(code.get(..PROVINCE_PREFIX_LEN)?)
}

/// Resolve the city/county of a region code (or of any code starting with one).
pub fn city_of<'p, P: PlaceLookup + ?Sized>(places: &'p P, code: &str) -> Option<&'p str> {
    places.city(code.get(..REGION_LEN)?)
}
