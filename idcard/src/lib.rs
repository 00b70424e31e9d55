// idcard/src/lib.rs

//! idcard
//!
//! Decoder and validator for Chinese resident identity-card numbers, both
//! the first-generation 15 digit layout and the second-generation 18
//! character layout with its mod-11 check character.
//!
//! ```
//! use idcard::{Gender, Version};
//!
//! let card = idcard::decode("130421197410056037").unwrap();
//! assert_eq!(card.version(), Version::Modern);
//! assert_eq!(card.gender(), Some(Gender::Male));
//! assert_eq!(card.province(), Some("河北"));
//!
//! assert!(!idcard::is_valid("130421197410053037"));
//! ```

pub mod card;
pub mod constants;
pub mod error;
pub mod format;
pub mod place;
pub mod prelude;
pub mod test_support;
pub mod types;
pub mod validate;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;

/// Decode `code`, checking its layout and (for 18 character codes) the
/// check character.
pub fn decode(code: &str) -> Result<IdCard> {
    IdCard::decode(code)
}

/// True iff `decode` succeeds.
pub fn is_valid(code: &str) -> bool {
    decode(code).is_ok()
}

/// Run the full validation pipeline against the bundled place table.
pub fn is_valid_with_options(code: &str, options: &ValidationOptions) -> bool {
    validate::run(code, options, &place::BundledPlaces).is_ok()
}
