// idcard/src/prelude.rs

pub use crate::card::{CardInfo, IdCard};
pub use crate::format::Fields;
pub use crate::place::{BundledPlaces, PlaceLookup, PlaceTable};
pub use crate::validate::{Rejection, Stage, ValidationOptions, Validator, ValidatorBuilder};
pub use crate::{Error, Gender, RegionCode, Result, Version};
