// idcard/src/validate/validator.rs

use std::fmt;
use std::sync::Arc;

use crate::card::IdCard;
use crate::place::{BundledPlaces, PlaceLookup};
use crate::validate::{Rejection, ValidationOptions};

type SharedPlaces = Arc<dyn PlaceLookup + Send + Sync>;

/// Reusable validator bundling a place table with a set of options.
///
/// Cheap to clone; the table is shared.
#[derive(Clone)]
pub struct Validator {
    places: SharedPlaces,
    options: ValidationOptions,
}

impl Validator {
    /// Bundled place table, given options.
    pub fn new(options: ValidationOptions) -> Self {
        Self {
            places: Arc::new(BundledPlaces),
            options,
        }
    }

    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    pub fn options(&self) -> ValidationOptions {
        self.options
    }

    pub fn places(&self) -> &(dyn PlaceLookup + Send + Sync) {
        &*self.places
    }

    /// Run the pipeline and hand back the decoded card on success.
    pub fn validate(&self, code: &str) -> Result<IdCard, Rejection> {
        super::run(code, &self.options, &*self.places)
    }

    pub fn is_valid(&self, code: &str) -> bool {
        self.validate(code).is_ok()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationOptions::NONE)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Helper to construct a Validator with optional configuration.
pub struct ValidatorBuilder {
    places: Option<SharedPlaces>,
    options: ValidationOptions,
}

impl ValidatorBuilder {
    pub fn new() -> Self {
        Self {
            places: None,
            options: ValidationOptions::NONE,
        }
    }

    pub fn options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    /// Use `places` instead of the bundled table.
    pub fn places<P>(mut self, places: P) -> Self
    where
        P: PlaceLookup + Send + Sync + 'static,
    {
        self.places = Some(Arc::new(places));
        self
    }

    /// Share an already reference-counted table.
    pub fn shared_places(mut self, places: SharedPlaces) -> Self {
        self.places = Some(places);
        self
    }

    pub fn build(self) -> Validator {
        Validator {
            places: self.places.unwrap_or_else(|| Arc::new(BundledPlaces)),
            options: self.options,
        }
    }
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
