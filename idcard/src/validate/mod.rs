// idcard/src/validate/mod.rs

//! Validation pipeline.
//!
//! A code moves through `Unparsed → FormatChecked → ChecksumChecked →
//! OptionsChecked` and may be rejected at any step.

mod options;
pub mod validator;

pub use options::ValidationOptions;
pub use validator::{Validator, ValidatorBuilder};

use log::{debug, trace};
use thiserror::Error;

use crate::card::IdCard;
use crate::format::{self, Fields};
use crate::place::PlaceLookup;
use crate::types::Version;
use crate::Error;

/// Pipeline stages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Unparsed,
    FormatChecked,
    ChecksumChecked,
    OptionsChecked,
}

/// Why a code was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("{0}")]
    Structure(Error),

    #[error("{0}")]
    Checksum(Error),

    #[error("birth date is not a calendar date")]
    Birthday,

    #[error("unknown province prefix {0}")]
    Province(String),

    #[error("unknown city code {0}")]
    City(String),
}

impl Rejection {
    /// Last stage the code completed before being rejected.
    pub fn stage(&self) -> Stage {
        match self {
            Rejection::Structure(_) => Stage::Unparsed,
            Rejection::Checksum(_) => Stage::FormatChecked,
            Rejection::Birthday | Rejection::Province(_) | Rejection::City(_) => {
                Stage::ChecksumChecked
            }
        }
    }
}

enum State<'a> {
    Unparsed(&'a str),
    FormatChecked(&'a str, Version),
    ChecksumChecked(IdCard),
    OptionsChecked(IdCard),
}

impl State<'_> {
    fn stage(&self) -> Stage {
        match self {
            State::Unparsed(_) => Stage::Unparsed,
            State::FormatChecked(..) => Stage::FormatChecked,
            State::ChecksumChecked(_) => Stage::ChecksumChecked,
            State::OptionsChecked(_) => Stage::OptionsChecked,
        }
    }
}

/// Run the full pipeline for `code`.
pub fn run<P: PlaceLookup + ?Sized>(
    code: &str,
    options: &ValidationOptions,
    places: &P,
) -> Result<IdCard, Rejection> {
    let mut state = State::Unparsed(code);
    loop {
        trace!("validate {:?}: {:?}", code, state.stage());
        state = match state {
            State::Unparsed(code) => match format::classify(code) {
                Some(version) => State::FormatChecked(code, version),
                None => {
                    return Err(reject(
                        code,
                        Rejection::Structure(Error::StructuralMismatch {
                            length: code.chars().count(),
                        }),
                    ));
                }
            },
            State::FormatChecked(code, version) => {
                let fields = Fields::extract(version, code)
                    .map_err(|e| reject(code, Rejection::Checksum(e)))?;
                let card = IdCard::from_parts(code, fields)
                    .map_err(|e| reject(code, Rejection::Structure(e)))?;
                State::ChecksumChecked(card)
            }
            State::ChecksumChecked(card) => {
                check_options(&card, options, places).map_err(|r| reject(code, r))?;
                State::OptionsChecked(card)
            }
            State::OptionsChecked(card) => return Ok(card),
        };
    }
}

fn reject(code: &str, rejection: Rejection) -> Rejection {
    debug!(
        "rejecting {:?} after {:?}: {}",
        code,
        rejection.stage(),
        rejection
    );
    rejection
}

fn check_options<P: PlaceLookup + ?Sized>(
    card: &IdCard,
    options: &ValidationOptions,
    places: &P,
) -> Result<(), Rejection> {
    if options.is_empty() {
        return Ok(());
    }

    if options.birthday && card.birth_date().is_none() {
        return Err(Rejection::Birthday);
    }

    // province is skipped whenever city is requested, even if the city table
    // knows codes the province table does not
    if options.province && !options.city && card.province_in(places).is_none() {
        return Err(Rejection::Province(
            card.region_code().province_prefix().to_string(),
        ));
    }

    if options.city && card.city_in(places).is_none() {
        return Err(Rejection::City(card.region_code().as_str().to_string()));
    }

    Ok(())
}
