/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Runtime failures. Everything the type system can decide is
/// rejected at compile time instead; these cover the paths that
/// work on descriptors or foreign values at run time.
#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Debug)]
pub enum UnitError {
    #[error("integer overflow in exact arithmetic: {0}")]
    Overflow(String),
    #[error("zero denominator in ratio")]
    ZeroDenominator,
    #[error("magnitude must be positive, got {0}")]
    NonPositive(String),
    #[error("magnitude {0} is not a rational number")]
    NotRational(String),
    #[error("Incompatible units: {0} <-> {1}")]
    Incompatible(String, String),
    #[error("unit mismatch: expected {expected}, found {found}")]
    UnitMismatch { expected: String, found: String },
    #[error("value {0} is out of range for the target representation")]
    OutOfRange(String),
    #[error("Unknown unit system: {0}")]
    UnknownSystem(String),
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for UnitError {
    fn from(e: serde_json::Error) -> Self {
        UnitError::Json(e.to_string())
    }
}
