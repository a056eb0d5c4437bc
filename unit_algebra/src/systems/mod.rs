/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Unit and quantity catalogs.

pub mod international;
pub mod isq;
pub mod natural;
pub mod si;

use crate::unit::UnitInfo;

/// Every unit of the built-in catalogs, by catalog.
pub fn catalog() -> Vec<(&'static str, Vec<&'static UnitInfo>)> {
    vec![
        ("si", si::units()),
        ("international", international::units()),
        ("natural", natural::units()),
    ]
}
