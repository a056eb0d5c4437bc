/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! International yard and pound (1959).

use super::si::{Kilogram, Metre};
use crate::unit::{Unit, UnitInfo};

crate::unit!(pub Yard: "yd" = (9144 / 10000) * Metre);
crate::unit!(pub Foot: "ft" = (1 / 3) * Yard);
crate::unit!(pub Inch: "in" = (1 / 36) * Yard);
crate::unit!(pub Mile: "mi" = (1760) * Yard);
crate::unit!(pub NauticalMile: "nmi" = (1852) * Metre);
crate::unit!(pub Pound: "lb" = (45359237 / 100000000) * Kilogram);
crate::unit!(pub Ounce: "oz" = (1 / 16) * Pound);

pub(crate) fn units() -> Vec<&'static UnitInfo> {
    vec![
        Yard::INFO,
        Foot::INFO,
        Inch::INFO,
        Mile::INFO,
        NauticalMile::INFO,
        Pound::INFO,
        Ounce::INFO,
    ]
}
