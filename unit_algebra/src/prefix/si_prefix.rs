/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::magnitude::Magnitude;
use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
pub enum SiPrefix {
    Quecto,
    Ronto,
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Deca,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
    Ronna,
    Quetta,
}

impl SiPrefix {
    pub const fn power(self) -> i64 {
        match self {
            SiPrefix::Quecto => -30,
            SiPrefix::Ronto => -27,
            SiPrefix::Yocto => -24,
            SiPrefix::Zepto => -21,
            SiPrefix::Atto => -18,
            SiPrefix::Femto => -15,
            SiPrefix::Pico => -12,
            SiPrefix::Nano => -9,
            SiPrefix::Micro => -6,
            SiPrefix::Milli => -3,
            SiPrefix::Centi => -2,
            SiPrefix::Deci => -1,
            SiPrefix::Deca => 1,
            SiPrefix::Hecto => 2,
            SiPrefix::Kilo => 3,
            SiPrefix::Mega => 6,
            SiPrefix::Giga => 9,
            SiPrefix::Tera => 12,
            SiPrefix::Peta => 15,
            SiPrefix::Exa => 18,
            SiPrefix::Zetta => 21,
            SiPrefix::Yotta => 24,
            SiPrefix::Ronna => 27,
            SiPrefix::Quetta => 30,
        }
    }

    pub const fn symbol(self) -> Symbol {
        match self {
            SiPrefix::Quecto => Symbol::new("q"),
            SiPrefix::Ronto => Symbol::new("r"),
            SiPrefix::Yocto => Symbol::new("y"),
            SiPrefix::Zepto => Symbol::new("z"),
            SiPrefix::Atto => Symbol::new("a"),
            SiPrefix::Femto => Symbol::new("f"),
            SiPrefix::Pico => Symbol::new("p"),
            SiPrefix::Nano => Symbol::new("n"),
            SiPrefix::Micro => Symbol::with_ascii("µ", "u"),
            SiPrefix::Milli => Symbol::new("m"),
            SiPrefix::Centi => Symbol::new("c"),
            SiPrefix::Deci => Symbol::new("d"),
            SiPrefix::Deca => Symbol::new("da"),
            SiPrefix::Hecto => Symbol::new("h"),
            SiPrefix::Kilo => Symbol::new("k"),
            SiPrefix::Mega => Symbol::new("M"),
            SiPrefix::Giga => Symbol::new("G"),
            SiPrefix::Tera => Symbol::new("T"),
            SiPrefix::Peta => Symbol::new("P"),
            SiPrefix::Exa => Symbol::new("E"),
            SiPrefix::Zetta => Symbol::new("Z"),
            SiPrefix::Yotta => Symbol::new("Y"),
            SiPrefix::Ronna => Symbol::new("R"),
            SiPrefix::Quetta => Symbol::new("Q"),
        }
    }

    pub const fn magnitude(self) -> Magnitude {
        Magnitude::power_of(10, self.power())
    }
}

impl Display for SiPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", SiPrefix::symbol(*self))
    }
}
