/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::magnitude::Magnitude;
use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Binary (base 1024) prefixes
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
pub enum BinPrefix {
    Kibi,
    Mebi,
    Gibi,
    Tebi,
    Pebi,
    Exbi,
    Zebi,
    Yobi,
}

impl BinPrefix {
    pub const fn power(self) -> i64 {
        match self {
            BinPrefix::Kibi => 1,
            BinPrefix::Mebi => 2,
            BinPrefix::Gibi => 3,
            BinPrefix::Tebi => 4,
            BinPrefix::Pebi => 5,
            BinPrefix::Exbi => 6,
            BinPrefix::Zebi => 7,
            BinPrefix::Yobi => 8,
        }
    }

    pub const fn symbol(self) -> Symbol {
        match self {
            BinPrefix::Kibi => Symbol::new("Ki"),
            BinPrefix::Mebi => Symbol::new("Mi"),
            BinPrefix::Gibi => Symbol::new("Gi"),
            BinPrefix::Tebi => Symbol::new("Ti"),
            BinPrefix::Pebi => Symbol::new("Pi"),
            BinPrefix::Exbi => Symbol::new("Ei"),
            BinPrefix::Zebi => Symbol::new("Zi"),
            BinPrefix::Yobi => Symbol::new("Yi"),
        }
    }

    /// 2^(10n), kept as a single prime power.
    pub const fn magnitude(self) -> Magnitude {
        Magnitude::power_of(2, 10 * self.power())
    }
}

impl Display for BinPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", BinPrefix::symbol(*self))
    }
}
