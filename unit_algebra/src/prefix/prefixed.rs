/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Prefixed units: `Kilo<Metre>`, `Milli<Second>`, `Gibi<Byte>`.

use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::bin_prefix::BinPrefix;
use super::si_prefix::SiPrefix;
use crate::combinators::SpecOf;
use crate::reference::Reference;
use crate::unit::{Unit, UnitInfo};

macro_rules! prefixed_units {
    ($($name:ident = $family:ident::$prefix:ident;)*) => { $(
        #[doc = concat!("`U` with the ", stringify!($prefix), " prefix.")]
        pub struct $name<U>(PhantomData<fn() -> U>);

        impl<U> $name<U> {
            pub const fn new() -> Self {
                $name(PhantomData)
            }
        }

        impl<U> Clone for $name<U> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<U> Copy for $name<U> {}

        impl<U> Default for $name<U> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<U> Debug for $name<U> {
            fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
                f.write_str(std::any::type_name::<Self>())
            }
        }

        impl<U: Unit> Unit for $name<U> {
            const INFO: &'static UnitInfo = &UnitInfo::prefixed(
                $family::symbol($family::$prefix),
                $family::magnitude($family::$prefix),
                U::INFO,
            );
        }

        impl<U: Unit> Reference for $name<U> {
            type Spec = SpecOf<Self>;
            type Unit = Self;
        }

        crate::__scalar_times_reference!([U: Unit] $name<U>);
    )* };
}

prefixed_units! {
    Quecto = SiPrefix::Quecto;
    Ronto = SiPrefix::Ronto;
    Yocto = SiPrefix::Yocto;
    Zepto = SiPrefix::Zepto;
    Atto = SiPrefix::Atto;
    Femto = SiPrefix::Femto;
    Pico = SiPrefix::Pico;
    Nano = SiPrefix::Nano;
    Micro = SiPrefix::Micro;
    Milli = SiPrefix::Milli;
    Centi = SiPrefix::Centi;
    Deci = SiPrefix::Deci;
    Deca = SiPrefix::Deca;
    Hecto = SiPrefix::Hecto;
    Kilo = SiPrefix::Kilo;
    Mega = SiPrefix::Mega;
    Giga = SiPrefix::Giga;
    Tera = SiPrefix::Tera;
    Peta = SiPrefix::Peta;
    Exa = SiPrefix::Exa;
    Zetta = SiPrefix::Zetta;
    Yotta = SiPrefix::Yotta;
    Ronna = SiPrefix::Ronna;
    Quetta = SiPrefix::Quetta;
    Kibi = BinPrefix::Kibi;
    Mebi = BinPrefix::Mebi;
    Gibi = BinPrefix::Gibi;
    Tebi = BinPrefix::Tebi;
    Pebi = BinPrefix::Pebi;
    Exbi = BinPrefix::Exbi;
    Zebi = BinPrefix::Zebi;
    Yobi = BinPrefix::Yobi;
}

#[cfg(test)]
mod test {
    use super::{Kibi, Kilo, Micro, Milli};
    use crate::magnitude::Magnitude;
    use crate::systems::si::{Gram, Metre, Second};
    use crate::unit::{Unit, UnitInfo};

    crate::unit!(Byte: "B");

    #[test]
    fn symbols() {
        assert_eq!(<Kilo<Metre> as Unit>::INFO.to_string(), "km");
        assert_eq!(<Micro<Second> as Unit>::INFO.to_string(), "\u{00b5}s");
        assert_eq!(format!("{:#}", <Micro<Second> as Unit>::INFO), "us");
        assert_eq!(<Kibi<Byte> as Unit>::INFO.to_string(), "KiB");
    }

    #[test]
    fn magnitudes() {
        let f = UnitInfo::conversion_factor(<Kilo<Gram> as Unit>::INFO, Milli::<Gram>::INFO);
        assert_eq!(f, Magnitude::power_of(10, 6));
        let f = UnitInfo::conversion_factor(Kibi::<Byte>::INFO, Byte::INFO);
        assert_eq!(f, Magnitude::integer(1024));
    }
}
